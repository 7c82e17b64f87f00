//! End-to-end RF parameter tests
//!
//! DU configuration in, full parameter set out.

use duparams_common::DuConfig;
use duparams_rf::config::{SUPPORTED_BANDWIDTHS_MHZ, SUPPORTED_SUBCARRIER_SPACINGS_KHZ};
use duparams_rf::{
    get_absolute_frequency_ssb, Frequency, Gscn, Numerology, RfParameters, RfParametersError,
    RfSettings, TDD_FR1_BANDS,
};
use integration_tests::{init_test_logging, reference_cells, write_temp_config, TestResult, BAND_77_YAML};

fn compute(config: &DuConfig) -> TestResult<RfParameters> {
    let settings = RfSettings::from_config(config)?;
    Ok(RfParameters::compute(&settings)?)
}

#[test]
fn test_reference_cells() -> TestResult {
    init_test_logging();

    for cell in reference_cells() {
        let params = compute(&cell.config)?;
        let label = format!("{:?}", cell.config);
        assert_eq!(params.absolute_frequency_ssb.value(), cell.absolute_frequency_ssb, "{label}");
        assert_eq!(params.dl_absolute_frequency_point_a.value(), cell.point_a, "{label}");
        assert_eq!(params.dl_carrier_bandwidth, cell.carrier_bandwidth, "{label}");
        assert_eq!(params.offset_to_point_a, cell.offset_to_point_a, "{label}");
        assert_eq!(params.coreset_zero_configuration_index, cell.coreset_zero_index, "{label}");
        assert_eq!(params.k_ssb, cell.k_ssb, "{label}");
        assert_eq!(params.first_usable_subcarrier, cell.first_usable_subcarrier, "{label}");
        assert_eq!(params.initial_dl_bwp_location_and_bandwidth, cell.initial_bwp, "{label}");
        assert_eq!(params.dl_frequency, Frequency::khz(cell.dl_frequency_khz), "{label}");
    }
    Ok(())
}

#[test]
fn test_yaml_file_to_parameters() -> TestResult {
    init_test_logging();

    let file = write_temp_config(BAND_77_YAML)?;
    let config = DuConfig::from_yaml_file(file.path())?;

    assert_eq!(config.gnb_name, "du-ref");
    assert!(config.use_three_quarter_sampling);

    let params = compute(&config)?;
    let text = params.to_config_text();
    let expected = "\
band = 77;
subcarrierSpacing = 1;
absoluteFrequencySSB = 661632;
dl_absoluteFrequencyPointA = 661000;
dl_carrierBandwidth = 51;
ul_carrierBandwidth = 51;
initialDLBWPlocationAndBandwidth = 13750;
initialULBWPlocationAndBandwidth = 13750;
initialDLBWPcontrolResourceSetZero = 10;
offsetToPointA = 32;
kssb = 8;
firstUsableSubcarrier = 196;
dl_frequency = 3924180000;
";
    assert_eq!(text, expected);
    Ok(())
}

#[test]
fn test_parameters_serialize_to_yaml() -> TestResult {
    let params = compute(&reference_cells()[0].config)?;
    let yaml = serde_yaml::to_string(&params)?;
    assert!(yaml.contains("frequency-band: 77"));
    assert!(yaml.contains("dl-absolute-frequency-point-a: 661000"));
    assert!(yaml.contains("k-ssb: 8"));
    Ok(())
}

#[test]
fn test_best_effort_and_strict_ssb_agree() -> TestResult {
    let params = compute(&reference_cells()[0].config)?;
    assert_eq!(get_absolute_frequency_ssb("3925"), Some(params.absolute_frequency_ssb));
    Ok(())
}

/// Every (band, SCS, bandwidth) combination at the middle of the band either
/// yields a consistent parameter set or fails in the CORESET 0 search.
#[test]
fn test_all_tdd_bands_consistent() -> TestResult {
    init_test_logging();

    let mut computed = 0;
    for band in TDD_FR1_BANDS {
        let center = (band.lower + band.upper) / 2;
        for scs_khz in SUPPORTED_SUBCARRIER_SPACINGS_KHZ {
            let scs = Frequency::khz(i64::from(scs_khz));
            let allowed = band.allowed_bandwidths(scs)?;
            for bandwidth_mhz in SUPPORTED_BANDWIDTHS_MHZ.iter().filter(|bw| allowed.contains(*bw)) {
                let bandwidth = Frequency::mhz(i64::from(*bandwidth_mhz));
                if bandwidth > band.upper - band.lower {
                    continue;
                }
                let settings = RfSettings {
                    band: band.band,
                    bandwidth,
                    subcarrier_spacing: scs,
                    center_frequency: center,
                };
                let label = format!("n{} {} MHz {} kHz", band.band, bandwidth_mhz, scs_khz);

                let params = match RfParameters::compute(&settings) {
                    Ok(params) => params,
                    Err(RfParametersError::CoresetZero(_)) => continue,
                    Err(e) => return Err(format!("{label}: {e}").into()),
                };
                computed += 1;
                check_consistency(&settings, &params, &label)?;
            }
        }
    }
    assert!(computed > 20, "only {computed} combinations produced parameters");
    Ok(())
}

fn check_consistency(settings: &RfSettings, params: &RfParameters, label: &str) -> TestResult {
    let numerology = Numerology::from_subcarrier_spacing(settings.subcarrier_spacing)?;
    let mu = u32::from(numerology.value());
    let rbs = i64::from(params.dl_carrier_bandwidth);

    assert_eq!(params.numerology, numerology, "{label}");
    assert_eq!(params.ul_carrier_bandwidth, params.dl_carrier_bandwidth, "{label}");
    assert_eq!(params.initial_dl_bwp_location_and_bandwidth, 275 * (rbs - 1), "{label}");
    assert_eq!(
        params.initial_ul_bwp_location_and_bandwidth,
        params.initial_dl_bwp_location_and_bandwidth,
        "{label}"
    );

    let k_ssb_limit = if mu == 1 { 24 } else { 12 };
    assert!((0..k_ssb_limit).contains(&params.k_ssb), "{label}: kSSB {}", params.k_ssb);
    assert!(params.offset_to_point_a >= 0, "{label}");
    assert_eq!(
        params.first_usable_subcarrier,
        12 * (params.offset_to_point_a >> mu) + (params.k_ssb >> mu),
        "{label}"
    );

    let point_a = params.dl_absolute_frequency_point_a.to_frequency()?;
    let ssb = params.absolute_frequency_ssb.to_frequency()?;
    assert!(point_a < ssb, "{label}");
    assert!(point_a < params.dl_frequency && params.dl_frequency < settings.center_frequency, "{label}");

    // The SSB sits on the synchronization raster
    let gscn = Gscn::from_frequency(ssb)?;
    assert_eq!(gscn.to_frequency()?, ssb, "{label}");
    Ok(())
}
