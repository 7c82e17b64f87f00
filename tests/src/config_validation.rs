//! DU configuration validation tests
//!
//! YAML text through `DuConfig` and `RfSettings`, one rejected key at a time.

use duparams_common::{DuConfig, Error};
use duparams_rf::{BandError, Frequency, RfConfigError, RfSettings};
use integration_tests::{init_test_logging, write_temp_config, TestResult, BAND_77_YAML};

fn yaml(band: u16, bandwidth: u32, scs: u32, center: &str) -> String {
    format!(
        "frequency-band: {band}\nbandwidth: {bandwidth}\nsub-carrier-spacing: {scs}\ncenter-frequency: {center}\n"
    )
}

fn validate(text: &str) -> TestResult<Result<RfSettings, RfConfigError>> {
    let config = DuConfig::from_yaml(text)?;
    Ok(RfSettings::from_config(&config))
}

#[test]
fn test_valid_configurations() -> TestResult {
    init_test_logging();

    let cases = [
        (77, 20, 30, "'3925'", Frequency::mhz(3925)),
        (78, 100, 30, "'3549.99'", Frequency::khz(3_549_990)),
        (41, 40, 15, "2593", Frequency::mhz(2593)),
        (79, 40, 30, "'4420'", Frequency::mhz(4420)),
        (51, 5, 15, "'1429.5'", Frequency::khz(1_429_500)),
    ];
    for (band, bandwidth, scs, center, expected) in cases {
        let settings = validate(&yaml(band, bandwidth, scs, center))??;
        assert_eq!(settings.band, band);
        assert_eq!(settings.bandwidth, Frequency::mhz(i64::from(bandwidth)));
        assert_eq!(settings.subcarrier_spacing, Frequency::khz(i64::from(scs)));
        assert_eq!(settings.center_frequency, expected);
    }
    Ok(())
}

#[test]
fn test_rejected_keys_are_named() -> TestResult {
    init_test_logging();

    let cases = [
        (yaml(77, 20, 60, "'3925'"), "sub-carrier-spacing:"),
        (yaml(77, 35, 30, "'3925'"), "bandwidth:"),
        (yaml(77, 5, 15, "'3925'"), "bandwidth:"),
        (yaml(3, 20, 15, "'1842.5'"), "frequency-band:"),
        (yaml(77, 20, 30, "'3.9e3'"), "center-frequency:"),
        (yaml(96, 80, 30, "'7100'"), "center-frequency:"),
        (yaml(77, 100, 30, "'3330'"), "center-frequency:"),
    ];
    for (text, key) in cases {
        let err = validate(&text)?.unwrap_err();
        assert!(err.to_string().starts_with(key), "{err} does not name {key}");
    }
    Ok(())
}

#[test]
fn test_band_edges_inclusive() -> TestResult {
    // n78 is 3300 - 3800 MHz, a 40 MHz carrier fits between 3320 and 3780 MHz
    assert!(validate(&yaml(78, 40, 30, "'3320'"))?.is_ok());
    assert!(validate(&yaml(78, 40, 30, "'3780'"))?.is_ok());

    let err = validate(&yaml(78, 40, 30, "'3780.001'"))?.unwrap_err();
    assert_eq!(
        err,
        RfConfigError::CenterFrequencyOutsideBand {
            center: "3780.001".to_string(),
            band: 78,
            bandwidth: 40,
            usable_start: Frequency::mhz(3320),
            usable_end: Frequency::mhz(3780),
        }
    );
    Ok(())
}

#[test]
fn test_unknown_band() -> TestResult {
    let err = validate(&yaml(257, 100, 30, "'28000'"))?.unwrap_err();
    assert_eq!(err, RfConfigError::Band(BandError::UnknownBand(257)));
    Ok(())
}

#[test]
fn test_yaml_level_errors() -> TestResult {
    let err = DuConfig::from_yaml(&yaml(77, 20, 30, "3925.5")).unwrap_err();
    assert!(matches!(err, Error::YamlParse(_)));

    let err = DuConfig::from_yaml("frequency-band: 77\nbandwidth: twenty\n").unwrap_err();
    assert!(matches!(err, Error::YamlParse(_)));

    let err = DuConfig::from_yaml(&yaml(77, 20, 30, "'  '")).unwrap_err();
    assert!(matches!(err, Error::Config(_)));
    Ok(())
}

#[test]
fn test_config_file_round_trip() -> TestResult {
    let original = DuConfig::from_yaml(BAND_77_YAML)?;
    let file = write_temp_config(&original.to_yaml()?)?;
    assert_eq!(DuConfig::from_yaml_file(file.path())?, original);
    Ok(())
}
