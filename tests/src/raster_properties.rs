//! Channel and synchronization raster properties
//!
//! Deterministic sweeps over the whole raster instead of random sampling.

use duparams_rf::{
    absolute_frequency_ssb, range_for_arfcn, range_for_frequency, range_for_gscn, Arfcn, Frequency,
    FrequencyRange, Gscn, GscnError, RangeNotFoundError, MAX_ARFCN, MAX_GSCN,
};
use integration_tests::{init_test_logging, khz_sweep, TestResult};

#[test]
fn test_arfcn_round_trip_over_raster() -> TestResult {
    init_test_logging();

    let edges = [0, 1, 599_999, 600_000, 600_001, 2_016_666, 2_016_667, MAX_ARFCN];
    let sweep = (0..=MAX_ARFCN).step_by(997);
    for value in sweep.chain(edges) {
        let arfcn = Arfcn::new(i64::from(value))?;
        let frequency = arfcn.to_frequency()?;
        assert_eq!(Arfcn::from_frequency(frequency)?, arfcn, "ARFCN {value}");
    }
    Ok(())
}

#[test]
fn test_gscn_round_trip_over_raster() -> TestResult {
    init_test_logging();

    let supported = (3..=7497).chain(7499..=MAX_GSCN);
    for value in supported {
        let gscn = Gscn::new(i64::from(value))?;
        let frequency = gscn.to_frequency()?;
        assert_eq!(Gscn::from_frequency(frequency)?, gscn, "GSCN {value}");
    }
    Ok(())
}

#[test]
fn test_gscn_outside_supported_n() {
    for value in [2, 7498] {
        let result = Gscn::new(value).and_then(|g| g.to_frequency());
        assert!(matches!(result, Err(GscnError::OutOfSupportedN { .. })), "GSCN {value}");
    }
    for value in [0, 1] {
        let result = Gscn::new(value).and_then(|g| g.to_frequency());
        assert!(matches!(result, Err(GscnError::RangeNotFound(_))), "GSCN {value}");
    }
}

#[test]
fn test_arfcn_monotonic_in_frequency() -> TestResult {
    init_test_logging();

    let mut previous: Option<Arfcn> = None;
    for frequency in khz_sweep(0, 100_000_000, 7_771) {
        let arfcn = Arfcn::from_frequency(frequency)?;
        if let Some(previous) = previous {
            assert!(arfcn >= previous, "ARFCN decreased at {frequency} Hz");
        }
        previous = Some(arfcn);
    }
    Ok(())
}

#[test]
fn test_arfcn_frequency_within_one_grid_step() -> TestResult {
    init_test_logging();

    let off_grid = Frequency::hz(1_234);
    for start in khz_sweep(0, 99_990_000, 1_237) {
        let frequency = start + off_grid;
        let grid = FrequencyRange::for_frequency(frequency)?.params().freq_grid;
        let back = Arfcn::from_frequency(frequency)?.to_frequency()?;
        assert!(
            back <= frequency + grid && frequency <= back + grid,
            "{frequency} Hz came back as {back} Hz"
        );
    }
    Ok(())
}

#[test]
fn test_gscn_monotonic_within_each_range() -> TestResult {
    for range in FrequencyRange::ALL {
        let params = range.params();
        let start = params.lower.as_khz().to_integer() as i64;
        let end = params.upper.as_khz().to_integer() as i64;

        let mut previous: Option<Gscn> = None;
        for frequency in khz_sweep(start, end, 3_331) {
            let Ok(gscn) = Gscn::from_frequency(frequency) else {
                continue;
            };
            if let Some(previous) = previous {
                assert!(gscn >= previous, "{range}: GSCN decreased at {frequency} Hz");
            }
            previous = Some(gscn);
        }
        assert!(previous.is_some(), "{range}: no GSCN computed");
    }
    Ok(())
}

#[test]
fn test_range_boundaries_partition() -> TestResult {
    let one_hz = Frequency::hz(1);
    for pair in FrequencyRange::ALL.windows(2) {
        let (below, above) = (pair[0], pair[1]);
        let boundary = above.params().lower;
        assert_eq!(below.params().upper, boundary);
        assert_eq!(range_for_frequency(boundary - one_hz)?, below);
        assert_eq!(range_for_frequency(boundary)?, above);

        let last_arfcn = *below.params().arfcn_range.end();
        assert_eq!(range_for_arfcn(i64::from(last_arfcn))?, below);
        assert_eq!(range_for_arfcn(i64::from(last_arfcn) + 1)?, above);

        let last_gscn = *below.params().gscn_range.end();
        assert_eq!(range_for_gscn(i64::from(last_gscn))?, below);
        assert_eq!(range_for_gscn(i64::from(last_gscn) + 1)?, above);
    }

    assert_eq!(range_for_frequency(Frequency::ZERO)?, FrequencyRange::Low);
    assert_eq!(
        range_for_frequency(Frequency::mhz(100_000)),
        Err(RangeNotFoundError::Frequency(Frequency::mhz(100_000)))
    );
    assert_eq!(range_for_arfcn(i64::from(MAX_ARFCN) + 1), Err(RangeNotFoundError::Arfcn(3_279_166)));
    assert_eq!(range_for_gscn(1), Err(RangeNotFoundError::Gscn(1)));
    assert_eq!(range_for_gscn(i64::from(MAX_GSCN) + 1), Err(RangeNotFoundError::Gscn(26_640)));
    Ok(())
}

#[test]
fn test_ssb_close_to_center_in_mid_range() -> TestResult {
    init_test_logging();

    // half of the 1.44 MHz synchronization raster step
    let max_offset = Frequency::khz(720);
    for center in khz_sweep(3_300_000, 4_200_000, 9_973) {
        let ssb = absolute_frequency_ssb(center)?.to_frequency()?;
        let offset = if ssb > center { ssb - center } else { center - ssb };
        assert!(offset <= max_offset, "SSB {ssb} Hz too far from {center} Hz");
    }
    Ok(())
}

#[test]
fn test_ssb_on_n79_raster() -> TestResult {
    init_test_logging();

    for center in khz_sweep(4_400_000, 5_000_000, 4_999) {
        let ssb = absolute_frequency_ssb(center)?.to_frequency()?;
        let gscn = Gscn::from_frequency(ssb)?;
        assert_eq!(gscn.value() % 16, 0, "GSCN {gscn} for center {center} Hz");
    }
    Ok(())
}
