//! Test fixtures
//!
//! Reference DU cells with hand-checked parameter sets.

use duparams_common::DuConfig;

/// n77, 20 MHz, 30 kHz, 3925 MHz in the operator YAML format
pub const BAND_77_YAML: &str = r#"
gnb-name: du-ref
frequency-band: 77
bandwidth: 20
sub-carrier-spacing: 30
center-frequency: "3925"
use-three-quarter-sampling: true
"#;

/// A DU configuration together with its expected parameters
#[derive(Debug, Clone)]
pub struct ReferenceCell {
    pub config: DuConfig,
    pub absolute_frequency_ssb: u32,
    pub point_a: u32,
    pub carrier_bandwidth: u32,
    pub offset_to_point_a: i64,
    pub coreset_zero_index: u8,
    pub k_ssb: i64,
    pub first_usable_subcarrier: i64,
    pub initial_bwp: i64,
    /// Downlink frequency in kHz
    pub dl_frequency_khz: i64,
}

/// Cells whose full parameter set is known.
pub fn reference_cells() -> Vec<ReferenceCell> {
    vec![
        ReferenceCell {
            config: DuConfig::new(77, 20, 30, "3925"),
            absolute_frequency_ssb: 661_632,
            point_a: 661_000,
            carrier_bandwidth: 51,
            offset_to_point_a: 32,
            coreset_zero_index: 10,
            k_ssb: 8,
            first_usable_subcarrier: 196,
            initial_bwp: 13_750,
            dl_frequency_khz: 3_924_180,
        },
        ReferenceCell {
            config: DuConfig::new(77, 20, 15, "3925"),
            absolute_frequency_ssb: 661_632,
            point_a: 661_000,
            carrier_bandwidth: 106,
            offset_to_point_a: 42,
            coreset_zero_index: 12,
            k_ssb: 8,
            first_usable_subcarrier: 512,
            initial_bwp: 28_875,
            dl_frequency_khz: 3_924_540,
        },
    ]
}
