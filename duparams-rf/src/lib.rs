//! RF parameter calculations for a 5G NR Distributed Unit
//!
//! Exact conversions between center frequency, NR-ARFCN, GSCN, channel
//! bandwidth, guard band, CORESET 0 configuration index and initial BWP,
//! following 3GPP TS 38.101-1, 38.104 and 38.213.
//!
//! All arithmetic is done on exact rationals ([`Frequency`]); floating point
//! never enters the calculations.
//!
//! # Example
//! ```
//! use duparams_rf::{get_carrier_bandwidth, get_dl_absolute_frequency_point_a, Frequency};
//!
//! let point_a = get_dl_absolute_frequency_point_a(Frequency::mhz(3925), Frequency::mhz(20), None)
//!     .unwrap();
//! assert_eq!(point_a.value(), 661_000);
//!
//! let rbs = get_carrier_bandwidth(Frequency::mhz(10), Frequency::khz(15)).unwrap();
//! assert_eq!(rbs, 52);
//! ```

pub mod arfcn;
pub mod carrier_bandwidth;
pub mod config;
pub mod coreset_zero;
pub mod fr1_bands;
pub mod frequency;
pub mod gscn;
pub mod guard_band;
pub mod initial_bwp;
pub mod numerology;
pub mod params;
pub mod point_a;
pub mod range;
pub mod ssb;
pub mod ssb_position;

pub use arfcn::{Arfcn, ArfcnError};
pub use carrier_bandwidth::{get_carrier_bandwidth, CarrierBandwidthError};
pub use config::{RfConfigError, RfSettings};
pub use coreset_zero::{
    get_coreset_zero_configuration_index, CoresetZeroConfigurationIndexError, CoresetZeroIndex,
};
pub use fr1_bands::{allowed_channel_bandwidths, tdd_band, BandError, TddBand, TDD_FR1_BANDS};
pub use frequency::{Exact, ExactLiteral, Frequency, FrequencyError};
pub use gscn::{Gscn, GscnError};
pub use guard_band::{get_minimum_guard_band, GuardBandError};
pub use initial_bwp::{get_initial_bwp, InitialBwpError};
pub use numerology::{Numerology, NumerologyError};
pub use params::{RfParameters, RfParametersError};
pub use point_a::{get_dl_absolute_frequency_point_a, DlAbsoluteFrequencyPointAError};
pub use range::{
    range_for_arfcn, range_for_frequency, range_for_gscn, FrequencyRange, RangeNotFoundError,
    RangeParams, MAX_ARFCN, MAX_GSCN,
};
pub use ssb::{absolute_frequency_ssb, get_absolute_frequency_ssb, AbsoluteFrequencySsbError};
pub use ssb_position::{
    get_dl_frequency, get_first_usable_subcarrier, get_k_ssb, get_offset_to_point_a,
    SsbPositionError,
};
