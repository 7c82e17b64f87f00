//! NR frequency ranges
//!
//! The global frequency raster (TS 38.104 5.4.2.1) and the synchronization
//! raster (TS 38.104 5.4.3.1) are both defined piecewise over three frequency
//! ranges. Each range carries a constant parameter record; the records are
//! plain statics and never change at run time.
//!
//! Boundary conventions follow the standard's tables:
//! - frequency lookup uses half-open intervals `[lower, upper)`
//! - ARFCN and GSCN lookups use closed intervals `[first, last]`

use std::fmt;
use std::ops::RangeInclusive;

use thiserror::Error;

use crate::frequency::Frequency;

/// Highest NR-ARFCN defined by the global frequency raster
pub const MAX_ARFCN: u32 = 3_279_165;
/// Highest GSCN defined by the synchronization raster
pub const MAX_GSCN: u32 = 26_639;

/// Lookup failure for a value outside every defined range
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RangeNotFoundError {
    /// Frequency is negative or at/above 100 GHz
    #[error("No frequency range found for frequency {0} Hz")]
    Frequency(Frequency),

    /// ARFCN outside all raster tables
    #[error("No frequency range found for ARFCN {0}")]
    Arfcn(i64),

    /// GSCN outside all raster tables
    #[error("No frequency range found for GSCN {0}")]
    Gscn(i64),
}

/// Extra terms of the low range synchronization raster `N * 1200 kHz + M * 50 kHz`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LowBandRaster {
    /// Raster position factor M
    pub m: i64,
    /// Step applied per unit of M
    pub m_multiplication_factor: Frequency,
}

/// Constant parameters of one frequency range
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RangeParams {
    /// Lowest frequency of the range (inclusive)
    pub lower: Frequency,
    /// Highest frequency of the range (exclusive)
    pub upper: Frequency,
    /// ΔF_Global of the channel raster
    pub freq_grid: Frequency,
    /// F_REF-Offs of the channel raster
    pub freq_offset: Frequency,
    /// N_REF-Offs of the channel raster
    pub arfcn_offset: i64,
    /// Synchronization raster step
    pub multiplication_factor: Frequency,
    /// Frequency of the first synchronization raster entry
    pub base_freq: Frequency,
    /// GSCN of the first synchronization raster entry
    pub base_gscn: i64,
    /// Smallest supported raster index N
    pub min_n: i64,
    /// Largest supported raster index N
    pub max_n: i64,
    /// ARFCNs belonging to this range
    pub arfcn_range: RangeInclusive<u32>,
    /// GSCNs belonging to this range
    pub gscn_range: RangeInclusive<u32>,
    /// Only set for the low range
    pub low_band_raster: Option<LowBandRaster>,
}

static LOW_FREQUENCY: RangeParams = RangeParams {
    lower: Frequency::mhz(0),
    upper: Frequency::mhz(3000),
    freq_grid: Frequency::khz(5),
    freq_offset: Frequency::mhz(0),
    arfcn_offset: 0,
    multiplication_factor: Frequency::khz(1200),
    base_freq: Frequency::mhz(0),
    base_gscn: 0,
    min_n: 1,
    max_n: 2499,
    arfcn_range: 0..=599_999,
    gscn_range: 2..=7498,
    low_band_raster: Some(LowBandRaster {
        m: 3,
        m_multiplication_factor: Frequency::khz(50),
    }),
};

static MID_FREQUENCY: RangeParams = RangeParams {
    lower: Frequency::mhz(3000),
    upper: Frequency::mhz(24250),
    freq_grid: Frequency::khz(15),
    freq_offset: Frequency::mhz(3000),
    arfcn_offset: 600_000,
    multiplication_factor: Frequency::khz(1440),
    base_freq: Frequency::mhz(3000),
    base_gscn: 7499,
    min_n: 0,
    max_n: 14756,
    arfcn_range: 600_000..=2_016_666,
    gscn_range: 7499..=22255,
    low_band_raster: None,
};

static HIGH_FREQUENCY: RangeParams = RangeParams {
    lower: Frequency::mhz(24250),
    upper: Frequency::mhz(100_000),
    freq_grid: Frequency::khz(60),
    freq_offset: Frequency::mhz(24250),
    arfcn_offset: 2_016_667,
    multiplication_factor: Frequency::khz(17280),
    base_freq: Frequency::khz(24_250_080),
    base_gscn: 22256,
    min_n: 0,
    max_n: 4383,
    arfcn_range: 2_016_667..=MAX_ARFCN,
    gscn_range: 22256..=MAX_GSCN,
    low_band_raster: None,
};

/// One of the three raster ranges
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FrequencyRange {
    /// 0 - 3000 MHz
    Low,
    /// 3000 - 24250 MHz
    Mid,
    /// 24250 - 100000 MHz
    High,
}

impl FrequencyRange {
    /// All ranges in ascending frequency order.
    pub const ALL: [FrequencyRange; 3] = [FrequencyRange::Low, FrequencyRange::Mid, FrequencyRange::High];

    /// Returns the constant parameter record of this range.
    pub fn params(self) -> &'static RangeParams {
        match self {
            FrequencyRange::Low => &LOW_FREQUENCY,
            FrequencyRange::Mid => &MID_FREQUENCY,
            FrequencyRange::High => &HIGH_FREQUENCY,
        }
    }

    /// Finds the range whose `[lower, upper)` interval contains `frequency`.
    pub fn for_frequency(frequency: Frequency) -> Result<Self, RangeNotFoundError> {
        Self::ALL
            .into_iter()
            .find(|range| {
                let params = range.params();
                params.lower <= frequency && frequency < params.upper
            })
            .ok_or(RangeNotFoundError::Frequency(frequency))
    }

    /// Finds the range whose ARFCN table contains `arfcn`.
    pub fn for_arfcn(arfcn: i64) -> Result<Self, RangeNotFoundError> {
        Self::ALL
            .into_iter()
            .find(|range| contains(&range.params().arfcn_range, arfcn))
            .ok_or(RangeNotFoundError::Arfcn(arfcn))
    }

    /// Finds the range whose GSCN table contains `gscn`.
    pub fn for_gscn(gscn: i64) -> Result<Self, RangeNotFoundError> {
        Self::ALL
            .into_iter()
            .find(|range| contains(&range.params().gscn_range, gscn))
            .ok_or(RangeNotFoundError::Gscn(gscn))
    }
}

fn contains(range: &RangeInclusive<u32>, value: i64) -> bool {
    i64::from(*range.start()) <= value && value <= i64::from(*range.end())
}

impl fmt::Display for FrequencyRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FrequencyRange::Low => write!(f, "LowFrequency"),
            FrequencyRange::Mid => write!(f, "MidFrequency"),
            FrequencyRange::High => write!(f, "HighFrequency"),
        }
    }
}

/// Returns the range containing `frequency`.
pub fn range_for_frequency(frequency: Frequency) -> Result<FrequencyRange, RangeNotFoundError> {
    FrequencyRange::for_frequency(frequency)
}

/// Returns the range whose ARFCN table contains `arfcn`.
pub fn range_for_arfcn(arfcn: i64) -> Result<FrequencyRange, RangeNotFoundError> {
    FrequencyRange::for_arfcn(arfcn)
}

/// Returns the range whose GSCN table contains `gscn`.
pub fn range_for_gscn(gscn: i64) -> Result<FrequencyRange, RangeNotFoundError> {
    FrequencyRange::for_gscn(gscn)
}
