//! FR1 TDD operating bands
//!
//! Frequency ranges (TS 38.101-1 Table 5.2-1) and channel bandwidths per
//! subcarrier spacing (TS 38.101-1 Table 5.3.5-1) of the TDD bands a DU can
//! be configured for. Uplink and downlink share the same range for TDD.

use thiserror::Error;

use crate::frequency::Frequency;

/// Band table lookup failure
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BandError {
    /// Not a supported TDD FR1 band
    #[error("Unknown TDD FR1 band n{0}")]
    UnknownBand(u16),

    /// The band defines no channel bandwidth for this spacing
    #[error("Band n{band} does not support subcarrier spacing {subcarrier_spacing} Hz")]
    UnsupportedSubcarrierSpacing {
        band: u16,
        subcarrier_spacing: Frequency,
    },
}

/// One TDD operating band
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TddBand {
    /// Band number without the `n` prefix
    pub band: u16,
    /// Lowest frequency of the band
    pub lower: Frequency,
    /// Highest frequency of the band
    pub upper: Frequency,
    /// Channel bandwidths in MHz at 15 kHz SCS
    pub bandwidths_15khz: &'static [u32],
    /// Channel bandwidths in MHz at 30 kHz SCS
    pub bandwidths_30khz: &'static [u32],
    /// Channel bandwidths in MHz at 60 kHz SCS
    pub bandwidths_60khz: &'static [u32],
}

impl TddBand {
    /// Channel bandwidths (MHz) allowed at `subcarrier_spacing`.
    pub fn allowed_bandwidths(&self, subcarrier_spacing: Frequency) -> Result<&'static [u32], BandError> {
        let bandwidths = if subcarrier_spacing == Frequency::khz(15) {
            self.bandwidths_15khz
        } else if subcarrier_spacing == Frequency::khz(30) {
            self.bandwidths_30khz
        } else if subcarrier_spacing == Frequency::khz(60) {
            self.bandwidths_60khz
        } else {
            &[]
        };

        if bandwidths.is_empty() {
            return Err(BandError::UnsupportedSubcarrierSpacing {
                band: self.band,
                subcarrier_spacing,
            });
        }
        Ok(bandwidths)
    }

    /// True when `frequency` lies inside the band edges.
    pub fn contains(&self, frequency: Frequency) -> bool {
        self.lower <= frequency && frequency <= self.upper
    }
}

const BW_N38_15: &[u32] = &[5, 10, 15, 20, 25, 30, 40];
const BW_N38_30: &[u32] = &[10, 15, 20, 25, 30, 40];
const BW_N40_15: &[u32] = &[5, 10, 15, 20, 25, 30, 40, 50];
const BW_N40_30: &[u32] = &[10, 15, 20, 25, 30, 40, 50, 60, 80, 90, 100];
const BW_N41_15: &[u32] = &[10, 15, 20, 30, 40, 50];
const BW_N41_30: &[u32] = &[10, 15, 20, 30, 40, 50, 60, 70, 80, 90, 100];
const BW_N77_15: &[u32] = &[10, 15, 20, 25, 30, 40, 50];
const BW_FULL_30: &[u32] = &[10, 15, 20, 25, 30, 40, 50, 60, 70, 80, 90, 100];

macro_rules! tdd_band {
    ($band:expr, $lower:expr, $upper:expr, $bw15:expr, $bw30:expr, $bw60:expr) => {
        TddBand {
            band: $band,
            lower: $lower,
            upper: $upper,
            bandwidths_15khz: $bw15,
            bandwidths_30khz: $bw30,
            bandwidths_60khz: $bw60,
        }
    };
}

/// Supported TDD FR1 bands in ascending band number order
pub static TDD_FR1_BANDS: &[TddBand] = &[
    tdd_band!(34, Frequency::mhz(2010), Frequency::mhz(2025), &[5, 10, 15, 20], &[10, 15, 20], &[10, 15, 20]),
    tdd_band!(38, Frequency::mhz(2570), Frequency::mhz(2620), BW_N38_15, BW_N38_30, BW_N38_30),
    tdd_band!(39, Frequency::mhz(1880), Frequency::mhz(1920), BW_N38_15, BW_N38_30, BW_N38_30),
    tdd_band!(40, Frequency::mhz(2300), Frequency::mhz(2400), BW_N40_15, BW_N40_30, BW_N40_30),
    tdd_band!(41, Frequency::mhz(2496), Frequency::mhz(2690), BW_N41_15, BW_N41_30, BW_N41_30),
    tdd_band!(46, Frequency::mhz(5150), Frequency::mhz(5925), &[10, 20, 40], &[10, 20, 40, 60, 80], &[10, 20, 40, 60, 80]),
    tdd_band!(47, Frequency::mhz(5855), Frequency::mhz(5925), &[10, 20, 30, 40], &[10, 20, 30, 40], &[10, 20, 30, 40]),
    tdd_band!(48, Frequency::mhz(3550), Frequency::mhz(3700), BW_N38_15, BW_FULL_30, BW_FULL_30),
    tdd_band!(
        50,
        Frequency::mhz(1432),
        Frequency::mhz(1517),
        BW_N40_15,
        &[10, 15, 20, 25, 30, 40, 50, 60, 80],
        &[10, 15, 20, 25, 30, 40, 50, 60, 80]
    ),
    tdd_band!(51, Frequency::mhz(1427), Frequency::mhz(1432), &[5], &[], &[]),
    tdd_band!(53, Frequency::khz(2_483_500), Frequency::mhz(2495), &[5, 10], &[10], &[10]),
    tdd_band!(77, Frequency::mhz(3300), Frequency::mhz(4200), BW_N77_15, BW_FULL_30, BW_FULL_30),
    tdd_band!(78, Frequency::mhz(3300), Frequency::mhz(3800), BW_N77_15, BW_FULL_30, BW_FULL_30),
    tdd_band!(79, Frequency::mhz(4400), Frequency::mhz(5000), &[40, 50], &[40, 50, 60, 80, 100], &[40, 50, 60, 80, 100]),
    tdd_band!(90, Frequency::mhz(2496), Frequency::mhz(2690), BW_N41_15, BW_N41_30, BW_N41_30),
    tdd_band!(96, Frequency::mhz(5925), Frequency::mhz(7125), &[20, 40], &[20, 40, 60, 80], &[20, 40, 60, 80]),
    tdd_band!(101, Frequency::mhz(1900), Frequency::mhz(1910), &[5, 10], &[10], &[]),
];

/// Looks up a TDD FR1 band by number.
pub fn tdd_band(band: u16) -> Result<&'static TddBand, BandError> {
    TDD_FR1_BANDS
        .iter()
        .find(|b| b.band == band)
        .ok_or(BandError::UnknownBand(band))
}

/// Channel bandwidths (MHz) allowed for `band` at `subcarrier_spacing`.
pub fn allowed_channel_bandwidths(
    band: u16,
    subcarrier_spacing: Frequency,
) -> Result<&'static [u32], BandError> {
    tdd_band(band)?.allowed_bandwidths(subcarrier_spacing)
}
