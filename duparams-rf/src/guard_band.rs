//! Minimum guard band per subcarrier spacing and channel bandwidth
//! (TS 38.101-1 Table 5.3.3-1)

use thiserror::Error;
use tracing::{error, info};

use crate::frequency::Frequency;

/// Guard band lookup failure
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GuardBandError {
    /// No table for this subcarrier spacing
    #[error("No guard band found for SCS={0} Hz.")]
    UnknownSubcarrierSpacing(Frequency),

    /// Subcarrier spacing known but bandwidth not listed for it
    #[error("No guard band found for bandwidth={bandwidth} Hz and SCS={subcarrier_spacing} Hz.")]
    UnknownBandwidth {
        bandwidth: Frequency,
        subcarrier_spacing: Frequency,
    },
}

type GuardBandTable = &'static [(Frequency, Frequency)];

/// (channel bandwidth, minimum guard band) rows per subcarrier spacing
static MINIMUM_GUARD_BANDS: &[(Frequency, GuardBandTable)] = &[
    (
        Frequency::khz(15),
        &[
            (Frequency::mhz(5), Frequency::hz(242_500)),
            (Frequency::mhz(10), Frequency::hz(312_500)),
            (Frequency::mhz(15), Frequency::hz(382_500)),
            (Frequency::mhz(20), Frequency::hz(452_500)),
            (Frequency::mhz(25), Frequency::hz(552_500)),
            (Frequency::mhz(30), Frequency::hz(592_500)),
            (Frequency::mhz(40), Frequency::hz(552_500)),
            (Frequency::mhz(50), Frequency::hz(692_500)),
        ],
    ),
    (
        Frequency::khz(30),
        &[
            (Frequency::mhz(5), Frequency::khz(505)),
            (Frequency::mhz(10), Frequency::khz(665)),
            (Frequency::mhz(15), Frequency::khz(645)),
            (Frequency::mhz(20), Frequency::khz(805)),
            (Frequency::mhz(25), Frequency::khz(785)),
            (Frequency::mhz(30), Frequency::khz(945)),
            (Frequency::mhz(40), Frequency::khz(905)),
            (Frequency::mhz(50), Frequency::khz(1045)),
            (Frequency::mhz(60), Frequency::khz(825)),
            (Frequency::mhz(70), Frequency::khz(965)),
            (Frequency::mhz(80), Frequency::khz(925)),
            (Frequency::mhz(90), Frequency::khz(885)),
            (Frequency::mhz(100), Frequency::khz(845)),
        ],
    ),
    (
        Frequency::khz(60),
        &[
            (Frequency::mhz(10), Frequency::khz(1010)),
            (Frequency::mhz(15), Frequency::khz(990)),
            (Frequency::mhz(20), Frequency::khz(1330)),
            (Frequency::mhz(25), Frequency::khz(1310)),
            (Frequency::mhz(30), Frequency::khz(1290)),
            (Frequency::mhz(40), Frequency::khz(1610)),
            (Frequency::mhz(50), Frequency::khz(1570)),
            (Frequency::mhz(60), Frequency::khz(1530)),
            (Frequency::mhz(70), Frequency::khz(1490)),
            (Frequency::mhz(80), Frequency::khz(1450)),
            (Frequency::mhz(90), Frequency::khz(1410)),
            (Frequency::mhz(100), Frequency::khz(1370)),
        ],
    ),
];

/// Returns the minimum guard band for a subcarrier spacing and channel bandwidth.
///
/// # Arguments
/// * `subcarrier_spacing` - 15, 30 or 60 kHz
/// * `bandwidth` - channel bandwidth listed for that spacing
pub fn get_minimum_guard_band(
    subcarrier_spacing: Frequency,
    bandwidth: Frequency,
) -> Result<Frequency, GuardBandError> {
    let Some((_, rows)) = MINIMUM_GUARD_BANDS
        .iter()
        .find(|(scs, _)| *scs == subcarrier_spacing)
    else {
        error!("Requested guard band for SCS={} Hz not found", subcarrier_spacing);
        return Err(GuardBandError::UnknownSubcarrierSpacing(subcarrier_spacing));
    };

    match rows.iter().find(|(bw, _)| *bw == bandwidth) {
        Some((_, guard_band)) => {
            info!(
                "Minimum guard band for SCS={} Hz and bandwidth={} Hz: {} Hz",
                subcarrier_spacing, bandwidth, guard_band
            );
            Ok(*guard_band)
        }
        None => {
            error!(
                "Requested guard band for SCS={} Hz and bandwidth={} Hz not found",
                subcarrier_spacing, bandwidth
            );
            Err(GuardBandError::UnknownBandwidth {
                bandwidth,
                subcarrier_spacing,
            })
        }
    }
}
