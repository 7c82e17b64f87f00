//! Carrier bandwidth in resource blocks
//!
//! `N_RB = (channel bandwidth - 2 * minimum guard band) / SCS / 12`, truncated.

use thiserror::Error;
use tracing::{error, info};

use crate::frequency::{Exact, Frequency};
use crate::guard_band::{get_minimum_guard_band, GuardBandError};

/// Subcarriers per resource block
pub const SUBCARRIERS_PER_RB: i64 = 12;

/// Errors raised by the carrier bandwidth calculation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CarrierBandwidthError {
    /// Bandwidth or subcarrier spacing is not strictly positive
    #[error("Both bandwidth and subcarrier spacing must be greater than 0 (bandwidth={bandwidth} Hz, SCS={subcarrier_spacing} Hz)")]
    NonPositiveInput {
        bandwidth: Frequency,
        subcarrier_spacing: Frequency,
    },

    /// Guard band lookup failed
    #[error("Guard band calculation failed: {0}")]
    GuardBand(#[from] GuardBandError),

    /// Result does not fit a resource block count
    #[error("Invalid carrier bandwidth {0} RBs")]
    InvalidResult(String),
}

/// Returns the number of resource blocks fitting into `bandwidth` at `subcarrier_spacing`.
///
/// # Errors
/// Fails for non-positive inputs and for (SCS, bandwidth) pairs without a
/// guard band entry.
pub fn get_carrier_bandwidth(
    bandwidth: Frequency,
    subcarrier_spacing: Frequency,
) -> Result<u32, CarrierBandwidthError> {
    if !bandwidth.is_positive() || !subcarrier_spacing.is_positive() {
        error!("Both bandwidth and subcarrier spacing must be greater than 0");
        return Err(CarrierBandwidthError::NonPositiveInput {
            bandwidth,
            subcarrier_spacing,
        });
    }

    let guard_band = get_minimum_guard_band(subcarrier_spacing, bandwidth).map_err(|e| {
        error!(
            "Guard band calculation failed for bandwidth {} Hz and SCS {} Hz: {}",
            bandwidth, subcarrier_spacing, e
        );
        e
    })?;

    let rbs: Exact = (bandwidth - 2 * guard_band) / subcarrier_spacing
        / Exact::from_integer(i128::from(SUBCARRIERS_PER_RB));
    let carrier_bandwidth = u32::try_from(rbs.trunc().to_integer()).map_err(|_| {
        error!("Carrier bandwidth {} RBs out of range", rbs);
        CarrierBandwidthError::InvalidResult(crate::frequency::format_exact(&rbs))
    })?;

    info!(
        "Carrier bandwidth for bandwidth={} Hz and SCS={} Hz: {} RBs",
        bandwidth, subcarrier_spacing, carrier_bandwidth
    );
    Ok(carrier_bandwidth)
}
