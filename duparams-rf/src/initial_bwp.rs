//! Initial BWP location and bandwidth
//!
//! `locationAndBandwidth` is the RIV `N_BWP * (L - 1) + RB_start` with
//! `RB_start = 0` and `N_BWP = 275`.

use thiserror::Error;
use tracing::{error, info};

/// Resource blocks used as `N_BWP` in the RIV
pub const TOTAL_PRBS: i64 = 275;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InitialBwpError {
    /// Carrier bandwidth must be at least one RB
    #[error("Carrier bandwidth must be greater than 0, got {0}")]
    NonPositiveCarrierBandwidth(u32),
}

/// Returns the initial BWP `locationAndBandwidth` for a carrier bandwidth in RBs.
///
/// The result is exact for every `u32` input: `275 * (u32::MAX - 1)` fits in
/// an `i64`.
pub fn get_initial_bwp(carrier_bandwidth_rbs: u32) -> Result<i64, InitialBwpError> {
    if carrier_bandwidth_rbs == 0 {
        error!("Carrier bandwidth must be greater than 0, got {}", carrier_bandwidth_rbs);
        return Err(InitialBwpError::NonPositiveCarrierBandwidth(carrier_bandwidth_rbs));
    }
    let bwp = TOTAL_PRBS * (i64::from(carrier_bandwidth_rbs) - 1);
    info!("Initial BWP for carrier bandwidth {} RBs: {}", carrier_bandwidth_rbs, bwp);
    Ok(bwp)
}
