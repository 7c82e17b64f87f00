//! Downlink Point A
//!
//! `dl_absoluteFrequencyPointA` is the ARFCN of the lowest subcarrier of the
//! carrier: `center - bandwidth / 2`, optionally aligned to the subcarrier
//! spacing grid.

use thiserror::Error;
use tracing::{error, info};

use crate::arfcn::{Arfcn, ArfcnError};
use crate::frequency::Frequency;

/// Errors raised while computing Point A
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DlAbsoluteFrequencyPointAError {
    /// Subcarrier spacing of zero cannot align anything
    #[error("Failed to calculate dl_absoluteFrequencyPointA: invalid subcarrier spacing {0} Hz")]
    InvalidSubcarrierSpacing(Frequency),

    /// Lowest frequency has no ARFCN
    #[error("Failed to calculate dl_absoluteFrequencyPointA: {0}")]
    Arfcn(#[from] ArfcnError),
}

/// Calculates `dl_absoluteFrequencyPointA`.
///
/// # Arguments
/// * `center_freq` - carrier center frequency
/// * `bandwidth` - channel bandwidth
/// * `subcarrier_spacing` - when given, the lowest frequency is rounded to the
///   nearest multiple of it (ties away from zero) before conversion
pub fn get_dl_absolute_frequency_point_a(
    center_freq: Frequency,
    bandwidth: Frequency,
    subcarrier_spacing: Option<Frequency>,
) -> Result<Arfcn, DlAbsoluteFrequencyPointAError> {
    let mut lowest_freq = center_freq - bandwidth / 2;

    if let Some(scs) = subcarrier_spacing {
        lowest_freq = lowest_freq.round_to_multiple(scs).ok_or_else(|| {
            error!("Cannot align Point A to subcarrier spacing {} Hz", scs);
            DlAbsoluteFrequencyPointAError::InvalidSubcarrierSpacing(scs)
        })?;
    }

    let point_a = Arfcn::from_frequency(lowest_freq).map_err(|e| {
        error!(
            "Failed to calculate dl_absoluteFrequencyPointA for center frequency {} Hz and bandwidth {} Hz: {}",
            center_freq, bandwidth, e
        );
        e
    })?;

    info!(
        "dl_absoluteFrequencyPointA for center frequency {} Hz and bandwidth {} Hz: {}",
        center_freq, bandwidth, point_a
    );
    Ok(point_a)
}
