//! SSB absolute frequency
//!
//! `absoluteFrequencySSB` is the ARFCN of the synchronization raster point
//! closest to the carrier center frequency.

use thiserror::Error;
use tracing::{error, info};

use crate::arfcn::{Arfcn, ArfcnError};
use crate::frequency::{ExactLiteral, Frequency, FrequencyError};
use crate::gscn::{Gscn, GscnError};

/// Lowest frequency of band n79
const N79_LOWER: Frequency = Frequency::mhz(4400);
/// Highest frequency of band n79
const N79_UPPER: Frequency = Frequency::mhz(5000);
/// Band n79 only allows every 16th GSCN (TS 38.101-1 Table 5.4.3.3-1)
const N79_GSCN_STEP: u32 = 16;

/// Errors raised while computing the SSB absolute frequency
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AbsoluteFrequencySsbError {
    /// Center frequency is zero or negative
    #[error("Invalid center frequency: {0} Hz")]
    InvalidCenterFrequency(Frequency),

    /// Center frequency literal does not parse
    #[error("{0}")]
    Frequency(#[from] FrequencyError),

    /// Synchronization raster step failed
    #[error("{0}")]
    Gscn(#[from] GscnError),

    /// Channel raster step failed
    #[error("{0}")]
    Arfcn(#[from] ArfcnError),
}

/// Calculates `absoluteFrequencySSB` for a center frequency given in MHz.
///
/// This is a best-effort helper: every failure is logged and reported as
/// `None`. Use [`absolute_frequency_ssb`] where a hard error is required.
///
/// # Example
/// ```
/// use duparams_rf::get_absolute_frequency_ssb;
///
/// assert_eq!(get_absolute_frequency_ssb(3925).map(|a| a.value()), Some(661_632));
/// assert_eq!(get_absolute_frequency_ssb(-10), None);
/// assert_eq!(get_absolute_frequency_ssb("invalid"), None);
/// ```
pub fn get_absolute_frequency_ssb(center_freq_mhz: impl ExactLiteral) -> Option<Arfcn> {
    let result = Frequency::from_mhz(center_freq_mhz)
        .map_err(AbsoluteFrequencySsbError::from)
        .and_then(absolute_frequency_ssb);

    match result {
        Ok(arfcn) => Some(arfcn),
        Err(e) => {
            error!("Error in getting absolute frequency for SSB: {}", e);
            None
        }
    }
}

/// Calculates `absoluteFrequencySSB` for a center frequency.
///
/// The center frequency is snapped onto the nearest synchronization raster
/// entry, which is then converted to an ARFCN.
pub fn absolute_frequency_ssb(center_freq: Frequency) -> Result<Arfcn, AbsoluteFrequencySsbError> {
    if !center_freq.is_positive() {
        return Err(AbsoluteFrequencySsbError::InvalidCenterFrequency(center_freq));
    }

    let mut gscn = Gscn::from_frequency(center_freq)?;
    if (N79_LOWER..=N79_UPPER).contains(&center_freq) {
        gscn = align_n79_gscn(gscn)?;
    }
    let ssb_freq = gscn.to_frequency()?;
    let arfcn = Arfcn::from_frequency(ssb_freq)?;

    info!(
        "absoluteFrequencySSB for center frequency {} Hz: GSCN {}, ARFCN {}",
        center_freq, gscn, arfcn
    );
    Ok(arfcn)
}

/// Moves a GSCN to the nearest multiple of 16, halfway values round up.
fn align_n79_gscn(gscn: Gscn) -> Result<Gscn, GscnError> {
    let remainder = gscn.value() % N79_GSCN_STEP;
    let aligned = if remainder < N79_GSCN_STEP / 2 {
        gscn.value() - remainder
    } else {
        gscn.value() + (N79_GSCN_STEP - remainder)
    };
    Gscn::new(i64::from(aligned))
}
