//! GSCN
//!
//! Conversion between SS block frequencies and Global Synchronization Channel
//! Numbers over the synchronization raster (TS 38.104 Table 5.4.3.1-1):
//!
//! | Range | SS_REF | GSCN |
//! |---|---|---|
//! | 0 - 3000 MHz | `N * 1200 kHz + M * 50 kHz` | `3N + (M - 3) / 2` |
//! | 3000 - 24250 MHz | `3000 MHz + N * 1.44 MHz` | `7499 + N` |
//! | 24250 - 100000 MHz | `24250.08 MHz + N * 17.28 MHz` | `22256 + N` |

use std::fmt;

use serde::{Serialize, Serializer};
use thiserror::Error;
use tracing::error;

use crate::frequency::{format_exact, Exact, Frequency};
use crate::range::{FrequencyRange, RangeNotFoundError, RangeParams, MAX_GSCN};

/// Errors raised by GSCN construction and conversion
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GscnError {
    /// Channel number outside [0, MAX_GSCN]
    #[error("GSCN {0} is out of range (0-{})", MAX_GSCN)]
    OutOfRange(i128),

    /// Raster index N outside the supported table rows
    #[error("Value of N: {} is out of supported range ({min}-{max}).", format_exact(.n))]
    OutOfSupportedN {
        /// Computed raster index
        n: Exact,
        /// Smallest supported N
        min: i64,
        /// Largest supported N
        max: i64,
    },

    /// No raster range for the input
    #[error("{0}")]
    RangeNotFound(#[from] RangeNotFoundError),
}

/// A GSCN in `[0, 26639]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Gscn(u32);

impl Gscn {
    /// Creates a GSCN, validating the raster bounds.
    pub fn new(value: i64) -> Result<Self, GscnError> {
        Self::from_i128(i128::from(value))
    }

    fn from_i128(value: i128) -> Result<Self, GscnError> {
        u32::try_from(value)
            .ok()
            .filter(|v| *v <= MAX_GSCN)
            .map(Self)
            .ok_or(GscnError::OutOfRange(value))
    }

    pub fn value(&self) -> u32 {
        self.0
    }

    /// Returns the GSCN whose raster entry is closest to `frequency`.
    ///
    /// # Errors
    /// - [`GscnError::RangeNotFound`] when no range contains `frequency`
    /// - [`GscnError::OutOfSupportedN`] when the raster index falls outside
    ///   the range's supported N values
    pub fn from_frequency(frequency: Frequency) -> Result<Self, GscnError> {
        let result = Self::compute(frequency);
        if let Err(e) = &result {
            error!("Failed to convert frequency {} Hz to GSCN: {}", frequency, e);
        }
        result
    }

    fn compute(frequency: Frequency) -> Result<Self, GscnError> {
        let params = FrequencyRange::for_frequency(frequency)?.params();

        let value = match params.low_band_raster {
            Some(raster) => {
                let n = (frequency - raster.m_multiplication_factor * raster.m)
                    / params.multiplication_factor;
                check_n(params, n)?;
                (n * Exact::from_integer(3) + m_term(raster.m)).round()
            }
            None => {
                let n = (frequency - params.base_freq) / params.multiplication_factor;
                check_n(params, n)?;
                Exact::from_integer(i128::from(params.base_gscn)) + n.round()
            }
        };
        Self::from_i128(value.to_integer())
    }

    /// Returns the SS block reference frequency of this raster entry.
    pub fn to_frequency(&self) -> Result<Frequency, GscnError> {
        let value = i64::from(self.0);
        let params = FrequencyRange::for_gscn(value)?.params();

        match params.low_band_raster {
            Some(raster) => {
                let n = (Exact::from_integer(i128::from(value)) - m_term(raster.m))
                    / Exact::from_integer(3);
                check_n(params, n)?;
                Ok(params.multiplication_factor * n + raster.m_multiplication_factor * raster.m)
            }
            None => {
                let n = value - params.base_gscn;
                check_n(params, Exact::from_integer(i128::from(n)))?;
                Ok(params.base_freq + params.multiplication_factor * n)
            }
        }
    }
}

/// `(M - 3) / 2` term of the low range formula
fn m_term(m: i64) -> Exact {
    Exact::new(i128::from(m) - 3, 2)
}

fn check_n(params: &RangeParams, n: Exact) -> Result<(), GscnError> {
    let min = Exact::from_integer(i128::from(params.min_n));
    let max = Exact::from_integer(i128::from(params.max_n));
    if n < min || n > max {
        return Err(GscnError::OutOfSupportedN {
            n,
            min: params.min_n,
            max: params.max_n,
        });
    }
    Ok(())
}

impl fmt::Display for Gscn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for Gscn {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u32(self.0)
    }
}

impl TryFrom<i64> for Gscn {
    type Error = GscnError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}
