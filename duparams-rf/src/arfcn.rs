//! NR-ARFCN
//!
//! Conversion between RF reference frequencies and NR Absolute Radio Frequency
//! Channel Numbers over the global frequency raster (TS 38.104 5.4.2.1):
//!
//! `F_REF = F_REF-Offs + ΔF_Global * (N_REF - N_REF-Offs)`

use std::fmt;
use std::ops::Sub;

use serde::{Serialize, Serializer};
use thiserror::Error;
use tracing::error;

use crate::frequency::{Exact, Frequency};
use crate::range::{FrequencyRange, RangeNotFoundError, MAX_ARFCN};

/// Errors raised by ARFCN construction and conversion
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArfcnError {
    /// Channel number outside [0, MAX_ARFCN]
    #[error("ARFCN {0} is out of range (0-{})", MAX_ARFCN)]
    OutOfRange(i128),

    /// Channel number with a fractional part
    #[error("ARFCN must be an integer, got {0}")]
    NotInteger(String),

    /// No raster range for the input
    #[error("{0}")]
    RangeNotFound(#[from] RangeNotFoundError),
}

/// An NR-ARFCN in `[0, 3279165]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Arfcn(u32);

impl Arfcn {
    /// Creates an ARFCN, validating the raster bounds.
    pub fn new(value: i64) -> Result<Self, ArfcnError> {
        Self::from_i128(i128::from(value))
    }

    fn from_i128(value: i128) -> Result<Self, ArfcnError> {
        u32::try_from(value)
            .ok()
            .filter(|v| *v <= MAX_ARFCN)
            .map(Self)
            .ok_or(ArfcnError::OutOfRange(value))
    }

    /// Creates an ARFCN from an exact value, which must be integral.
    pub fn from_exact(value: Exact) -> Result<Self, ArfcnError> {
        if !value.is_integer() {
            return Err(ArfcnError::NotInteger(crate::frequency::format_exact(&value)));
        }
        Self::from_i128(value.to_integer())
    }

    /// Channel number as integer.
    pub fn value(&self) -> u32 {
        self.0
    }

    /// Adds a (possibly negative) channel offset.
    pub fn checked_add(self, offset: i64) -> Result<Self, ArfcnError> {
        Self::new(i64::from(self.0) + offset)
    }

    /// Returns the ARFCN closest to `frequency` on the global raster.
    ///
    /// Frequencies between two raster points round to the nearest one, ties
    /// away from zero.
    pub fn from_frequency(frequency: Frequency) -> Result<Self, ArfcnError> {
        let result = FrequencyRange::for_frequency(frequency)
            .map_err(ArfcnError::from)
            .and_then(|range| {
                let params = range.params();
                let steps = (frequency - params.freq_offset) / params.freq_grid;
                Self::from_exact(Exact::from_integer(i128::from(params.arfcn_offset)) + steps.round())
            });
        if let Err(e) = &result {
            error!("Failed to convert frequency {} Hz to ARFCN: {}", frequency, e);
        }
        result
    }

    /// Returns the RF reference frequency of this channel.
    pub fn to_frequency(&self) -> Result<Frequency, ArfcnError> {
        let value = i64::from(self.0);
        let params = FrequencyRange::for_arfcn(value)?.params();
        Ok(params.freq_offset + params.freq_grid * (value - params.arfcn_offset))
    }
}

impl fmt::Display for Arfcn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for Arfcn {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u32(self.0)
    }
}

impl TryFrom<i64> for Arfcn {
    type Error = ArfcnError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Arfcn> for u32 {
    fn from(arfcn: Arfcn) -> u32 {
        arfcn.0
    }
}

/// Signed channel distance.
impl Sub for Arfcn {
    type Output = i64;

    fn sub(self, rhs: Arfcn) -> i64 {
        i64::from(self.0) - i64::from(rhs.0)
    }
}
