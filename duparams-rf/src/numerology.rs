//! NR numerology (mu) for a subcarrier spacing: `SCS = 15 kHz * 2^mu`

use std::fmt;

use serde::Serialize;
use thiserror::Error;

use crate::frequency::Frequency;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NumerologyError {
    /// Only 15, 30 and 60 kHz are used in FR1
    #[error("Unsupported subcarrier spacing {0} Hz, expected 15, 30 or 60 kHz")]
    UnsupportedSubcarrierSpacing(Frequency),
}

/// Numerology index mu
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Numerology(u8);

impl Numerology {
    /// Returns the numerology of an FR1 subcarrier spacing.
    pub fn from_subcarrier_spacing(subcarrier_spacing: Frequency) -> Result<Self, NumerologyError> {
        [Frequency::khz(15), Frequency::khz(30), Frequency::khz(60)]
            .iter()
            .zip(0u8..)
            .find(|(scs, _)| **scs == subcarrier_spacing)
            .map(|(_, mu)| Self(mu))
            .ok_or(NumerologyError::UnsupportedSubcarrierSpacing(subcarrier_spacing))
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    /// `2^mu`
    pub fn scaling(&self) -> i64 {
        1 << self.0
    }
}

impl fmt::Display for Numerology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
