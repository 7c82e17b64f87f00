//! Exact frequency quantities
//!
//! A [`Frequency`] is an exact rational number of hertz. Channel numbers are
//! derived from frequencies with piecewise-linear formulas and end up as
//! integers in the radio configuration, so the arithmetic never goes through
//! binary floating point: operators are only implemented against other
//! frequencies, integers and exact rationals. Mixing in an `f32`/`f64` is a
//! compile error rather than a silent precision loss.

use std::fmt;
use std::ops::{Add, AddAssign, Div, Mul, Sub, SubAssign};

use num_rational::Ratio;
use num_traits::{CheckedMul, Signed, Zero};
use serde::{Serialize, Serializer};
use thiserror::Error;

/// Exact rational value used for dimensionless intermediate results.
pub type Exact = Ratio<i128>;

/// Hertz per kilohertz
pub const HZ_PER_KHZ: i128 = 1_000;
/// Hertz per megahertz
pub const HZ_PER_MHZ: i128 = 1_000_000;

/// Fractional digits printed for values without a finite decimal expansion.
const MAX_FRACTION_DIGITS: usize = 28;

/// Errors raised while building a frequency from a literal
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FrequencyError {
    /// The literal is not an exact decimal number
    #[error("Invalid frequency literal: {0:?}")]
    InvalidLiteral(String),

    /// The literal does not fit the exact representation
    #[error("Frequency literal out of representable range: {0}")]
    Overflow(String),
}

/// Conversion of a textual or integral literal into an exact value.
///
/// Implemented for integers and decimal strings such as `"242.5"`. There is
/// deliberately no implementation for `f32`/`f64`.
pub trait ExactLiteral {
    /// Returns the exact value of the literal.
    fn to_exact(&self) -> Result<Exact, FrequencyError>;
}

impl ExactLiteral for &str {
    fn to_exact(&self) -> Result<Exact, FrequencyError> {
        parse_decimal(self)
    }
}

impl ExactLiteral for String {
    fn to_exact(&self) -> Result<Exact, FrequencyError> {
        parse_decimal(self)
    }
}

impl ExactLiteral for &String {
    fn to_exact(&self) -> Result<Exact, FrequencyError> {
        parse_decimal(self)
    }
}

impl ExactLiteral for Exact {
    fn to_exact(&self) -> Result<Exact, FrequencyError> {
        Ok(*self)
    }
}

macro_rules! impl_exact_literal_for_int {
    ($($t:ty),*) => {
        $(
            impl ExactLiteral for $t {
                fn to_exact(&self) -> Result<Exact, FrequencyError> {
                    Ok(Exact::from_integer(i128::from(*self)))
                }
            }
        )*
    };
}

impl_exact_literal_for_int!(i8, i16, i32, i64, i128, u8, u16, u32, u64);

/// Parses a plain decimal literal (`[+-]digits[.digits]`) into an exact value.
fn parse_decimal(text: &str) -> Result<Exact, FrequencyError> {
    let invalid = || FrequencyError::InvalidLiteral(text.to_string());
    let overflow = || FrequencyError::Overflow(text.to_string());

    let trimmed = text.trim();
    let (negative, unsigned) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };
    let (int_part, frac_part) = unsigned.split_once('.').unwrap_or((unsigned, ""));

    if int_part.is_empty() && frac_part.is_empty() {
        return Err(invalid());
    }
    let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    if !all_digits(int_part) || !all_digits(frac_part) {
        return Err(invalid());
    }

    let mut numer: i128 = 0;
    for digit in int_part.bytes().chain(frac_part.bytes()) {
        numer = numer
            .checked_mul(10)
            .and_then(|n| n.checked_add(i128::from(digit - b'0')))
            .ok_or_else(overflow)?;
    }
    let scale = u32::try_from(frac_part.len()).map_err(|_| overflow())?;
    let denom = 10i128.checked_pow(scale).ok_or_else(overflow)?;

    let value = Exact::new(numer, denom);
    Ok(if negative { -value } else { value })
}

/// A frequency in hertz with exact rational arithmetic.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Frequency(Exact);

impl Frequency {
    /// 0 Hz
    pub const ZERO: Frequency = Frequency::hz(0);

    /// Creates a frequency from a whole number of hertz.
    pub const fn hz(hz: i128) -> Self {
        Self(Ratio::new_raw(hz, 1))
    }

    /// Creates a frequency from a whole number of kilohertz.
    pub const fn khz(khz: i64) -> Self {
        Self::hz(khz as i128 * HZ_PER_KHZ)
    }

    /// Creates a frequency from a whole number of megahertz.
    pub const fn mhz(mhz: i64) -> Self {
        Self::hz(mhz as i128 * HZ_PER_MHZ)
    }

    /// Creates a frequency from an exact number of hertz.
    pub fn from_exact_hz(hz: Exact) -> Self {
        Self(hz)
    }

    /// Builds a frequency from a kilohertz literal.
    ///
    /// Fractional values must be given as strings (`"242.5"`) so they stay exact.
    ///
    /// # Example
    /// ```
    /// use duparams_rf::Frequency;
    ///
    /// let guard_band = Frequency::from_khz("242.5").unwrap();
    /// assert_eq!(guard_band, Frequency::hz(242_500));
    /// ```
    pub fn from_khz(value: impl ExactLiteral) -> Result<Self, FrequencyError> {
        Self::from_unit(value, HZ_PER_KHZ)
    }

    /// Builds a frequency from a megahertz literal.
    ///
    /// # Example
    /// ```
    /// use duparams_rf::Frequency;
    ///
    /// assert_eq!(Frequency::from_mhz(3925).unwrap(), Frequency::mhz(3925));
    /// assert_eq!(Frequency::from_mhz("24250.08").unwrap(), Frequency::hz(24_250_080_000));
    /// assert!(Frequency::from_mhz("invalid").is_err());
    /// ```
    pub fn from_mhz(value: impl ExactLiteral) -> Result<Self, FrequencyError> {
        Self::from_unit(value, HZ_PER_MHZ)
    }

    fn from_unit(value: impl ExactLiteral, unit_hz: i128) -> Result<Self, FrequencyError> {
        let exact = value.to_exact()?;
        exact
            .checked_mul(&Exact::from_integer(unit_hz))
            .map(Self)
            .ok_or_else(|| FrequencyError::Overflow(format_exact(&exact)))
    }

    /// Returns the value in hertz.
    pub fn as_hz(&self) -> Exact {
        self.0
    }

    /// Returns the value in kilohertz.
    pub fn as_khz(&self) -> Exact {
        self.0 / Exact::from_integer(HZ_PER_KHZ)
    }

    /// Returns the value in whole hertz if it has no fractional part.
    pub fn to_hz_integer(&self) -> Option<i128> {
        self.0.is_integer().then(|| self.0.to_integer())
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// True for strictly positive frequencies.
    pub fn is_positive(&self) -> bool {
        self.0.is_positive()
    }

    pub fn is_negative(&self) -> bool {
        self.0.is_negative()
    }

    /// Dimensionless quotient `self / other`, `None` when `other` is zero.
    pub fn checked_ratio(self, other: Frequency) -> Option<Exact> {
        (!other.is_zero()).then(|| self.0 / other.0)
    }

    /// Divides by an integer, `None` when `divisor` is zero.
    pub fn checked_div_int(self, divisor: i64) -> Option<Frequency> {
        (divisor != 0).then(|| Self(self.0 / Exact::from_integer(i128::from(divisor))))
    }

    /// Rounds to the nearest multiple of `step`, ties away from zero.
    ///
    /// Returns `None` when `step` is zero.
    pub fn round_to_multiple(self, step: Frequency) -> Option<Frequency> {
        let steps = self.checked_ratio(step)?.round();
        Some(Self(steps * step.0))
    }
}

impl fmt::Debug for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Frequency({})", format_exact(&self.0))
    }
}

/// Displays the value in hertz as a decimal number.
impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_exact(&self.0))
    }
}

impl Serialize for Frequency {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl Add for Frequency {
    type Output = Frequency;

    fn add(self, rhs: Frequency) -> Frequency {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for Frequency {
    fn add_assign(&mut self, rhs: Frequency) {
        self.0 += rhs.0;
    }
}

impl Sub for Frequency {
    type Output = Frequency;

    fn sub(self, rhs: Frequency) -> Frequency {
        Self(self.0 - rhs.0)
    }
}

impl SubAssign for Frequency {
    fn sub_assign(&mut self, rhs: Frequency) {
        self.0 -= rhs.0;
    }
}

impl Mul<i64> for Frequency {
    type Output = Frequency;

    fn mul(self, rhs: i64) -> Frequency {
        Self(self.0 * Exact::from_integer(i128::from(rhs)))
    }
}

impl Mul<Frequency> for i64 {
    type Output = Frequency;

    fn mul(self, rhs: Frequency) -> Frequency {
        rhs * self
    }
}

impl Mul<Exact> for Frequency {
    type Output = Frequency;

    fn mul(self, rhs: Exact) -> Frequency {
        Self(self.0 * rhs)
    }
}

/// Panics on a zero divisor like integer division; use
/// [`Frequency::checked_div_int`] when the divisor is not a constant.
impl Div<i64> for Frequency {
    type Output = Frequency;

    fn div(self, rhs: i64) -> Frequency {
        Self(self.0 / Exact::from_integer(i128::from(rhs)))
    }
}

/// Quotient of two frequencies is dimensionless.
impl Div for Frequency {
    type Output = Exact;

    fn div(self, rhs: Frequency) -> Exact {
        self.0 / rhs.0
    }
}

/// Formats an exact value as a decimal string.
///
/// Values with a finite decimal expansion are printed exactly, others are
/// truncated after 28 fractional digits.
pub fn format_exact(value: &Exact) -> String {
    let mut out = String::new();
    if value.is_negative() {
        out.push('-');
    }
    let magnitude = value.abs();
    let int_part = magnitude.trunc();
    out.push_str(&int_part.to_integer().to_string());

    let mut frac = magnitude - int_part;
    if frac.is_zero() {
        return out;
    }
    out.push('.');
    let ten = Exact::from_integer(10);
    for _ in 0..MAX_FRACTION_DIGITS {
        frac = frac * ten;
        let digit = frac.trunc();
        out.push_str(&digit.to_integer().to_string());
        frac = frac - digit;
        if frac.is_zero() {
            break;
        }
    }
    out
}
