//! Decimal-to-fraction conversion.
//!
//! A measurement like `12.345` travels as [`DecimalParts`] (integer part,
//! fractional digits, digit count) so it never passes through floating point.

use std::fmt;

use crate::error::{FractionError, FractionResult};
use crate::fraction::{Fraction, canonicalize};

/// Largest supported fractional digit count; `10^15` still leaves headroom
/// in an `i64` for the integer part.
pub const MAX_DECIMAL_DIGITS: i64 = 15;

/// A decimal number split into integer and fractional components.
///
/// The value is `integer_part ± fractional / 10^digits`, with the sign taken
/// from `integer_part` (zero counts as non-negative).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecimalParts {
    pub integer_part: i64,
    pub fractional: u64,
    pub digits: i64,
}

impl DecimalParts {
    pub fn new(integer_part: i64, fractional: u64, digits: i64) -> Self {
        Self {
            integer_part,
            fractional,
            digits,
        }
    }

    /// Parse `<integer>.<fraction>` where the fraction has exactly `digits`
    /// digits. Returns `None` for any other shape.
    pub fn parse(token: &str, digits: usize) -> Option<Self> {
        let (int_text, frac_text) = token.split_once('.')?;
        let unsigned = int_text.strip_prefix(['-', '+']).unwrap_or(int_text);
        if unsigned.is_empty() || !unsigned.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        if frac_text.len() != digits || !frac_text.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        let integer_part = int_text.parse().ok()?;
        let fractional = if digits == 0 { 0 } else { frac_text.parse().ok()? };
        Some(Self::new(integer_part, fractional, i64::try_from(digits).ok()?))
    }

    /// Convert to an exact canonical fraction.
    pub fn to_fraction(&self) -> FractionResult<Fraction> {
        from_decimal_parts(self.integer_part, self.fractional, self.digits)
    }
}

impl fmt::Display for DecimalParts {
    /// Renders as `<integer>.<fraction>`, zero-padding the fraction to the
    /// digit count. Width and fill flags apply to the integer part.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let int_text = self.integer_part.to_string();
        match f.width() {
            Some(width) => write!(f, "{int_text:>width$}")?,
            None => f.write_str(&int_text)?,
        }
        if self.digits > 0 {
            write!(
                f,
                ".{:0width$}",
                self.fractional,
                width = self.digits as usize
            )?;
        }
        Ok(())
    }
}

/// Convert `integer_part ± fractional / 10^digits` to a canonical fraction.
///
/// The fractional part always adds to the magnitude, so `(-2, 5, 1)` is
/// `-2.5`, not `-1.5`.
pub fn from_decimal_parts(integer_part: i64, fractional: u64, digits: i64) -> FractionResult<Fraction> {
    if !(0..=MAX_DECIMAL_DIGITS).contains(&digits) {
        return Err(FractionError::InvalidDecimalLength(digits));
    }
    if digits == 0 {
        return Ok(Fraction::from_integer(integer_part));
    }

    let denominator = 10i64.pow(digits as u32);
    let fractional = i64::try_from(fractional).map_err(|_| FractionError::Overflow)?;
    let scaled = integer_part
        .checked_mul(denominator)
        .ok_or(FractionError::Overflow)?;
    let numerator = if integer_part >= 0 {
        scaled.checked_add(fractional)
    } else {
        scaled.checked_sub(fractional)
    }
    .ok_or(FractionError::Overflow)?;

    canonicalize(numerator, denominator)
}
