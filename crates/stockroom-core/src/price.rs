//! # Price Module
//!
//! Provides the `Price` type for product prices and price filter thresholds.
//!
//! ## Why Fixed-Point?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  Prices are entered with up to 4 significant decimals and compared    │
//! │  against filter thresholds:                                             │
//! │    price >= 25.0001 ?                                                   │
//! │                                                                         │
//! │  With f64 both sides are approximations, so two inputs that print     │
//! │  the same can compare unequal.                                          │
//! │                                                                         │
//! │  OUR SOLUTION: Integer ten-thousandths                                  │
//! │    "19.99"   → 199_900                                                  │
//! │    "25.0001" → 250_001                                                  │
//! │  Products and thresholds go through the same parser, so the           │
//! │  comparison is exact.                                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use stockroom_core::price::Price;
//!
//! let price = Price::parse("19.99").unwrap();
//! assert_eq!(price.units(), 199_900);
//! assert_eq!(price.to_string(), "$19.99");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::ValidationError;

/// Number of fractional units in one whole currency unit (4 decimal places).
pub const UNITS_PER_WHOLE: u64 = 10_000;

/// Decimal places kept by [`Price::parse`].
pub const PRICE_DECIMALS: usize = 4;

// =============================================================================
// Price Type
// =============================================================================

/// A non-negative price in ten-thousandths of the currency unit.
///
/// ## Design Decisions
/// - **u64 (unsigned)**: prices are never negative, the parser rejects them
/// - **Single field tuple struct**: zero-cost abstraction over u64
/// - **Ord**: range filters compare prices directly
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Price(u64);

impl Price {
    /// Creates a price from ten-thousandths.
    ///
    /// ## Example
    /// ```rust
    /// use stockroom_core::price::Price;
    ///
    /// let price = Price::from_units(250_000); // 25.0000
    /// assert_eq!(price.to_string(), "$25.00");
    /// ```
    #[inline]
    pub const fn from_units(units: u64) -> Self {
        Price(units)
    }

    /// Creates a price from whole units and ten-thousandths.
    #[inline]
    pub const fn from_parts(whole: u64, fraction: u64) -> Self {
        Price(whole * UNITS_PER_WHOLE + fraction)
    }

    /// Returns the raw value in ten-thousandths.
    #[inline]
    pub const fn units(&self) -> u64 {
        self.0
    }

    /// Zero price.
    #[inline]
    pub const fn zero() -> Self {
        Price(0)
    }

    /// Nearest binary float to the stored decimal.
    ///
    /// Both operands are exact in `f64` below 2^53 units, so the quotient
    /// is the same float a decimal parser would produce for the input.
    #[inline]
    pub fn as_f64(&self) -> f64 {
        self.0 as f64 / UNITS_PER_WHOLE as f64
    }

    /// Parses a decimal string into a price, keeping 4 decimal places.
    ///
    /// ## Rules
    /// - Surrounding whitespace is ignored
    /// - Accepted shapes: `12`, `12.5`, `.5`, `12.`, with an optional sign
    /// - Negative values are rejected (`-0` is zero and accepted)
    /// - Extra decimals are rounded half-to-even on the 4th place
    ///
    /// ## Example
    /// ```rust
    /// use stockroom_core::price::Price;
    /// use stockroom_core::ValidationError;
    ///
    /// assert_eq!(Price::parse("1.23456").unwrap().units(), 12_346);
    /// assert_eq!(Price::parse("-3"), Err(ValidationError::Negative));
    /// assert_eq!(Price::parse("abc"), Err(ValidationError::NotANumber));
    /// ```
    pub fn parse(input: &str) -> Result<Price, ValidationError> {
        let input = input.trim();
        if input.is_empty() {
            return Err(ValidationError::Empty);
        }

        let (negative, body) = match input.as_bytes()[0] {
            b'-' => (true, &input[1..]),
            b'+' => (false, &input[1..]),
            _ => (false, input),
        };

        let (whole_str, frac_str) = match body.split_once('.') {
            Some((w, f)) => (w, f),
            None => (body, ""),
        };

        let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
        if (whole_str.is_empty() && frac_str.is_empty())
            || !all_digits(whole_str)
            || !all_digits(frac_str)
        {
            return Err(ValidationError::NotANumber);
        }

        let whole: u64 = if whole_str.is_empty() {
            0
        } else {
            whole_str.parse().map_err(|_| ValidationError::TooLarge)?
        };

        let frac_bytes = frac_str.as_bytes();
        let mut fraction: u64 = 0;
        for i in 0..PRICE_DECIMALS {
            let digit = frac_bytes.get(i).map_or(0, |b| u64::from(b - b'0'));
            fraction = fraction * 10 + digit;
        }

        // Half-to-even on everything past the 4th decimal
        if frac_bytes.len() > PRICE_DECIMALS {
            let first_dropped = frac_bytes[PRICE_DECIMALS] - b'0';
            let rest_nonzero = frac_bytes[PRICE_DECIMALS + 1..].iter().any(|&b| b != b'0');
            let round_up = first_dropped > 5
                || (first_dropped == 5 && (rest_nonzero || fraction % 2 == 1));
            if round_up {
                fraction += 1;
            }
        }

        let units = whole
            .checked_mul(UNITS_PER_WHOLE)
            .and_then(|w| w.checked_add(fraction))
            .ok_or(ValidationError::TooLarge)?;

        if negative && units != 0 {
            return Err(ValidationError::Negative);
        }

        Ok(Price(units))
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display shows the price to two decimals: `$19.99`.
///
/// Rounding is done on the float, so a stored `2.675` (binary
/// 2.67499999...) shows as `$2.67`, the same as the menu has always printed.
impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${:.2}", self.as_f64())
    }
}

impl Default for Price {
    fn default() -> Self {
        Price::zero()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_parts() {
        assert_eq!(Price::from_parts(19, 9900).units(), 199_900);
        assert_eq!(Price::from_parts(0, 1).units(), 1);
    }

    #[test]
    fn test_parse_shapes() {
        assert_eq!(Price::parse("25").unwrap(), Price::from_parts(25, 0));
        assert_eq!(Price::parse("25.").unwrap(), Price::from_parts(25, 0));
        assert_eq!(Price::parse(".5").unwrap(), Price::from_parts(0, 5000));
        assert_eq!(Price::parse("  +7.25 ").unwrap(), Price::from_parts(7, 2500));
        assert_eq!(Price::parse("-0").unwrap(), Price::zero());
    }

    #[test]
    fn test_parse_rounds_to_four_decimals() {
        assert_eq!(Price::parse("1.00004").unwrap().units(), 10_000);
        assert_eq!(Price::parse("1.00006").unwrap().units(), 10_001);
        // Exact ties go to the even neighbour
        assert_eq!(Price::parse("1.00005").unwrap().units(), 10_000);
        assert_eq!(Price::parse("1.00015").unwrap().units(), 10_002);
        assert_eq!(Price::parse("1.000051").unwrap().units(), 10_001);
        // Carry into the whole part
        assert_eq!(Price::parse("0.99999").unwrap().units(), 10_000);
    }

    #[test]
    fn test_parse_rejects() {
        assert_eq!(Price::parse(""), Err(ValidationError::Empty));
        assert_eq!(Price::parse("   "), Err(ValidationError::Empty));
        assert_eq!(Price::parse("."), Err(ValidationError::NotANumber));
        assert_eq!(Price::parse("12a"), Err(ValidationError::NotANumber));
        assert_eq!(Price::parse("1.2.3"), Err(ValidationError::NotANumber));
        assert_eq!(Price::parse("1e3"), Err(ValidationError::NotANumber));
        assert_eq!(Price::parse("-0.01"), Err(ValidationError::Negative));
        assert_eq!(
            Price::parse("99999999999999999999"),
            Err(ValidationError::TooLarge)
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(Price::parse("19.99").unwrap().to_string(), "$19.99");
        assert_eq!(Price::parse("25").unwrap().to_string(), "$25.00");
        assert_eq!(Price::parse("0").unwrap().to_string(), "$0.00");
        assert_eq!(Price::parse("0.5").unwrap().to_string(), "$0.50");
    }

    #[test]
    fn test_display_rounds_like_a_float() {
        // Binary 2.675 sits just under the tie
        assert_eq!(Price::parse("2.675").unwrap().to_string(), "$2.67");
        assert_eq!(Price::parse("2.6751").unwrap().to_string(), "$2.68");
        assert_eq!(Price::parse("1.005").unwrap().to_string(), "$1.00");
        assert_eq!(Price::parse("2.675").unwrap().as_f64(), 2.675);
    }

    #[test]
    fn test_ordering_is_exact() {
        let a = Price::parse("25.0001").unwrap();
        let b = Price::parse("25.00009").unwrap();
        assert_eq!(a, b);
        assert!(Price::parse("29.99").unwrap() >= Price::parse("25").unwrap());
    }
}
