//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  Adding a $0.10 seed packet three times with floats:                    │
//! │    0.1 + 0.1 + 0.1 = 0.30000000000000004  ❌ WRONG!                     │
//! │                                                                         │
//! │  The cart adds and subtracts line prices on every click, so the        │
//! │  error would pile up in the running total.                             │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    10 + 10 + 10 = 30 cents, exactly, forever                           │
//! │    Rounding happens ONLY when a percentage (tax, discount) is taken    │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use paradise_core::money::Money;
//!
//! // Create from cents (preferred)
//! let price = Money::from_cents(1599); // $15.99
//!
//! // Or parse a catalog price at the boundary
//! let parsed: Money = "15.99".parse().unwrap();
//! assert_eq!(parsed, price);
//!
//! let doubled = price * 2;                      // $31.98
//! let total = price + Money::from_cents(500);   // $20.99
//! assert_eq!(total.to_string(), "$20.99");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};
use std::str::FromStr;
use ts_rs::TS;

use crate::error::ValidationError;
use crate::types::Rate;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in the smallest currency unit (cents).
///
/// ## Design Decisions
/// - **i64 (signed)**: Deltas such as "remove this line" are negative
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Derives**: Full serde support; serialized as a plain cent count
///
/// ## Where Money is Used
/// ```text
/// Product.price ──► CartLine.unit_price ──► CartLine.line_total
///                                                  │
///                        CartState.total_price ◄───┘
///                                │
///                                ▼
///            PricingEngine: discount, shipping, tax, grand total
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use paradise_core::money::Money;
    ///
    /// let price = Money::from_cents(1099); // Represents $10.99
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Returns the value in cents (smallest currency unit).
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (dollars) portion.
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit (cents) portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is positive (greater than zero).
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Clamps negative values to zero.
    #[inline]
    pub const fn clamp_non_negative(&self) -> Self {
        if self.0 < 0 {
            Money(0)
        } else {
            *self
        }
    }

    /// Takes a percentage of this amount, rounding half-up to the cent.
    ///
    /// ## Round Half-Up
    /// ```text
    /// ┌─────────────────────────────────────────────────────────────────────┐
    /// │  $0.825 → $0.83      $0.824 → $0.82      $3.60 → $3.60             │
    /// │                                                                     │
    /// │  Integer form:  (cents × bps + 5000) / 10000                        │
    /// │  The +5000 is half of the 10000 divisor, i.e. "add half, truncate"  │
    /// │  Negative amounts round symmetrically (away from zero on a tie).   │
    /// └─────────────────────────────────────────────────────────────────────┘
    /// ```
    ///
    /// ## Example
    /// ```rust
    /// use paradise_core::money::Money;
    /// use paradise_core::types::Rate;
    ///
    /// let subtotal = Money::from_cents(3600); // $36.00
    /// let tax = subtotal.percentage(Rate::from_bps(1000)); // 10%
    /// assert_eq!(tax.cents(), 360);
    ///
    /// let odd = Money::from_cents(1000).percentage(Rate::from_bps(825));
    /// assert_eq!(odd.cents(), 83); // $0.825 → $0.83
    /// ```
    pub fn percentage(&self, rate: Rate) -> Money {
        // i128 keeps large amounts from overflowing before the division
        let scaled = (self.0 as i128).abs() * rate.bps() as i128;
        let rounded = ((scaled + 5000) / 10000) as i64;
        if self.0 < 0 {
            Money(-rounded)
        } else {
            Money(rounded)
        }
    }

    /// Multiplies money by a quantity, saturating at the `i64` bounds.
    ///
    /// The cart never gets near them: unit prices and line quantities are
    /// capped by [`MAX_UNIT_PRICE_CENTS`](crate::MAX_UNIT_PRICE_CENTS) and
    /// [`MAX_LINE_QUANTITY`](crate::MAX_LINE_QUANTITY).
    ///
    /// ## Example
    /// ```rust
    /// use paradise_core::money::Money;
    ///
    /// let unit_price = Money::from_cents(1250); // $12.50
    /// let line_total = unit_price.multiply_quantity(3);
    /// assert_eq!(line_total.cents(), 3750); // $37.50
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0.saturating_mul(qty))
    }

    /// Formats the amount as a bare decimal string ("12.50", "-3.05").
    ///
    /// Used at display boundaries that add their own currency symbol.
    pub fn to_decimal_string(&self) -> String {
        let sign = if self.0 < 0 { "-" } else { "" };
        format!("{}{}.{:02}", sign, self.dollars().abs(), self.cents_part())
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows money as "$12.50".
///
/// ## Note
/// Front-ends that need a different symbol should use
/// [`Money::to_decimal_string`] and prepend their own.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}${}.{:02}",
            sign,
            self.dollars().abs(),
            self.cents_part()
        )
    }
}

/// Parses a decimal amount such as `"24.99"`, `"50"` or `"-0.5"`.
///
/// At most two fractional digits are accepted; anything finer than a cent is
/// rejected rather than silently rounded.
impl FromStr for Money {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: &str| ValidationError::InvalidFormat {
            field: "amount".to_string(),
            reason: reason.to_string(),
        };

        let s = s.trim();
        let (negative, digits) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s),
        };

        let (whole, frac) = match digits.split_once('.') {
            Some((whole, frac)) => (whole, frac),
            None => (digits, ""),
        };

        if whole.is_empty() && frac.is_empty() {
            return Err(invalid("expected a decimal amount"));
        }
        if !whole.chars().all(|c| c.is_ascii_digit()) || !frac.chars().all(|c| c.is_ascii_digit()) {
            return Err(invalid("expected digits with an optional decimal point"));
        }
        if frac.len() > 2 {
            return Err(invalid("at most two decimal places are allowed"));
        }

        let whole: i64 = if whole.is_empty() {
            0
        } else {
            whole.parse().map_err(|_| invalid("amount is too large"))?
        };
        let minor: i64 = match frac.len() {
            0 => 0,
            1 => frac.parse::<i64>().map_err(|_| invalid("bad fraction"))? * 10,
            _ => frac.parse().map_err(|_| invalid("bad fraction"))?,
        };

        let cents = whole
            .checked_mul(100)
            .and_then(|c| c.checked_add(minor))
            .ok_or_else(|| invalid("amount is too large"))?;

        Ok(Money(if negative { -cents } else { cents }))
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

/// Addition of two Money values.
impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

/// Addition assignment (+=).
impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

/// Subtraction of two Money values.
impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

/// Subtraction assignment (-=).
impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

/// Multiplication by i64 (for quantity calculations).
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let money = Money::from_cents(1099);
        assert_eq!(money.cents(), 1099);
        assert_eq!(money.dollars(), 10);
        assert_eq!(money.cents_part(), 99);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(1099)), "$10.99");
        assert_eq!(format!("{}", Money::from_cents(500)), "$5.00");
        assert_eq!(format!("{}", Money::from_cents(-550)), "-$5.50");
        assert_eq!(format!("{}", Money::from_cents(0)), "$0.00");
        assert_eq!(Money::from_cents(-5).to_decimal_string(), "-0.05");
    }

    #[test]
    fn test_parse() {
        assert_eq!("24.99".parse::<Money>().unwrap().cents(), 2499);
        assert_eq!("50".parse::<Money>().unwrap().cents(), 5000);
        assert_eq!("9.9".parse::<Money>().unwrap().cents(), 990);
        assert_eq!(".5".parse::<Money>().unwrap().cents(), 50);
        assert_eq!("-0.05".parse::<Money>().unwrap().cents(), -5);
        assert_eq!(" 12.00 ".parse::<Money>().unwrap().cents(), 1200);

        assert!("".parse::<Money>().is_err());
        assert!(".".parse::<Money>().is_err());
        assert!("1.234".parse::<Money>().is_err());
        assert!("12a".parse::<Money>().is_err());
        assert!("1.2.3".parse::<Money>().is_err());
        assert!("99999999999999999999".parse::<Money>().is_err());
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert_eq!((a + b).cents(), 1500);
        assert_eq!((a - b).cents(), 500);
        assert_eq!((a * 3).cents(), 3000);

        let total: Money = [a, b, b].iter().sum();
        assert_eq!(total.cents(), 2000);
    }

    /// Repeated small additions stay exact.
    #[test]
    fn test_no_drift_on_repeated_addition() {
        let mut total = Money::zero();
        for _ in 0..1000 {
            total += Money::from_cents(10);
        }
        assert_eq!(total.cents(), 10_000);
        for _ in 0..1000 {
            total -= Money::from_cents(10);
        }
        assert!(total.is_zero());
    }

    #[test]
    fn test_percentage_basic() {
        let amount = Money::from_cents(6000);
        assert_eq!(amount.percentage(Rate::from_bps(1000)).cents(), 600);
        assert_eq!(amount.percentage(Rate::zero()).cents(), 0);
    }

    #[test]
    fn test_percentage_rounds_half_up() {
        // $10.00 at 8.25% = $0.825 → $0.83
        assert_eq!(Money::from_cents(1000).percentage(Rate::from_bps(825)).cents(), 83);
        // $0.05 at 10% = $0.005 → $0.01
        assert_eq!(Money::from_cents(5).percentage(Rate::from_bps(1000)).cents(), 1);
        // $0.04 at 10% = $0.004 → $0.00
        assert_eq!(Money::from_cents(4).percentage(Rate::from_bps(1000)).cents(), 0);
        // Symmetric for negative amounts
        assert_eq!(Money::from_cents(-5).percentage(Rate::from_bps(1000)).cents(), -1);
    }

    #[test]
    fn test_zero_and_checks() {
        let zero = Money::zero();
        assert!(zero.is_zero());
        assert!(!zero.is_positive());
        assert!(!zero.is_negative());

        let negative = Money::from_cents(-100);
        assert!(negative.is_negative());
        assert_eq!(negative.clamp_non_negative(), Money::zero());
        assert_eq!(Money::from_cents(100).clamp_non_negative().cents(), 100);
    }

    #[test]
    fn test_multiply_quantity() {
        let unit_price = Money::from_cents(299);
        assert_eq!(unit_price.multiply_quantity(3).cents(), 897);
        assert_eq!(unit_price.multiply_quantity(-2).cents(), -598);
    }

    #[test]
    fn test_multiply_quantity_does_not_overflow() {
        let huge = Money::from_cents(i64::MAX / 2);
        assert_eq!(huge.multiply_quantity(3).cents(), i64::MAX);
        assert_eq!(huge.multiply_quantity(-3).cents(), i64::MIN);
    }
}
