//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In floating point:                                                     │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    A medium pizza is 8000 cents, an ingredient is 1000 cents.          │
//! │    Every subtotal and total is exact integer arithmetic.               │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use forno_core::money::Money;
//!
//! // Create from cents (preferred)
//! let base = Money::from_cents(8000); // $80.00 medium base price
//!
//! // Arithmetic operations
//! let with_extras = base + Money::from_cents(2000); // two ingredients
//! let subtotal = with_extras * 2;                   // quantity 2
//! assert_eq!(subtotal.cents(), 20_000);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in the smallest currency unit (cents).
///
/// ## Design Decisions
/// - **i64 (signed)**: Arithmetic on differences never wraps into unsigned
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Derives**: Full serde support for JSON serialization
///
/// Every monetary value in the pipeline flows through this type: catalog
/// base prices, ingredient surcharges, line subtotals, and sale totals.
/// Raw `*_cents: i64` fields appear only on persisted row types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money(i64);

impl Money {
    /// Builds a value from a cent amount.
    ///
    /// ## Example
    /// ```rust
    /// use forno_core::money::Money;
    ///
    /// let price = Money::from_cents(4000); // $40.00
    /// assert_eq!(price.cents(), 4000);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// The raw cent amount.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Whole-dollar portion of the amount.
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Cent portion of the amount, 0-99 regardless of sign.
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// The zero amount.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// True for the zero amount.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// True for amounts strictly above zero.
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Scales a per-pizza amount by a line quantity.
    ///
    /// ## Example
    /// ```rust
    /// use forno_core::money::Money;
    ///
    /// let per_pizza = Money::from_cents(4000);
    /// let line = per_pizza.multiply_quantity(3);
    /// assert_eq!(line.cents(), 12_000);
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0 * qty)
    }

    /// Addition that returns `None` instead of wrapping when the sum
    /// leaves the i64 cent range. Pricing uses this so an absurd staged
    /// quantity surfaces as an error, never a wrong total.
    #[inline]
    pub const fn checked_add(self, other: Self) -> Option<Self> {
        match self.0.checked_add(other.0) {
            Some(cents) => Some(Money(cents)),
            None => None,
        }
    }

    /// Quantity scaling that returns `None` instead of wrapping.
    #[inline]
    pub const fn checked_mul(self, factor: i64) -> Option<Self> {
        match self.0.checked_mul(factor) {
            Some(cents) => Some(Money(cents)),
            None => None,
        }
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Renders as `$X.YY`, for logs and debugging. The UI layer owns
/// localized formatting.
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

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

/// Quantity scaling via the `*` operator.
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

/// Totals an iterator of line subtotals or sale amounts.
impl Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents_splits_major_minor() {
        let money = Money::from_cents(12_050);
        assert_eq!(money.cents(), 12_050);
        assert_eq!(money.dollars(), 120);
        assert_eq!(money.cents_part(), 50);
    }

    #[test]
    fn test_display_format() {
        assert_eq!(format!("{}", Money::from_cents(8000)), "$80.00");
        assert_eq!(format!("{}", Money::from_cents(12_005)), "$120.05");
        assert_eq!(format!("{}", Money::from_cents(-1000)), "-$10.00");
        assert_eq!(format!("{}", Money::from_cents(0)), "$0.00");
    }

    #[test]
    fn test_operator_arithmetic() {
        let base = Money::from_cents(8000);
        let surcharge = Money::from_cents(1000);

        assert_eq!((base + surcharge).cents(), 9000);
        assert_eq!((base - surcharge).cents(), 7000);
        let line: Money = (base + surcharge) * 2;
        assert_eq!(line.cents(), 18_000);
    }

    #[test]
    fn test_multiply_quantity() {
        let per_pizza = Money::from_cents(10_000);
        let line = per_pizza.multiply_quantity(2);
        assert_eq!(line.cents(), 20_000);
    }

    #[test]
    fn test_checked_arithmetic_reports_overflow() {
        let base = Money::from_cents(4000);
        assert_eq!(base.checked_mul(3), Some(Money::from_cents(12_000)));
        assert_eq!(base.checked_mul(i64::MAX), None);

        let near_max = Money::from_cents(i64::MAX - 1);
        assert_eq!(near_max.checked_add(Money::from_cents(1)).map(|m| m.cents()), Some(i64::MAX));
        assert_eq!(near_max.checked_add(Money::from_cents(2)), None);
    }

    #[test]
    fn test_sum() {
        let total: Money = [4000, 8000, 12_000]
            .iter()
            .map(|c| Money::from_cents(*c))
            .sum();
        assert_eq!(total.cents(), 24_000);

        let empty: Money = std::iter::empty().sum();
        assert!(empty.is_zero());
    }

    #[test]
    fn test_zero_and_sign_checks() {
        assert!(Money::zero().is_zero());
        assert!(!Money::zero().is_positive());

        let total = Money::from_cents(4000);
        assert!(!total.is_zero());
        assert!(total.is_positive());
    }
}
