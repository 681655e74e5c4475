//! # Money Module
//!
//! Provides the `Money` type for fiat amounts: package prices, derived
//! payments and funding-source balances.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  Package price typed by the operator:   10.00                          │
//! │  Share of the package being traded:     1/3                            │
//! │  In floating point: 3.3333333333333335 ❌                               │
//! │                                                                         │
//! │  OUR SOLUTION: round once at the edge, then integer cents               │
//! │    Money::from_decimal_rounded(3.3333333333333335) → 333 cents         │
//! │    every sum after that is exact                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use tradedesk_core::money::Money;
//!
//! let price = Money::from_cents(1099); // 10.99
//! let total = price + Money::from_cents(500);
//! assert_eq!(total.cents(), 1599);
//! assert_eq!(total.to_string(), "15.99");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};
use ts_rs::TS;

use crate::RATE_SCALE;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest currency unit (cents).
///
/// Currency-agnostic: the currency code travels next to the value
/// (`Transaction::currency_code`, `FundingSource::currency_code`).
///
/// ## Where Money is Used
/// ```text
/// package price ──► derive_payment_amount ──► TransactionDraft.payment
///                                                     │
///                                                     ▼
///                         NewTransaction.payment_cents ──► REST backend
///                                                     │
///                        ExchangeRate::convert ◄──────┘ (reports)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Rounds a decimal amount to whole cents, half away from zero.
    ///
    /// Returns `None` for non-finite input or values outside the `i64`
    /// cent range, so a `NaN` typed into a form never becomes money.
    ///
    /// ## Example
    /// ```rust
    /// use tradedesk_core::money::Money;
    ///
    /// assert_eq!(Money::from_decimal_rounded(10.006).map(|m| m.cents()), Some(1001));
    /// assert_eq!(Money::from_decimal_rounded(-2.5).map(|m| m.cents()), Some(-250));
    /// assert_eq!(Money::from_decimal_rounded(f64::NAN), None);
    /// ```
    pub fn from_decimal_rounded(amount: f64) -> Option<Self> {
        if !amount.is_finite() {
            return None;
        }

        let cents = (amount * 100.0).round();
        // i64::MAX as f64 is 2^63, which is already out of range
        if cents < i64::MIN as f64 || cents >= i64::MAX as f64 {
            return None;
        }

        Some(Money(cents as i64))
    }

    /// Returns the value in cents (smallest currency unit).
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit portion.
    #[inline]
    pub const fn major(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit portion (always 0-99).
    #[inline]
    pub const fn minor(&self) -> i64 {
        (self.0 % 100).abs()
    }

    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Addition that clamps at the `i64` cent range instead of overflowing.
    #[inline]
    pub const fn saturating_add(self, other: Money) -> Money {
        Money(self.0.saturating_add(other.0))
    }

    #[inline]
    pub const fn saturating_sub(self, other: Money) -> Money {
        Money(self.0.saturating_sub(other.0))
    }

    /// Multiplies by a rate scaled by [`RATE_SCALE`], rounding half up.
    ///
    /// ## Implementation
    /// Integer math: `(cents * rate_micros + 500_000) / 1_000_000`, in
    /// `i128`. Negative values round symmetrically. Returns `None` when the
    /// result does not fit in `i64` cents.
    ///
    /// ## Example
    /// ```rust
    /// use tradedesk_core::money::Money;
    ///
    /// // 10.00 USD at 5.25 BRL/USD
    /// let converted = Money::from_cents(1000).apply_rate_micros(5_250_000);
    /// assert_eq!(converted.map(|m| m.cents()), Some(5250));
    /// ```
    pub fn apply_rate_micros(&self, rate_micros: i64) -> Option<Money> {
        let scale = RATE_SCALE as i128;
        let product = self.0 as i128 * rate_micros as i128;
        let half = scale / 2;
        let rounded = if product >= 0 {
            (product + half) / scale
        } else {
            (product - half) / scale
        };
        i64::try_from(rounded).ok().map(Money::from_cents)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Plain decimal with two places; currency symbols are a UI concern.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}{}.{:02}", sign, self.major().abs(), self.minor())
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

impl Neg for Money {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Money(-self.0)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
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
        assert_eq!(money.major(), 10);
        assert_eq!(money.minor(), 99);
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::from_cents(1099).to_string(), "10.99");
        assert_eq!(Money::from_cents(500).to_string(), "5.00");
        assert_eq!(Money::from_cents(-550).to_string(), "-5.50");
        assert_eq!(Money::from_cents(-5).to_string(), "-0.05");
        assert_eq!(Money::zero().to_string(), "0.00");
    }

    #[test]
    fn test_from_decimal_rounded() {
        assert_eq!(Money::from_decimal_rounded(1.0), Some(Money::from_cents(100)));
        assert_eq!(Money::from_decimal_rounded(3.3333333333333335), Some(Money::from_cents(333)));
        assert_eq!(Money::from_decimal_rounded(0.666), Some(Money::from_cents(67)));
        assert_eq!(Money::from_decimal_rounded(f64::INFINITY), None);
        assert_eq!(Money::from_decimal_rounded(1e300), None);
        // 2^63 cents is one past i64::MAX
        assert_eq!(Money::from_decimal_rounded(9.223372036854776e16), None);
        assert!(Money::from_decimal_rounded(-9.223372036854776e16).is_some());
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert_eq!((a + b).cents(), 1500);
        assert_eq!((a - b).cents(), 500);
        assert_eq!((-a).cents(), -1000);

        let total: Money = vec![a, b, b].into_iter().sum();
        assert_eq!(total.cents(), 2000);
    }

    #[test]
    fn test_apply_rate_rounding() {
        // 0.01 at 0.5 → 0.005 → rounds up to 0.01
        assert_eq!(Money::from_cents(1).apply_rate_micros(500_000), Some(Money::from_cents(1)));
        // symmetric for negatives
        assert_eq!(Money::from_cents(-1).apply_rate_micros(500_000), Some(Money::from_cents(-1)));
        // 1.00 at 0.181818 → 0.181818 → 0.18
        assert_eq!(Money::from_cents(100).apply_rate_micros(181_818), Some(Money::from_cents(18)));
    }

    #[test]
    fn test_apply_rate_out_of_range() {
        assert_eq!(Money::from_cents(i64::MAX / 2).apply_rate_micros(4_000_000), None);
        assert_eq!(Money::from_cents(i64::MIN / 2).apply_rate_micros(4_000_000), None);
        assert_eq!(
            Money::from_cents(i64::MAX).apply_rate_micros(1_000_000),
            Some(Money::from_cents(i64::MAX))
        );
    }

    #[test]
    fn test_saturating_arithmetic() {
        let max = Money::from_cents(i64::MAX);
        assert_eq!(max.saturating_add(Money::from_cents(1)), max);
        assert_eq!(
            Money::from_cents(i64::MIN).saturating_sub(Money::from_cents(1)),
            Money::from_cents(i64::MIN)
        );
        assert_eq!(
            Money::from_cents(10).saturating_sub(Money::from_cents(4)),
            Money::from_cents(6)
        );
    }

    #[test]
    fn test_default_is_zero() {
        assert_eq!(Money::default(), Money::zero());
    }

    #[test]
    fn test_zero() {
        assert_eq!(Money::zero().cents(), 0);
        assert_eq!(Money::from_cents(-100).major(), -1);
    }
}
