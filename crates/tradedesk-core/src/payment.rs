//! # Payment Derivation
//!
//! Computes what a partial trade of a priced package costs.
//!
//! ## Formula
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Package: 250 coins for 10.00                                          │
//! │  Traded:   25 coins                                                    │
//! │                                                                         │
//! │  percentage = traded × 100 / package_quantity     = 10%                │
//! │  payment    = round2(package_price × percentage / 100) = 1.00           │
//! │                                                                         │
//! │  Invalid package (quantity or price <= 0, NaN) → None                  │
//! │  The form leaves the payment field blank, no error is shown.           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The host form calls this again after every keystroke in any of the
//! three inputs (see [`crate::draft::TransactionDraft`]).

use crate::money::Money;

#[inline]
fn is_positive_number(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

/// Share of the package being traded, in percent.
///
/// `None` when the package quantity is not a positive number or the
/// traded quantity is not finite.
///
/// ## Example
/// ```rust
/// use tradedesk_core::payment::payment_percentage;
///
/// assert_eq!(payment_percentage(250.0, 25.0), Some(10.0));
/// assert_eq!(payment_percentage(0.0, 25.0), None);
/// ```
pub fn payment_percentage(package_quantity: f64, traded_quantity: f64) -> Option<f64> {
    if !is_positive_number(package_quantity) || !traded_quantity.is_finite() {
        return None;
    }

    Some(traded_quantity * 100.0 / package_quantity)
}

/// Derives the payment for `traded_quantity` units of a package holding
/// `package_quantity` units sold for `package_price`.
///
/// Rounded to whole cents, half away from zero. Returns `None` (the
/// "no amount" sentinel) when the package quantity or price is not a
/// positive number, or when the traded quantity is not finite.
///
/// ## Example
/// ```rust
/// use tradedesk_core::payment::derive_payment_amount;
///
/// let payment = derive_payment_amount(250.0, 10.00, 25.0).unwrap();
/// assert_eq!(payment.cents(), 100);
///
/// assert!(derive_payment_amount(0.0, 10.00, 25.0).is_none());
/// ```
pub fn derive_payment_amount(
    package_quantity: f64,
    package_price: f64,
    traded_quantity: f64,
) -> Option<Money> {
    if !is_positive_number(package_price) {
        return None;
    }

    let percentage = payment_percentage(package_quantity, traded_quantity)?;
    Money::from_decimal_rounded(package_price * percentage / 100.0)
}

// =============================================================================
// Unit Tests
// =============================================================================
