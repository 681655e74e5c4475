//! # Denomination Module
//!
//! Validation and rounding of in-game currency amounts that may only be
//! traded in fixed multiples.
//!
//! ## Why Denominations?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  TIBIA COINS                                                            │
//! │                                                                         │
//! │  Coins are bought and transferred in packs of 25:                      │
//! │    25, 50, 75, ... ✅                                                   │
//! │    30, 230, 1010  ❌  → suggest the multiples around them               │
//! │                                                                         │
//! │  Rule set per currency (injected, never hard-coded in the check):      │
//! │    { denomination: 25, min_amount: 25, max_amount: 100000 }            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Check Order
//! ```text
//! amount ─► finite? ─► > 0? ─► >= min? ─► <= max? ─► multiple? ─► Valid
//!              │         │        │          │           │
//!              ▼         ▼        ▼          ▼           ▼
//!         NotANumber NotPositive BelowMin AboveMax  NotAMultiple
//! ```
//! Only the first violated rule is reported.
//!
//! ## Floating Point
//! The multiple check is an exact `%` on `f64`. Amounts such as
//! `75.00000001` are reported as not a multiple; no tolerance is applied.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

use crate::error::ValidationError;

// =============================================================================
// Rule Set
// =============================================================================

/// Currency rule set for one game's currency.
///
/// ## Invariants
/// - `denomination > 0`
/// - `0 <= min_amount <= max_amount`, both finite
#[derive(Debug, Clone, Copy, PartialEq, Serialize, TS)]
#[ts(export)]
pub struct DenominationRules {
    denomination: u32,
    min_amount: f64,
    max_amount: f64,
}

impl DenominationRules {
    /// Creates a rule set, rejecting configurations no amount could satisfy.
    ///
    /// ## Example
    /// ```rust
    /// use tradedesk_core::denomination::DenominationRules;
    ///
    /// assert!(DenominationRules::new(25, 25.0, 1000.0).is_ok());
    /// assert!(DenominationRules::new(0, 25.0, 1000.0).is_err());
    /// assert!(DenominationRules::new(25, 2000.0, 1000.0).is_err());
    /// ```
    pub fn new(denomination: u32, min_amount: f64, max_amount: f64) -> Result<Self, ValidationError> {
        if denomination == 0 {
            return Err(ValidationError::MustBePositive {
                field: "denomination".to_string(),
            });
        }

        for (field, value) in [("min_amount", min_amount), ("max_amount", max_amount)] {
            if !value.is_finite() {
                return Err(ValidationError::InvalidFormat {
                    field: field.to_string(),
                    reason: "must be a finite number".to_string(),
                });
            }
        }

        if min_amount < 0.0 || min_amount > max_amount {
            return Err(ValidationError::OutOfRange {
                field: "min_amount".to_string(),
                min: 0.0,
                max: max_amount,
            });
        }

        Ok(DenominationRules {
            denomination,
            min_amount,
            max_amount,
        })
    }

    /// Rule set for Tibia Coins: multiples of 25, from 25 up to 100,000.
    pub const fn tibia_coins() -> Self {
        DenominationRules {
            denomination: crate::TIBIA_COIN_DENOMINATION,
            min_amount: crate::TIBIA_COIN_MIN_AMOUNT,
            max_amount: crate::TIBIA_COIN_MAX_AMOUNT,
        }
    }

    #[inline]
    pub const fn denomination(&self) -> u32 {
        self.denomination
    }

    #[inline]
    pub const fn min_amount(&self) -> f64 {
        self.min_amount
    }

    #[inline]
    pub const fn max_amount(&self) -> f64 {
        self.max_amount
    }

    /// Validates an amount against this rule set.
    ///
    /// Same as [`validate_transaction_amount`].
    #[inline]
    pub fn validate(&self, amount: f64) -> AmountValidation {
        validate_transaction_amount(amount, self)
    }

    /// Valid amounts closest to `amount`, in ascending order.
    ///
    /// Unlike the `NotAMultiple` neighbours, every suggestion also lies
    /// within `[min_amount, max_amount]`. Amounts below the minimum suggest
    /// the smallest valid amount; amounts above the maximum suggest the
    /// largest one.
    ///
    /// ## Example
    /// ```rust
    /// use tradedesk_core::denomination::DenominationRules;
    ///
    /// let rules = DenominationRules::new(25, 25.0, 1000.0).unwrap();
    /// assert_eq!(rules.suggestions(230.0), vec![225.0, 250.0]);
    /// assert_eq!(rules.suggestions(10.0), vec![25.0]);
    /// assert_eq!(rules.suggestions(2000.0), vec![1000.0]);
    /// ```
    pub fn suggestions(&self, amount: f64) -> Vec<f64> {
        if !amount.is_finite() {
            return Vec::new();
        }

        let mut candidates = if amount < self.min_amount {
            vec![next_valid_amount(self.min_amount, self.denomination)]
        } else if amount > self.max_amount {
            vec![previous_valid_amount(self.max_amount, self.denomination)]
        } else {
            vec![
                previous_valid_amount(amount, self.denomination),
                next_valid_amount(amount, self.denomination),
            ]
        };

        candidates.dedup();
        candidates.retain(|candidate| self.validate(*candidate).is_valid());
        candidates
    }
}

impl Default for DenominationRules {
    fn default() -> Self {
        DenominationRules::tibia_coins()
    }
}

// =============================================================================
// Validation Outcome
// =============================================================================

/// The first currency rule an amount breaks.
///
/// Implements `Error` so the caller can show it directly to the operator.
#[derive(Debug, Clone, Copy, PartialEq, Error, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum AmountViolation {
    /// Input was not a finite number (empty field, garbage, NaN, infinity).
    #[error("Amount must be a number")]
    NotANumber,

    /// Zero or negative amount.
    #[error("Amount must be greater than zero")]
    NotPositive,

    #[error("Amount must be at least {min_amount}")]
    BelowMinimum { min_amount: f64 },

    #[error("Amount must be at most {max_amount}")]
    AboveMaximum { max_amount: f64 },

    /// Carries the multiples immediately around the rejected amount.
    #[error("Amount must be a multiple of the denomination (try {nearest_below} or {nearest_above})")]
    NotAMultiple { nearest_below: f64, nearest_above: f64 },
}

/// Result of [`validate_transaction_amount`].
///
/// ## Serialization
/// ```json
/// { "status": "valid" }
/// { "status": "invalid", "violation": { "reason": "below_minimum", "min_amount": 25.0 } }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(tag = "status", content = "violation", rename_all = "snake_case")]
pub enum AmountValidation {
    Valid,
    Invalid(AmountViolation),
}

impl AmountValidation {
    #[inline]
    pub fn is_valid(&self) -> bool {
        matches!(self, AmountValidation::Valid)
    }

    /// Returns the violation, if any.
    #[inline]
    pub fn violation(&self) -> Option<AmountViolation> {
        match self {
            AmountValidation::Valid => None,
            AmountValidation::Invalid(violation) => Some(*violation),
        }
    }

    /// Converts into a `Result` for `?`-style callers.
    pub fn into_result(self) -> Result<(), AmountViolation> {
        match self {
            AmountValidation::Valid => Ok(()),
            AmountValidation::Invalid(violation) => Err(violation),
        }
    }
}

// =============================================================================
// Pure Functions
// =============================================================================

/// Checks whether `amount` divides evenly by `denomination`.
///
/// Exact floating-point modulo. Non-finite amounts are never multiples.
///
/// ## Example
/// ```rust
/// use tradedesk_core::denomination::is_multiple_of_denomination;
///
/// assert!(is_multiple_of_denomination(250.0, 25));
/// assert!(!is_multiple_of_denomination(230.0, 25));
/// ```
#[inline]
pub fn is_multiple_of_denomination(amount: f64, denomination: u32) -> bool {
    amount % f64::from(denomination) == 0.0
}

/// Validates a transaction amount against a currency rule set.
///
/// ## User Workflow
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  New Transaction: Tibia Coins                                           │
/// │                                                                         │
/// │  Operator types traded quantity: 230                                   │
/// │       │                                                                 │
/// │       ▼                                                                 │
/// │  validate_transaction_amount(230, rules) ← THIS FUNCTION               │
/// │       │                                                                 │
/// │       ├── not finite?   → NotANumber                                   │
/// │       ├── <= 0?         → NotPositive                                  │
/// │       ├── < min?        → BelowMinimum { min_amount }                  │
/// │       ├── > max?        → AboveMaximum { max_amount }                  │
/// │       ├── % 25 != 0?    → NotAMultiple { 225, 250 }                    │
/// │       │                                                                 │
/// │       └── Valid → submit enabled                                       │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn validate_transaction_amount(amount: f64, rules: &DenominationRules) -> AmountValidation {
    if !amount.is_finite() {
        return AmountValidation::Invalid(AmountViolation::NotANumber);
    }

    if amount <= 0.0 {
        return AmountValidation::Invalid(AmountViolation::NotPositive);
    }

    if amount < rules.min_amount {
        return AmountValidation::Invalid(AmountViolation::BelowMinimum {
            min_amount: rules.min_amount,
        });
    }

    if amount > rules.max_amount {
        return AmountValidation::Invalid(AmountViolation::AboveMaximum {
            max_amount: rules.max_amount,
        });
    }

    if !is_multiple_of_denomination(amount, rules.denomination) {
        return AmountValidation::Invalid(AmountViolation::NotAMultiple {
            nearest_below: previous_valid_amount(amount, rules.denomination),
            nearest_above: next_valid_amount(amount, rules.denomination),
        });
    }

    AmountValidation::Valid
}

/// Smallest multiple of `denomination` that is `>= amount`.
///
/// Caller must pass a finite amount.
#[inline]
pub fn next_valid_amount(amount: f64, denomination: u32) -> f64 {
    let denomination = f64::from(denomination);
    (amount / denomination).ceil() * denomination
}

/// Largest multiple of `denomination` that is `<= amount`.
///
/// Caller must pass a finite amount.
#[inline]
pub fn previous_valid_amount(amount: f64, denomination: u32) -> f64 {
    let denomination = f64::from(denomination);
    (amount / denomination).floor() * denomination
}

// =============================================================================
// Unit Tests
// =============================================================================
