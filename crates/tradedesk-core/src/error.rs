//! # Error Types
//!
//! Domain-specific error types for tradedesk-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  tradedesk-core errors (this file)                                     │
//! │  ├── CoreError        - Business rule failures                         │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  denomination.rs                                                       │
//! │  └── AmountViolation  - First broken currency rule (a value, not a     │
//! │                         panic; wrapped by CoreError::InvalidAmount)    │
//! │                                                                         │
//! │  console app                                                           │
//! │  └── ConsoleError     - Config + core errors, printed to the operator  │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ConsoleError → stderr / exit code │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (field, limits)
//! 3. Errors are enum variants, never String
//! 4. Each error variant maps to a user-facing message

use thiserror::Error;

use crate::denomination::AmountViolation;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The traded amount breaks the game's currency rules.
    ///
    /// ## User Workflow
    /// ```text
    /// Traded quantity: 230 Tibia Coins
    ///      │
    ///      ▼
    /// validate_transaction_amount(230, {25, 25, 100000})
    ///      │
    ///      ▼
    /// InvalidAmount(NotAMultiple { nearest_below: 225, nearest_above: 250 })
    ///      │
    ///      ▼
    /// UI shows: "Amount must be a multiple of the denomination (try 225 or 250)"
    /// ```
    #[error("Invalid amount: {0}")]
    InvalidAmount(#[from] AmountViolation),

    /// The payment could not be derived from the package inputs.
    #[error("Payment amount cannot be derived: package quantity and price must be positive")]
    MissingPaymentAmount,

    /// No currency rules are configured for the game.
    #[error("No currency rules configured for game: {0}")]
    UnknownGame(String),

    /// Payload could not be serialized for the backend.
    #[error("Serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when user input doesn't meet requirements.
/// Used for early validation before business logic runs.
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: f64, max: f64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Invalid format (e.g., invalid UUID, invalid email).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Duplicate value (e.g., two rule sets for one game).
    #[error("{field} '{value}' already exists")]
    Duplicate { field: String, value: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::UnknownGame("runescape".to_string());
        assert_eq!(
            err.to_string(),
            "No currency rules configured for game: runescape"
        );
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "contact".to_string(),
        };
        assert_eq!(err.to_string(), "contact is required");

        let err = ValidationError::OutOfRange {
            field: "min_amount".to_string(),
            min: 25.0,
            max: 1000.0,
        };
        assert_eq!(err.to_string(), "min_amount must be between 25 and 1000");
    }

    #[test]
    fn test_amount_violation_converts_to_core_error() {
        let core_err: CoreError = AmountViolation::NotPositive.into();
        assert!(matches!(
            core_err,
            CoreError::InvalidAmount(AmountViolation::NotPositive)
        ));
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required {
            field: "game".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
