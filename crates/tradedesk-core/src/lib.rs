//! # tradedesk-core: Pure Business Logic for the Trading Console
//!
//! This crate holds every rule the trading console enforces, as pure
//! functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Trade Desk Architecture                          │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  Admin Console (SPA, external)                  │   │
//! │  │   Games ─ Items ─ Contacts ─ Funding Sources ─ Transactions     │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ shared types (ts-rs)                   │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ tradedesk-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌──────────────┐  ┌───────────┐  ┌───────────┐  ┌─────────┐  │   │
//! │  │   │ denomination │  │  payment  │  │   draft   │  │ filter  │  │   │
//! │  │   │  multiples   │  │  package  │  │  tx form  │  │  lists  │  │   │
//! │  │   │  min / max   │  │  ratio    │  │  submit   │  │ summary │  │   │
//! │  │   └──────────────┘  └───────────┘  └───────────┘  └─────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO NETWORK • PURE FUNCTIONS                          │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │           REST backend (external, receives NewTransaction)      │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`denomination`] - Validation and rounding of game currency amounts
//! - [`payment`] - Proportional payment derivation from a priced package
//! - [`money`] - Money type with integer arithmetic
//! - [`types`] - Domain entities (Game, Contact, Transaction, ...)
//! - [`draft`] - Transaction-entry form state
//! - [`filter`] - List filters and summaries
//! - [`validation`] - Field validators
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use tradedesk_core::denomination::{AmountValidation, DenominationRules};
//! use tradedesk_core::payment::derive_payment_amount;
//!
//! let rules = DenominationRules::new(25, 25.0, 1000.0).unwrap();
//! assert_eq!(rules.validate(250.0), AmountValidation::Valid);
//!
//! // 25 of a 250 coin package priced $10.00
//! let payment = derive_payment_amount(250.0, 10.00, 25.0).unwrap();
//! assert_eq!(payment.cents(), 100);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod denomination;
pub mod draft;
pub mod error;
pub mod filter;
pub mod money;
pub mod payment;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use denomination::{AmountValidation, AmountViolation, DenominationRules};
pub use draft::{NewTransaction, TransactionDraft};
pub use error::{CoreError, ValidationError};
pub use filter::{ContactFilter, TransactionFilter, TransactionSummary};
pub use money::Money;
pub use payment::derive_payment_amount;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Denomination of Tibia Coins, the one currency the console ships rules for.
pub const TIBIA_COIN_DENOMINATION: u32 = 25;

/// Smallest Tibia Coin amount the store sells.
pub const TIBIA_COIN_MIN_AMOUNT: f64 = 25.0;

/// Largest Tibia Coin amount accepted in a single transaction.
pub const TIBIA_COIN_MAX_AMOUNT: f64 = 100_000.0;

/// Scale of [`ExchangeRate::rate_micros`]: 1.0 is stored as 1_000_000.
pub const RATE_SCALE: i64 = 1_000_000;
