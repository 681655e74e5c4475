//! # Domain Types
//!
//! Entities the console exchanges with the REST backend.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │      Game       │   │      Item       │   │   Transaction   │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (UUID)      │◄──│  game_id (FK)   │◄──│  item_id (FK)   │       │
//! │  │  slug           │   │  kind           │   │  kind / status  │       │
//! │  │  currency_name  │   │  unit_price     │   │  quantity       │       │
//! │  └─────────────────┘   └─────────────────┘   │  payment_cents  │       │
//! │                                               └───────┬─────────┘       │
//! │  ┌─────────────────┐   ┌─────────────────┐           │                 │
//! │  │    Contact      │◄──┤  FundingSource  │◄──────────┘                 │
//! │  │  name / email   │   │  details: enum  │                              │
//! │  └─────────────────┘   │  BankAccount    │   ┌─────────────────┐       │
//! │                        │  Wallet         │   │  ExchangeRate   │       │
//! │  ┌─────────────────┐   │  Cash           │   │  base → quote   │       │
//! │  │      User       │   └─────────────────┘   │  rate_micros    │       │
//! │  │  role           │                         └─────────────────┘       │
//! │  └─────────────────┘                                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! IDs are UUID strings assigned by the backend.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Game
// =============================================================================

/// A game whose currency or items the desk trades.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Game {
    pub id: String,

    /// Display name ("Tibia").
    pub name: String,

    /// Stable lookup key used by configuration ("tibia").
    pub slug: String,

    /// Name of the in-game currency ("Tibia Coins").
    pub currency_name: String,

    pub is_active: bool,

    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,
}

// =============================================================================
// Item
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum ItemKind {
    /// In-game currency sold in packages.
    Currency,
    Equipment,
    Account,
    Other,
}

/// Something tradeable within a game.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Item {
    pub id: String,
    pub game_id: String,
    pub name: String,
    pub kind: ItemKind,
    /// Reference price per unit in cents.
    pub unit_price_cents: Option<i64>,
    pub is_active: bool,
}

impl Item {
    #[inline]
    pub fn unit_price(&self) -> Option<Money> {
        self.unit_price_cents.map(Money::from_cents)
    }
}

// =============================================================================
// User
// =============================================================================

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    Admin,
    /// Records transactions.
    Operator,
    /// Read-only access.
    #[default]
    Viewer,
}

impl UserRole {
    /// Returns true if the role may create or edit transactions.
    pub fn can_write(&self) -> bool {
        matches!(self, UserRole::Admin | UserRole::Operator)
    }
}

/// A console user (authentication itself is handled by the backend).
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    pub is_active: bool,
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,
}

// =============================================================================
// Contact
// =============================================================================

/// A counterparty the desk buys from or sells to.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Contact {
    pub id: String,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub notes: Option<String>,
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,
}

// =============================================================================
// Funding Source
// =============================================================================

/// Type-specific details of a funding source.
///
/// ## Serialization
/// ```json
/// { "type": "bank_account", "bank_name": "Itaú", "account_holder": "Desk Ltd", "account_last4": "1234" }
/// { "type": "wallet", "provider": "PayPal", "address": "desk@example.com" }
/// { "type": "cash", "location": "Office safe" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FundingSourceDetails {
    BankAccount {
        bank_name: String,
        account_holder: String,
        /// Only the last four digits are ever stored.
        account_last4: String,
    },
    Wallet {
        provider: String,
        address: String,
    },
    Cash {
        location: String,
    },
}

impl FundingSourceDetails {
    /// Short label for lists ("Bank account", "Wallet", "Cash").
    pub fn label(&self) -> &'static str {
        match self {
            FundingSourceDetails::BankAccount { .. } => "Bank account",
            FundingSourceDetails::Wallet { .. } => "Wallet",
            FundingSourceDetails::Cash { .. } => "Cash",
        }
    }
}

/// A bank account, wallet or cash pool backing transactions.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FundingSource {
    pub id: String,
    pub name: String,
    /// ISO 4217 code of the money held.
    pub currency_code: String,
    pub details: FundingSourceDetails,
    pub is_active: bool,
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,
}

// =============================================================================
// Transaction
// =============================================================================

/// Direction of a trade, seen from the desk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum TransactionKind {
    /// Desk acquires goods and pays the contact.
    Buy,
    /// Desk delivers goods and receives payment.
    Sell,
}

impl std::str::FromStr for TransactionKind {
    type Err = crate::error::ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "buy" | "purchase" => Ok(TransactionKind::Buy),
            "sell" | "sale" => Ok(TransactionKind::Sell),
            _ => Err(crate::error::ValidationError::InvalidFormat {
                field: "kind".to_string(),
                reason: "must be buy or sell".to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum TransactionStatus {
    /// Recorded, goods or money not yet delivered.
    #[default]
    Pending,
    Completed,
    Cancelled,
}

/// A recorded trade.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Transaction {
    pub id: String,
    pub kind: TransactionKind,
    pub status: TransactionStatus,
    pub game_id: String,
    pub item_id: Option<String>,
    pub contact_id: String,
    pub funding_source_id: String,
    /// Units of the game currency or item traded.
    pub quantity: f64,
    /// Payment in cents, in `currency_code`.
    pub payment_cents: i64,
    pub currency_code: String,
    pub notes: Option<String>,
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,
}

impl Transaction {
    #[inline]
    pub fn payment(&self) -> Money {
        Money::from_cents(self.payment_cents)
    }
}

// =============================================================================
// Exchange Rate
// =============================================================================

/// Conversion rate between two fiat currencies.
///
/// ## Why Micros?
/// `rate_micros` is the rate × 1,000,000 (5.25 → 5_250_000), so
/// conversion stays in integer math like the rest of [`Money`].
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ExchangeRate {
    pub id: String,
    pub base_currency: String,
    pub quote_currency: String,
    pub rate_micros: i64,
    #[ts(as = "String")]
    pub updated_at: DateTime<Utc>,
}

impl ExchangeRate {
    /// Converts an amount in `base_currency` into `quote_currency`.
    ///
    /// `None` when the converted amount is out of the `Money` range.
    pub fn convert(&self, amount: Money) -> Option<Money> {
        amount.apply_rate_micros(self.rate_micros)
    }

    /// Returns the rate as a decimal (for display only).
    pub fn rate(&self) -> f64 {
        self.rate_micros as f64 / crate::RATE_SCALE as f64
    }
}

// =============================================================================
// Settings
// =============================================================================

/// Console-wide settings stored by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Settings {
    /// Currency reports are converted into.
    pub base_currency: String,
    /// IANA timezone for dates shown in the console.
    pub timezone: String,
    /// Game preselected on the transaction form.
    pub default_game_slug: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            base_currency: "USD".to_string(),
            timezone: "UTC".to_string(),
            default_game_slug: Some("tibia".to_string()),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_funding_source_details_tagging() {
        let wallet = FundingSourceDetails::Wallet {
            provider: "PayPal".to_string(),
            address: "desk@example.com".to_string(),
        };
        let json = serde_json::to_value(&wallet).unwrap();
        assert_eq!(json["type"], "wallet");
        assert_eq!(json["provider"], "PayPal");

        let cash: FundingSourceDetails =
            serde_json::from_str(r#"{"type":"cash","location":"Office safe"}"#).unwrap();
        assert_eq!(
            cash,
            FundingSourceDetails::Cash {
                location: "Office safe".to_string()
            }
        );
        assert_eq!(cash.label(), "Cash");
    }

    #[test]
    fn test_unknown_funding_type_is_rejected() {
        let result: Result<FundingSourceDetails, _> =
            serde_json::from_str(r#"{"type":"crypto","address":"x"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_transaction_kind_parsing() {
        assert_eq!("buy".parse::<TransactionKind>().unwrap(), TransactionKind::Buy);
        assert_eq!(" SELL ".parse::<TransactionKind>().unwrap(), TransactionKind::Sell);
        assert!("swap".parse::<TransactionKind>().is_err());
    }

    #[test]
    fn test_exchange_rate_convert() {
        let rate = ExchangeRate {
            id: "rate-1".to_string(),
            base_currency: "USD".to_string(),
            quote_currency: "BRL".to_string(),
            rate_micros: 5_250_000,
            updated_at: Utc::now(),
        };
        assert_eq!(rate.convert(Money::from_cents(1000)), Some(Money::from_cents(5250)));
        assert_eq!(rate.convert(Money::from_cents(i64::MAX / 2)), None);
        assert!((rate.rate() - 5.25).abs() < 1e-9);
    }

    #[test]
    fn test_user_role_permissions() {
        assert!(UserRole::Admin.can_write());
        assert!(UserRole::Operator.can_write());
        assert!(!UserRole::Viewer.can_write());
        assert_eq!(UserRole::default(), UserRole::Viewer);
    }

    #[test]
    fn test_status_default() {
        assert_eq!(TransactionStatus::default(), TransactionStatus::Pending);
    }
}
