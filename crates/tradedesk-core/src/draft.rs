//! # Transaction Draft
//!
//! State of the transaction-entry form, kept as an explicit object.
//!
//! ## Form Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    New Transaction Form                                 │
//! │                                                                         │
//! │  Keystroke               Draft Method               Derived State       │
//! │  ─────────               ────────────               ─────────────       │
//! │                                                                         │
//! │  Package qty "250" ────► set_package_quantity() ──► payment recomputed │
//! │  Package price "10" ───► set_package_price() ─────► payment recomputed │
//! │  Traded qty "25" ──────► set_traded_quantity() ───► payment = 1.00     │
//! │                                                                         │
//! │  Click Save ───────────► submit(&rules) ──────────► NewTransaction     │
//! │                                 │                    (sent to backend)  │
//! │                                 └─► CoreError shown next to the field   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every setter re-runs [`derive_payment_amount`], so the payment is
//! always consistent with the three quantity inputs.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::denomination::{AmountValidation, DenominationRules};
use crate::error::{CoreError, CoreResult, ValidationError};
use crate::money::Money;
use crate::payment::derive_payment_amount;
use crate::types::TransactionKind;
use crate::validation::{validate_currency_code, validate_uuid};

/// Parses a raw form input. Blank or malformed text becomes `NaN`,
/// which every downstream check treats as "not a number".
pub fn parse_input(raw: &str) -> f64 {
    raw.trim().parse::<f64>().unwrap_or(f64::NAN)
}

// =============================================================================
// New Transaction (request payload)
// =============================================================================

/// Payload for the backend's transaction-creation endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct NewTransaction {
    pub kind: TransactionKind,
    pub game_id: String,
    pub item_id: Option<String>,
    pub contact_id: String,
    pub funding_source_id: String,
    pub quantity: f64,
    pub payment_cents: i64,
    pub currency_code: String,
    pub notes: Option<String>,
}

impl NewTransaction {
    #[inline]
    pub fn payment(&self) -> Money {
        Money::from_cents(self.payment_cents)
    }

    /// Serializes the request body.
    pub fn to_json(&self) -> CoreResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}

// =============================================================================
// Draft
// =============================================================================

/// Form state for a new transaction.
///
/// Selections are plain public fields; the three numeric inputs go
/// through setters so the derived payment never goes stale.
#[derive(Debug, Clone, Default)]
pub struct TransactionDraft {
    pub kind: Option<TransactionKind>,
    pub game_id: String,
    pub item_id: Option<String>,
    pub contact_id: String,
    pub funding_source_id: String,
    pub currency_code: String,
    pub notes: String,

    package_quantity: String,
    package_price: String,
    traded_quantity: String,
    payment: Option<Money>,
}

impl TransactionDraft {
    /// Creates an empty draft for the given direction.
    pub fn new(kind: TransactionKind) -> Self {
        TransactionDraft {
            kind: Some(kind),
            ..Default::default()
        }
    }

    pub fn set_package_quantity(&mut self, raw: &str) {
        self.package_quantity = raw.to_string();
        self.recompute_payment();
    }

    pub fn set_package_price(&mut self, raw: &str) {
        self.package_price = raw.to_string();
        self.recompute_payment();
    }

    pub fn set_traded_quantity(&mut self, raw: &str) {
        self.traded_quantity = raw.to_string();
        self.recompute_payment();
    }

    fn recompute_payment(&mut self) {
        self.payment = derive_payment_amount(
            self.package_quantity(),
            self.package_price(),
            self.traded_quantity(),
        );
    }

    #[inline]
    pub fn package_quantity(&self) -> f64 {
        parse_input(&self.package_quantity)
    }

    #[inline]
    pub fn package_price(&self) -> f64 {
        parse_input(&self.package_price)
    }

    #[inline]
    pub fn traded_quantity(&self) -> f64 {
        parse_input(&self.traded_quantity)
    }

    /// Derived payment; `None` leaves the payment field blank.
    #[inline]
    pub fn payment_amount(&self) -> Option<Money> {
        self.payment
    }

    /// Live check of the traded quantity against the game's rules.
    pub fn amount_check(&self, rules: &DenominationRules) -> AmountValidation {
        rules.validate(self.traded_quantity())
    }

    /// Validates the whole form and builds the request payload.
    ///
    /// ## Check Order
    /// 1. Kind selected
    /// 2. Game, contact, funding source (and item if set) are UUIDs
    /// 3. Currency code
    /// 4. Traded quantity passes the denomination rules
    /// 5. Payment derivable from the package inputs
    pub fn submit(&self, rules: &DenominationRules) -> CoreResult<NewTransaction> {
        let kind = self.kind.ok_or_else(|| ValidationError::Required {
            field: "kind".to_string(),
        })?;

        validate_uuid("game", &self.game_id)?;
        validate_uuid("contact", &self.contact_id)?;
        validate_uuid("funding_source", &self.funding_source_id)?;

        let item_id = match self.item_id.as_deref().map(str::trim) {
            Some(id) if !id.is_empty() => {
                validate_uuid("item", id)?;
                Some(id.to_string())
            }
            _ => None,
        };

        let currency_code = validate_currency_code(&self.currency_code)?;

        let quantity = self.traded_quantity();
        self.amount_check(rules).into_result()?;

        let payment = self.payment.ok_or(CoreError::MissingPaymentAmount)?;

        let notes = match self.notes.trim() {
            "" => None,
            notes => Some(notes.to_string()),
        };

        Ok(NewTransaction {
            kind,
            game_id: self.game_id.trim().to_string(),
            item_id,
            contact_id: self.contact_id.trim().to_string(),
            funding_source_id: self.funding_source_id.trim().to_string(),
            quantity,
            payment_cents: payment.cents(),
            currency_code,
            notes,
        })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::denomination::AmountViolation;

    const GAME: &str = "6f1c5d3e-8a55-4a7e-9b61-0c2f9d7e1a01";
    const CONTACT: &str = "0b7e2f4a-1c3d-4e5f-8a9b-2c3d4e5f6a7b";
    const FUNDING: &str = "9d8c7b6a-5f4e-4d3c-8b2a-1f0e9d8c7b6a";

    fn rules() -> DenominationRules {
        DenominationRules::new(25, 25.0, 1000.0).unwrap()
    }

    fn filled_draft() -> TransactionDraft {
        let mut draft = TransactionDraft::new(TransactionKind::Sell);
        draft.game_id = GAME.to_string();
        draft.contact_id = CONTACT.to_string();
        draft.funding_source_id = FUNDING.to_string();
        draft.currency_code = "usd".to_string();
        draft.set_package_quantity("250");
        draft.set_package_price("10.00");
        draft.set_traded_quantity("25");
        draft
    }

    #[test]
    fn test_payment_follows_every_keystroke() {
        let mut draft = TransactionDraft::new(TransactionKind::Buy);
        assert_eq!(draft.payment_amount(), None);

        draft.set_package_quantity("250");
        assert_eq!(draft.payment_amount(), None);

        draft.set_package_price("10.00");
        // traded quantity still blank
        assert_eq!(draft.payment_amount(), None);

        draft.set_traded_quantity("2");
        assert_eq!(draft.payment_amount(), Some(Money::from_cents(8)));

        draft.set_traded_quantity("25");
        assert_eq!(draft.payment_amount(), Some(Money::from_cents(100)));

        draft.set_package_quantity("0");
        assert_eq!(draft.payment_amount(), None);

        draft.set_package_quantity("500");
        assert_eq!(draft.payment_amount(), Some(Money::from_cents(50)));
    }

    #[test]
    fn test_garbage_input_blanks_payment() {
        let mut draft = filled_draft();
        draft.set_package_price("ten");
        assert_eq!(draft.payment_amount(), None);
        assert!(draft.package_price().is_nan());
    }

    #[test]
    fn test_submit_builds_payload() {
        let mut draft = filled_draft();
        draft.notes = "  delivered in-game  ".to_string();

        let tx = draft.submit(&rules()).unwrap();
        assert_eq!(tx.kind, TransactionKind::Sell);
        assert_eq!(tx.quantity, 25.0);
        assert_eq!(tx.payment(), Money::from_cents(100));
        assert_eq!(tx.currency_code, "USD");
        assert_eq!(tx.item_id, None);
        assert_eq!(tx.notes.as_deref(), Some("delivered in-game"));

        let json = tx.to_json().unwrap();
        assert!(json.contains("\"kind\":\"sell\""));
        assert!(json.contains("\"payment_cents\":100"));
    }

    #[test]
    fn test_submit_requires_selections() {
        let mut draft = filled_draft();
        draft.kind = None;
        assert!(matches!(
            draft.submit(&rules()),
            Err(CoreError::Validation(ValidationError::Required { .. }))
        ));

        let mut draft = filled_draft();
        draft.contact_id = String::new();
        assert!(matches!(
            draft.submit(&rules()),
            Err(CoreError::Validation(ValidationError::Required { ref field })) if field == "contact"
        ));

        let mut draft = filled_draft();
        draft.item_id = Some("not-a-uuid".to_string());
        assert!(matches!(
            draft.submit(&rules()),
            Err(CoreError::Validation(ValidationError::InvalidFormat { ref field, .. })) if field == "item"
        ));
    }

    #[test]
    fn test_submit_rejects_bad_amount() {
        let mut draft = filled_draft();
        draft.set_traded_quantity("30");
        assert!(matches!(
            draft.submit(&rules()),
            Err(CoreError::InvalidAmount(AmountViolation::NotAMultiple {
                nearest_below,
                nearest_above,
            })) if nearest_below == 25.0 && nearest_above == 50.0
        ));

        draft.set_traded_quantity("");
        assert!(matches!(
            draft.submit(&rules()),
            Err(CoreError::InvalidAmount(AmountViolation::NotANumber))
        ));
    }

    #[test]
    fn test_submit_requires_payment() {
        let mut draft = filled_draft();
        draft.set_package_price("0");
        assert!(matches!(
            draft.submit(&rules()),
            Err(CoreError::MissingPaymentAmount)
        ));
    }

    #[test]
    fn test_amount_check_is_live() {
        let mut draft = filled_draft();
        assert!(draft.amount_check(&rules()).is_valid());
        draft.set_traded_quantity("-5");
        assert_eq!(
            draft.amount_check(&rules()),
            AmountValidation::Invalid(AmountViolation::NotPositive)
        );
    }
}
