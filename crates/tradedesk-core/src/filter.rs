//! # List Filters
//!
//! Search and filter state for the console's list pages, applied by pure
//! functions. The page keeps one filter object, mutates it on every
//! input change and re-applies it to the loaded rows.
//!
//! ```text
//! search box ─┐
//! kind/status ├──► TransactionFilter ──► apply(&rows) ──► visible rows
//! date range ─┘                                │
//!                                              └──► summarize() ──► totals bar
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::money::Money;
use crate::types::{Contact, Transaction, TransactionKind, TransactionStatus};
use crate::validation::validate_search_query;

fn contains_ci(haystack: &str, needle_lower: &str) -> bool {
    haystack.to_lowercase().contains(needle_lower)
}

// =============================================================================
// Transaction Filter
// =============================================================================

/// Filter over the transactions list. Unset fields match everything.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TransactionFilter {
    /// Lower-cased search text.
    search: Option<String>,
    pub kind: Option<TransactionKind>,
    pub status: Option<TransactionStatus>,
    pub game_id: Option<String>,
    /// Inclusive lower bound on `created_at`.
    pub from: Option<DateTime<Utc>>,
    /// Inclusive upper bound on `created_at`.
    pub to: Option<DateTime<Utc>>,
}

impl TransactionFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the search text; blank text clears it.
    pub fn set_search(&mut self, query: &str) -> Result<(), ValidationError> {
        let query = validate_search_query(query)?;
        self.search = if query.is_empty() {
            None
        } else {
            Some(query.to_lowercase())
        };
        Ok(())
    }

    pub fn search(&self) -> Option<&str> {
        self.search.as_deref()
    }

    /// Returns true if `tx` passes every set criterion.
    ///
    /// Search matches notes, id and currency code, case-insensitively.
    pub fn matches(&self, tx: &Transaction) -> bool {
        if self.kind.is_some_and(|kind| kind != tx.kind) {
            return false;
        }

        if self.status.is_some_and(|status| status != tx.status) {
            return false;
        }

        if let Some(game_id) = &self.game_id {
            if game_id != &tx.game_id {
                return false;
            }
        }

        if self.from.is_some_and(|from| tx.created_at < from) {
            return false;
        }

        if self.to.is_some_and(|to| tx.created_at > to) {
            return false;
        }

        match &self.search {
            None => true,
            Some(needle) => {
                contains_ci(&tx.id, needle)
                    || contains_ci(&tx.currency_code, needle)
                    || tx
                        .notes
                        .as_deref()
                        .is_some_and(|notes| contains_ci(notes, needle))
            }
        }
    }

    /// Rows that pass the filter, in their original order.
    pub fn apply<'a>(&self, rows: &'a [Transaction]) -> Vec<&'a Transaction> {
        rows.iter().filter(|tx| self.matches(tx)).collect()
    }
}

// =============================================================================
// Contact Filter
// =============================================================================

/// Search over the contacts list (name, email, phone).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactFilter {
    search: Option<String>,
}

impl ContactFilter {
    pub fn new(query: &str) -> Result<Self, ValidationError> {
        let mut filter = ContactFilter::default();
        filter.set_search(query)?;
        Ok(filter)
    }

    pub fn set_search(&mut self, query: &str) -> Result<(), ValidationError> {
        let query = validate_search_query(query)?;
        self.search = if query.is_empty() {
            None
        } else {
            Some(query.to_lowercase())
        };
        Ok(())
    }

    pub fn matches(&self, contact: &Contact) -> bool {
        let Some(needle) = &self.search else {
            return true;
        };

        contains_ci(&contact.name, needle)
            || contact
                .email
                .as_deref()
                .is_some_and(|email| contains_ci(email, needle))
            || contact
                .phone
                .as_deref()
                .is_some_and(|phone| contains_ci(phone, needle))
    }

    pub fn apply<'a>(&self, rows: &'a [Contact]) -> Vec<&'a Contact> {
        rows.iter().filter(|c| self.matches(c)).collect()
    }
}

// =============================================================================
// Summary
// =============================================================================

/// Totals shown above the transactions table.
///
/// Only completed transactions count towards the money totals; the
/// counts cover every row passed in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TransactionSummary {
    pub count: usize,
    pub completed: usize,
    pub bought: Money,
    pub sold: Money,
}

impl TransactionSummary {
    /// Sold minus bought, clamped to the `Money` range.
    pub fn net(&self) -> Money {
        self.sold.saturating_sub(self.bought)
    }
}

/// Summarizes filtered rows. Assumes a single currency; callers convert
/// with [`crate::types::ExchangeRate`] first when mixing currencies.
///
/// Totals saturate at the `Money` range rather than overflow.
pub fn summarize(rows: &[&Transaction]) -> TransactionSummary {
    let mut summary = TransactionSummary {
        count: rows.len(),
        ..Default::default()
    };

    for tx in rows
        .iter()
        .filter(|tx| tx.status == TransactionStatus::Completed)
    {
        summary.completed += 1;
        match tx.kind {
            TransactionKind::Buy => summary.bought = summary.bought.saturating_add(tx.payment()),
            TransactionKind::Sell => summary.sold = summary.sold.saturating_add(tx.payment()),
        }
    }

    summary
}

// =============================================================================
// Unit Tests
// =============================================================================
