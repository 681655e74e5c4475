//! # Console Error Type
//!
//! Everything that can stop a `tradedesk` command.
//!
//! ```text
//! config file ─── Io / Toml ──────────┐
//! config values ─ InvalidConfig ──────┤
//! unknown --game ─ Core(UnknownGame) ┼──► ConsoleError ──► tracing::error! + exit 2
//! core rules ──── Core(CoreError) ────┘
//! ```
//!
//! An invalid *amount* is not an error here: `check` reports it as output
//! and exits with status 1.

use thiserror::Error;
use tradedesk_core::{CoreError, ValidationError};

#[derive(Debug, Error)]
pub enum ConsoleError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Failed to render JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Core(#[from] CoreError),
}

impl From<ValidationError> for ConsoleError {
    fn from(err: ValidationError) -> Self {
        ConsoleError::Core(CoreError::Validation(err))
    }
}

/// Convenience type alias for console results.
pub type ConsoleResult<T> = Result<T, ConsoleError>;
