//! # Command Handlers
//!
//! Each handler turns parsed arguments plus configuration into a report.
//! Reports serialize to JSON for scripts and implement `Display` for
//! operators.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Command   Core call                          Report                    │
//! │  ───────   ─────────                          ──────                    │
//! │  check  ─► DenominationRules::validate ─────► CheckReport   (exit 0/1)  │
//! │  round  ─► next/previous_valid_amount ──────► RoundReport               │
//! │  quote  ─► derive_payment_amount ───────────► QuoteReport               │
//! │  rules  ─► ConsoleConfig::currencies ───────► RulesReport               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use std::fmt;
use tracing::debug;
use tradedesk_core::denomination::{next_valid_amount, previous_valid_amount};
use tradedesk_core::draft::parse_input as parse_amount;
use tradedesk_core::payment::payment_percentage;
use tradedesk_core::{derive_payment_amount, AmountValidation, Money, ValidationError};

use crate::cli::{Cli, Command};
use crate::config::ConsoleConfig;
use crate::error::ConsoleResult;

fn join_amounts(amounts: &[f64]) -> String {
    amounts
        .iter()
        .map(|a| a.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Rendered command result.
#[derive(Debug, Clone, PartialEq)]
pub struct Output {
    pub body: String,
    /// False when the command ran but the answer is "invalid".
    pub success: bool,
}

// =============================================================================
// Reports
// =============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct CheckReport {
    pub game: String,
    /// `null` in JSON when the input was not a number.
    pub amount: f64,
    pub validation: AmountValidation,
    pub suggestions: Vec<f64>,
}

impl fmt::Display for CheckReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.validation {
            AmountValidation::Valid => write!(f, "valid: {} for {}", self.amount, self.game),
            AmountValidation::Invalid(violation) => {
                write!(f, "invalid: {}", violation)?;
                if !self.suggestions.is_empty() {
                    write!(f, "\nsuggested: {}", join_amounts(&self.suggestions))?;
                }
                Ok(())
            }
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RoundReport {
    pub game: String,
    pub amount: f64,
    pub denomination: u32,
    pub rounded: f64,
}

impl fmt::Display for RoundReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.rounded)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct QuoteReport {
    pub percentage: Option<f64>,
    pub payment: Option<Money>,
}

/// Prints the payment, or an empty line when there is none.
impl fmt::Display for QuoteReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.payment {
            Some(payment) => write!(f, "{}", payment),
            None => Ok(()),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RuleLine {
    pub game: String,
    pub name: String,
    pub denomination: u32,
    pub min_amount: f64,
    pub max_amount: f64,
    pub is_default: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct RulesReport {
    pub currencies: Vec<RuleLine>,
}

impl fmt::Display for RulesReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, line) in self.currencies.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(
                f,
                "{:<12} {:<16} x{:<6} {} - {}{}",
                line.game,
                line.name,
                line.denomination,
                line.min_amount,
                line.max_amount,
                if line.is_default { "  (default)" } else { "" }
            )?;
        }
        Ok(())
    }
}

// =============================================================================
// Handlers
// =============================================================================

pub fn check(config: &ConsoleConfig, game: Option<&str>, raw: &str) -> ConsoleResult<CheckReport> {
    let (entry, rules) = config.rules_for(game)?;
    let amount = parse_amount(raw);
    let validation = rules.validate(amount);
    debug!(game = %entry.game, amount, ?validation, "Checked amount");

    let suggestions = if validation.is_valid() {
        Vec::new()
    } else {
        rules.suggestions(amount)
    };

    Ok(CheckReport {
        game: entry.game.clone(),
        amount,
        validation,
        suggestions,
    })
}

pub fn round(config: &ConsoleConfig, game: Option<&str>, amount: f64, down: bool) -> ConsoleResult<RoundReport> {
    if !amount.is_finite() {
        return Err(ValidationError::InvalidFormat {
            field: "amount".to_string(),
            reason: "must be a finite number".to_string(),
        }
        .into());
    }

    let (entry, rules) = config.rules_for(game)?;
    let rounded = if down {
        previous_valid_amount(amount, rules.denomination())
    } else {
        next_valid_amount(amount, rules.denomination())
    };
    // ceil(-0.4) is -0.0; print it as 0
    let rounded = rounded + 0.0;

    Ok(RoundReport {
        game: entry.game.clone(),
        amount,
        denomination: rules.denomination(),
        rounded,
    })
}

pub fn quote(package_quantity: &str, package_price: &str, traded: &str) -> QuoteReport {
    let package_quantity = parse_amount(package_quantity);
    let package_price = parse_amount(package_price);
    let traded = parse_amount(traded);

    let payment = derive_payment_amount(package_quantity, package_price, traded);
    let percentage = payment.and(payment_percentage(package_quantity, traded));
    debug!(?payment, "Derived payment");

    QuoteReport {
        percentage,
        payment,
    }
}

pub fn rules(config: &ConsoleConfig) -> RulesReport {
    let currencies = config
        .currencies
        .iter()
        .map(|entry| RuleLine {
            game: entry.game.clone(),
            name: entry.name.clone(),
            denomination: entry.denomination,
            min_amount: entry.min_amount,
            max_amount: entry.max_amount,
            is_default: entry.game.eq_ignore_ascii_case(&config.default_game),
        })
        .collect();

    RulesReport { currencies }
}

fn render<T: Serialize + fmt::Display>(report: &T, json: bool) -> ConsoleResult<String> {
    if json {
        Ok(serde_json::to_string_pretty(report)?)
    } else {
        Ok(report.to_string())
    }
}

/// Runs the parsed command against a loaded configuration.
pub fn execute(cli: &Cli, config: &ConsoleConfig) -> ConsoleResult<Output> {
    let game = cli.game.as_deref();

    let output = match &cli.command {
        Command::Check { amount } => {
            let report = check(config, game, amount)?;
            Output {
                success: report.validation.is_valid(),
                body: render(&report, cli.json)?,
            }
        }
        Command::Round { amount, down } => Output {
            body: render(&round(config, game, *amount, *down)?, cli.json)?,
            success: true,
        },
        Command::Quote {
            package_quantity,
            package_price,
            traded,
        } => Output {
            body: render(&quote(package_quantity, package_price, traded), cli.json)?,
            success: true,
        },
        Command::Rules => Output {
            body: render(&rules(config), cli.json)?,
            success: true,
        },
    };

    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use tradedesk_core::AmountViolation;

    fn run(args: &[&str]) -> ConsoleResult<Output> {
        let mut argv = vec!["tradedesk"];
        argv.extend_from_slice(args);
        let cli = Cli::try_parse_from(argv).unwrap();
        execute(&cli, &ConsoleConfig::default())
    }

    #[test]
    fn test_check_valid() {
        let output = run(&["check", "250"]).unwrap();
        assert!(output.success);
        assert_eq!(output.body, "valid: 250 for tibia");
    }

    #[test]
    fn test_check_not_a_multiple() {
        let output = run(&["check", "230"]).unwrap();
        assert!(!output.success);
        assert_eq!(
            output.body,
            "invalid: Amount must be a multiple of the denomination (try 225 or 250)\nsuggested: 225, 250"
        );
    }

    #[test]
    fn test_check_reports_first_violation() {
        let report = check(&ConsoleConfig::default(), None, "10").unwrap();
        assert_eq!(
            report.validation,
            AmountValidation::Invalid(AmountViolation::BelowMinimum { min_amount: 25.0 })
        );
        assert_eq!(report.suggestions, vec![25.0]);

        let report = check(&ConsoleConfig::default(), None, "abc").unwrap();
        assert_eq!(
            report.validation,
            AmountValidation::Invalid(AmountViolation::NotANumber)
        );
        assert!(report.suggestions.is_empty());
    }

    #[test]
    fn test_check_json() {
        let output = run(&["--json", "check", "-5"]).unwrap();
        let json: serde_json::Value = serde_json::from_str(&output.body).unwrap();
        assert_eq!(json["validation"]["status"], "invalid");
        assert_eq!(json["validation"]["violation"]["reason"], "not_positive");
        assert_eq!(json["game"], "tibia");
    }

    #[test]
    fn test_check_unknown_game() {
        assert!(run(&["--game", "runescape", "check", "25"]).is_err());
    }

    #[test]
    fn test_round() {
        assert_eq!(run(&["round", "230"]).unwrap().body, "250");
        assert_eq!(run(&["round", "230", "--down"]).unwrap().body, "225");
        assert!(round(&ConsoleConfig::default(), None, f64::NAN, false).is_err());
    }

    #[test]
    fn test_round_small_negative_to_zero() {
        let report = round(&ConsoleConfig::default(), None, -10.0, false).unwrap();
        assert_eq!(report.to_string(), "0");
        assert!(report.rounded.is_sign_positive());

        let output = run(&["--json", "round", "-10"]).unwrap();
        let json: serde_json::Value = serde_json::from_str(&output.body).unwrap();
        assert_eq!(json["rounded"], 0.0);
    }

    #[test]
    fn test_quote() {
        let output = run(&[
            "quote",
            "--package-quantity",
            "250",
            "--package-price",
            "10.00",
            "--traded",
            "25",
        ])
        .unwrap();
        assert_eq!(output.body, "1.00");

        let report = quote("250", "10.00", "25");
        assert_eq!(report.percentage, Some(10.0));
    }

    #[test]
    fn test_quote_blank_on_invalid_package() {
        let report = quote("0", "10.00", "25");
        assert_eq!(report.payment, None);
        assert_eq!(report.percentage, None);
        assert_eq!(report.to_string(), "");
    }

    #[test]
    fn test_rules_listing() {
        let output = run(&["rules"]).unwrap();
        assert!(output.body.starts_with("tibia"));
        assert!(output.body.contains("Tibia Coins"));
        assert!(output.body.ends_with("(default)"));
    }
}
