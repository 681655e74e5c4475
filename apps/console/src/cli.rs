//! Command-line argument model.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "tradedesk")]
#[command(about = "Check and price game-currency trades against the desk's rules")]
#[command(version)]
pub struct Cli {
    /// Config file path (TOML). Defaults to the platform config dir.
    #[arg(long, global = true, env = "TRADEDESK_CONFIG")]
    pub config: Option<PathBuf>,

    /// Game whose currency rules apply (defaults to `default_game`).
    #[arg(long, global = true)]
    pub game: Option<String>,

    /// Print JSON instead of text.
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Validate a transaction amount; exits with 1 when invalid.
    Check {
        /// Amount as typed; anything unparsable is reported as not a number.
        #[arg(allow_hyphen_values = true)]
        amount: String,
    },

    /// Round an amount to the next valid multiple.
    Round {
        #[arg(allow_negative_numbers = true)]
        amount: f64,

        /// Round down instead of up.
        #[arg(long)]
        down: bool,
    },

    /// Derive the payment for part of a priced package.
    Quote {
        /// Units in the package.
        #[arg(long)]
        package_quantity: String,

        /// Price of the whole package.
        #[arg(long)]
        package_price: String,

        /// Units being traded.
        #[arg(long)]
        traded: String,
    },

    /// List configured currency rules.
    Rules,
}
