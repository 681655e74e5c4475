//! # Trade Desk Console
//!
//! Operator front end for the trade desk's currency rules.
//!
//! ## Startup Sequence
//! 1. Initialize tracing (logging to stderr)
//! 2. Parse arguments
//! 3. Load configuration (file, environment, defaults)
//! 4. Run the command and print its report to stdout
//!
//! ## Exit Codes
//! | Code | Meaning                                   |
//! |------|-------------------------------------------|
//! | 0    | Success                                   |
//! | 1    | `check` found the amount invalid          |
//! | 2    | Configuration or argument error           |

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;

use clap::Parser;
use std::process::ExitCode;
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

use crate::cli::Cli;
use crate::config::ConsoleConfig;

pub use error::{ConsoleError, ConsoleResult};

/// Parses arguments, runs the command and maps the outcome to an exit code.
pub fn run() -> ExitCode {
    init_tracing();

    let cli = Cli::parse();
    debug!(?cli, "Parsed arguments");

    let result = ConsoleConfig::load(cli.config.as_deref())
        .and_then(|config| commands::execute(&cli, &config));

    match result {
        Ok(output) => {
            println!("{}", output.body);
            if output.success {
                ExitCode::SUCCESS
            } else {
                ExitCode::from(1)
            }
        }
        Err(err) => {
            error!(error = %err, "Command failed");
            eprintln!("error: {}", err);
            ExitCode::from(2)
        }
    }
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=tradedesk_console=trace` - Trace the console only
/// - Default: WARN, INFO for tradedesk crates
///
/// Logs go to stderr so stdout stays clean for `--json`.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,tradedesk_console=info,tradedesk_core=info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
