//! # `tradedesk` Entry Point
//!
//! ```text
//! $ tradedesk check 230
//! invalid: Amount must be a multiple of the denomination (try 225 or 250)
//! suggested: 225, 250
//!
//! $ tradedesk quote --package-quantity 250 --package-price 10.00 --traded 25
//! 1.00
//! ```

use std::process::ExitCode;

fn main() -> ExitCode {
    // Setup lives in lib.rs for testability
    tradedesk_console::run()
}
