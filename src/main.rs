//! Retail Ledger CLI
//!
//! Interactive menu for registering clients, opening checking accounts and
//! moving money between them and the outside world.
//!
//! # Usage
//!
//! ```bash
//! cargo run
//! cargo run -- --withdrawal-limit 1000 --max-withdrawals 5
//! cargo run -- --script session.txt
//! RUST_LOG=retail_ledger=debug cargo run
//! ```
//!
//! All state lives in memory and is lost when the program exits.
//!
//! # Exit Codes
//!
//! - 0: Session ended (quit option or end of input)
//! - 1: Error (script not found, I/O failure)

use retail_ledger::cli;
use retail_ledger::logging;
use retail_ledger::Bank;
use std::process;

fn main() {
    let args = cli::parse_args();

    logging::init_tracing(&args.log_level);

    let bank = Bank::with_limits(args.to_account_limits());

    if let Err(e) = cli::run(&args, bank) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
