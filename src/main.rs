//! Bank Ledger CLI
//!
//! Command-line front end for the file-backed account ledger.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- create --name Alice --amount 100.00
//! cargo run -- list
//! cargo run -- list --format csv > accounts.csv
//! cargo run -- deposit --account 1001 --amount 25.00
//! cargo run -- withdraw --account 1001 --amount 30.00
//! cargo run -- remove --account 1001
//! cargo run -- history --account 1001
//! cargo run -- --data-dir /var/lib/bank --strict-amounts list
//! ```
//!
//! Results go to stdout, errors to stderr. Diagnostics are controlled with
//! `RUST_LOG` (default `warn`) and are also written to stderr.
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Error (account not found, insufficient funds, storage failure, etc.)

use bank_ledger::cli;
use std::process;
use tracing_subscriber::EnvFilter;

fn main() {
    init_logging();

    let args = cli::parse_args();

    let mut output = std::io::stdout();
    if let Err(e) = cli::run(&args, &mut output) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

/// Install a stderr subscriber filtered by `RUST_LOG`
fn init_logging() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
}
