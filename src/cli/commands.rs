//! Command execution for the CLI front end
//!
//! Translates a parsed [`CliArgs`] into one ledger operation and renders its
//! result. Fatal conditions come back as `Err(String)` for `main` to print.

use super::args::{CliArgs, Command, ListFormat};
use crate::core::LedgerStore;
use crate::io::output::{write_accounts_csv, write_accounts_table, write_history};
use std::io::Write;

/// Run the command selected by `args`, writing its result to `output`
pub fn run(args: &CliArgs, output: &mut dyn Write) -> Result<(), String> {
    let mut store = LedgerStore::open(&args.to_ledger_config());

    match &args.command {
        Command::Create { name, amount } => {
            let account = store.create(name, *amount).map_err(|e| e.to_string())?;
            writeln!(output, "Account created! Number: {}", account)
                .map_err(|e| format!("Failed to write output: {}", e))
        }
        Command::List { format } => {
            let accounts = store.list();
            match format {
                ListFormat::Table => write_accounts_table(&accounts, output),
                ListFormat::Csv => write_accounts_csv(&accounts, output),
            }
        }
        Command::Deposit { account, amount } => {
            let balance = store
                .deposit(*account, *amount)
                .map_err(|e| e.to_string())?;
            writeln!(output, "Deposit processed. Balance: {:.2}", balance)
                .map_err(|e| format!("Failed to write output: {}", e))
        }
        Command::Withdraw { account, amount } => {
            let balance = store
                .withdraw(*account, *amount)
                .map_err(|e| e.to_string())?;
            writeln!(output, "Withdrawal processed. Balance: {:.2}", balance)
                .map_err(|e| format!("Failed to write output: {}", e))
        }
        Command::Remove { account } => {
            store.remove(*account).map_err(|e| e.to_string())?;
            writeln!(output, "Account removed")
                .map_err(|e| format!("Failed to write output: {}", e))
        }
        Command::History { account } => write_history(&store.history(*account), output),
    }
}
