use crate::config::{AmountPolicy, LedgerConfig};
use crate::types::AccountNumber;
use clap::{Parser, Subcommand, ValueEnum};
use rust_decimal::Decimal;
use std::path::PathBuf;

/// Manage a file-backed ledger of bank accounts
#[derive(Parser, Debug)]
#[command(name = "bank-ledger")]
#[command(about = "Manage a file-backed ledger of bank accounts", long_about = None)]
pub struct CliArgs {
    /// Directory holding the ledger, counter and journal files
    #[arg(
        long = "data-dir",
        value_name = "DIR",
        env = "BANK_LEDGER_DIR",
        default_value = ".",
        global = true
    )]
    pub data_dir: PathBuf,

    /// Reject negative initial amounts and non-positive deposits/withdrawals
    #[arg(long = "strict-amounts", global = true)]
    pub strict_amounts: bool,

    /// Do not record changes in the transaction journal
    #[arg(long = "no-journal", global = true)]
    pub no_journal: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Ledger operations
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Open a new account and print its number
    Create {
        /// Account holder name (truncated to 20 characters)
        #[arg(long)]
        name: String,
        /// Initial balance
        #[arg(long, allow_negative_numbers = true)]
        amount: Decimal,
    },
    /// List every account
    List {
        /// Output format
        #[arg(long, value_enum, default_value = "table")]
        format: ListFormat,
    },
    /// Add funds to an account
    Deposit {
        #[arg(long)]
        account: AccountNumber,
        #[arg(long, allow_negative_numbers = true)]
        amount: Decimal,
    },
    /// Take funds from an account
    Withdraw {
        #[arg(long)]
        account: AccountNumber,
        #[arg(long, allow_negative_numbers = true)]
        amount: Decimal,
    },
    /// Delete an account
    Remove {
        #[arg(long)]
        account: AccountNumber,
    },
    /// Show the transaction history
    History {
        /// Only show entries for this account
        #[arg(long)]
        account: Option<AccountNumber>,
    },
}

/// Output formats for `list`
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ListFormat {
    Table,
    Csv,
}

impl CliArgs {
    /// Build the ledger configuration selected by the global flags
    pub fn to_ledger_config(&self) -> LedgerConfig {
        let amount_policy = if self.strict_amounts {
            AmountPolicy::Strict
        } else {
            AmountPolicy::Permissive
        };

        LedgerConfig::new(self.data_dir.clone())
            .with_amount_policy(amount_policy)
            .with_journal(!self.no_journal)
    }
}
