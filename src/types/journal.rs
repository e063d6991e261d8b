//! Journal types for the bank ledger
//!
//! Every successful mutation of the ledger is mirrored as one `JournalEntry`
//! in the append-only transaction history.

use super::account::{round_amount, AccountNumber};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of ledger mutation recorded in the journal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntryKind {
    /// Account opened with its initial amount
    Create,
    /// Funds credited to an account
    Deposit,
    /// Funds debited from an account
    Withdraw,
    /// Account closed; the amount is the balance it held
    Remove,
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            EntryKind::Create => "Create",
            EntryKind::Deposit => "Deposit",
            EntryKind::Withdraw => "Withdraw",
            EntryKind::Remove => "Remove",
        };
        f.write_str(label)
    }
}

/// One row of the transaction history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JournalEntry {
    pub account_number: AccountNumber,
    pub kind: EntryKind,
    #[serde(with = "rust_decimal::serde::str")]
    pub amount: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub balance_after: Decimal,
    pub timestamp: DateTime<Utc>,
}

impl JournalEntry {
    /// Build an entry stamped with the current time
    ///
    /// Amounts are rounded to two decimals like ledger balances.
    pub fn now(
        account_number: AccountNumber,
        kind: EntryKind,
        amount: Decimal,
        balance_after: Decimal,
    ) -> Self {
        JournalEntry {
            account_number,
            kind,
            amount: round_amount(amount),
            balance_after: round_amount(balance_after),
            timestamp: Utc::now(),
        }
    }
}
