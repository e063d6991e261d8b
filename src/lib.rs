//! Bank Ledger Library
//! # Overview
//!
//! This library maintains a small persistent ledger of bank accounts in plain
//! text files: creating accounts, listing them, depositing, withdrawing and
//! removing accounts, with account numbers allocated uniquely and monotonically
//! across the lifetime of the store.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (Account, JournalEntry, LedgerError)
//! - [`config`] - File locations and the amount validation policy
//! - [`cli`] - CLI arguments parsing
//! - [`core`] - Ledger logic:
//!   - [`core::ledger_store`] - The five account operations over the ledger file
//!   - [`core::sequence`] - Account number allocation
//!   - [`core::r#async`] - Single-writer handle for async callers
//! - [`io`] - Record format, file access, journal and output rendering
//!
//! # Storage
//!
//! - `bank_accounts.txt` - one account per line: name, number, balance
//! - `account_meta.txt` - last issued account number
//! - `transactions.txt` - append-only history of successful mutations
//!
//! Deposits, withdrawals and removals load the whole ledger, mutate it in
//! memory and write it back through a staging file and an atomic rename.
//! Creation appends a single line. Every operation assumes it is the only
//! writer; see [`core::LedgerHandle`] for sharing a store between tasks.

// Module declarations
pub mod cli;
pub mod config;
pub mod core;
pub mod io;
pub mod types;

pub use config::{AmountPolicy, LedgerConfig};
pub use core::{
    FileSequenceAllocator, InMemorySequence, LedgerHandle, LedgerStore, SequenceAllocator,
};
pub use types::{Account, AccountNumber, EntryKind, JournalEntry, LedgerError};
