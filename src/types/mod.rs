//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `account`: Account records and name/amount normalization
//! - `journal`: Transaction history entries
//! - `error`: Error types for the ledger

pub mod account;
pub mod error;
pub mod journal;

pub use account::{normalize_name, round_amount, Account, AccountNumber, MAX_NAME_LEN};
pub use error::LedgerError;
pub use journal::{EntryKind, JournalEntry};
