//! I/O module
//!
//! Handles the on-disk formats and CLI output.
//!
//! # Components
//!
//! - `record_format` - Ledger line encoding and decoding (pure)
//! - `atomic_write` - Temp-file-and-rename writes
//! - `ledger_file` - Ledger file load, append and rewrite
//! - `journal` - Append-only transaction history (CSV)
//! - `output` - Account and history rendering for the CLI

pub mod atomic_write;
pub mod journal;
pub mod ledger_file;
pub mod output;
pub mod record_format;

pub use journal::Journal;
pub use ledger_file::LedgerFile;
pub use output::{write_accounts_csv, write_accounts_table, write_history};
pub use record_format::{decode_record, encode_record};
