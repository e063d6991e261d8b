//! Transaction journal
//!
//! An append-only history of ledger mutations, one headerless CSV row per
//! entry:
//!
//! ```text
//! account_number,kind,amount,balance_after,timestamp
//! 1001,Deposit,25.00,125.00,2026-10-19T09:30:00.123456Z
//! ```
//!
//! The journal is informational. The ledger file stays the source of truth, so
//! readers skip rows they cannot parse instead of failing.

use crate::types::{AccountNumber, JournalEntry, LedgerError};
use csv::{ReaderBuilder, Trim, WriterBuilder};
use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Handle on the journal file
#[derive(Debug, Clone)]
pub struct Journal {
    path: PathBuf,
}

impl Journal {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one entry, creating the file if needed
    pub fn append(&self, entry: &JournalEntry) -> Result<(), LedgerError> {
        self.try_append(entry)
            .map_err(|e| LedgerError::storage_write(&self.path, e))
    }

    /// Read every parseable entry in file order, optionally for one account only
    pub fn read(&self, account: Option<AccountNumber>) -> Vec<JournalEntry> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Vec::new(),
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "journal unreadable, history empty");
                return Vec::new();
            }
        };

        let mut reader = ReaderBuilder::new()
            .has_headers(false)
            .trim(Trim::All)
            .from_reader(file);

        reader
            .deserialize::<JournalEntry>()
            .filter_map(|result| match result {
                Ok(entry) => Some(entry),
                Err(e) => {
                    warn!(path = %self.path.display(), error = %e, "skipping malformed journal row");
                    None
                }
            })
            .filter(|entry| account.is_none_or(|number| entry.account_number == number))
            .collect()
    }

    fn try_append(&self, entry: &JournalEntry) -> Result<(), csv::Error> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        let mut writer = WriterBuilder::new().has_headers(false).from_writer(file);
        writer.serialize(entry)?;
        writer.flush()?;
        Ok(())
    }
}
