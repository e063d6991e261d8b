//! Ledger file access
//!
//! The ledger is a plain text file with one record per line (see
//! [`record_format`](crate::io::record_format)). A missing file is an empty
//! ledger; it is created on the first write.
//!
//! # Reading
//!
//! - [`LedgerFile::load_lenient`] backs listing: malformed lines are skipped
//!   and an unreadable file degrades to an empty result, both with a warning.
//! - [`LedgerFile::load_strict`] backs the full-rewrite mutations: any read
//!   failure or malformed line is a `StorageRead` error, so a damaged ledger
//!   is never silently truncated by the following rewrite.
//!
//! # Writing
//!
//! - [`LedgerFile::append`] adds one record without touching existing lines.
//! - [`LedgerFile::rewrite`] serializes the whole set to a staging file and
//!   renames it over the ledger.

use crate::io::atomic_write::write_atomic;
use crate::io::record_format::{decode_record, encode_record};
use crate::types::{Account, LedgerError};
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::warn;

/// Handle on the ledger file
#[derive(Debug, Clone)]
pub struct LedgerFile {
    path: PathBuf,
}

impl LedgerFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read every well-formed record in file order
    pub fn load_lenient(&self) -> Vec<Account> {
        let contents = match self.read_contents() {
            Ok(Some(contents)) => contents,
            Ok(None) => return Vec::new(),
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "ledger unreadable, listing as empty");
                return Vec::new();
            }
        };

        contents
            .lines()
            .enumerate()
            .filter_map(|(index, line)| match decode_record(line) {
                Ok(record) => record,
                Err(e) => {
                    warn!(path = %self.path.display(), line = index + 1, error = %e, "skipping malformed ledger line");
                    None
                }
            })
            .collect()
    }

    /// Read the full record set, failing on any unreadable or malformed content
    pub fn load_strict(&self) -> Result<Vec<Account>, LedgerError> {
        let contents = match self.read_contents() {
            Ok(Some(contents)) => contents,
            Ok(None) => return Ok(Vec::new()),
            Err(e) => return Err(LedgerError::storage_read(&self.path, e)),
        };

        let mut accounts = Vec::new();
        for (index, line) in contents.lines().enumerate() {
            let record = decode_record(line).map_err(|e| {
                LedgerError::storage_read(&self.path, format!("line {}: {}", index + 1, e))
            })?;
            accounts.extend(record);
        }
        Ok(accounts)
    }

    /// Append one record, creating the file if needed
    pub fn append(&self, account: &Account) -> Result<(), LedgerError> {
        self.try_append(account)
            .map_err(|e| LedgerError::storage_write(&self.path, e))
    }

    /// Replace the ledger with `accounts`, in order
    pub fn rewrite(&self, accounts: &[Account]) -> Result<(), LedgerError> {
        let contents: String = accounts.iter().map(encode_record).collect();
        write_atomic(&self.path, contents.as_bytes())
            .map_err(|e| LedgerError::storage_write(&self.path, e))
    }

    fn read_contents(&self) -> io::Result<Option<String>> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }

    fn try_append(&self, account: &Account) -> io::Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        file.write_all(encode_record(account).as_bytes())?;
        file.sync_all()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use tempfile::TempDir;

    fn ledger_in(dir: &TempDir) -> LedgerFile {
        LedgerFile::new(dir.path().join("bank_accounts.txt"))
    }

    fn account(name: &str, number: u32, cents: i64) -> Account {
        Account::new(name, number, Decimal::new(cents, 2))
    }

    #[test]
    fn test_missing_file_is_empty_ledger() {
        let dir = TempDir::new().unwrap();
        let ledger = ledger_in(&dir);

        assert!(ledger.load_lenient().is_empty());
        assert_eq!(ledger.load_strict(), Ok(Vec::new()));
    }

    #[test]
    fn test_append_then_load_preserves_order() {
        let dir = TempDir::new().unwrap();
        let ledger = ledger_in(&dir);

        ledger.append(&account("Alice", 1001, 10000)).unwrap();
        ledger.append(&account("Bob", 1002, 5000)).unwrap();

        let expected = vec![account("Alice", 1001, 10000), account("Bob", 1002, 5000)];
        assert_eq!(ledger.load_lenient(), expected);
        assert_eq!(ledger.load_strict(), Ok(expected));
    }

    #[test]
    fn test_append_does_not_touch_existing_lines() {
        let dir = TempDir::new().unwrap();
        let ledger = ledger_in(&dir);
        let existing = "Legacy              900            1.00\n";
        fs::write(ledger.path(), existing).unwrap();

        ledger.append(&account("Alice", 1001, 10000)).unwrap();

        let contents = fs::read_to_string(ledger.path()).unwrap();
        assert!(contents.starts_with(existing));
        assert_eq!(contents.lines().count(), 2);
    }

    #[test]
    fn test_rewrite_replaces_all_records() {
        let dir = TempDir::new().unwrap();
        let ledger = ledger_in(&dir);
        ledger.append(&account("Alice", 1001, 10000)).unwrap();
        ledger.append(&account("Bob", 1002, 5000)).unwrap();

        ledger.rewrite(&[account("Bob", 1002, 7500)]).unwrap();

        assert_eq!(ledger.load_strict(), Ok(vec![account("Bob", 1002, 7500)]));
    }

    #[test]
    fn test_rewrite_empty_set_leaves_empty_file() {
        let dir = TempDir::new().unwrap();
        let ledger = ledger_in(&dir);
        ledger.append(&account("Alice", 1001, 10000)).unwrap();

        ledger.rewrite(&[]).unwrap();

        assert_eq!(fs::read_to_string(ledger.path()).unwrap(), "");
        assert_eq!(ledger.load_strict(), Ok(Vec::new()));
    }

    #[test]
    fn test_malformed_lines_skipped_by_lenient_load() {
        let dir = TempDir::new().unwrap();
        let ledger = ledger_in(&dir);
        fs::write(
            ledger.path(),
            "Alice                1001           100.00\ngarbage\n\nBob                  1002           50.00\n",
        )
        .unwrap();

        let accounts = ledger.load_lenient();

        assert_eq!(
            accounts,
            vec![account("Alice", 1001, 10000), account("Bob", 1002, 5000)]
        );
    }

    #[test]
    fn test_malformed_lines_rejected_by_strict_load() {
        let dir = TempDir::new().unwrap();
        let ledger = ledger_in(&dir);
        fs::write(
            ledger.path(),
            "Alice                1001           100.00\ngarbage\n",
        )
        .unwrap();

        let result = ledger.load_strict();

        match result {
            Err(LedgerError::StorageRead { message, .. }) => assert!(message.starts_with("line 2:")),
            other => panic!("Expected StorageRead, got {:?}", other),
        }
    }

    #[test]
    fn test_unreadable_ledger() {
        let dir = TempDir::new().unwrap();
        let ledger = ledger_in(&dir);
        // A directory in place of the ledger file cannot be read as text
        fs::create_dir(ledger.path()).unwrap();

        assert!(ledger.load_lenient().is_empty());
        assert!(matches!(
            ledger.load_strict(),
            Err(LedgerError::StorageRead { .. })
        ));
        assert!(matches!(
            ledger.append(&account("Alice", 1001, 100)),
            Err(LedgerError::StorageWrite { .. })
        ));
    }
}
