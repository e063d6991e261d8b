//! Account number allocation
//!
//! [`FileSequenceAllocator`] keeps the last issued account number in a text
//! file holding a single decimal integer. The first number handed out is
//! `base + 1` (1001 with the default base of 1000).
//!
//! A missing counter file means "nothing issued yet". A counter file that
//! exists but cannot be read or parsed also falls back to the base value; this
//! masks corruption, so it is logged as a warning. Writes go through a staging
//! file and a rename, and a failed write is returned as an error so the caller
//! never hands out a number that was not persisted.

use crate::core::traits::SequenceAllocator;
use crate::io::atomic_write::write_atomic;
use crate::types::{AccountNumber, LedgerError};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Counter value assumed when no counter has been persisted yet
pub const DEFAULT_SEQUENCE_BASE: AccountNumber = 1000;

/// File-backed account number allocator
#[derive(Debug, Clone)]
pub struct FileSequenceAllocator {
    path: PathBuf,
    base: AccountNumber,
}

impl FileSequenceAllocator {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            base: DEFAULT_SEQUENCE_BASE,
        }
    }

    /// Use a different fallback base value
    pub fn with_base(mut self, base: AccountNumber) -> Self {
        self.base = base;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Last persisted counter value, or the base value when there is none
    pub fn last_issued(&self) -> AccountNumber {
        match fs::read_to_string(&self.path) {
            Ok(contents) => match contents.trim().parse::<AccountNumber>() {
                Ok(last) => last,
                Err(e) => {
                    warn!(
                        path = %self.path.display(),
                        contents = contents.trim(),
                        error = %e,
                        base = self.base,
                        "unparsable account counter, falling back to base"
                    );
                    self.base
                }
            },
            Err(e) if e.kind() == io::ErrorKind::NotFound => self.base,
            Err(e) => {
                warn!(
                    path = %self.path.display(),
                    error = %e,
                    base = self.base,
                    "unreadable account counter, falling back to base"
                );
                self.base
            }
        }
    }
}

impl SequenceAllocator for FileSequenceAllocator {
    fn next(&mut self) -> Result<AccountNumber, LedgerError> {
        let last = self.last_issued();
        let value = last
            .checked_add(1)
            .ok_or(LedgerError::SequenceExhausted { last })?;

        write_atomic(&self.path, value.to_string().as_bytes())
            .map_err(|e| LedgerError::storage_write(&self.path, e))?;

        debug!(account = value, "allocated account number");
        Ok(value)
    }
}

/// In-memory account number allocator
///
/// Numbers are unique for the lifetime of the value only.
#[derive(Debug, Clone)]
pub struct InMemorySequence {
    last: AccountNumber,
}

impl InMemorySequence {
    pub fn new(base: AccountNumber) -> Self {
        Self { last: base }
    }

    pub fn last_issued(&self) -> AccountNumber {
        self.last
    }
}

impl Default for InMemorySequence {
    fn default() -> Self {
        Self::new(DEFAULT_SEQUENCE_BASE)
    }
}

impl SequenceAllocator for InMemorySequence {
    fn next(&mut self) -> Result<AccountNumber, LedgerError> {
        let value = self
            .last
            .checked_add(1)
            .ok_or(LedgerError::SequenceExhausted { last: self.last })?;
        self.last = value;
        Ok(value)
    }
}
