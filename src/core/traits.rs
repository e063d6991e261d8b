//! Core traits for the ledger
//!
//! The ledger store receives its account number source as an injected
//! `SequenceAllocator` rather than reaching for a global counter, so the
//! durable file-backed allocator can be swapped for an in-memory one in tests
//! or for any other durable primitive an embedder prefers.

use crate::types::{AccountNumber, LedgerError};

/// Source of unique, monotonically increasing account numbers
pub trait SequenceAllocator {
    /// Advance the counter and return the new account number
    ///
    /// The counter is durably advanced before the number is returned, so two
    /// sequential calls never yield the same value. An error means no number
    /// was issued and the caller must not use one.
    fn next(&mut self) -> Result<AccountNumber, LedgerError>;
}

impl<A: SequenceAllocator + ?Sized> SequenceAllocator for Box<A> {
    fn next(&mut self) -> Result<AccountNumber, LedgerError> {
        (**self).next()
    }
}
