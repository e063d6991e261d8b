//! Core ledger logic module
//!
//! This module contains the ledger persistence and mutation engine:
//! - `traits` - The `SequenceAllocator` abstraction
//! - `sequence` - File-backed and in-memory account number allocators
//! - `ledger_store` - Account operations over the ledger file
//! - `async` - Single-writer handle for async callers

pub mod r#async;
pub mod ledger_store;
pub mod sequence;
pub mod traits;

pub use ledger_store::LedgerStore;
pub use r#async::LedgerHandle;
pub use sequence::{FileSequenceAllocator, InMemorySequence, DEFAULT_SEQUENCE_BASE};
pub use traits::SequenceAllocator;
