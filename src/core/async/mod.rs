//! Asynchronous access to the ledger
//!
//! The ledger store itself is synchronous. This module lets async callers
//! share one store safely:
//!
//! - **LedgerHandle**: cloneable handle that serializes every operation on a
//!   single lock and runs it on tokio's blocking pool

pub mod ledger_handle;

pub use ledger_handle::LedgerHandle;
