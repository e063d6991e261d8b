//! Shared single-writer access to a ledger store
//!
//! The ledger's full-rewrite protocol is only correct when one operation runs
//! at a time. `LedgerHandle` gives a concurrent (tokio) front end that
//! guarantee: the store sits behind an `Arc<Mutex<_>>`, and every operation
//! takes the lock on a blocking worker thread via `spawn_blocking`, so file I/O
//! never stalls the async executor and two operations never interleave.
//!
//! # Thread Safety
//!
//! Handles are cheap to clone; all clones serialize on the same lock. Separate
//! processes pointing at the same files are NOT coordinated.

use crate::core::ledger_store::LedgerStore;
use crate::core::sequence::FileSequenceAllocator;
use crate::core::traits::SequenceAllocator;
use crate::types::{Account, AccountNumber, JournalEntry, LedgerError};
use rust_decimal::Decimal;
use std::sync::{Arc, Mutex, PoisonError};
use tracing::warn;

/// Cloneable async handle on a single `LedgerStore`
#[derive(Debug)]
pub struct LedgerHandle<A = FileSequenceAllocator> {
    store: Arc<Mutex<LedgerStore<A>>>,
}

impl<A> Clone for LedgerHandle<A> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

impl<A> LedgerHandle<A>
where
    A: SequenceAllocator + Send + 'static,
{
    pub fn new(store: LedgerStore<A>) -> Self {
        Self {
            store: Arc::new(Mutex::new(store)),
        }
    }

    pub async fn create(
        &self,
        name: impl Into<String>,
        initial_amount: Decimal,
    ) -> Result<AccountNumber, LedgerError> {
        let name = name.into();
        self.run(move |store| store.create(&name, initial_amount))
            .await
    }

    pub async fn list(&self) -> Result<Vec<Account>, LedgerError> {
        self.run(|store| Ok(store.list())).await
    }

    pub async fn deposit(
        &self,
        account: AccountNumber,
        amount: Decimal,
    ) -> Result<Decimal, LedgerError> {
        self.run(move |store| store.deposit(account, amount)).await
    }

    pub async fn withdraw(
        &self,
        account: AccountNumber,
        amount: Decimal,
    ) -> Result<Decimal, LedgerError> {
        self.run(move |store| store.withdraw(account, amount)).await
    }

    pub async fn remove(&self, account: AccountNumber) -> Result<Account, LedgerError> {
        self.run(move |store| store.remove(account)).await
    }

    pub async fn history(
        &self,
        account: Option<AccountNumber>,
    ) -> Result<Vec<JournalEntry>, LedgerError> {
        self.run(move |store| Ok(store.history(account))).await
    }

    /// Run `operation` with exclusive access to the store on a blocking thread
    async fn run<T, F>(&self, operation: F) -> Result<T, LedgerError>
    where
        F: FnOnce(&mut LedgerStore<A>) -> Result<T, LedgerError> + Send + 'static,
        T: Send + 'static,
    {
        let store = Arc::clone(&self.store);
        tokio::task::spawn_blocking(move || {
            // The store keeps no state between operations, so a lock poisoned
            // by a panicked operation is safe to reuse
            let mut guard = store.lock().unwrap_or_else(|poisoned| {
                warn!("recovering ledger lock after a panicked operation");
                store.clear_poison();
                PoisonError::into_inner(poisoned)
            });
            operation(&mut *guard)
        })
        .await
        .map_err(|e| LedgerError::Worker {
            message: e.to_string(),
        })?
    }
}
