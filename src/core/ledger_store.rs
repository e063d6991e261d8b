//! Ledger store
//!
//! This module provides the `LedgerStore`, which owns the ledger file and an
//! injected `SequenceAllocator` and exposes the account operations:
//!
//! - `create` allocates a number and appends one record (no read, no rewrite)
//! - `list` reads every record best-effort
//! - `deposit`, `withdraw` and `remove` follow the full-rewrite protocol:
//!   load the whole set, mutate it in memory, write the whole set back
//!
//! No state survives between calls; every operation is a fresh cycle against
//! the files. A failed operation performs no write.
//!
//! # Concurrency
//!
//! The store must be driven by one writer at a time. Two processes (or two
//! threads holding separate stores) racing on load-then-save lose one update.
//! Use [`LedgerHandle`](crate::core::r#async::LedgerHandle) to share a store
//! within a process.

use crate::config::{AmountPolicy, LedgerConfig};
use crate::core::sequence::FileSequenceAllocator;
use crate::core::traits::SequenceAllocator;
use crate::io::journal::Journal;
use crate::io::ledger_file::LedgerFile;
use crate::types::{
    round_amount, Account, AccountNumber, EntryKind, JournalEntry, LedgerError,
};
use rust_decimal::Decimal;
use tracing::{debug, warn};

/// Persistent ledger of bank accounts
#[derive(Debug)]
pub struct LedgerStore<A = FileSequenceAllocator> {
    ledger: LedgerFile,
    journal: Journal,
    journal_enabled: bool,
    amount_policy: AmountPolicy,
    allocator: A,
}

impl LedgerStore<FileSequenceAllocator> {
    /// Open the store described by `config`, using its counter file
    pub fn open(config: &LedgerConfig) -> Self {
        let allocator = FileSequenceAllocator::new(config.counter_path());
        Self::with_allocator(config, allocator)
    }
}

impl<A: SequenceAllocator> LedgerStore<A> {
    /// Open the store described by `config` with a custom number source
    pub fn with_allocator(config: &LedgerConfig, allocator: A) -> Self {
        LedgerStore {
            ledger: LedgerFile::new(config.ledger_path()),
            journal: Journal::new(config.journal_path()),
            journal_enabled: config.journal_enabled,
            amount_policy: config.amount_policy,
            allocator,
        }
    }

    /// Open a new account and return its number
    ///
    /// The name is normalized and truncated to 20 characters. The record is
    /// appended without reading or rewriting existing records.
    ///
    /// # Errors
    ///
    /// - `Validation` if the strict policy rejects a negative initial amount
    /// - `StorageWrite` if the counter or the ledger append fails; a number
    ///   allocated before a failed append is burned, never reissued
    /// - `SequenceExhausted` if no further account number exists
    pub fn create(
        &mut self,
        name: &str,
        initial_amount: Decimal,
    ) -> Result<AccountNumber, LedgerError> {
        let initial_amount = round_amount(initial_amount);
        if self.amount_policy == AmountPolicy::Strict && initial_amount < Decimal::ZERO {
            return Err(LedgerError::validation(format!(
                "initial amount must not be negative, got {}",
                initial_amount
            )));
        }

        let account_number = self.allocator.next()?;
        let account = Account::new(name, account_number, initial_amount);
        self.ledger.append(&account)?;

        debug!(account = account_number, name = %account.name, balance = %account.balance, "account created");
        self.record(JournalEntry::now(
            account_number,
            EntryKind::Create,
            account.balance,
            account.balance,
        ));

        Ok(account_number)
    }

    /// Every readable record, in file order
    ///
    /// A missing ledger is an empty list. Malformed lines are skipped and an
    /// unreadable ledger lists as empty; both are logged.
    pub fn list(&self) -> Vec<Account> {
        self.ledger.load_lenient()
    }

    /// Add `amount` to an account's balance and return the new balance
    ///
    /// # Errors
    ///
    /// - `AccountNotFound` if no record matches (nothing is written)
    /// - `Validation` if the strict policy rejects a non-positive amount
    /// - `StorageRead` if the ledger cannot be loaded in full
    /// - `StorageWrite` if the rewrite fails
    pub fn deposit(
        &mut self,
        account: AccountNumber,
        amount: Decimal,
    ) -> Result<Decimal, LedgerError> {
        let amount = round_amount(amount);
        self.require_positive("deposit", amount)?;

        let balance = self.rewrite_with(|accounts| {
            let record = find_account(accounts, account)?;
            let new_balance = record
                .balance
                .checked_add(amount)
                .ok_or_else(|| LedgerError::arithmetic_overflow("deposit", account))?;
            record.balance = round_amount(new_balance);
            Ok(record.balance)
        })?;

        debug!(account, amount = %amount, balance = %balance, "deposit processed");
        self.record(JournalEntry::now(account, EntryKind::Deposit, amount, balance));
        Ok(balance)
    }

    /// Subtract `amount` from an account's balance and return the new balance
    ///
    /// # Errors
    ///
    /// - `AccountNotFound` if no record matches (nothing is written)
    /// - `InsufficientFunds` if the balance is below `amount` (nothing is written)
    /// - `Validation` if the strict policy rejects a non-positive amount
    /// - `StorageRead` if the ledger cannot be loaded in full
    /// - `StorageWrite` if the rewrite fails
    pub fn withdraw(
        &mut self,
        account: AccountNumber,
        amount: Decimal,
    ) -> Result<Decimal, LedgerError> {
        let amount = round_amount(amount);
        self.require_positive("withdrawal", amount)?;

        let balance = self.rewrite_with(|accounts| {
            let record = find_account(accounts, account)?;
            if record.balance < amount {
                return Err(LedgerError::insufficient_funds(
                    account,
                    record.balance,
                    amount,
                ));
            }
            let new_balance = record
                .balance
                .checked_sub(amount)
                .ok_or_else(|| LedgerError::arithmetic_overflow("withdrawal", account))?;
            record.balance = round_amount(new_balance);
            Ok(record.balance)
        })?;

        debug!(account, amount = %amount, balance = %balance, "withdrawal processed");
        self.record(JournalEntry::now(account, EntryKind::Withdraw, amount, balance));
        Ok(balance)
    }

    /// Delete an account and return its last state
    ///
    /// Later records shift up by one; their relative order is preserved. The
    /// account number is never reissued.
    ///
    /// # Errors
    ///
    /// - `AccountNotFound` if no record matches (nothing is written)
    /// - `StorageRead` if the ledger cannot be loaded in full
    /// - `StorageWrite` if the rewrite fails
    pub fn remove(&mut self, account: AccountNumber) -> Result<Account, LedgerError> {
        let removed = self.rewrite_with(|accounts| {
            let index = accounts
                .iter()
                .position(|record| record.account_number == account)
                .ok_or_else(|| LedgerError::account_not_found(account))?;
            Ok(accounts.remove(index))
        })?;

        debug!(account, balance = %removed.balance, "account removed");
        self.record(JournalEntry::now(
            account,
            EntryKind::Remove,
            removed.balance,
            Decimal::ZERO,
        ));
        Ok(removed)
    }

    /// Transaction history, optionally for a single account
    ///
    /// Reads the journal best-effort; it is empty when journaling has never
    /// been enabled.
    pub fn history(&self, account: Option<AccountNumber>) -> Vec<JournalEntry> {
        self.journal.read(account)
    }

    /// Load the full record set, apply `mutate`, and write the set back
    ///
    /// Nothing is written when loading or `mutate` fails.
    fn rewrite_with<T, F>(&mut self, mutate: F) -> Result<T, LedgerError>
    where
        F: FnOnce(&mut Vec<Account>) -> Result<T, LedgerError>,
    {
        let mut accounts = self.ledger.load_strict()?;
        let outcome = mutate(&mut accounts)?;
        self.ledger.rewrite(&accounts)?;
        Ok(outcome)
    }

    fn require_positive(&self, operation: &str, amount: Decimal) -> Result<(), LedgerError> {
        if self.amount_policy == AmountPolicy::Strict && amount <= Decimal::ZERO {
            return Err(LedgerError::validation(format!(
                "{} amount must be positive, got {}",
                operation, amount
            )));
        }
        Ok(())
    }

    fn record(&self, entry: JournalEntry) {
        if !self.journal_enabled {
            return;
        }
        // The ledger already holds the new state; a lost journal row is not worth failing over
        if let Err(e) = self.journal.append(&entry) {
            warn!(account = entry.account_number, kind = %entry.kind, error = %e, "failed to journal ledger change");
        }
    }
}

/// First record with the given number
fn find_account(
    accounts: &mut [Account],
    account: AccountNumber,
) -> Result<&mut Account, LedgerError> {
    accounts
        .iter_mut()
        .find(|record| record.account_number == account)
        .ok_or_else(|| LedgerError::account_not_found(account))
}
