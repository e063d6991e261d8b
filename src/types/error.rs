//! Error types for the bank ledger
//!
//! This module defines every error a ledger operation can report to its caller.
//! Errors are designed to be descriptive and user-friendly for CLI output.
//!
//! # Error Categories
//!
//! - **Storage Errors**: the ledger or counter file could not be read or written
//! - **Lookup Errors**: no account with the requested number exists
//! - **Balance Errors**: a withdrawal would drive the balance negative
//! - **Validation Errors**: amounts rejected by the strict amount policy
//!
//! None of these are fatal to the process: each operation is independent and a
//! failure leaves the store usable for the next call.

use super::account::AccountNumber;
use rust_decimal::Decimal;
use std::path::Path;
use thiserror::Error;

/// Main error type for the bank ledger
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LedgerError {
    /// Storage exists but could not be opened or parsed
    ///
    /// Mutating operations surface this instead of operating on an empty
    /// set, so an unreadable ledger is never overwritten.
    #[error("Failed to read {path}: {message}")]
    StorageRead {
        /// File that could not be read
        path: String,
        /// Description of the failure
        message: String,
    },

    /// A rewrite, append or counter update could not be durably completed
    #[error("Failed to write {path}: {message}")]
    StorageWrite {
        /// File that could not be written
        path: String,
        /// Description of the failure
        message: String,
    },

    /// No record with the given account number exists
    #[error("Account {account} not found")]
    AccountNotFound {
        /// Requested account number
        account: AccountNumber,
    },

    /// Withdrawal would drive the balance negative
    #[error("Insufficient funds in account {account}: balance {balance}, requested {requested}")]
    InsufficientFunds {
        /// Account number
        account: AccountNumber,
        /// Balance at the time of the request
        balance: Decimal,
        /// Requested withdrawal amount
        requested: Decimal,
    },

    /// Balance arithmetic would overflow
    ///
    /// The operation is rejected and the ledger is left unchanged.
    #[error("Arithmetic overflow in {operation} for account {account}")]
    ArithmeticOverflow {
        /// Operation that would overflow
        operation: String,
        /// Account number
        account: AccountNumber,
    },

    /// Argument rejected by the configured amount policy
    #[error("Invalid argument: {message}")]
    Validation {
        /// Description of the rejected argument
        message: String,
    },

    /// The account number counter cannot advance any further
    #[error("Account numbers exhausted after {last}")]
    SequenceExhausted {
        /// Last issued account number
        last: AccountNumber,
    },

    /// The single-writer worker failed before producing a result
    #[error("Ledger worker failed: {message}")]
    Worker {
        /// Description of the failure
        message: String,
    },
}

impl LedgerError {
    /// Create a StorageRead error for a file
    pub fn storage_read(path: &Path, message: impl ToString) -> Self {
        LedgerError::StorageRead {
            path: path.display().to_string(),
            message: message.to_string(),
        }
    }

    /// Create a StorageWrite error for a file
    pub fn storage_write(path: &Path, message: impl ToString) -> Self {
        LedgerError::StorageWrite {
            path: path.display().to_string(),
            message: message.to_string(),
        }
    }

    /// Create an AccountNotFound error
    pub fn account_not_found(account: AccountNumber) -> Self {
        LedgerError::AccountNotFound { account }
    }

    /// Create an InsufficientFunds error
    pub fn insufficient_funds(account: AccountNumber, balance: Decimal, requested: Decimal) -> Self {
        LedgerError::InsufficientFunds {
            account,
            balance,
            requested,
        }
    }

    /// Create an ArithmeticOverflow error
    pub fn arithmetic_overflow(operation: &str, account: AccountNumber) -> Self {
        LedgerError::ArithmeticOverflow {
            operation: operation.to_string(),
            account,
        }
    }

    /// Create a Validation error
    pub fn validation(message: impl ToString) -> Self {
        LedgerError::Validation {
            message: message.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::path::PathBuf;

    #[rstest]
    #[case::storage_read(
        LedgerError::StorageRead { path: "bank_accounts.txt".to_string(), message: "line 3: missing balance".to_string() },
        "Failed to read bank_accounts.txt: line 3: missing balance"
    )]
    #[case::storage_write(
        LedgerError::StorageWrite { path: "account_meta.txt".to_string(), message: "Permission denied".to_string() },
        "Failed to write account_meta.txt: Permission denied"
    )]
    #[case::account_not_found(
        LedgerError::AccountNotFound { account: 1042 },
        "Account 1042 not found"
    )]
    #[case::insufficient_funds(
        LedgerError::InsufficientFunds { account: 1001, balance: Decimal::new(7000, 2), requested: Decimal::new(10000, 2) },
        "Insufficient funds in account 1001: balance 70.00, requested 100.00"
    )]
    #[case::arithmetic_overflow(
        LedgerError::ArithmeticOverflow { operation: "deposit".to_string(), account: 1001 },
        "Arithmetic overflow in deposit for account 1001"
    )]
    #[case::validation(
        LedgerError::Validation { message: "deposit amount must be positive, got -5.00".to_string() },
        "Invalid argument: deposit amount must be positive, got -5.00"
    )]
    #[case::sequence_exhausted(
        LedgerError::SequenceExhausted { last: u32::MAX },
        "Account numbers exhausted after 4294967295"
    )]
    fn test_error_display(#[case] error: LedgerError, #[case] expected: &str) {
        assert_eq!(error.to_string(), expected);
    }

    #[rstest]
    #[case::storage_read(
        LedgerError::storage_read(&PathBuf::from("ledger.txt"), "boom"),
        LedgerError::StorageRead { path: "ledger.txt".to_string(), message: "boom".to_string() }
    )]
    #[case::storage_write(
        LedgerError::storage_write(&PathBuf::from("ledger.txt"), "boom"),
        LedgerError::StorageWrite { path: "ledger.txt".to_string(), message: "boom".to_string() }
    )]
    #[case::account_not_found(
        LedgerError::account_not_found(7),
        LedgerError::AccountNotFound { account: 7 }
    )]
    #[case::insufficient_funds(
        LedgerError::insufficient_funds(7, Decimal::ONE, Decimal::TWO),
        LedgerError::InsufficientFunds { account: 7, balance: Decimal::ONE, requested: Decimal::TWO }
    )]
    fn test_helper_functions(#[case] result: LedgerError, #[case] expected: LedgerError) {
        assert_eq!(result, expected);
    }
}
