//! Ledger configuration
//!
//! Names the three files the ledger lives in and the validation policy applied
//! to caller-supplied amounts. The CLI builds a `LedgerConfig` from its
//! arguments; embedders construct one directly.

use std::path::PathBuf;

/// Default ledger file name
pub const DEFAULT_LEDGER_FILE: &str = "bank_accounts.txt";

/// Default counter file name
pub const DEFAULT_COUNTER_FILE: &str = "account_meta.txt";

/// Default journal file name
pub const DEFAULT_JOURNAL_FILE: &str = "transactions.txt";

/// Validation applied to amounts passed to create, deposit and withdraw
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AmountPolicy {
    /// Accept any amount, including zero and negative values
    #[default]
    Permissive,
    /// Initial amounts must be non-negative; deposits and withdrawals must be positive
    Strict,
}

/// Configuration for a ledger store
#[derive(Clone, Debug)]
pub struct LedgerConfig {
    /// Directory holding the ledger, counter and journal files
    pub data_dir: PathBuf,
    pub ledger_file: String,
    pub counter_file: String,
    pub journal_file: String,
    /// Amount validation policy
    pub amount_policy: AmountPolicy,
    /// Whether successful mutations are recorded in the journal
    pub journal_enabled: bool,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("."),
            ledger_file: DEFAULT_LEDGER_FILE.to_string(),
            counter_file: DEFAULT_COUNTER_FILE.to_string(),
            journal_file: DEFAULT_JOURNAL_FILE.to_string(),
            amount_policy: AmountPolicy::default(),
            journal_enabled: true,
        }
    }
}

impl LedgerConfig {
    /// Create a configuration rooted at `data_dir` with default file names
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            ..Self::default()
        }
    }

    pub fn with_amount_policy(mut self, amount_policy: AmountPolicy) -> Self {
        self.amount_policy = amount_policy;
        self
    }

    pub fn with_journal(mut self, enabled: bool) -> Self {
        self.journal_enabled = enabled;
        self
    }

    pub fn ledger_path(&self) -> PathBuf {
        self.resolve(&self.ledger_file)
    }

    pub fn counter_path(&self) -> PathBuf {
        self.resolve(&self.counter_file)
    }

    pub fn journal_path(&self) -> PathBuf {
        self.resolve(&self.journal_file)
    }

    fn resolve(&self, file: &str) -> PathBuf {
        self.data_dir.join(file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = LedgerConfig::default();

        assert_eq!(config.ledger_path(), PathBuf::from("./bank_accounts.txt"));
        assert_eq!(config.counter_path(), PathBuf::from("./account_meta.txt"));
        assert_eq!(config.journal_path(), PathBuf::from("./transactions.txt"));
        assert_eq!(config.amount_policy, AmountPolicy::Permissive);
        assert!(config.journal_enabled);
    }

    #[test]
    fn test_builder_methods() {
        let config = LedgerConfig::new("/var/lib/bank")
            .with_amount_policy(AmountPolicy::Strict)
            .with_journal(false);

        assert_eq!(
            config.ledger_path(),
            PathBuf::from("/var/lib/bank/bank_accounts.txt")
        );
        assert_eq!(config.amount_policy, AmountPolicy::Strict);
        assert!(!config.journal_enabled);
    }
}
