//! Account-related types for the bank ledger
//!
//! This module defines the Account record and the helpers that bring
//! caller-supplied names and amounts into their stored form.

use rust_decimal::{Decimal, RoundingStrategy};

/// Account number
///
/// Allocated by a `SequenceAllocator`, never reused once issued.
pub type AccountNumber = u32;

/// Maximum number of characters kept from an account holder's name
pub const MAX_NAME_LEN: usize = 20;

/// Number of decimal places stored for every balance and amount
pub const AMOUNT_SCALE: u32 = 2;

/// A single persisted account record
///
/// One `Account` corresponds to exactly one line of the ledger file.
#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    /// Account holder name, already normalized (at most 20 characters, may be empty)
    pub name: String,

    /// Unique account number
    pub account_number: AccountNumber,

    /// Current balance, two decimal places
    ///
    /// Withdrawals never drive this negative; creation and deposits are
    /// only constrained by the configured `AmountPolicy`.
    pub balance: Decimal,
}

impl Account {
    /// Create a new account record
    ///
    /// The name is normalized and the balance rounded to two decimals, so the
    /// returned value is exactly what a later `list()` will read back.
    pub fn new(name: &str, account_number: AccountNumber, balance: Decimal) -> Self {
        Account {
            name: normalize_name(name),
            account_number,
            balance: round_amount(balance),
        }
    }
}

/// Normalize an account holder name for storage
///
/// Trims, collapses every whitespace run to a single space and keeps at most
/// [`MAX_NAME_LEN`] characters. Longer names are truncated, never rejected.
pub fn normalize_name(raw: &str) -> String {
    let collapsed = raw.split_whitespace().collect::<Vec<_>>().join(" ");
    let truncated: String = collapsed.chars().take(MAX_NAME_LEN).collect();
    truncated.trim_end().to_string()
}

/// Round an amount to the stored precision (midpoint away from zero)
///
/// The result always carries exactly two decimal places, so `100` becomes `100.00`.
pub fn round_amount(amount: Decimal) -> Decimal {
    let mut rounded =
        amount.round_dp_with_strategy(AMOUNT_SCALE, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(AMOUNT_SCALE);
    rounded
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::plain("Alice", "Alice")]
    #[case::empty("", "")]
    #[case::surrounding_whitespace("  Bob  ", "Bob")]
    #[case::inner_runs("Ada   \t Lovelace", "Ada Lovelace")]
    #[case::newline("Eve\nMallory", "Eve Mallory")]
    #[case::exactly_twenty("ABCDEFGHIJKLMNOPQRST", "ABCDEFGHIJKLMNOPQRST")]
    #[case::truncated("ABCDEFGHIJKLMNOPQRSTUVWXYZ", "ABCDEFGHIJKLMNOPQRST")]
    #[case::truncated_at_space("Nineteen characters x", "Nineteen characters")]
    #[case::multibyte("ÄÖÜäöüßÄÖÜäöüßÄÖÜäöüßÄÖÜ", "ÄÖÜäöüßÄÖÜäöüßÄÖÜäöü")]
    fn test_normalize_name(#[case] raw: &str, #[case] expected: &str) {
        assert_eq!(normalize_name(raw), expected);
        assert!(normalize_name(raw).chars().count() <= MAX_NAME_LEN);
    }

    #[rstest]
    #[case(Decimal::new(10000, 2), Decimal::new(10000, 2))]
    #[case(Decimal::new(1005, 3), Decimal::new(101, 2))]
    #[case(Decimal::new(1004, 3), Decimal::new(100, 2))]
    #[case(Decimal::new(-1005, 3), Decimal::new(-101, 2))]
    fn test_round_amount(#[case] input: Decimal, #[case] expected: Decimal) {
        assert_eq!(round_amount(input), expected);
    }

    #[test]
    fn test_round_amount_pads_scale() {
        assert_eq!(round_amount(Decimal::new(100, 0)).to_string(), "100.00");
    }

    #[test]
    fn test_new_account_normalizes_fields() {
        let account = Account::new("  Grace   Hopper ", 1001, Decimal::new(123456, 3));

        assert_eq!(account.name, "Grace Hopper");
        assert_eq!(account.account_number, 1001);
        assert_eq!(account.balance, Decimal::new(12346, 2));
    }
}
