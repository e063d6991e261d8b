//! Output rendering for the CLI front end
//!
//! Accounts can be written as CSV (header `name,account,balance`) or as an
//! aligned text table; journal entries are written as a text table. Accounts
//! are emitted in ledger order.

use crate::types::{Account, JournalEntry};
use csv::Writer;
use std::io::Write;

/// Write accounts in CSV format with columns: name, account, balance
pub fn write_accounts_csv(accounts: &[Account], output: &mut dyn Write) -> Result<(), String> {
    let mut writer = Writer::from_writer(output);

    writer
        .write_record(["name", "account", "balance"])
        .map_err(|e| format!("Failed to write CSV header: {}", e))?;

    for account in accounts {
        writer
            .write_record(&[
                account.name.clone(),
                account.account_number.to_string(),
                format!("{:.2}", account.balance),
            ])
            .map_err(|e| format!("Failed to write account record: {}", e))?;
    }

    writer
        .flush()
        .map_err(|e| format!("Failed to flush output: {}", e))?;

    Ok(())
}

/// Write accounts as an aligned text table
pub fn write_accounts_table(accounts: &[Account], output: &mut dyn Write) -> Result<(), String> {
    let mut render = || -> std::io::Result<()> {
        if accounts.is_empty() {
            writeln!(output, "No accounts found")?;
            return Ok(());
        }
        writeln!(output, "{:<20}  {:>10}  {:>15}", "Name", "Account No", "Balance")?;
        for account in accounts {
            writeln!(
                output,
                "{:<20}  {:>10}  {:>15.2}",
                account.name, account.account_number, account.balance
            )?;
        }
        output.flush()
    };

    render().map_err(|e| format!("Failed to write accounts: {}", e))
}

/// Write journal entries as an aligned text table
pub fn write_history(entries: &[JournalEntry], output: &mut dyn Write) -> Result<(), String> {
    let mut render = || -> std::io::Result<()> {
        if entries.is_empty() {
            writeln!(output, "No transactions found")?;
            return Ok(());
        }
        writeln!(
            output,
            "{:>10}  {:<8}  {:>12}  {:>14}  Timestamp",
            "Account No", "Type", "Amount", "Balance After"
        )?;
        for entry in entries {
            writeln!(
                output,
                "{:>10}  {:<8}  {:>12.2}  {:>14.2}  {}",
                entry.account_number,
                entry.kind.to_string(),
                entry.amount,
                entry.balance_after,
                entry.timestamp.to_rfc3339()
            )?;
        }
        output.flush()
    };

    render().map_err(|e| format!("Failed to write history: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::EntryKind;
    use chrono::{TimeZone, Utc};
    use rstest::rstest;
    use rust_decimal::Decimal;

    fn account(name: &str, number: u32, cents: i64) -> Account {
        Account {
            name: name.to_string(),
            account_number: number,
            balance: Decimal::new(cents, 2),
        }
    }

    #[rstest]
    #[case::single_account(
        vec![account("Alice", 1001, 10000)],
        "name,account,balance\nAlice,1001,100.00\n"
    )]
    #[case::ledger_order_kept(
        vec![account("Bob", 1002, 7500), account("Alice", 1001, 10000)],
        "name,account,balance\nBob,1002,75.00\nAlice,1001,100.00\n"
    )]
    #[case::name_with_space(
        vec![account("Ada Lovelace", 1815, 3600)],
        "name,account,balance\nAda Lovelace,1815,36.00\n"
    )]
    #[case::negative_balance(
        vec![account("Eve", 1003, -50)],
        "name,account,balance\nEve,1003,-0.50\n"
    )]
    #[case::empty_accounts(vec![], "name,account,balance\n")]
    fn test_write_accounts_csv(#[case] accounts: Vec<Account>, #[case] expected_output: &str) {
        let mut output = Vec::new();
        let result = write_accounts_csv(&accounts, &mut output);
        assert!(result.is_ok());

        let output_str = String::from_utf8(output).unwrap();
        assert_eq!(output_str, expected_output);
    }

    #[test]
    fn test_write_accounts_table() {
        let mut output = Vec::new();
        write_accounts_table(&[account("Bob", 1002, 7500)], &mut output).unwrap();

        let output_str = String::from_utf8(output).unwrap();
        let lines: Vec<&str> = output_str.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("Name"));
        assert!(lines[1].starts_with("Bob "));
        assert!(lines[1].contains("1002"));
        assert!(lines[1].ends_with("75.00"));
    }

    #[rstest]
    #[case::no_accounts(true)]
    #[case::no_history(false)]
    fn test_empty_tables(#[case] accounts: bool) {
        let mut output = Vec::new();
        if accounts {
            write_accounts_table(&[], &mut output).unwrap();
            assert_eq!(String::from_utf8(output).unwrap(), "No accounts found\n");
        } else {
            write_history(&[], &mut output).unwrap();
            assert_eq!(String::from_utf8(output).unwrap(), "No transactions found\n");
        }
    }

    #[test]
    fn test_write_history() {
        let entry = JournalEntry {
            account_number: 1001,
            kind: EntryKind::Withdraw,
            amount: Decimal::new(3000, 2),
            balance_after: Decimal::new(7000, 2),
            timestamp: Utc.with_ymd_and_hms(2026, 10, 19, 9, 30, 0).unwrap(),
        };
        let mut output = Vec::new();
        write_history(&[entry], &mut output).unwrap();

        let output_str = String::from_utf8(output).unwrap();
        let row = output_str.lines().nth(1).unwrap();
        assert!(row.contains("1001"));
        assert!(row.contains("Withdraw"));
        assert!(row.contains("30.00"));
        assert!(row.contains("70.00"));
        assert!(row.ends_with("2026-10-19T09:30:00+00:00"));
    }
}
