//! Ledger record format
//!
//! Each account occupies exactly one line of the ledger file:
//!
//! ```text
//! Alice                1001           100.00
//! ^ name (20 columns)  ^ number (15)  ^ balance, two decimals
//! ```
//!
//! The name column is followed by one separator space so that a full
//! 20-character name never runs into the account number. Readers tokenize on
//! whitespace runs rather than byte offsets: the last token is the balance,
//! the one before it the account number, and whatever precedes them is the
//! name. Names may therefore be empty or contain single inner spaces.
//!
//! Lines written without the separator space fuse a full-width name with the
//! account number (`ABCDEFGHIJKLMNOPQRST1001`). When the number token does not
//! parse, the first 20 characters of the line are taken as the name and the
//! remainder is read as number and balance.
//!
//! Balances are rounded to two decimals on read, so rewriting a ledger never
//! changes the value of a record it did not touch.
//!
//! All functions are pure (no I/O) for easy testing.

use crate::types::{normalize_name, round_amount, Account, AccountNumber, MAX_NAME_LEN};
use rust_decimal::Decimal;
use std::str::FromStr;

/// Width of the account number column
pub const NUMBER_WIDTH: usize = 15;

/// Encode an account as one newline-terminated ledger line
pub fn encode_record(account: &Account) -> String {
    format!(
        "{:<name_width$} {:<number_width$}{:.2}\n",
        account.name,
        account.account_number,
        account.balance,
        name_width = MAX_NAME_LEN,
        number_width = NUMBER_WIDTH,
    )
}

/// Decode one ledger line
///
/// # Returns
///
/// * `Ok(Some(Account))` - a well-formed record
/// * `Ok(None)` - a blank line, which carries no record
/// * `Err(String)` - a malformed line, with a description of what is wrong
pub fn decode_record(line: &str) -> Result<Option<Account>, String> {
    let mut tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.is_empty() {
        return Ok(None);
    }

    let balance_token = tokens
        .pop()
        .ok_or_else(|| "missing balance".to_string())?;
    let number_token = tokens
        .pop()
        .ok_or_else(|| format!("missing account number before '{}'", balance_token))?;

    let (name, account_number) = match parse_account_number(number_token) {
        Ok(number) => (tokens.join(" "), number),
        Err(error) => split_fixed_name(line).ok_or(error)?,
    };

    let balance = Decimal::from_str(balance_token)
        .map_err(|_| format!("invalid balance '{}'", balance_token))?;

    Ok(Some(Account {
        name,
        account_number,
        balance: round_amount(balance),
    }))
}

fn parse_account_number(token: &str) -> Result<AccountNumber, String> {
    let account_number =
        AccountNumber::from_str(token).map_err(|_| format!("invalid account number '{}'", token))?;
    if account_number == 0 {
        return Err("account number must be positive".to_string());
    }
    Ok(account_number)
}

/// Read the name from the first 20 columns and the number from what follows
///
/// Returns `None` unless the remainder holds exactly a valid number and a
/// balance token.
fn split_fixed_name(line: &str) -> Option<(String, AccountNumber)> {
    let (split_at, _) = line.char_indices().nth(MAX_NAME_LEN)?;
    let (name_field, rest) = line.split_at(split_at);

    let mut fields = rest.split_whitespace();
    let number = parse_account_number(fields.next()?).ok()?;
    fields.next()?;
    if fields.next().is_some() {
        return None;
    }

    Some((normalize_name(name_field), number))
}
