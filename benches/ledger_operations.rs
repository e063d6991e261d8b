//! Benchmark suite for ledger operations
//!
//! Measures the append path (`create`) against the full-rewrite path
//! (`deposit`) on ledgers of increasing size, using the divan benchmarking
//! framework.
//!
//! # Running Benchmarks
//!
//! ```bash
//! cargo bench
//! ```

use bank_ledger::{LedgerConfig, LedgerStore};
use rust_decimal::Decimal;
use tempfile::TempDir;

fn main() {
    divan::main();
}

/// Build a store in a fresh directory holding `accounts` records
fn seeded_store(accounts: usize) -> (TempDir, LedgerStore) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let mut store = LedgerStore::open(&LedgerConfig::new(dir.path()).with_journal(false));
    for i in 0..accounts {
        store
            .create(&format!("Holder {}", i), Decimal::new(10000, 2))
            .expect("Failed to seed ledger");
    }
    (dir, store)
}

/// Append one account to an existing ledger
#[divan::bench(args = [10, 100, 1000])]
fn create_account(bencher: divan::Bencher, accounts: usize) {
    let (_dir, mut store) = seeded_store(accounts);

    bencher.bench_local(|| {
        store
            .create("Bench", Decimal::ONE)
            .expect("Create failed")
    });
}

/// Deposit into the last account, rewriting the whole ledger
#[divan::bench(args = [10, 100, 1000])]
fn deposit_full_rewrite(bencher: divan::Bencher, accounts: usize) {
    let (_dir, mut store) = seeded_store(accounts);
    let last = 1000 + accounts as u32;

    bencher.bench_local(|| {
        store
            .deposit(last, Decimal::ONE)
            .expect("Deposit failed")
    });
}

/// List every account
#[divan::bench(args = [10, 100, 1000])]
fn list_accounts(bencher: divan::Bencher, accounts: usize) {
    let (_dir, store) = seeded_store(accounts);

    bencher.bench_local(|| store.list());
}
