//! Benchmark suite for ledger operations
//!
//! Measures the hot paths of the ledger using the divan benchmarking
//! framework.
//!
//! # Running Benchmarks
//!
//! ```bash
//! # Run all benchmarks
//! cargo bench
//! ```
//!
//! # Benchmarks
//!
//! - CPF checksum validation, masked and unmasked
//! - Deposit/withdrawal application on a single account
//! - A whole shell session driven by an in-memory script

use retail_ledger::cli::Shell;
use retail_ledger::{validate_tax_id, Account, AccountLimits, Bank, Transaction};
use rust_decimal::Decimal;
use std::io::Cursor;

fn main() {
    divan::main();
}

/// Benchmark CPF validation over valid and invalid inputs
#[divan::bench(args = ["11144477735", "111.444.777-35", "11144477734", "00000000000"])]
fn cpf_validation(tax_id: &str) -> bool {
    validate_tax_id(divan::black_box(tax_id))
}

/// Benchmark applying n deposits to a fresh basic account
#[divan::bench(args = [100, 1_000, 10_000])]
fn deposits(bencher: divan::Bencher, n: usize) {
    bencher.bench_local(|| {
        let mut account = Account::basic(1, 1);
        let deposit = Transaction::Deposit(Decimal::new(1050, 2));
        for _ in 0..n {
            deposit.apply(&mut account);
        }
        account
    });
}

/// Benchmark a checking account rejecting withdrawals past its count cap
#[divan::bench(args = [100, 1_000, 10_000])]
fn capped_withdrawals(bencher: divan::Bencher, n: usize) {
    bencher.bench_local(|| {
        let mut account = Account::checking(1, 1, AccountLimits::default());
        Transaction::Deposit(Decimal::new(1_000_000, 0)).apply(&mut account);
        let withdrawal = Transaction::Withdrawal(Decimal::new(10, 0));
        for _ in 0..n {
            withdrawal.apply(&mut account);
        }
        account
    });
}

/// Benchmark a shell session registering clients and moving money
#[divan::bench(args = [10, 100])]
fn shell_session(bencher: divan::Bencher, clients: usize) {
    let tax_ids = ["11144477735", "52998224725"];
    let mut script = String::new();
    for tax_id in tax_ids {
        script.push_str(&format!(
            "nc\n{tax_id}\nMaria Silva\n17-05-1990\nRua A, 10\nna\n{tax_id}\n"
        ));
    }
    for i in 0..clients {
        let tax_id = tax_ids[i % tax_ids.len()];
        script.push_str(&format!("d\n{tax_id}\n100\nw\n{tax_id}\n10\ns\n{tax_id}\n"));
    }
    script.push_str("la\nq\n");

    bencher.bench_local(|| {
        let mut output = Vec::new();
        let mut shell = Shell::new(Bank::new(), Cursor::new(script.as_bytes()), &mut output);
        shell.run().expect("Session failed");
        drop(shell);
        output.len()
    });
}
