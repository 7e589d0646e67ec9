//! Retail Ledger Library
//! # Overview
//!
//! This library models a minimal retail-banking ledger: clients, checking
//! accounts, and the deposits and withdrawals recorded against them, all kept
//! in memory.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (identifiers, account kinds, records, errors)
//! - [`core`] - Business logic components:
//!   - [`core::cpf`] - CPF checksum validation
//!   - [`core::history`] - Append-only transaction history per account
//!   - [`core::transaction`] - Deposit and withdrawal commands
//!   - [`core::account`] - Balance management and withdrawal rules
//!   - [`core::client`] - Clients owning their accounts
//!   - [`core::bank`] - Registry of clients and accounts
//! - [`io`] - Statement export as CSV
//! - [`cli`] - CLI arguments and the interactive shell
//! - [`logging`] - Tracing subscriber setup
//!
//! # Transaction Types
//!
//! - **Deposit**: Credit a positive amount to an account
//! - **Withdrawal**: Debit a positive amount no larger than the balance
//!
//! # Checking Accounts
//!
//! Every account opened through the [`Bank`] is a checking account, which
//! also enforces:
//! - a per-withdrawal limit (default 500.00)
//! - a cap on the number of withdrawals over the account history (default 3)
//!
//! A successful deposit or withdrawal appends exactly one record to the
//! account history; a rejected one leaves both balance and history untouched.

// Module declarations
pub mod cli;
pub mod core;
pub mod io;
pub mod logging;
pub mod types;

pub use self::core::{
    parse_tax_id, validate_tax_id, Account, Bank, Client, History, Statement, Transaction,
};
pub use io::write_statement_csv;
pub use types::{
    AccountKind, AccountLimits, AccountNumber, ClientId, LedgerError, TaxId, TransactionKind,
    TransactionRecord,
};
