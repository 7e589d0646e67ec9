//! Core business logic module
//!
//! This module contains the ledger components, leaves first:
//! - `cpf` - CPF checksum validation
//! - `history` - Append-only transaction log of one account
//! - `transaction` - Deposit and withdrawal commands
//! - `account` - Balance management and withdrawal rules
//! - `client` - Clients and the accounts they own
//! - `bank` - Registry of clients, orchestrating the operations above

pub mod account;
pub mod bank;
pub mod client;
pub mod cpf;
pub mod history;
pub mod transaction;

pub use account::{Account, AccountLabel};
pub use bank::{Bank, Statement};
pub use client::Client;
pub use cpf::{parse as parse_tax_id, validate as validate_tax_id};
pub use history::History;
pub use transaction::Transaction;
