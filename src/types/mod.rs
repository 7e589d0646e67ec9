//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `account`: Account identifiers, kinds and limits
//! - `client`: Client identifiers and kinds
//! - `transaction`: Transaction kinds and history records
//! - `tax_id`: Validated CPF identifier
//! - `error`: Error types for the ledger

pub mod account;
pub mod client;
pub mod error;
pub mod tax_id;
pub mod transaction;

pub use account::{AccountKind, AccountLimits, AccountNumber, BRANCH};
pub use client::{ClientId, ClientKind, Individual};
pub use error::LedgerError;
pub use tax_id::TaxId;
pub use transaction::{TransactionKind, TransactionRecord};
