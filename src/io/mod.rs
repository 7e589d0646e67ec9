//! I/O module
//!
//! Handles statement export.
//!
//! # Components
//!
//! - `csv_format` - CSV format handling (row structure, statement serialization)

pub mod csv_format;

pub use csv_format::{format_amount, write_statement_csv, StatementRow};
