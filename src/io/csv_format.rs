//! CSV format handling for statement export
//!
//! This module centralizes the CSV output concerns: a row structure for
//! serialization and a writer for whole statements.

use crate::types::{LedgerError, TransactionKind, TransactionRecord};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;
use std::io::Write;

/// Timestamp layout used in exported statements
pub const TIMESTAMP_FORMAT: &str = "%d-%m-%Y %H:%M:%S";

/// Format an amount with two decimal places
///
/// Half-cent values round away from zero (`0.005` -> `0.01`).
pub fn format_amount(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("{:.2}", rounded)
}

/// One exported history record
///
/// Columns: kind, amount, timestamp
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct StatementRow {
    pub kind: TransactionKind,
    /// Amount with two decimal places
    pub amount: String,
    pub timestamp: String,
}

impl From<&TransactionRecord> for StatementRow {
    fn from(record: &TransactionRecord) -> Self {
        StatementRow {
            kind: record.kind(),
            amount: format_amount(record.amount()),
            timestamp: record.timestamp().format(TIMESTAMP_FORMAT).to_string(),
        }
    }
}

/// Write history records in CSV format
///
/// Records are written in history order after a `kind,amount,timestamp`
/// header. The header is written even when there are no records.
///
/// # Errors
///
/// Returns `LedgerError::Io` if the output cannot be written.
pub fn write_statement_csv(
    records: &[TransactionRecord],
    output: &mut dyn Write,
) -> Result<(), LedgerError> {
    let mut writer = csv::Writer::from_writer(output);

    if records.is_empty() {
        writer.write_record(["kind", "amount", "timestamp"])?;
    }

    for record in records {
        writer.serialize(StatementRow::from(record))?;
    }

    writer.flush()?;

    Ok(())
}
