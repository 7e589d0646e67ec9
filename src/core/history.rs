//! Per-account transaction history
//!
//! This module provides the History component: an append-only, ordered log of
//! the transactions that succeeded on one account. Records are never
//! reordered, edited or removed.

use crate::types::{TransactionKind, TransactionRecord};
use chrono::Local;
use rust_decimal::Decimal;

/// Append-only transaction log of a single account
#[derive(Debug, Clone, Default, PartialEq)]
pub struct History {
    /// Records in the order they were appended
    records: Vec<TransactionRecord>,
}

impl History {
    /// Create an empty history
    pub fn new() -> Self {
        History {
            records: Vec::new(),
        }
    }

    /// Read-only view of the records, oldest first
    pub fn records(&self) -> &[TransactionRecord] {
        &self.records
    }

    /// Append a record stamped with the current local time
    ///
    /// Always succeeds; there is no capacity bound.
    pub(crate) fn append(&mut self, kind: TransactionKind, amount: Decimal) {
        self.records.push(TransactionRecord::new(kind, amount, Local::now()));
    }

    /// Number of records of the given kind
    pub fn count(&self, kind: TransactionKind) -> usize {
        self.records
            .iter()
            .filter(|record| record.kind() == kind)
            .count()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
