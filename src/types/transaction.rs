//! Transaction-related types for the retail ledger
//!
//! This module defines the transaction kinds and the immutable records kept
//! in an account history. The `Transaction` command value itself lives in
//! [`crate::core::transaction`].

use chrono::{DateTime, Local};
use rust_decimal::Decimal;
use serde::Serialize;
use std::fmt;

/// Transaction kinds supported by the ledger
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    /// Credit funds to an account
    Deposit,

    /// Debit funds from an account
    ///
    /// Requires sufficient balance and, for checking accounts, respects the
    /// withdrawal caps.
    Withdrawal,
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransactionKind::Deposit => f.write_str("Deposit"),
            TransactionKind::Withdrawal => f.write_str("Withdrawal"),
        }
    }
}

/// Snapshot of a successful transaction
///
/// Records are created only by the history and never change afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionRecord {
    kind: TransactionKind,
    amount: Decimal,
    timestamp: DateTime<Local>,
}

impl TransactionRecord {
    pub(crate) fn new(kind: TransactionKind, amount: Decimal, timestamp: DateTime<Local>) -> Self {
        TransactionRecord {
            kind,
            amount,
            timestamp,
        }
    }

    pub fn kind(&self) -> TransactionKind {
        self.kind
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    /// Local wall-clock time at which the record was appended
    pub fn timestamp(&self) -> DateTime<Local> {
        self.timestamp
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(TransactionKind::Deposit, "Deposit")]
    #[case(TransactionKind::Withdrawal, "Withdrawal")]
    fn test_kind_display(#[case] kind: TransactionKind, #[case] expected: &str) {
        assert_eq!(kind.to_string(), expected);
    }

    #[test]
    fn test_record_accessors() {
        let now = Local::now();
        let record = TransactionRecord::new(TransactionKind::Deposit, Decimal::new(1000, 0), now);
        assert_eq!(record.kind(), TransactionKind::Deposit);
        assert_eq!(record.amount(), Decimal::new(1000, 0));
        assert_eq!(record.timestamp(), now);
    }
}
