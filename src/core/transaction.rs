//! Deposit and withdrawal commands
//!
//! A `Transaction` is built for one user action, applied once to an account
//! and dropped. Only the record it leaves in the account history survives.

use crate::core::account::Account;
use crate::types::{LedgerError, TransactionKind};
use rust_decimal::Decimal;

/// A single deposit or withdrawal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transaction {
    Deposit(Decimal),
    Withdrawal(Decimal),
}

impl Transaction {
    pub fn amount(&self) -> Decimal {
        match self {
            Transaction::Deposit(amount) | Transaction::Withdrawal(amount) => *amount,
        }
    }

    pub fn kind(&self) -> TransactionKind {
        match self {
            Transaction::Deposit(_) => TransactionKind::Deposit,
            Transaction::Withdrawal(_) => TransactionKind::Withdrawal,
        }
    }

    /// Apply to `account`, reporting success as a boolean
    pub fn apply(&self, account: &mut Account) -> bool {
        self.try_apply(account).is_ok()
    }

    /// Apply to `account` and record the result
    ///
    /// Runs the matching account operation. Exactly one history record is
    /// appended when it succeeds, none when it fails.
    ///
    /// # Errors
    ///
    /// Propagates the rejection of [`Account::try_deposit`] or
    /// [`Account::try_withdraw`].
    pub fn try_apply(&self, account: &mut Account) -> Result<(), LedgerError> {
        match self {
            Transaction::Deposit(amount) => account.try_deposit(*amount)?,
            Transaction::Withdrawal(amount) => account.try_withdraw(*amount)?,
        }

        account.history_mut().append(self.kind(), self.amount());

        Ok(())
    }
}
