//! Account-related types for the retail ledger
//!
//! This module defines account identifiers, the closed set of account kinds
//! and the withdrawal limits applied to checking accounts.

use rust_decimal::Decimal;
use tracing::warn;

/// Account number
///
/// Numbers are assigned sequentially by the bank, starting at 1.
pub type AccountNumber = u32;

/// Routing code shared by every account in the system
pub const BRANCH: &str = "0001";

/// Withdrawal limits for checking accounts
///
/// Both values are fixed when the account is opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccountLimits {
    /// Largest amount accepted by a single withdrawal
    pub withdrawal_limit: Decimal,

    /// Number of withdrawals the account accepts over its whole history
    pub max_withdrawals: u32,
}

impl Default for AccountLimits {
    fn default() -> Self {
        Self {
            withdrawal_limit: Decimal::new(50000, 2),
            max_withdrawals: 3,
        }
    }
}

impl AccountLimits {
    /// Create limits with custom values
    ///
    /// A non-positive withdrawal limit or a zero withdrawal count would make the
    /// account unable to withdraw at all, so those values fall back to the
    /// defaults with a warning.
    pub fn new(withdrawal_limit: Decimal, max_withdrawals: u32) -> Self {
        let default = Self::default();

        let withdrawal_limit = if withdrawal_limit <= Decimal::ZERO {
            warn!(
                "invalid withdrawal limit ({}), using default ({})",
                withdrawal_limit, default.withdrawal_limit
            );
            default.withdrawal_limit
        } else {
            withdrawal_limit
        };

        let max_withdrawals = if max_withdrawals == 0 {
            warn!(
                "invalid max withdrawals ({}), using default ({})",
                max_withdrawals, default.max_withdrawals
            );
            default.max_withdrawals
        } else {
            max_withdrawals
        };

        Self {
            withdrawal_limit,
            max_withdrawals,
        }
    }
}

/// Kind of account
///
/// A basic account only guards against overdraft. A checking account also
/// caps the size of each withdrawal and the number of withdrawals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountKind {
    /// Plain account: deposits and withdrawals bounded by the balance
    Basic,

    /// Checking account with per-withdrawal and withdrawal-count caps
    Checking(AccountLimits),
}

impl AccountKind {
    /// Limits of a checking account, `None` for a basic one
    pub fn limits(&self) -> Option<&AccountLimits> {
        match self {
            AccountKind::Basic => None,
            AccountKind::Checking(limits) => Some(limits),
        }
    }
}
