//! Account balance management
//!
//! This module provides the `Account` struct, which owns a balance and the
//! history of the transactions applied to it.
//!
//! The Account is responsible for:
//! - Rejecting non-positive amounts
//! - Keeping the balance non-negative (no overdraft)
//! - Enforcing the per-withdrawal and withdrawal-count caps of checking accounts
//!
//! Balance operations do not touch the history. Records are appended by
//! [`Transaction::apply`](crate::core::transaction::Transaction::apply) after
//! a successful operation, which keeps the two in lockstep.

use std::fmt;

use crate::core::history::History;
use crate::types::{
    AccountKind, AccountLimits, AccountNumber, ClientId, LedgerError, TransactionKind, BRANCH,
};
use rust_decimal::Decimal;
use tracing::{debug, info};

/// A bank account
///
/// # Invariants
///
/// - `balance >= 0` after every operation
/// - the owner is referenced by id only; the client owns the account
#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    number: AccountNumber,
    owner: ClientId,
    balance: Decimal,
    kind: AccountKind,
    history: History,
}

impl Account {
    /// Create a basic account with zero balance and empty history
    pub fn basic(number: AccountNumber, owner: ClientId) -> Self {
        Account::with_kind(number, owner, AccountKind::Basic)
    }

    /// Create a checking account with zero balance and empty history
    pub fn checking(number: AccountNumber, owner: ClientId, limits: AccountLimits) -> Self {
        Account::with_kind(number, owner, AccountKind::Checking(limits))
    }

    fn with_kind(number: AccountNumber, owner: ClientId, kind: AccountKind) -> Self {
        Account {
            number,
            owner,
            balance: Decimal::ZERO,
            kind,
            history: History::new(),
        }
    }

    pub fn number(&self) -> AccountNumber {
        self.number
    }

    pub fn branch(&self) -> &'static str {
        BRANCH
    }

    /// Id of the client holding this account
    pub fn owner(&self) -> ClientId {
        self.owner
    }

    pub fn balance(&self) -> Decimal {
        self.balance
    }

    pub fn kind(&self) -> &AccountKind {
        &self.kind
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub(crate) fn history_mut(&mut self) -> &mut History {
        &mut self.history
    }

    /// Deposit funds, reporting success as a boolean
    ///
    /// Returns `false` and leaves the balance untouched when the amount is not
    /// positive.
    pub fn deposit(&mut self, amount: Decimal) -> bool {
        self.try_deposit(amount).is_ok()
    }

    /// Deposit funds into the account
    ///
    /// # Errors
    ///
    /// - `InvalidAmount` if `amount <= 0`
    /// - `ArithmeticOverflow` if the balance cannot hold the result
    pub fn try_deposit(&mut self, amount: Decimal) -> Result<(), LedgerError> {
        let result = self.credit(amount);

        match &result {
            Ok(()) => debug!(
                account = self.number,
                %amount,
                balance = %self.balance,
                "deposit accepted"
            ),
            Err(error) => info!(account = self.number, %amount, %error, "deposit rejected"),
        }

        result
    }

    fn credit(&mut self, amount: Decimal) -> Result<(), LedgerError> {
        if amount <= Decimal::ZERO {
            return Err(LedgerError::invalid_amount(amount));
        }

        self.balance = self
            .balance
            .checked_add(amount)
            .ok_or_else(|| LedgerError::arithmetic_overflow("deposit", self.number))?;

        Ok(())
    }

    /// Withdraw funds, reporting success as a boolean
    ///
    /// Returns `false` and leaves the balance untouched when any rule rejects
    /// the withdrawal.
    pub fn withdraw(&mut self, amount: Decimal) -> bool {
        self.try_withdraw(amount).is_ok()
    }

    /// Withdraw funds from the account
    ///
    /// Checking accounts are checked against their caps first, in this order:
    /// per-withdrawal limit, then withdrawal count. Every account is then
    /// checked for sufficient funds, then for a positive amount.
    ///
    /// # Errors
    ///
    /// - `WithdrawalLimitExceeded` if `amount` exceeds the checking limit
    /// - `DailyWithdrawalCountExceeded` if the history already holds the
    ///   maximum number of withdrawals
    /// - `InsufficientFunds` if `amount > balance`
    /// - `InvalidAmount` if `amount <= 0`
    pub fn try_withdraw(&mut self, amount: Decimal) -> Result<(), LedgerError> {
        let result = match self.kind {
            AccountKind::Basic => self.debit(amount),
            AccountKind::Checking(limits) => self
                .check_limits(&limits, amount)
                .and_then(|()| self.debit(amount)),
        };

        match &result {
            Ok(()) => debug!(
                account = self.number,
                %amount,
                balance = %self.balance,
                "withdrawal accepted"
            ),
            Err(error) => info!(account = self.number, %amount, %error, "withdrawal rejected"),
        }

        result
    }

    /// Checking-account caps
    ///
    /// The count covers the whole history, it is not reset per day.
    fn check_limits(&self, limits: &AccountLimits, amount: Decimal) -> Result<(), LedgerError> {
        if amount > limits.withdrawal_limit {
            return Err(LedgerError::withdrawal_limit_exceeded(
                self.number,
                limits.withdrawal_limit,
                amount,
            ));
        }

        let withdrawals = self.history.count(TransactionKind::Withdrawal);
        if withdrawals >= limits.max_withdrawals as usize {
            return Err(LedgerError::withdrawal_count_exceeded(
                self.number,
                limits.max_withdrawals,
            ));
        }

        Ok(())
    }

    fn debit(&mut self, amount: Decimal) -> Result<(), LedgerError> {
        if amount > self.balance {
            return Err(LedgerError::insufficient_funds(
                self.number,
                self.balance,
                amount,
            ));
        }

        if amount <= Decimal::ZERO {
            return Err(LedgerError::invalid_amount(amount));
        }

        // amount <= balance, so the result is never negative
        self.balance -= amount;

        Ok(())
    }

    /// Three-line display block: branch, account number and holder name
    pub fn label<'a>(&'a self, holder: &'a str) -> AccountLabel<'a> {
        AccountLabel {
            account: self,
            holder,
        }
    }
}

/// Display adapter produced by [`Account::label`]
pub struct AccountLabel<'a> {
    account: &'a Account,
    holder: &'a str,
}

impl fmt::Display for AccountLabel<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Branch:\t\t{}", self.account.branch())?;
        writeln!(f, "Account:\t{}", self.account.number())?;
        write!(f, "Holder:\t\t{}", self.holder)
    }
}
