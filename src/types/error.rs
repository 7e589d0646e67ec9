//! Error types for the retail ledger
//!
//! Every variant is a business-rule rejection or a bad piece of user input.
//! None of them is fatal: the account is left untouched and the caller decides
//! how to report the failure.
//!
//! # Error Categories
//!
//! - **Amount Errors**: non-positive or unparseable amounts, arithmetic overflow
//! - **Withdrawal Errors**: insufficient funds, checking-account caps
//! - **Registry Errors**: malformed or duplicate CPF, unknown client or account
//! - **I/O Errors**: failures writing exported statements

use rust_decimal::Decimal;
use thiserror::Error;

use super::account::AccountNumber;

/// Main error type for the ledger
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LedgerError {
    /// Amount is zero or negative
    #[error("Invalid amount {amount}: must be greater than zero")]
    InvalidAmount {
        /// The rejected amount
        amount: Decimal,
    },

    /// Amount text could not be parsed as a decimal number
    #[error("Invalid amount '{input}'")]
    InvalidAmountInput {
        /// The raw text typed by the user
        input: String,
    },

    /// Withdrawal exceeds the current balance
    ///
    /// The balance is left unchanged.
    #[error("Insufficient funds in account {account}: balance {balance}, requested {requested}")]
    InsufficientFunds {
        /// Account number
        account: AccountNumber,
        /// Balance at the time of the request
        balance: Decimal,
        /// Requested withdrawal amount
        requested: Decimal,
    },

    /// Checking account per-withdrawal cap exceeded
    #[error("Withdrawal of {requested} from account {account} exceeds the limit of {limit}")]
    WithdrawalLimitExceeded {
        /// Account number
        account: AccountNumber,
        /// Configured per-withdrawal limit
        limit: Decimal,
        /// Requested withdrawal amount
        requested: Decimal,
    },

    /// Checking account withdrawal count cap reached
    ///
    /// The count covers every withdrawal in the account history, not only the
    /// current day.
    #[error("Account {account} reached the maximum of {max} withdrawals")]
    DailyWithdrawalCountExceeded {
        /// Account number
        account: AccountNumber,
        /// Configured maximum number of withdrawals
        max: u32,
    },

    /// CPF fails structural or checksum validation
    #[error("Invalid CPF '{tax_id}'")]
    MalformedTaxId {
        /// The CPF as typed
        tax_id: String,
    },

    /// A client with this CPF is already registered
    #[error("A client with CPF {tax_id} already exists")]
    DuplicateTaxId {
        /// The normalized CPF
        tax_id: String,
    },

    /// No client registered under this CPF
    #[error("Client with CPF '{tax_id}' not found")]
    ClientNotFound {
        /// The CPF as typed
        tax_id: String,
    },

    /// Client exists but has no account yet
    #[error("Client with CPF {tax_id} has no account")]
    NoAccount {
        /// The normalized CPF
        tax_id: String,
    },

    /// Account number is not owned by the client
    #[error("Account {account} not found")]
    AccountNotFound {
        /// Account number that was not found
        account: AccountNumber,
    },

    /// Birth date text is not a valid `dd-mm-yyyy` date
    #[error("Invalid birth date '{input}': expected dd-mm-yyyy")]
    InvalidBirthDate {
        /// The raw text typed by the user
        input: String,
    },

    /// Balance arithmetic would overflow
    #[error("Arithmetic overflow in {operation} for account {account}")]
    ArithmeticOverflow {
        /// Operation that would overflow
        operation: String,
        /// Account number
        account: AccountNumber,
    },

    /// I/O error while writing output
    #[error("I/O error: {message}")]
    Io {
        /// Description of the I/O error
        message: String,
    },
}

impl From<std::io::Error> for LedgerError {
    fn from(error: std::io::Error) -> Self {
        LedgerError::Io {
            message: error.to_string(),
        }
    }
}

impl From<csv::Error> for LedgerError {
    fn from(error: csv::Error) -> Self {
        LedgerError::Io {
            message: error.to_string(),
        }
    }
}

// Helper functions for creating common errors

impl LedgerError {
    /// Create an InvalidAmount error
    pub fn invalid_amount(amount: Decimal) -> Self {
        LedgerError::InvalidAmount { amount }
    }

    /// Create an InvalidAmountInput error
    pub fn invalid_amount_input(input: &str) -> Self {
        LedgerError::InvalidAmountInput {
            input: input.to_string(),
        }
    }

    /// Create an InsufficientFunds error
    pub fn insufficient_funds(
        account: AccountNumber,
        balance: Decimal,
        requested: Decimal,
    ) -> Self {
        LedgerError::InsufficientFunds {
            account,
            balance,
            requested,
        }
    }

    /// Create a WithdrawalLimitExceeded error
    pub fn withdrawal_limit_exceeded(
        account: AccountNumber,
        limit: Decimal,
        requested: Decimal,
    ) -> Self {
        LedgerError::WithdrawalLimitExceeded {
            account,
            limit,
            requested,
        }
    }

    /// Create a DailyWithdrawalCountExceeded error
    pub fn withdrawal_count_exceeded(account: AccountNumber, max: u32) -> Self {
        LedgerError::DailyWithdrawalCountExceeded { account, max }
    }

    /// Create a MalformedTaxId error
    pub fn malformed_tax_id(tax_id: &str) -> Self {
        LedgerError::MalformedTaxId {
            tax_id: tax_id.to_string(),
        }
    }

    /// Create a DuplicateTaxId error
    pub fn duplicate_tax_id(tax_id: &str) -> Self {
        LedgerError::DuplicateTaxId {
            tax_id: tax_id.to_string(),
        }
    }

    /// Create a ClientNotFound error
    pub fn client_not_found(tax_id: &str) -> Self {
        LedgerError::ClientNotFound {
            tax_id: tax_id.to_string(),
        }
    }

    /// Create a NoAccount error
    pub fn no_account(tax_id: &str) -> Self {
        LedgerError::NoAccount {
            tax_id: tax_id.to_string(),
        }
    }

    /// Create an AccountNotFound error
    pub fn account_not_found(account: AccountNumber) -> Self {
        LedgerError::AccountNotFound { account }
    }

    /// Create an InvalidBirthDate error
    pub fn invalid_birth_date(input: &str) -> Self {
        LedgerError::InvalidBirthDate {
            input: input.to_string(),
        }
    }

    /// Create an ArithmeticOverflow error
    pub fn arithmetic_overflow(operation: &str, account: AccountNumber) -> Self {
        LedgerError::ArithmeticOverflow {
            operation: operation.to_string(),
            account,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal::Decimal;

    #[rstest]
    #[case::invalid_amount(
        LedgerError::InvalidAmount { amount: Decimal::new(-500, 2) },
        "Invalid amount -5.00: must be greater than zero"
    )]
    #[case::invalid_amount_input(
        LedgerError::InvalidAmountInput { input: "abc".to_string() },
        "Invalid amount 'abc'"
    )]
    #[case::insufficient_funds(
        LedgerError::InsufficientFunds { account: 1, balance: Decimal::new(5000, 2), requested: Decimal::new(10000, 2) },
        "Insufficient funds in account 1: balance 50.00, requested 100.00"
    )]
    #[case::limit_exceeded(
        LedgerError::WithdrawalLimitExceeded { account: 2, limit: Decimal::new(500, 0), requested: Decimal::new(600, 0) },
        "Withdrawal of 600 from account 2 exceeds the limit of 500"
    )]
    #[case::count_exceeded(
        LedgerError::DailyWithdrawalCountExceeded { account: 3, max: 3 },
        "Account 3 reached the maximum of 3 withdrawals"
    )]
    #[case::malformed_tax_id(
        LedgerError::MalformedTaxId { tax_id: "123".to_string() },
        "Invalid CPF '123'"
    )]
    #[case::duplicate_tax_id(
        LedgerError::DuplicateTaxId { tax_id: "11144477735".to_string() },
        "A client with CPF 11144477735 already exists"
    )]
    #[case::client_not_found(
        LedgerError::ClientNotFound { tax_id: "999".to_string() },
        "Client with CPF '999' not found"
    )]
    #[case::account_not_found(
        LedgerError::AccountNotFound { account: 42 },
        "Account 42 not found"
    )]
    #[case::arithmetic_overflow(
        LedgerError::ArithmeticOverflow { operation: "deposit".to_string(), account: 1 },
        "Arithmetic overflow in deposit for account 1"
    )]
    fn test_error_display(#[case] error: LedgerError, #[case] expected: &str) {
        assert_eq!(error.to_string(), expected);
    }

    #[rstest]
    #[case::insufficient_funds(
        LedgerError::insufficient_funds(1, Decimal::new(5000, 2), Decimal::new(10000, 2)),
        LedgerError::InsufficientFunds { account: 1, balance: Decimal::new(5000, 2), requested: Decimal::new(10000, 2) }
    )]
    #[case::count_exceeded(
        LedgerError::withdrawal_count_exceeded(7, 3),
        LedgerError::DailyWithdrawalCountExceeded { account: 7, max: 3 }
    )]
    #[case::client_not_found(
        LedgerError::client_not_found("123"),
        LedgerError::ClientNotFound { tax_id: "123".to_string() }
    )]
    #[case::birth_date(
        LedgerError::invalid_birth_date("31-02-2000"),
        LedgerError::InvalidBirthDate { input: "31-02-2000".to_string() }
    )]
    fn test_helper_functions(#[case] result: LedgerError, #[case] expected: LedgerError) {
        assert_eq!(result, expected);
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "Broken pipe");
        let error: LedgerError = io_error.into();
        assert!(matches!(error, LedgerError::Io { .. }));
        assert_eq!(error.to_string(), "I/O error: Broken pipe");
    }
}
