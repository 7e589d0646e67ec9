//! Client and account registry
//!
//! This module provides the `Bank`, which owns every client (and, through
//! them, every account) and orchestrates the operations the shell offers:
//! registering clients, opening accounts, moving money and building
//! statements.
//!
//! The bank enforces the registry rules:
//! - A CPF must be valid and can belong to one client only
//! - Account numbers are sequential across the whole bank
//! - Money operations target the client's first account

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::debug;

use crate::core::account::Account;
use crate::core::client::Client;
use crate::core::cpf;
use crate::core::transaction::Transaction;
use crate::types::{
    AccountLimits, AccountNumber, ClientId, Individual, LedgerError, TransactionRecord,
};

/// In-memory registry of clients and their accounts
#[derive(Debug, Default)]
pub struct Bank {
    clients: Vec<Client>,
    /// Limits given to every checking account opened from now on
    limits: AccountLimits,
}

impl Bank {
    /// Create an empty bank with default account limits
    pub fn new() -> Self {
        Bank::with_limits(AccountLimits::default())
    }

    /// Create an empty bank whose checking accounts use `limits`
    pub fn with_limits(limits: AccountLimits) -> Self {
        Bank {
            clients: Vec::new(),
            limits,
        }
    }

    pub fn limits(&self) -> &AccountLimits {
        &self.limits
    }

    pub fn clients(&self) -> &[Client] {
        &self.clients
    }

    pub fn client(&self, id: ClientId) -> Option<&Client> {
        self.clients.iter().find(|client| client.id() == id)
    }

    /// Find the individual client holding this CPF
    ///
    /// Punctuation in `tax_id` is ignored.
    pub fn find_client(&self, tax_id: &str) -> Option<&Client> {
        self.clients
            .iter()
            .find(|client| client.tax_id().is_some_and(|id| id.matches(tax_id)))
    }

    fn find_client_mut(&mut self, tax_id: &str) -> Option<&mut Client> {
        self.clients
            .iter_mut()
            .find(|client| client.tax_id().is_some_and(|id| id.matches(tax_id)))
    }

    fn next_client_id(&self) -> ClientId {
        self.clients.len() as ClientId + 1
    }

    /// Register a client known only by address
    pub fn register_client(&mut self, address: &str) -> ClientId {
        let id = self.next_client_id();
        self.clients.push(Client::new(id, address));

        debug!(client = id, "client registered");
        id
    }

    /// Register an individual client
    ///
    /// # Errors
    ///
    /// - `MalformedTaxId` if the CPF fails validation
    /// - `DuplicateTaxId` if another client already holds the CPF
    pub fn register_individual(
        &mut self,
        tax_id: &str,
        full_name: &str,
        birth_date: NaiveDate,
        address: &str,
    ) -> Result<ClientId, LedgerError> {
        let tax_id = cpf::parse(tax_id)?;

        if self.find_client(tax_id.as_str()).is_some() {
            return Err(LedgerError::duplicate_tax_id(tax_id.as_str()));
        }

        let id = self.next_client_id();
        self.clients.push(Client::individual(
            id,
            address,
            Individual {
                full_name: full_name.to_string(),
                birth_date,
                tax_id,
            },
        ));

        debug!(client = id, "individual client registered");
        Ok(id)
    }

    /// Total number of accounts across all clients
    pub fn account_count(&self) -> usize {
        self.clients
            .iter()
            .map(|client| client.accounts().len())
            .sum()
    }

    /// Open a checking account for the client holding this CPF
    ///
    /// The account number is the bank's account count plus one.
    ///
    /// # Errors
    ///
    /// Returns `ClientNotFound` if no client holds the CPF.
    pub fn open_checking_account(&mut self, tax_id: &str) -> Result<AccountNumber, LedgerError> {
        let number = self.account_count() as AccountNumber + 1;
        let limits = self.limits;

        let client = self
            .find_client_mut(tax_id)
            .ok_or_else(|| LedgerError::client_not_found(tax_id))?;

        client.add_account(Account::checking(number, client.id(), limits));

        debug!(account = number, client = client.id(), "checking account opened");
        Ok(number)
    }

    /// Deposit into the first account of the client holding this CPF
    pub fn deposit(&mut self, tax_id: &str, amount: Decimal) -> Result<(), LedgerError> {
        self.execute(tax_id, Transaction::Deposit(amount))
    }

    /// Withdraw from the first account of the client holding this CPF
    pub fn withdraw(&mut self, tax_id: &str, amount: Decimal) -> Result<(), LedgerError> {
        self.execute(tax_id, Transaction::Withdrawal(amount))
    }

    /// Route a transaction to a client's first account
    ///
    /// # Errors
    ///
    /// - `ClientNotFound` if no client holds the CPF
    /// - `NoAccount` if the client has not opened an account
    /// - any rejection from the account itself
    fn execute(&mut self, tax_id: &str, transaction: Transaction) -> Result<(), LedgerError> {
        let client = self
            .find_client_mut(tax_id)
            .ok_or_else(|| LedgerError::client_not_found(tax_id))?;

        let number = client
            .primary_account()
            .map(Account::number)
            .ok_or_else(|| LedgerError::no_account(tax_id))?;

        client.apply_transaction(number, &transaction)
    }

    /// Statement of the first account of the client holding this CPF
    ///
    /// # Errors
    ///
    /// - `ClientNotFound` if no client holds the CPF
    /// - `NoAccount` if the client has not opened an account
    pub fn statement(&self, tax_id: &str) -> Result<Statement<'_>, LedgerError> {
        let client = self
            .find_client(tax_id)
            .ok_or_else(|| LedgerError::client_not_found(tax_id))?;

        let account = client
            .primary_account()
            .ok_or_else(|| LedgerError::no_account(tax_id))?;

        Ok(Statement {
            holder: client.full_name().unwrap_or_default(),
            account,
        })
    }

    /// Every account paired with its holder, ordered by account number
    pub fn accounts(&self) -> Vec<(&Account, &Client)> {
        let mut accounts: Vec<(&Account, &Client)> = self
            .clients
            .iter()
            .flat_map(|client| client.accounts().iter().map(move |account| (account, client)))
            .collect();
        accounts.sort_by_key(|(account, _)| account.number());
        accounts
    }
}

/// Read-only view of one account for statement rendering
#[derive(Debug, Clone, Copy)]
pub struct Statement<'a> {
    holder: &'a str,
    account: &'a Account,
}

impl<'a> Statement<'a> {
    pub fn holder(&self) -> &'a str {
        self.holder
    }

    pub fn account(&self) -> &'a Account {
        self.account
    }

    pub fn records(&self) -> &'a [TransactionRecord] {
        self.account.history().records()
    }

    pub fn balance(&self) -> Decimal {
        self.account.balance()
    }
}
