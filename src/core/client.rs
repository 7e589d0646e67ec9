//! Bank clients
//!
//! A client owns its accounts and routes transactions to them.

use chrono::NaiveDate;

use crate::core::account::Account;
use crate::core::transaction::Transaction;
use crate::types::{AccountNumber, ClientId, ClientKind, Individual, LedgerError, TaxId};

/// A bank client and the accounts it holds
#[derive(Debug, Clone, PartialEq)]
pub struct Client {
    id: ClientId,
    address: String,
    kind: ClientKind,
    /// Accounts in the order they were opened
    accounts: Vec<Account>,
}

impl Client {
    /// Create a client known only by address
    pub fn new(id: ClientId, address: impl Into<String>) -> Self {
        Client {
            id,
            address: address.into(),
            kind: ClientKind::Generic,
            accounts: Vec::new(),
        }
    }

    /// Create an individual client
    pub fn individual(id: ClientId, address: impl Into<String>, person: Individual) -> Self {
        Client {
            id,
            address: address.into(),
            kind: ClientKind::Individual(person),
            accounts: Vec::new(),
        }
    }

    pub fn id(&self) -> ClientId {
        self.id
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn kind(&self) -> &ClientKind {
        &self.kind
    }

    pub fn full_name(&self) -> Option<&str> {
        match &self.kind {
            ClientKind::Individual(person) => Some(&person.full_name),
            ClientKind::Generic => None,
        }
    }

    pub fn tax_id(&self) -> Option<&TaxId> {
        match &self.kind {
            ClientKind::Individual(person) => Some(&person.tax_id),
            ClientKind::Generic => None,
        }
    }

    pub fn birth_date(&self) -> Option<NaiveDate> {
        match &self.kind {
            ClientKind::Individual(person) => Some(person.birth_date),
            ClientKind::Generic => None,
        }
    }

    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    pub fn account(&self, number: AccountNumber) -> Option<&Account> {
        self.accounts
            .iter()
            .find(|account| account.number() == number)
    }

    /// First account opened by the client, if any
    pub fn primary_account(&self) -> Option<&Account> {
        self.accounts.first()
    }

    /// Take ownership of an account
    ///
    /// No duplicate check is made.
    pub fn add_account(&mut self, account: Account) {
        self.accounts.push(account);
    }

    /// Apply `transaction` to the owned account with the given number
    ///
    /// # Errors
    ///
    /// - `AccountNotFound` if the client holds no account with that number
    /// - any rejection from [`Transaction::try_apply`]
    pub fn apply_transaction(
        &mut self,
        number: AccountNumber,
        transaction: &Transaction,
    ) -> Result<(), LedgerError> {
        let account = self
            .accounts
            .iter_mut()
            .find(|account| account.number() == number)
            .ok_or_else(|| LedgerError::account_not_found(number))?;

        transaction.try_apply(account)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::cpf;
    use crate::types::AccountLimits;
    use rust_decimal::Decimal;

    fn maria() -> Client {
        Client::individual(
            1,
            "Rua A, 10 - Centro - Recife/PE",
            Individual {
                full_name: "Maria Silva".to_string(),
                birth_date: NaiveDate::from_ymd_opt(1990, 5, 17).unwrap(),
                tax_id: cpf::parse("11144477735").unwrap(),
            },
        )
    }

    #[test]
    fn test_individual_accessors() {
        let client = maria();

        assert_eq!(client.id(), 1);
        assert_eq!(client.address(), "Rua A, 10 - Centro - Recife/PE");
        assert_eq!(client.full_name(), Some("Maria Silva"));
        assert_eq!(client.tax_id().map(TaxId::as_str), Some("11144477735"));
        assert_eq!(client.birth_date(), NaiveDate::from_ymd_opt(1990, 5, 17));
        assert!(client.accounts().is_empty());
        assert!(client.primary_account().is_none());
    }

    #[test]
    fn test_generic_client_has_no_personal_data() {
        let client = Client::new(2, "Av. B, 200");

        assert_eq!(client.kind(), &ClientKind::Generic);
        assert!(client.full_name().is_none());
        assert!(client.tax_id().is_none());
        assert!(client.birth_date().is_none());
    }

    #[test]
    fn test_add_account_keeps_order_and_duplicates() {
        let mut client = maria();

        client.add_account(Account::checking(3, 1, AccountLimits::default()));
        client.add_account(Account::basic(5, 1));
        client.add_account(Account::basic(5, 1));

        let numbers: Vec<AccountNumber> = client.accounts().iter().map(Account::number).collect();
        assert_eq!(numbers, vec![3, 5, 5]);
        assert_eq!(client.primary_account().map(Account::number), Some(3));
    }

    #[test]
    fn test_apply_transaction_targets_account() {
        let mut client = maria();
        client.add_account(Account::basic(1, 1));
        client.add_account(Account::basic(2, 1));

        client
            .apply_transaction(2, &Transaction::Deposit(Decimal::new(300, 0)))
            .unwrap();

        assert_eq!(client.account(1).unwrap().balance(), Decimal::ZERO);
        assert_eq!(client.account(2).unwrap().balance(), Decimal::new(300, 0));
        assert_eq!(client.account(2).unwrap().history().len(), 1);
    }

    #[test]
    fn test_apply_transaction_unknown_account() {
        let mut client = maria();

        let result = client.apply_transaction(9, &Transaction::Deposit(Decimal::ONE));

        assert_eq!(result, Err(LedgerError::account_not_found(9)));
    }

    #[test]
    fn test_apply_transaction_propagates_rejection() {
        let mut client = maria();
        client.add_account(Account::basic(1, 1));

        let result = client.apply_transaction(1, &Transaction::Withdrawal(Decimal::ONE));

        assert!(matches!(result, Err(LedgerError::InsufficientFunds { .. })));
        assert!(client.account(1).unwrap().history().is_empty());
    }
}
