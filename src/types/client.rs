//! Client-related types for the retail ledger

use chrono::NaiveDate;

use crate::types::TaxId;

/// Client identifier
///
/// Assigned by the bank in registration order, starting at 1.
pub type ClientId = u32;

/// Personal data of an individual client
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Individual {
    pub full_name: String,
    pub birth_date: NaiveDate,
    pub tax_id: TaxId,
}

/// Kind of client
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClientKind {
    /// Client known only by address
    Generic,

    /// Natural person identified by CPF
    Individual(Individual),
}
