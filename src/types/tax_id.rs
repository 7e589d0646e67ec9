//! CPF identifier type
//!
//! A `TaxId` only ever holds the 11 digits of a CPF that passed the checksum.
//! Validation lives in [`crate::core::cpf`], which is the only place that
//! builds one.

use std::fmt;

/// A validated CPF, stored as its 11 digits
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TaxId(String);

impl TaxId {
    /// Wrap digits that already passed validation
    pub(crate) fn from_digits(digits: String) -> Self {
        TaxId(digits)
    }

    /// The bare 11 digits
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether `input` names this CPF once punctuation is stripped
    pub fn matches(&self, input: &str) -> bool {
        strip_mask(input) == self.0
    }
}

impl fmt::Display for TaxId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = &self.0;
        write!(
            f,
            "{}.{}.{}-{}",
            &digits[0..3],
            &digits[3..6],
            &digits[6..9],
            &digits[9..11]
        )
    }
}

/// Keep only the ASCII digits of `input`
pub(crate) fn strip_mask(input: &str) -> String {
    input.chars().filter(|c| c.is_ascii_digit()).collect()
}
