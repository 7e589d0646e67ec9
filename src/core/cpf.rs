//! CPF (Brazilian individual taxpayer number) validation
//!
//! A CPF has 11 digits; the last two are check digits computed from the
//! preceding ones with a mod-11 weighted sum. Punctuation such as the usual
//! `000.000.000-00` mask is ignored.

use crate::types::tax_id::strip_mask;
use crate::types::{LedgerError, TaxId};

const CPF_LENGTH: usize = 11;

/// Check whether `tax_id` is a well-formed CPF
///
/// All non-digit characters are stripped first. The remaining digits must be
/// exactly 11, not all equal, and both check digits must match.
///
/// Never panics: any malformed input yields `false`.
pub fn validate(tax_id: &str) -> bool {
    let digits: Vec<u32> = tax_id.chars().filter_map(|c| c.to_digit(10)).collect();

    if digits.len() != CPF_LENGTH || digits.iter().all(|&digit| digit == digits[0]) {
        return false;
    }

    (9..CPF_LENGTH).all(|position| check_digit(&digits[..position]) == digits[position])
}

/// Check digit for the digits preceding it
///
/// Digit `n` is weighted by `(len + 1) - n`.
fn check_digit(prefix: &[u32]) -> u32 {
    let top_weight = prefix.len() as u32 + 1;
    let sum: u32 = prefix
        .iter()
        .enumerate()
        .map(|(n, &digit)| digit * (top_weight - n as u32))
        .sum();

    ((sum * 10) % 11) % 10
}

/// Validate a CPF and keep its digits
///
/// # Errors
///
/// Returns `MalformedTaxId` when [`validate`] rejects the input.
pub fn parse(input: &str) -> Result<TaxId, LedgerError> {
    if !validate(input) {
        return Err(LedgerError::malformed_tax_id(input));
    }

    Ok(TaxId::from_digits(strip_mask(input)))
}
