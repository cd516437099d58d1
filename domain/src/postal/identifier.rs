//! Postal identifier (CEP) value object and its validator

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Number of digits in a normalized CEP
pub const CEP_LENGTH: usize = 8;

/// Reasons a raw CEP input is rejected
///
/// The display strings are the user-facing messages shown next to the field.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("CEP deve ter 8 dígitos")]
    WrongLength,

    #[error("CEP inválido")]
    RepeatedDigitPattern,
}

/// A normalized CEP: exactly eight decimal digits (Value Object)
///
/// Only constructed through [`PostalIdentifier::validate`], so holding one
/// means the digits already passed the length and sentinel checks.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PostalIdentifier(String);

impl PostalIdentifier {
    /// Strip every non-digit from `raw` and validate what is left
    pub fn validate(raw: &str) -> Result<Self, ValidationError> {
        let digits = strip_non_digits(raw);

        if digits.len() != CEP_LENGTH {
            return Err(ValidationError::WrongLength);
        }

        if is_repeated_digit(&digits) {
            return Err(ValidationError::RepeatedDigitPattern);
        }

        Ok(Self(digits))
    }

    /// The eight digits, without separator
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Display form: `DDDDD-DDD`
    pub fn formatted(&self) -> String {
        let (prefix, suffix) = self.0.split_at(5);
        format!("{}-{}", prefix, suffix)
    }
}

impl std::fmt::Display for PostalIdentifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Keep only ASCII digits
pub fn strip_non_digits(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).collect()
}

// "00000000", "11111111", ... are reserved sentinels, never real CEPs
fn is_repeated_digit(digits: &str) -> bool {
    let mut chars = digits.chars();
    match chars.next() {
        Some(first) => chars.all(|c| c == first),
        None => false,
    }
}
