//! Display formatting and live input masking for CEP fields

use super::identifier::{CEP_LENGTH, PostalIdentifier, strip_non_digits};

/// Digits before the hyphen
const PREFIX_LEN: usize = 5;

/// Render a validated identifier as `DDDDD-DDD`
pub fn format(identifier: &PostalIdentifier) -> String {
    identifier.formatted()
}

/// Mask partially typed input
///
/// Keeps at most eight digits and inserts the hyphen once a sixth digit
/// exists. Works on incomplete input, so it can run on every keystroke.
/// `mask_partial(mask_partial(x)) == mask_partial(x)`.
pub fn mask_partial(raw: &str) -> String {
    let mut digits = strip_non_digits(raw);
    digits.truncate(CEP_LENGTH);

    if digits.len() > PREFIX_LEN {
        digits.insert(PREFIX_LEN, '-');
    }

    digits
}
