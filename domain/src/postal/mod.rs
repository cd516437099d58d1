//! Postal identifier (CEP) domain
//!
//! Validation, display formatting, input masking and the address types
//! produced by a lookup.

pub mod address;
pub mod identifier;
pub mod mask;

pub use address::{AddressRecord, LookupOutcome};
pub use identifier::{PostalIdentifier, ValidationError};
pub use mask::{format, mask_partial};
