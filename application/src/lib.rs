//! Application layer for cadastro
//!
//! This crate contains use cases and port definitions.
//! It depends only on the domain layer.

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::{
    address_lookup::AddressLookup,
    lookup_progress::{LookupProgressNotifier, NoLookupProgress},
    sign_catalog::{CatalogError, SignCatalogSource},
};
pub use use_cases::classify_sign::{ClassifyError, ClassifySignUseCase, MSG_NO_SIGN};
pub use use_cases::lookup_flow::{LookupFlowController, SearchRejected, SubmitError};
