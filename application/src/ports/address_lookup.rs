//! Address lookup port
//!
//! Defines the interface for resolving a CEP into an address.

use async_trait::async_trait;
use cadastro_domain::{LookupOutcome, PostalIdentifier};

/// Remote address lookup
///
/// Implementations make exactly one attempt per call and report every
/// failure through [`LookupOutcome`] instead of an error type, so callers
/// only ever match on the outcome tag.
#[async_trait]
pub trait AddressLookup: Send + Sync {
    async fn fetch_address(&self, identifier: &PostalIdentifier) -> LookupOutcome;
}
