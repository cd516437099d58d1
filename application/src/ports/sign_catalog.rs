//! Sign catalog source port

use async_trait::async_trait;
use cadastro_domain::SignRecord;
use thiserror::Error;

/// Errors while reading the sign catalog
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Sign catalog unavailable: {0}")]
    Unavailable(String),
}

/// Where sign records come from
///
/// `load` reads the whole source each time it is called; caching is the
/// caller's job (see `ClassifySignUseCase`).
#[async_trait]
pub trait SignCatalogSource: Send + Sync {
    /// Human-readable origin, used in logs
    fn describe(&self) -> String;

    async fn load(&self) -> Result<Vec<SignRecord>, CatalogError>;
}
