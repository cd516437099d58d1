//! Infrastructure layer for cadastro
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod catalog;
pub mod config;
pub mod viacep;

// Re-export commonly used types
pub use catalog::{BundledSignCatalog, FileSignCatalog, SignCatalogFile};
pub use config::{
    ConfigLoader, ConfigValidationError, FileConfig, FileLookupConfig, FileOutputConfig,
    FileOutputFormat, FileZodiacConfig,
};
pub use viacep::{ViaCepClient, ViaCepError};
