//! Sign catalog adapters
//!
//! Implement `SignCatalogSource` for catalog files and for the catalog
//! bundled with the binary.

mod file;
mod records;

pub use file::{BundledSignCatalog, FileSignCatalog, SignCatalogFile};
pub use records::{CatalogFormat, RawSignRecord, parse_catalog};
