//! Sign catalog sources: a file on disk or the bundled catalog

use super::records::{CatalogFormat, parse_catalog};
use async_trait::async_trait;
use cadastro_application::{CatalogError, SignCatalogSource};
use cadastro_domain::SignRecord;
use std::path::PathBuf;
use tracing::debug;

/// Catalog compiled into the binary
const BUNDLED_CATALOG: &str = include_str!("../../data/signos.toml");

/// Reads sign records from a `.toml` or `.json` file
pub struct FileSignCatalog {
    path: PathBuf,
}

impl FileSignCatalog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl SignCatalogSource for FileSignCatalog {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    async fn load(&self) -> Result<Vec<SignRecord>, CatalogError> {
        let format = CatalogFormat::from_path(&self.path).ok_or_else(|| {
            CatalogError::Unavailable(format!(
                "{}: unsupported catalog format (expected .toml or .json)",
                self.path.display()
            ))
        })?;

        debug!("Reading sign catalog {}", self.path.display());
        let text = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| CatalogError::Unavailable(format!("{}: {}", self.path.display(), e)))?;

        parse_catalog(&text, format)
    }
}

/// The twelve signs shipped with cadastro
pub struct BundledSignCatalog;

#[async_trait]
impl SignCatalogSource for BundledSignCatalog {
    fn describe(&self) -> String {
        "bundled catalog".to_string()
    }

    async fn load(&self) -> Result<Vec<SignRecord>, CatalogError> {
        parse_catalog(BUNDLED_CATALOG, CatalogFormat::Toml)
    }
}

/// Either catalog source, chosen from configuration
pub enum SignCatalogFile {
    Bundled(BundledSignCatalog),
    File(FileSignCatalog),
}

impl SignCatalogFile {
    /// A file when a path is configured, the bundled catalog otherwise
    pub fn from_config(path: Option<PathBuf>) -> Self {
        match path {
            Some(path) => Self::File(FileSignCatalog::new(path)),
            None => Self::Bundled(BundledSignCatalog),
        }
    }
}

#[async_trait]
impl SignCatalogSource for SignCatalogFile {
    fn describe(&self) -> String {
        match self {
            Self::Bundled(source) => source.describe(),
            Self::File(source) => source.describe(),
        }
    }

    async fn load(&self) -> Result<Vec<SignRecord>, CatalogError> {
        match self {
            Self::Bundled(source) => source.load().await,
            Self::File(source) => source.load().await,
        }
    }
}
