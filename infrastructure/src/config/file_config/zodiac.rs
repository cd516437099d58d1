//! Sign catalog configuration from TOML (`[zodiac]` section)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Raw zodiac configuration from TOML
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileZodiacConfig {
    /// Catalog file (`.toml` or `.json`); the bundled catalog when unset
    pub catalog_path: Option<PathBuf>,
}
