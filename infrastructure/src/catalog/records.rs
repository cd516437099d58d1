//! Catalog file schema and parsing
//!
//! Each record has `name`, `symbol`, `rangeStart` (`DD/MM`), `rangeEnd`
//! (`DD/MM`) and `description`. TOML files list records as `[[signs]]`
//! tables; JSON files are either a bare array or `{"signs": [...]}`.

use cadastro_application::CatalogError;
use cadastro_domain::{DayMonth, DomainError, SignRecord};
use serde::Deserialize;
use std::path::Path;

/// Supported catalog encodings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogFormat {
    Toml,
    Json,
}

impl CatalogFormat {
    /// Pick the format from the file extension
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "toml" => Some(Self::Toml),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

/// One record as written in the file
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawSignRecord {
    pub name: String,
    pub symbol: String,
    pub range_start: String,
    pub range_end: String,
    pub description: String,
}

impl TryFrom<RawSignRecord> for SignRecord {
    type Error = DomainError;

    fn try_from(raw: RawSignRecord) -> Result<Self, Self::Error> {
        if raw.name.trim().is_empty() {
            return Err(DomainError::InvalidSignRecord {
                name: raw.name,
                reason: "empty name".to_string(),
            });
        }

        let start: DayMonth = raw.range_start.parse()?;
        let end: DayMonth = raw.range_end.parse()?;

        Ok(SignRecord::new(raw.name, raw.symbol, start, end, raw.description))
    }
}

#[derive(Deserialize)]
struct TomlCatalog {
    #[serde(default)]
    signs: Vec<RawSignRecord>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum JsonCatalog {
    List(Vec<RawSignRecord>),
    Wrapped { signs: Vec<RawSignRecord> },
}

/// Parse a whole catalog, keeping record order
///
/// Any undecodable record makes the whole catalog unavailable, and so does
/// a catalog with no records at all.
pub fn parse_catalog(text: &str, format: CatalogFormat) -> Result<Vec<SignRecord>, CatalogError> {
    let raw = match format {
        CatalogFormat::Toml => toml::from_str::<TomlCatalog>(text)
            .map(|c| c.signs)
            .map_err(|e| CatalogError::Unavailable(format!("malformed TOML catalog: {}", e)))?,
        CatalogFormat::Json => match serde_json::from_str::<JsonCatalog>(text) {
            Ok(JsonCatalog::List(signs)) | Ok(JsonCatalog::Wrapped { signs }) => signs,
            Err(e) => {
                return Err(CatalogError::Unavailable(format!(
                    "malformed JSON catalog: {}",
                    e
                )));
            }
        },
    };

    if raw.is_empty() {
        return Err(CatalogError::Unavailable(
            "catalog contains no sign records".to_string(),
        ));
    }

    raw.into_iter()
        .map(|record| SignRecord::try_from(record).map_err(|e| CatalogError::Unavailable(e.to_string())))
        .collect()
}
