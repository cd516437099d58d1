//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod lookup;
mod output;
mod zodiac;

pub use lookup::{DEFAULT_ENDPOINT, FileLookupConfig};
pub use output::{FileOutputConfig, FileOutputFormat};
pub use zodiac::FileZodiacConfig;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigValidationError {
    #[error("lookup.endpoint cannot be empty")]
    EmptyEndpoint,

    #[error("lookup.endpoint must start with http:// or https:// (got '{0}')")]
    UnsupportedEndpoint(String),

    #[error("lookup.timeout_seconds cannot be 0")]
    InvalidTimeout,
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// CEP lookup settings
    pub lookup: FileLookupConfig,
    /// Sign catalog settings
    pub zodiac: FileZodiacConfig,
    /// Output settings
    pub output: FileOutputConfig,
}

impl FileConfig {
    /// Check values serde cannot rule out on its own
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        let endpoint = self.lookup.endpoint.trim();
        if endpoint.is_empty() {
            return Err(ConfigValidationError::EmptyEndpoint);
        }
        if !(endpoint.starts_with("http://") || endpoint.starts_with("https://")) {
            return Err(ConfigValidationError::UnsupportedEndpoint(endpoint.to_string()));
        }
        if self.lookup.timeout_seconds == Some(0) {
            return Err(ConfigValidationError::InvalidTimeout);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert_eq!(FileConfig::default().validate(), Ok(()));
    }

    #[test]
    fn test_full_config_deserialize() {
        let toml_str = r#"
[lookup]
endpoint = "http://localhost:8080/ws"
timeout_seconds = 10
user_agent = "test-agent"

[zodiac]
catalog_path = "/etc/cadastro/signos.toml"

[output]
format = "text"
color = false
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.lookup.endpoint, "http://localhost:8080/ws");
        assert_eq!(config.lookup.user_agent, "test-agent");
        assert!(config.zodiac.catalog_path.is_some());
        assert!(!config.output.color);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn test_validate_rejects_empty_endpoint() {
        let mut config = FileConfig::default();
        config.lookup.endpoint = "  ".to_string();
        assert_eq!(config.validate(), Err(ConfigValidationError::EmptyEndpoint));
    }

    #[test]
    fn test_validate_rejects_non_http_endpoint() {
        let mut config = FileConfig::default();
        config.lookup.endpoint = "ftp://viacep.com.br/ws".to_string();
        assert!(matches!(
            config.validate(),
            Err(ConfigValidationError::UnsupportedEndpoint(_))
        ));
    }

    #[test]
    fn test_validate_rejects_zero_timeout() {
        let mut config = FileConfig::default();
        config.lookup.timeout_seconds = Some(0);
        assert_eq!(config.validate(), Err(ConfigValidationError::InvalidTimeout));
    }
}
