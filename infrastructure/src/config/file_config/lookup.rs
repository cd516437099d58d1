//! Address lookup configuration from TOML (`[lookup]` section)

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Public ViaCEP web service
pub const DEFAULT_ENDPOINT: &str = "https://viacep.com.br/ws";

/// Raw lookup configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLookupConfig {
    /// Base URL; requests go to `{endpoint}/{cep}/json/`
    pub endpoint: String,
    /// Request timeout in seconds (unset: whatever the transport does)
    pub timeout_seconds: Option<u64>,
    /// User-Agent header sent with each request
    pub user_agent: String,
}

impl Default for FileLookupConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout_seconds: None,
            user_agent: format!("cadastro/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl FileLookupConfig {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_seconds.map(Duration::from_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = FileLookupConfig::default();
        assert_eq!(config.endpoint, "https://viacep.com.br/ws");
        assert!(config.timeout().is_none());
        assert!(config.user_agent.starts_with("cadastro/"));
    }

    #[test]
    fn test_partial_section_keeps_defaults() {
        let toml_str = r#"
[lookup]
timeout_seconds = 5
"#;
        let config: super::super::FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.lookup.timeout(), Some(Duration::from_secs(5)));
        assert_eq!(config.lookup.endpoint, DEFAULT_ENDPOINT);
    }
}
