//! Configuration file loader with multi-source merging

use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::{Path, PathBuf};

/// Project-level config file names, checked in order
const PROJECT_FILES: &[&str] = &["cadastro.toml", ".cadastro.toml"];

/// Prefix for environment overrides, e.g. `CADASTRO_LOOKUP__ENDPOINT`
const ENV_PREFIX: &str = "CADASTRO_";

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. Environment: `CADASTRO_<SECTION>__<KEY>`
    /// 2. Explicit config path (if provided)
    /// 3. Project root: `./cadastro.toml` or `./.cadastro.toml`
    /// 4. XDG config: `$XDG_CONFIG_HOME/cadastro/config.toml`
    /// 5. Default values
    pub fn load(config_path: Option<&PathBuf>) -> Result<FileConfig, Box<figment::Error>> {
        Self::figment(config_path.map(PathBuf::as_path))
            .extract()
            .map_err(Box::new)
    }

    fn figment(config_path: Option<&Path>) -> Figment {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(&global_path));
            }
        }

        if let Some(path) = Self::project_config_path() {
            figment = figment.merge(Toml::file(path));
        }

        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Load only default configuration (for --no-config)
    pub fn load_defaults() -> FileConfig {
        FileConfig::default()
    }

    /// Get the global config file path
    ///
    /// Returns XDG_CONFIG_HOME/cadastro/config.toml if set,
    /// otherwise falls back to ~/.config/cadastro/config.toml
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("cadastro").join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        PROJECT_FILES
            .iter()
            .map(PathBuf::from)
            .find(|path| path.exists())
    }

    /// Names of the `CADASTRO_*` variables currently set, sorted
    pub fn env_overrides() -> Vec<String> {
        let mut names: Vec<String> = std::env::vars_os()
            .filter_map(|(key, _)| key.into_string().ok())
            .filter(|key| key.starts_with(ENV_PREFIX))
            .collect();
        names.sort();
        names
    }

    /// One line per source, highest priority first
    pub fn config_sources(config_path: Option<&Path>) -> Vec<String> {
        let mut lines = Vec::new();

        let env = Self::env_overrides();
        if env.is_empty() {
            lines.push(format!("  [     ] Env:      {}<SECTION>__<KEY>", ENV_PREFIX));
        } else {
            lines.push(format!("  [SET  ] Env:      {}", env.join(", ")));
        }

        match config_path {
            Some(path) if path.exists() => {
                lines.push(format!("  [FOUND] Explicit: {}", path.display()));
            }
            Some(path) => {
                lines.push(format!("  [     ] Explicit: {} (not found)", path.display()));
            }
            None => lines.push("  [     ] Explicit: no --config given".to_string()),
        }

        if let Some(path) = Self::project_config_path() {
            lines.push(format!("  [FOUND] Project:  {}", path.display()));
        } else {
            lines.push("  [     ] Project:  ./cadastro.toml or ./.cadastro.toml".to_string());
        }

        if let Some(path) = Self::global_config_path() {
            let marker = if path.exists() { "FOUND" } else { "     " };
            lines.push(format!("  [{}] Global:   {}", marker, path.display()));
        }

        lines.push("  [     ] Default:  built-in defaults".to_string());
        lines
    }

    /// Print the config sources being used (for --show-config)
    pub fn print_config_sources(config_path: Option<&PathBuf>) {
        println!("Configuration sources (in priority order):");
        for line in Self::config_sources(config_path.map(PathBuf::as_path)) {
            println!("{}", line);
        }
    }
}
