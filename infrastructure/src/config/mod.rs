//! Configuration file loading for cadastro
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `CADASTRO_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./cadastro.toml` or `./.cadastro.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/cadastro/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, DEFAULT_ENDPOINT, FileConfig, FileLookupConfig, FileOutputConfig,
    FileOutputFormat, FileZodiacConfig,
};
pub use loader::ConfigLoader;
