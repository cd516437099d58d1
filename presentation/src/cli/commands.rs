//! CLI command definitions

use cadastro_domain::OutputFormat;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Output format selected on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputArg {
    /// Human-readable output
    Text,
    /// JSON output
    Json,
}

impl From<OutputArg> for OutputFormat {
    fn from(arg: OutputArg) -> Self {
        match arg {
            OutputArg::Text => OutputFormat::Text,
            OutputArg::Json => OutputFormat::Json,
        }
    }
}

/// CLI arguments for cadastro
#[derive(Parser, Debug)]
#[command(name = "cadastro")]
#[command(author, version, about = "Address form with CEP lookup, and zodiac sign by birth date")]
#[command(long_about = r#"
cadastro fills an address form from a Brazilian postal code (CEP) using the
ViaCEP web service, and tells the zodiac sign for a birth date.

Configuration files are loaded from (in priority order):
1. CADASTRO_* environment variables (nested keys split on __)
2. --config <path>     Explicit config file
3. ./cadastro.toml     Project-level config
4. ~/.config/cadastro/config.toml   Global config

Example:
  cadastro cep 01310-000
  cadastro mask 01310000abc
  cadastro signo 25/12/1990
  cadastro form
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Output format (overrides [output] format in config)
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputArg>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,

    /// Write logs to this file instead of stderr
    #[arg(long, value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Look up a CEP and print the filled form
    Cep {
        /// CEP, with or without the dash
        input: String,
    },
    /// Print the masked form of a partial CEP
    Mask { input: String },
    /// Find the zodiac sign for a birth date (YYYY-MM-DD or DD/MM/YYYY)
    Signo { date: String },
    /// Fill the address form interactively
    Form,
}

impl Cli {
    /// Format from the flag, falling back to the configured one
    pub fn output_format(&self, configured: Option<OutputFormat>) -> OutputFormat {
        self.output
            .map(OutputFormat::from)
            .or(configured)
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_cep() {
        let cli = Cli::try_parse_from(["cadastro", "cep", "01310-000"]).unwrap();
        assert_eq!(
            cli.command,
            Some(Command::Cep {
                input: "01310-000".to_string()
            })
        );
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli =
            Cli::try_parse_from(["cadastro", "signo", "25/12/1990", "-vv", "--output", "json"])
                .unwrap();
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.output, Some(OutputArg::Json));
    }

    #[test]
    fn test_output_format_precedence() {
        let cli = Cli::try_parse_from(["cadastro", "form"]).unwrap();
        assert_eq!(cli.output_format(None), OutputFormat::Text);
        assert_eq!(
            cli.output_format(Some(OutputFormat::Json)),
            OutputFormat::Json
        );

        let cli = Cli::try_parse_from(["cadastro", "-o", "text", "form"]).unwrap();
        assert_eq!(
            cli.output_format(Some(OutputFormat::Json)),
            OutputFormat::Text
        );
    }

    #[test]
    fn test_show_config_without_command() {
        let cli = Cli::try_parse_from(["cadastro", "--show-config"]).unwrap();
        assert!(cli.show_config);
        assert!(cli.command.is_none());
    }
}
