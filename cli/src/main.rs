//! CLI entrypoint for cadastro
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result};
use cadastro_application::{ClassifySignUseCase, LookupFlowController};
use cadastro_domain::{LookupState, OutputFormat, mask_partial};
use cadastro_infrastructure::{ConfigLoader, FileConfig, SignCatalogFile, ViaCepClient};
use cadastro_presentation::{
    Cli, Command, ConsoleFormatter, FormRepl, ProgressReporter, SimpleProgress,
};
use clap::{CommandFactory, Parser};
use std::fs::File;
use std::path::Path;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{debug, info};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Keep the guard alive so buffered log lines are flushed on exit
    let _log_guard = init_logging(cli.verbose, cli.log_file.as_deref())?;

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_ref());
        return Ok(ExitCode::SUCCESS);
    }

    let config = load_config(&cli)?;
    if !config.output.color {
        colored::control::set_override(false);
    }
    let format = cli.output_format(config.output.format);

    info!("Starting cadastro");

    let Some(command) = cli.command.clone() else {
        Cli::command().print_help()?;
        return Ok(ExitCode::SUCCESS);
    };

    match command {
        Command::Mask { input } => {
            println!("{}", mask_partial(&input));
            Ok(ExitCode::SUCCESS)
        }
        Command::Cep { input } => run_cep(&cli, &config, format, &input).await,
        Command::Signo { date } => run_signo(&config, format, &date).await,
        Command::Form => {
            // === Dependency Injection ===
            let lookup = Arc::new(
                ViaCepClient::new(&config.lookup).context("Failed to create ViaCEP client")?,
            );
            let repl = FormRepl::new(lookup).with_progress(!cli.quiet);
            repl.run().await.context("Interactive form failed")?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn init_logging(verbose: u8, log_file: Option<&Path>) -> Result<Option<WorkerGuard>> {
    // Initialize logging based on verbosity level
    let filter = match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    match log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create log file {}", path.display()))?;
            let (writer, guard) = tracing_appender::non_blocking(file);
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_target(false)
                .with_ansi(false)
                .with_writer(writer)
                .init();
            Ok(Some(guard))
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_target(false)
                .with_writer(std::io::stderr)
                .init();
            Ok(None)
        }
    }
}

fn load_config(cli: &Cli) -> Result<FileConfig> {
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref()).context("Failed to load configuration")?
    };
    config.validate().context("Invalid configuration")?;
    debug!("Lookup endpoint: {}", config.lookup.endpoint);
    Ok(config)
}

async fn run_cep(
    cli: &Cli,
    config: &FileConfig,
    format: OutputFormat,
    input: &str,
) -> Result<ExitCode> {
    // === Dependency Injection ===
    let lookup =
        Arc::new(ViaCepClient::new(&config.lookup).context("Failed to create ViaCEP client")?);
    let controller = LookupFlowController::new(lookup);

    controller.input_cep(input);
    let state = if cli.quiet || format == OutputFormat::Json {
        controller.search().await?
    } else if cli.verbose > 0 {
        // Spinner redraws would interleave with log lines
        controller.search_with_progress(&SimpleProgress).await?
    } else {
        controller.search_with_progress(&ProgressReporter::new()).await?
    };

    let form = controller.snapshot();
    let output = match format {
        OutputFormat::Text => ConsoleFormatter::format_form(&form),
        OutputFormat::Json => ConsoleFormatter::format_form_json(&form),
    };
    println!("{}", output);

    Ok(exit_code(state == LookupState::Success))
}

async fn run_signo(config: &FileConfig, format: OutputFormat, date: &str) -> Result<ExitCode> {
    // === Dependency Injection ===
    let source = Arc::new(SignCatalogFile::from_config(config.zodiac.catalog_path.clone()));
    let use_case = ClassifySignUseCase::new(source);
    let today = chrono::Local::now().date_naive();

    match use_case.execute(date, today).await {
        Ok(sign) => {
            let output = match format {
                OutputFormat::Text => ConsoleFormatter::format_sign(&sign),
                OutputFormat::Json => ConsoleFormatter::format_sign_json(&sign),
            };
            println!("{}", output);
            Ok(exit_code(true))
        }
        Err(e) => {
            match format {
                OutputFormat::Text => eprintln!("{}", e),
                OutputFormat::Json => {
                    println!("{}", ConsoleFormatter::format_error_json(&e.to_string()))
                }
            }
            Ok(exit_code(false))
        }
    }
}

fn exit_code(success: bool) -> ExitCode {
    if success {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
