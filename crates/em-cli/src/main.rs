//! Event manager CLI.

use clap::{ColorChoice, Parser};
use em_cli::logging::{LogConfig, LogFormat, init_logging};
use std::io::{self, IsTerminal};

mod cli;
mod commands;
mod summary;
mod types;

use crate::cli::{Cli, Command, LogFormatArg, LogLevelArg};
use crate::commands::{run_check, run_letters};
use crate::summary::print_summary;

fn main() {
    // Logging is not set up yet, so problems go straight to stderr.
    if let Some(warning) = dotenv_warning(dotenvy::dotenv()) {
        eprintln!("warning: {warning}");
    }
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let outcome = match &cli.command {
        Command::Run(args) => run_letters(args),
        Command::Check(args) => run_check(args),
    };
    let exit_code = match outcome {
        Ok(result) => {
            print_summary(&result);
            if result.has_errors() { 1 } else { 0 }
        }
        Err(error) => {
            eprintln!("error: {error:#}");
            1
        }
    };
    std::process::exit(exit_code);
}

/// A .env file may carry CIVIC_API_KEY. A missing file is fine; an unreadable
/// or malformed one is reported.
fn dotenv_warning<T>(result: dotenvy::Result<T>) -> Option<String> {
    match result {
        Err(error) if !error.not_found() => Some(format!("failed to load .env: {error}")),
        _ => None,
    }
}

/// Logging setup from global flags. `--log-level` beats `-v`/`-q`, and either
/// disables the `RUST_LOG` override.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let level_filter = cli
        .log_level
        .map_or_else(|| cli.verbosity.tracing_level_filter(), LogLevelArg::level_filter);
    let with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    LogConfig {
        level_filter,
        use_env_filter: !(cli.verbosity.is_present() || cli.log_level.is_some()),
        with_ansi,
        format: match cli.log_format {
            LogFormatArg::Pretty => LogFormat::Pretty,
            LogFormatArg::Compact => LogFormat::Compact,
            LogFormatArg::Json => LogFormat::Json,
        },
        log_file: cli.log_file.clone(),
        log_data: cli.log_data,
        ..LogConfig::default()
    }
}
