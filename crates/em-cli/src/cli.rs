//! CLI argument definitions for the event manager.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use em_lookup::DEFAULT_BASE_URL;
use tracing::level_filters::LevelFilter;

#[derive(Parser)]
#[command(
    name = "event-manager",
    version,
    about = "Event manager - thank-you letters and registration statistics for attendees",
    long_about = "Read an attendee roster, normalize zip codes, phone numbers and \
                  registration times, write a personalized thank-you letter per \
                  attendee, and report the busiest registration hours and days."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Allow attendee names, phones and zip codes in log output.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Write a thank-you letter per attendee and report registration peaks.
    Run(RunArgs),

    /// Normalize the roster and report registration peaks without writing letters.
    Check(CheckArgs),
}

#[derive(Args)]
pub struct RosterArgs {
    /// Attendee roster CSV with a header row.
    #[arg(value_name = "ROSTER", default_value = "event_attendees.csv")]
    pub input: PathBuf,

    /// How to handle a record whose registration time cannot be parsed.
    #[arg(long = "on-bad-timestamp", value_enum, default_value = "skip")]
    pub on_bad_timestamp: TimestampPolicyArg,

    /// Exit with an error status if any record was skipped.
    #[arg(long = "strict")]
    pub strict: bool,
}

#[derive(Args)]
pub struct RunArgs {
    #[command(flatten)]
    pub roster: RosterArgs,

    /// Directory the letters are written to.
    #[arg(long = "output-dir", value_name = "DIR", default_value = "output")]
    pub output_dir: PathBuf,

    /// API key for the civic-information service.
    #[arg(long = "api-key", env = "CIVIC_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Representatives endpoint of the civic-information service.
    #[arg(long = "api-url", env = "CIVIC_API_URL", default_value = DEFAULT_BASE_URL)]
    pub api_url: String,

    /// Lookup request timeout in seconds.
    #[arg(long = "lookup-timeout", value_name = "SECS", default_value_t = 10)]
    pub lookup_timeout: u64,

    /// Never contact the lookup service; every letter gets the fallback text.
    #[arg(long = "offline")]
    pub offline: bool,

    /// Render letters without writing them.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

#[derive(Args)]
pub struct CheckArgs {
    #[command(flatten)]
    pub roster: RosterArgs,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum TimestampPolicyArg {
    Skip,
    Halt,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevelArg {
    pub fn level_filter(self) -> LevelFilter {
        match self {
            Self::Error => LevelFilter::ERROR,
            Self::Warn => LevelFilter::WARN,
            Self::Info => LevelFilter::INFO,
            Self::Debug => LevelFilter::DEBUG,
            Self::Trace => LevelFilter::TRACE,
        }
    }
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
