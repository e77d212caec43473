//! CLI argument definitions for the credentialing eligibility checker.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "credcheck",
    version,
    about = "Provider credentialing eligibility checker",
    long_about = "Evaluate provider credential payloads against requirement rules.\n\n\
                  Resolves the provider type from NPI taxonomy data, matches the\n\
                  configured requirement rules against the normalized licenses, and\n\
                  reports eligibility with per-requirement validation details."
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

    /// Allow provider-identifying values (NPI, names) in log output.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Evaluate a provider credential payload for eligibility.
    Check(CheckArgs),

    /// List provider types and their configured requirement rules.
    Types(TypesArgs),
}

#[derive(Parser)]
pub struct CheckArgs {
    /// Path to the provider credential payload (JSON).
    #[arg(value_name = "PAYLOAD")]
    pub payload: PathBuf,

    /// Evaluate as this provider type, skipping taxonomy resolution.
    #[arg(long = "provider-type", value_name = "NAME")]
    pub provider_type: Option<String>,

    /// Requirement rules file (default: built-in rule catalog).
    #[arg(long = "rules", value_name = "PATH")]
    pub rules: Option<PathBuf>,

    /// Evaluation date as YYYY-MM-DD (default: today).
    #[arg(long = "as-of", value_name = "DATE")]
    pub as_of: Option<String>,

    /// Output format for the eligibility report.
    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: ReportFormatArg,
}

#[derive(Parser)]
pub struct TypesArgs {
    /// Requirement rules file (default: built-in rule catalog).
    #[arg(long = "rules", value_name = "PATH")]
    pub rules: Option<PathBuf>,
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

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

/// Eligibility report output choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum ReportFormatArg {
    Table,
    Json,
}
