//! Provider credentialing eligibility checker CLI.

use anyhow::Context;
use clap::{ColorChoice, Parser};
use cred_cli::logging::{LogConfig, LogFormat, init_logging};
use cred_cli::summary::{CheckOutcome, print_summary};
use std::io::{self, IsTerminal};
use tracing::Level;

mod cli;
mod commands;

use crate::cli::{Cli, Command, LogFormatArg, LogLevelArg, ReportFormatArg};
use crate::commands::{run_check, run_types};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(2);
    }
    let exit_code = match cli.command {
        Command::Check(args) => match run_check(&args) {
            Ok(outcome) => match render_check(args.format, &outcome) {
                Ok(()) => i32::from(!outcome.result.is_eligible),
                Err(error) => {
                    eprintln!("error: {error:#}");
                    2
                }
            },
            Err(error) => {
                eprintln!("error: {error:#}");
                2
            }
        },
        Command::Types(args) => match run_types(&args) {
            Ok(()) => 0,
            Err(error) => {
                eprintln!("error: {error:#}");
                2
            }
        },
    };
    std::process::exit(exit_code);
}

/// Render the eligibility report in the requested output format.
fn render_check(format: ReportFormatArg, outcome: &CheckOutcome) -> anyhow::Result<()> {
    match format {
        ReportFormatArg::Table => print_summary(outcome),
        ReportFormatArg::Json => {
            let rendered = serde_json::to_string_pretty(&outcome.result)
                .context("serialize eligibility result")?;
            println!("{rendered}");
        }
    }
    Ok(())
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let level = match cli.log_level {
        Some(LogLevelArg::Error) => Level::ERROR,
        Some(LogLevelArg::Warn) => Level::WARN,
        Some(LogLevelArg::Info) => Level::INFO,
        Some(LogLevelArg::Debug) => Level::DEBUG,
        Some(LogLevelArg::Trace) => Level::TRACE,
        None => cli
            .verbosity
            .tracing_level_filter()
            .into_level()
            .unwrap_or(Level::ERROR),
    };
    let format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    let with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    LogConfig::default()
        .with_level(level)
        .with_format(format)
        .with_log_file(cli.log_file.clone())
        .with_log_data(cli.log_data)
        .with_ansi(with_ansi)
}
