//! Balancebook command-line front end.
//!
//! Loads a balance document, runs it through the creation workflow and
//! prints its reports.

mod cli;
mod dispatch;
mod input;
mod output;

use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;
use balancebook_core::chart::ChartOfAccounts;
use balancebook_shared::{AppConfig, AppError};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use output::OutputMode;

fn main() -> ExitCode {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = match cli::Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            return if err.use_stderr() {
                ExitCode::from(1)
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    match run(&cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::from(2)
        }
    }
}

fn run(cli: &cli::Cli) -> anyhow::Result<ExitCode> {
    let config = AppConfig::load().context("Failed to load configuration")?;

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.logging.filter)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let chart = Arc::new(load_chart(&config)?);
    let mode = OutputMode::from_json_flag(cli.command.json());

    match dispatch::dispatch(cli, &chart) {
        Ok(success) => {
            output::print_success(&success, mode, &config.reports.currency)
                .context("Failed to write output")?;
            Ok(ExitCode::SUCCESS)
        }
        Err(error) => {
            tracing::debug!(code = error.error_code(), "Command failed");
            output::print_failure(&error, mode).context("Failed to write error")?;
            Ok(ExitCode::from(exit_status_for_error(&error)))
        }
    }
}

fn load_chart(config: &AppConfig) -> anyhow::Result<ChartOfAccounts> {
    match config.chart.path.as_deref() {
        Some(path) => ChartOfAccounts::from_path(path)
            .with_context(|| format!("Failed to load chart of accounts from {path}")),
        None => {
            let chart = ChartOfAccounts::standard();
            info!(entries = chart.len(), "Using standard chart of accounts");
            Ok(chart)
        }
    }
}

/// 1 for bad input or a missing balance, 2 for I/O and internal failures.
fn exit_status_for_error(error: &AppError) -> u8 {
    if error.is_client_error() { 1 } else { 2 }
}
