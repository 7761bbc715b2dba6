//! atc-console - operator console for the air-traffic-control command language.
//!
//! Reads command lines from stdin, parses and validates them, and prints
//! the structured result or the operator-facing rejection.

mod config;
mod console;
mod error;
mod history;
mod metrics;
mod telemetry;

use crate::config::{Config, LogConfig, LogFormat};
use crate::console::Console;
use crate::error::ConsoleError;
use anyhow::Context;
use atc_proto::CommandParser;
use tracing::{Instrument, error, info, warn};
use tracing_subscriber::EnvFilter;

const DEFAULT_CONFIG_PATH: &str = "atc-console.toml";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let explicit_path = std::env::args().nth(1);
    let config_path = explicit_path
        .clone()
        .unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string());

    let config = match explicit_path {
        Some(_) => Config::load(&config_path),
        None => Config::load_or_default(&config_path),
    }
    .map_err(ConsoleError::from)
    .with_context(|| format!("failed to load config {}", config_path))?;

    config::validate(&config).map_err(ConsoleError::from)?;

    init_tracing(&config.log);

    info!(
        output = ?config.console.output,
        policy = ?config.console.error_policy,
        history = config.history.limit,
        "Starting atc-console"
    );

    metrics::init();

    let parser = CommandParser::builtin().map_err(|e| {
        error!(error = %e, "Command registry failed its startup checks");
        ConsoleError::from(e)
    })?;
    let mut console = Console::new(parser, &config);

    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    let stdout = tokio::io::stdout();
    let stderr = tokio::io::stderr();

    tokio::select! {
        result = console
            .run(stdin, stdout, stderr)
            .instrument(telemetry::spans::session(&config_path)) => {
            if let Err(e) = result {
                error!(error = %e, code = e.error_code(), "Console stopped");
                return Err(e.into());
            }
        }
        _ = tokio::signal::ctrl_c() => {
            warn!("Interrupted");
        }
    }

    if config.metrics.dump_on_exit {
        eprint!("{}", metrics::gather_metrics());
    }

    info!("Shutting down");
    Ok(())
}

fn init_tracing(log: &LogConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log.level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true);

    match log.format {
        LogFormat::Text => builder.init(),
        LogFormat::Json => builder.json().init(),
    }
}
