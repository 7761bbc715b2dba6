//! Core configuration types and loading.

use atc_proto::ErrorPolicy;
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

use super::history::HistoryConfig;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Console configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Prompt, output format and error policy.
    #[serde(default)]
    pub console: ConsoleConfig,
    /// Accepted-line history.
    #[serde(default)]
    pub history: HistoryConfig,
    /// Logging.
    #[serde(default)]
    pub log: LogConfig,
    /// Metrics.
    #[serde(default)]
    pub metrics: MetricsConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load configuration, falling back to defaults if `path` does not exist.
    ///
    /// Only used for the default path; an explicitly named file must exist.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        match Self::load(path) {
            Err(ConfigError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                Ok(Self::default())
            }
            other => other,
        }
    }
}

/// How results are written to stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `AAL777: heading [null, 180, false]`
    #[default]
    Pretty,
    /// One JSON object per line.
    Json,
}

/// Console behaviour.
#[derive(Debug, Clone, Deserialize)]
pub struct ConsoleConfig {
    /// Prompt printed before each line. Empty disables the prompt.
    #[serde(default = "default_prompt")]
    pub prompt: String,
    /// Result output format.
    #[serde(default)]
    pub output: OutputFormat,
    /// Whether to report only the first invalid command or all of them.
    #[serde(default)]
    pub error_policy: ErrorPolicy,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            prompt: default_prompt(),
            output: OutputFormat::default(),
            error_policy: ErrorPolicy::default(),
        }
    }
}

fn default_prompt() -> String {
    "> ".to_string()
}

/// Log line format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

/// Logging configuration. `RUST_LOG` overrides `level` when set.
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// Default filter directive, e.g. `"info"` or `"atc_proto=debug"`.
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default)]
    pub format: LogFormat,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::default(),
        }
    }
}

fn default_log_level() -> String {
    "warn".to_string()
}

/// Metrics configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MetricsConfig {
    /// Print the Prometheus text exposition to stderr on exit.
    #[serde(default)]
    pub dump_on_exit: bool,
}
