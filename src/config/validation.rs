//! Configuration validation.
//!
//! Validates configuration at startup to catch common errors early.

use super::Config;
use thiserror::Error;
use tracing_subscriber::EnvFilter;

/// Validation errors for configuration.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("history.limit must be at least 1")]
    ZeroHistoryLimit,
    #[error("console.prompt must be a single line")]
    MultilinePrompt,
    #[error("log.level is not a valid filter directive: {0}")]
    InvalidLogLevel(String),
}

/// Validate a configuration, returning all errors found.
pub fn validate(config: &Config) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.history.limit == 0 {
        errors.push(ValidationError::ZeroHistoryLimit);
    }

    if config.console.prompt.contains(['\n', '\r']) {
        errors.push(ValidationError::MultilinePrompt);
    }

    if let Err(e) = EnvFilter::try_new(&config.log.level) {
        errors.push(ValidationError::InvalidLogLevel(e.to_string()));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
