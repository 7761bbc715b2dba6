//! Error handling for the console.
//!
//! Rejected operator input is not an error here: it is reported to the
//! operator and the session continues. [`ConsoleError`] covers the failures
//! that end a session.

use atc_proto::RegistryError;
use thiserror::Error;

use crate::config::{ConfigError, ValidationError};

/// Errors that stop the console.
#[derive(Debug, Error)]
pub enum ConsoleError {
    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    #[error("invalid configuration: {}", join(.0))]
    InvalidConfig(Vec<ValidationError>),

    #[error("command registry is inconsistent: {0}")]
    Registry(#[from] RegistryError),

    #[error("terminal I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to encode result: {0}")]
    Encode(#[from] serde_json::Error),
}

impl ConsoleError {
    /// Get a static error code string for metrics labeling.
    #[inline]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Config(_) => "config_error",
            Self::InvalidConfig(_) => "invalid_config",
            Self::Registry(_) => "registry_error",
            Self::Io(_) => "io_error",
            Self::Encode(_) => "encode_error",
        }
    }
}

impl From<Vec<ValidationError>> for ConsoleError {
    fn from(errors: Vec<ValidationError>) -> Self {
        Self::InvalidConfig(errors)
    }
}

fn join(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Result type for console operations.
pub type ConsoleResult<T> = Result<T, ConsoleError>;
