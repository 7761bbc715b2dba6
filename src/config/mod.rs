//! Configuration loading and management.
//!
//! - [`types`]: Core config struct definitions and loading
//! - [`history`]: Accepted-line history configuration
//! - [`validation`]: Startup checks

mod history;
mod types;
mod validation;

pub use types::{Config, ConfigError, LogConfig, LogFormat, OutputFormat};
pub use validation::{ValidationError, validate};
