//! # Configuration Errors
//!
//! Configuration failures are fatal: the process does not serve requests
//! without a complete configuration.

use thiserror::Error;

use crate::observability::{log_error, ErrorDetail};

/// Result type for configuration loading
pub type ConfigResult<T> = Result<T, ConfigError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Please provide {key} in environment variables")]
    Missing { key: &'static str },

    #[error("Invalid value for {key}: {reason}")]
    Invalid { key: &'static str, reason: String },

    #[error("Failed to load .env file: {0}")]
    DotEnv(String),
}

impl ConfigError {
    /// Error name for log detail objects
    pub fn name(&self) -> &'static str {
        match self {
            ConfigError::Missing { .. } => "Missing env variables",
            ConfigError::Invalid { .. } => "Invalid env variables",
            ConfigError::DotEnv(_) => "Unreadable env file",
        }
    }

    /// Log the error and hand it back for returning
    pub fn reported(self) -> Self {
        log_error(&self.to_string(), &ErrorDetail::new(self.name(), self.to_string()));
        self
    }
}
