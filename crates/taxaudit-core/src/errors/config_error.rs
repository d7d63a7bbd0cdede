//! Configuration errors.

use super::error_code::{self, TaxauditErrorCode};

/// Errors that can occur during configuration loading and validation.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Config file not found: {path}")]
    FileNotFound { path: String },

    #[error("Config parse error in {path}: {message}")]
    ParseError { path: String, message: String },

    #[error("Config validation failed for {field}: {message}")]
    ValidationFailed { field: String, message: String },

    #[error("Invalid threshold {value}: must be a number between 0.0 and 1.0")]
    InvalidThreshold { value: f64 },
}

impl TaxauditErrorCode for ConfigError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidThreshold { .. } => error_code::INVALID_THRESHOLD,
            _ => error_code::CONFIG_ERROR,
        }
    }
}
