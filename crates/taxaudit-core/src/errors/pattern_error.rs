//! PII pattern library errors. Raised at load time only; a loaded library
//! never fails mid-run.

use super::error_code::{self, TaxauditErrorCode};

#[derive(Debug, thiserror::Error)]
pub enum PatternLibraryError {
    #[error("Failed to read pattern library {path}: {message}")]
    Read { path: String, message: String },

    #[error("Pattern library parse error: {0}")]
    Parse(String),

    #[error("Unknown PII category '{0}'")]
    UnknownCategory(String),

    #[error("PII category '{0}' is defined more than once")]
    DuplicateCategory(String),

    #[error("PII category '{category}' has no keywords or patterns")]
    EmptyCategory { category: String },

    #[error("Invalid regex in PII category '{category}': {pattern}: {message}")]
    InvalidRegex {
        category: String,
        pattern: String,
        message: String,
    },
}

impl TaxauditErrorCode for PatternLibraryError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidRegex { .. } => error_code::INVALID_REGEX,
            _ => error_code::PATTERN_LIBRARY_ERROR,
        }
    }
}
