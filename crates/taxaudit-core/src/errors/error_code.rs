//! TaxauditErrorCode trait for structured error reporting.

/// Every error enum implements this so callers (report assemblers, UIs) can
/// branch on a stable code instead of parsing messages.
pub trait TaxauditErrorCode {
    /// Returns the error code string (e.g., "CONFIG_ERROR").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted string: `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const INVALID_THRESHOLD: &str = "INVALID_THRESHOLD";
pub const PATTERN_LIBRARY_ERROR: &str = "PATTERN_LIBRARY_ERROR";
pub const INVALID_REGEX: &str = "INVALID_REGEX";
pub const GAP_ERROR: &str = "GAP_ERROR";
pub const THRESHOLD_MISMATCH: &str = "THRESHOLD_MISMATCH";
pub const EMPTY_NAME: &str = "EMPTY_NAME";
pub const FILTERED_STATUS: &str = "FILTERED_STATUS";
pub const DUPLICATE_ELEMENT: &str = "DUPLICATE_ELEMENT";
pub const PROJECT_MISMATCH: &str = "PROJECT_MISMATCH";
