//! Gap analysis errors.

use super::error_code::{self, TaxauditErrorCode};

/// Errors raised when the assignment set handed to the gap analyzer does not
/// describe the projects and threshold it is asked to analyze.
#[derive(Debug, thiserror::Error)]
pub enum GapError {
    #[error(
        "Assignment {left_project} -> {right_project} was matched at threshold {found}, expected {expected}"
    )]
    ThresholdMismatch {
        left_project: String,
        right_project: String,
        expected: f64,
        found: f64,
    },

    #[error("Assignment references unknown project '{0}'")]
    UnknownProject(String),
}

impl TaxauditErrorCode for GapError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::ThresholdMismatch { .. } => error_code::THRESHOLD_MISMATCH,
            Self::UnknownProject(_) => error_code::GAP_ERROR,
        }
    }
}
