//! Error handling for taxaudit.
//! One error enum per subsystem, `thiserror` only.

pub mod audit_error;
pub mod config_error;
pub mod error_code;
pub mod gap_error;
pub mod pattern_error;

pub use audit_error::{AuditError, AuditIssue, AuditOutcome, IssueKind};
pub use config_error::ConfigError;
pub use error_code::TaxauditErrorCode;
pub use gap_error::GapError;
pub use pattern_error::PatternLibraryError;
