//! Audit run errors and non-fatal issue collection.

use serde::{Deserialize, Serialize};

use super::error_code::{self, TaxauditErrorCode};
use super::{ConfigError, GapError, PatternLibraryError};
use crate::model::ElementRef;

/// Fatal errors for an audit run. Aggregates subsystem errors via `From`.
#[derive(Debug, thiserror::Error)]
pub enum AuditError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Pattern library error: {0}")]
    PatternLibrary(#[from] PatternLibraryError),

    #[error("Gap analysis error: {0}")]
    Gap(#[from] GapError),
}

impl TaxauditErrorCode for AuditError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Config(e) => e.error_code(),
            Self::PatternLibrary(e) => e.error_code(),
            Self::Gap(e) => e.error_code(),
        }
    }
}

/// Why an element was left out of the analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueKind {
    /// Name is empty after normalization.
    EmptyName,
    /// Schema status is BLOCKED or DELETED.
    FilteredStatus,
    /// Another element of the same kind and id was already seen in the project.
    DuplicateElement,
    /// The element's `project_id` differs from the taxonomy that holds it.
    ProjectMismatch,
}

impl IssueKind {
    pub fn code(&self) -> &'static str {
        match self {
            Self::EmptyName => error_code::EMPTY_NAME,
            Self::FilteredStatus => error_code::FILTERED_STATUS,
            Self::DuplicateElement => error_code::DUPLICATE_ELEMENT,
            Self::ProjectMismatch => error_code::PROJECT_MISMATCH,
        }
    }
}

/// A non-fatal problem with one input element. The element is excluded from
/// comparison; the run continues.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditIssue {
    pub kind: IssueKind,
    pub element: ElementRef,
    pub message: String,
}

impl AuditIssue {
    pub fn new(kind: IssueKind, element: ElementRef, message: impl Into<String>) -> Self {
        Self {
            kind,
            element,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for AuditIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}: {}", self.kind.code(), self.element, self.message)
    }
}

/// Result of an audit step that accumulates non-fatal issues.
/// Partial results are always returned; the caller decides whether to use them.
#[derive(Debug, Default, Clone, Serialize)]
pub struct AuditOutcome<T: Default = ()> {
    /// The successful result data.
    pub data: T,
    /// Non-fatal issues collected during the run.
    pub issues: Vec<AuditIssue>,
}

impl<T: Default> AuditOutcome<T> {
    pub fn new(data: T) -> Self {
        Self {
            data,
            issues: Vec::new(),
        }
    }

    pub fn add_issue(&mut self, issue: AuditIssue) {
        self.issues.push(issue);
    }

    /// Returns true if there are no non-fatal issues.
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn issue_count(&self) -> usize {
        self.issues.len()
    }

    /// Number of issues of one kind.
    pub fn count_of(&self, kind: IssueKind) -> usize {
        self.issues.iter().filter(|i| i.kind == kind).count()
    }
}

impl TaxauditErrorCode for AuditIssue {
    fn error_code(&self) -> &'static str {
        self.kind.code()
    }
}
