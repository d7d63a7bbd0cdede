//! Full audit runs: validation, matching passes, gaps, PII, and hygiene.

pub mod engine;
pub mod report;
pub mod validation;

pub use engine::TaxonomyAuditor;
pub use report::{AuditReport, DuplicateSummary, ProjectSummary};
pub use validation::validate_projects;
