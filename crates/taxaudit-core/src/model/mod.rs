//! Data model for one audit run: elements, projects, matches, gaps, PII flags.

pub mod element;
pub mod gap;
pub mod matching;
pub mod pii;
pub mod project;
pub mod threshold;

pub use element::{ElementKind, ElementRef, SchemaStatus, TaxonomyElement};
pub use gap::{GapEvidence, GapRecord};
pub use matching::{MatchAssignment, MatchCandidate};
pub use pii::{PiiCategory, PiiConfidence, PiiFlag, PiiSource};
pub use project::{ProjectId, ProjectTaxonomy, Projects};
pub use threshold::{MatchingMode, Threshold};
