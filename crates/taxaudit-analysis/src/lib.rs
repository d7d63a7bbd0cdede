//! Taxonomy audit engine.
//!
//! - [`similarity`]: bounded, symmetric name similarity.
//! - [`matching`]: best-match / all-pairs assignment of same-kind elements.
//! - [`gaps`]: per-project "missing elsewhere" lists from the match graph.
//! - [`pii`]: typed pattern library and tiered PII classifier.
//! - [`hygiene`]: naming, lifecycle, usage, and documentation checks.
//! - [`audit`]: orchestrates a full run and assembles the report.

pub mod audit;
pub mod gaps;
pub mod hygiene;
pub mod matching;
pub mod pii;
pub mod similarity;
