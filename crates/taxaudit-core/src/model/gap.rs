//! Cross-project gap records.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::element::{ElementRef, TaxonomyElement};

/// Usage numbers that let a report justify a gap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GapEvidence {
    pub volume: u64,
    pub queries: u64,
    pub last_seen: Option<NaiveDate>,
}

impl From<&TaxonomyElement> for GapEvidence {
    fn from(e: &TaxonomyElement) -> Self {
        Self {
            volume: e.volume_90d,
            queries: e.queries_90d,
            last_seen: e.last_seen,
        }
    }
}

/// An element with no counterpart in one or more other projects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GapRecord {
    pub element: ElementRef,
    pub missing_from: BTreeSet<String>,
    pub evidence: GapEvidence,
}
