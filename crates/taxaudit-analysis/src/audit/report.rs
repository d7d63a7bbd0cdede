//! The serializable result of an audit run.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Serialize;

use taxaudit_core::constants::VERSION;
use taxaudit_core::model::{
    ElementKind, GapRecord, MatchAssignment, MatchingMode, PiiFlag, ProjectTaxonomy, Threshold,
};

use crate::gaps::GapCount;
use crate::hygiene::ProjectHygiene;

#[derive(Debug, Clone, Default, Serialize)]
pub struct AuditReport {
    pub version: String,
    pub reference_date: NaiveDate,
    pub threshold: Threshold,
    pub mode: MatchingMode,
    pub projects: Vec<ProjectSummary>,
    /// Duplicate passes, one per project and kind.
    pub intra_project: Vec<MatchAssignment>,
    /// One per unordered project pair and kind.
    pub cross_project: Vec<MatchAssignment>,
    pub duplicates: Vec<DuplicateSummary>,
    pub gaps: Vec<GapRecord>,
    pub gap_counts: Vec<GapCount>,
    pub pii_flags: Vec<PiiFlag>,
    pub hygiene: Vec<ProjectHygiene>,
    /// Elements left out of comparison for any reason.
    pub excluded_elements: usize,
}

impl AuditReport {
    pub(crate) fn new(reference_date: NaiveDate, threshold: Threshold, mode: MatchingMode) -> Self {
        Self {
            version: VERSION.to_string(),
            reference_date,
            threshold,
            mode,
            ..Default::default()
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// All assignments, intra-project first.
    pub fn assignments(&self) -> impl Iterator<Item = &MatchAssignment> {
        self.intra_project.iter().chain(self.cross_project.iter())
    }

    pub fn assignment(&self, kind: ElementKind, a: &str, b: &str) -> Option<&MatchAssignment> {
        self.assignments().find(|m| m.kind == kind && m.connects(a, b))
    }
}

/// Element counts per kind for one project, after validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectSummary {
    pub project_id: String,
    pub events: usize,
    pub event_properties: usize,
    pub user_properties: usize,
}

impl From<&ProjectTaxonomy> for ProjectSummary {
    fn from(p: &ProjectTaxonomy) -> Self {
        Self {
            project_id: p.project_id.clone(),
            events: p.of_kind(ElementKind::Event).count(),
            event_properties: p.of_kind(ElementKind::EventProperty).count(),
            user_properties: p.of_kind(ElementKind::UserProperty).count(),
        }
    }
}

/// Exact (score 1.0) and near duplicates found by one intra-project pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DuplicateSummary {
    pub project_id: String,
    pub kind: ElementKind,
    pub exact: usize,
    pub near: usize,
}

pub(crate) fn summarize_duplicates(intra: &[MatchAssignment]) -> Vec<DuplicateSummary> {
    let mut tally: BTreeMap<(&str, ElementKind), (usize, usize)> = BTreeMap::new();
    for assignment in intra {
        let entry = tally
            .entry((assignment.left_project.as_str(), assignment.kind))
            .or_default();
        for m in &assignment.matches {
            if m.score >= 1.0 {
                entry.0 += 1;
            } else {
                entry.1 += 1;
            }
        }
    }
    tally
        .into_iter()
        .map(|((project_id, kind), (exact, near))| DuplicateSummary {
            project_id: project_id.to_string(),
            kind,
            exact,
            near,
        })
        .collect()
}
