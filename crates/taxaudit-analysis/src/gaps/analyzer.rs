//! Gap analyzer.
//!
//! For every ordered project pair `(p, q)` an element of `p` is missing from
//! `q` when no `p`/`q` assignment of its kind contains it. Similarity is never
//! recomputed here; the assignments are the only evidence.

use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;
use tracing::debug;

use taxaudit_core::errors::GapError;
use taxaudit_core::model::{
    ElementKind, ElementRef, GapEvidence, GapRecord, MatchAssignment, Projects, Threshold,
};
use taxaudit_core::types::collections::FxHashSet;

use crate::similarity::NormalizedName;

/// Derive gap records from `assignments`, all of which must have been
/// produced at `threshold`.
pub fn analyze(
    projects: &Projects,
    assignments: &[MatchAssignment],
    threshold: Threshold,
) -> Result<Vec<GapRecord>, GapError> {
    // (counterpart project, element) for every element matched across projects.
    let mut matched: FxHashSet<(&str, &ElementRef)> = FxHashSet::default();
    for assignment in assignments {
        check_assignment(projects, assignment, threshold)?;
        if assignment.is_intra_project() {
            continue;
        }
        for m in &assignment.matches {
            matched.insert((assignment.right_project.as_str(), &m.left));
            matched.insert((assignment.left_project.as_str(), &m.right));
        }
    }

    let mut records = Vec::new();
    for (project_id, taxonomy) in projects {
        for element in &taxonomy.elements {
            if NormalizedName::new(&element.name).is_empty() {
                continue;
            }
            let element_ref = element.to_ref();
            let missing_from: BTreeSet<String> = projects
                .keys()
                .filter(|other| *other != project_id)
                .filter(|other| !matched.contains(&(other.as_str(), &element_ref)))
                .cloned()
                .collect();
            if !missing_from.is_empty() {
                records.push(GapRecord {
                    element: element_ref,
                    missing_from,
                    evidence: GapEvidence::from(element),
                });
            }
        }
    }

    records.sort_by(record_order);
    debug!(
        projects = projects.len(),
        assignments = assignments.len(),
        gaps = records.len(),
        "gap analysis complete"
    );
    Ok(records)
}

fn check_assignment(
    projects: &Projects,
    assignment: &MatchAssignment,
    threshold: Threshold,
) -> Result<(), GapError> {
    for project in [&assignment.left_project, &assignment.right_project] {
        if !projects.contains_key(project) {
            return Err(GapError::UnknownProject(project.clone()));
        }
    }
    if assignment.threshold != threshold {
        return Err(GapError::ThresholdMismatch {
            left_project: assignment.left_project.clone(),
            right_project: assignment.right_project.clone(),
            expected: threshold.value(),
            found: assignment.threshold.value(),
        });
    }
    Ok(())
}

/// project_id, name, kind, id.
fn record_order(a: &GapRecord, b: &GapRecord) -> Ordering {
    let (x, y) = (&a.element, &b.element);
    x.project_id
        .cmp(&y.project_id)
        .then_with(|| x.name.cmp(&y.name))
        .then_with(|| x.kind.cmp(&y.kind))
        .then_with(|| x.id.cmp(&y.id))
}

/// Number of elements of one kind in one project missing from another project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GapCount {
    pub project_id: String,
    pub missing_from: String,
    pub kind: ElementKind,
    pub count: usize,
}

/// Tally gap records per (project, counterpart, kind).
pub fn gap_counts(records: &[GapRecord]) -> Vec<GapCount> {
    let mut tally: BTreeMap<(&str, &str, ElementKind), usize> = BTreeMap::new();
    for record in records {
        for other in &record.missing_from {
            *tally
                .entry((record.element.project_id.as_str(), other.as_str(), record.element.kind))
                .or_default() += 1;
        }
    }
    tally
        .into_iter()
        .map(|((project_id, missing_from, kind), count)| GapCount {
            project_id: project_id.to_string(),
            missing_from: missing_from.to_string(),
            kind,
            count,
        })
        .collect()
}
