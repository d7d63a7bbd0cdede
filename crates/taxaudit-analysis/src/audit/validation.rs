//! Input validation ahead of a run.
//!
//! Each element gets at most one issue. Elements with a mismatched project,
//! a repeated (kind, id), or a BLOCKED/DELETED status are dropped. Elements
//! whose name normalizes to nothing stay in the input: every stage skips
//! them on its own, and matching passes count them as excluded.

use taxaudit_core::errors::{AuditIssue, AuditOutcome, IssueKind};
use taxaudit_core::model::{ElementKind, ProjectTaxonomy, Projects};
use taxaudit_core::types::collections::FxHashSet;

use crate::similarity::NormalizedName;

pub fn validate_projects(projects: &Projects) -> AuditOutcome<Projects> {
    let mut outcome = AuditOutcome::new(Projects::new());
    for (project_id, taxonomy) in projects {
        let mut seen: FxHashSet<(ElementKind, &str)> = FxHashSet::default();
        let mut kept = ProjectTaxonomy::new(project_id.clone());
        for element in &taxonomy.elements {
            let (issue, keep) = if &element.project_id != project_id {
                let message = format!(
                    "element belongs to '{}' but was supplied under '{project_id}'",
                    element.project_id
                );
                (Some((IssueKind::ProjectMismatch, message)), false)
            } else if !seen.insert((element.kind, element.id.as_str())) {
                let message = format!("{} id '{}' appears more than once", element.kind, element.id);
                (Some((IssueKind::DuplicateElement, message)), false)
            } else if element.schema_status.is_filtered() {
                let message = format!("schema status {}", element.schema_status);
                (Some((IssueKind::FilteredStatus, message)), false)
            } else if NormalizedName::new(&element.name).is_empty() {
                let message = "name has no alphanumeric characters".to_string();
                (Some((IssueKind::EmptyName, message)), true)
            } else {
                (None, true)
            };
            if let Some((kind, message)) = issue {
                outcome.add_issue(AuditIssue::new(kind, element.to_ref(), message));
            }
            if keep {
                kept.push(element.clone());
            }
        }
        outcome.data.insert(project_id.clone(), kept);
    }
    outcome
}
