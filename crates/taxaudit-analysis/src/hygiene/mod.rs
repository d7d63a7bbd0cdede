//! Per-project taxonomy hygiene checks.
//!
//! Every check is a pure function over one project's elements; the
//! [`HygieneAnalyzer`] runs them all and fans out across projects.

pub mod documentation;
pub mod lifecycle;
pub mod misclassification;
pub mod status;
pub mod syntax;
pub mod usage;

use chrono::NaiveDate;
use rayon::prelude::*;
use serde::Serialize;

use taxaudit_core::config::HygieneConfig;
use taxaudit_core::model::{ProjectTaxonomy, Projects};

use crate::pii::PiiClassifier;

pub use documentation::{documentation, DocumentationCounts, DocumentationReport};
pub use lifecycle::{lifecycle, LifecycleEntry, LifecycleReport};
pub use misclassification::{find_misclassified, MisclassificationReason, MisclassifiedProperty};
pub use status::{status_distribution, StatusCount, StatusDistribution};
pub use syntax::{classify_style, profile_syntax, NamingStyle, SyntaxProfile};
pub use usage::{usage, UnusedEvent, UsageReport, VolumeDuplicateGroup};

/// All hygiene sections for one project.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectHygiene {
    pub project_id: String,
    pub reference_date: NaiveDate,
    pub syntax: Vec<SyntaxProfile>,
    pub lifecycle: LifecycleReport,
    pub usage: UsageReport,
    pub documentation: DocumentationReport,
    pub misclassified_properties: Vec<MisclassifiedProperty>,
    pub status: Vec<StatusDistribution>,
}

pub struct HygieneAnalyzer<'a> {
    stale_after_days: u32,
    top_n: usize,
    reference_override: Option<NaiveDate>,
    classifier: Option<&'a PiiClassifier>,
}

impl<'a> HygieneAnalyzer<'a> {
    pub fn new(config: &HygieneConfig) -> Self {
        Self {
            stale_after_days: config.effective_stale_after_days(),
            top_n: config.effective_top_n(),
            reference_override: config.reference_date,
            classifier: None,
        }
    }

    /// Lets the misclassification check add "User Identifying Data Match".
    pub fn with_classifier(mut self, classifier: &'a PiiClassifier) -> Self {
        self.classifier = Some(classifier);
        self
    }

    /// A configured reference date wins over the one passed per run.
    pub fn analyze_project(&self, project: &ProjectTaxonomy, reference_date: NaiveDate) -> ProjectHygiene {
        let reference_date = self.reference_override.unwrap_or(reference_date);
        let elements = project.elements.as_slice();
        ProjectHygiene {
            project_id: project.project_id.clone(),
            reference_date,
            syntax: profile_syntax(elements),
            lifecycle: lifecycle(elements, reference_date, self.stale_after_days),
            usage: usage(elements, self.top_n),
            documentation: documentation(elements),
            misclassified_properties: find_misclassified(elements, self.classifier),
            status: status_distribution(elements),
        }
    }

    /// One entry per project, in project id order.
    pub fn analyze(&self, projects: &Projects, reference_date: NaiveDate) -> Vec<ProjectHygiene> {
        projects
            .par_iter()
            .map(|(_, project)| self.analyze_project(project, reference_date))
            .collect()
    }
}
