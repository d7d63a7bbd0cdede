//! The audit orchestrator.

use chrono::NaiveDate;
use rayon::prelude::*;
use tracing::{debug, info};

use taxaudit_core::config::AuditConfig;
use taxaudit_core::errors::{AuditError, AuditOutcome};
use taxaudit_core::model::{
    ElementKind, MatchAssignment, MatchingMode, ProjectTaxonomy, Projects, TaxonomyElement,
    Threshold,
};

use super::report::{summarize_duplicates, AuditReport, ProjectSummary};
use super::validation::validate_projects;
use crate::gaps;
use crate::hygiene::HygieneAnalyzer;
use crate::matching::MatchingEngine;
use crate::pii::{PiiClassifier, PiiLibrary};

/// Runs every stage of an audit with one validated configuration.
pub struct TaxonomyAuditor {
    config: AuditConfig,
    threshold: Threshold,
    mode: MatchingMode,
    matcher: MatchingEngine,
    classifier: PiiClassifier,
}

impl TaxonomyAuditor {
    /// Validates `config` up front, so an invalid threshold fails before any
    /// comparison is made.
    pub fn new(config: AuditConfig, library: PiiLibrary) -> Result<Self, AuditError> {
        AuditConfig::validate(&config)?;
        let threshold = config.matching.effective_threshold()?;
        let mode = config.matching.effective_mode();
        let classifier =
            PiiClassifier::new(library).with_sample_limit(config.pii.effective_sample_limit());
        Ok(Self {
            config,
            threshold,
            mode,
            matcher: MatchingEngine::new(),
            classifier,
        })
    }

    /// Uses `pii.library_path` when set, otherwise the embedded library.
    pub fn from_config(config: AuditConfig) -> Result<Self, AuditError> {
        let library = match &config.pii.library_path {
            Some(path) => PiiLibrary::load_from_file(path)?,
            None => PiiLibrary::embedded()?,
        };
        Self::new(config, library)
    }

    pub fn config(&self) -> &AuditConfig {
        &self.config
    }

    pub fn threshold(&self) -> Threshold {
        self.threshold
    }

    pub fn classifier(&self) -> &PiiClassifier {
        &self.classifier
    }

    pub fn run(
        &self,
        projects: &Projects,
        reference_date: NaiveDate,
    ) -> Result<AuditOutcome<AuditReport>, AuditError> {
        let validated = validate_projects(projects);
        let issues = validated.issues;
        let projects = validated.data;

        let intra_project = if self.config.matching.effective_intra_project() {
            self.run_passes(intra_pairs(&projects))
        } else {
            Vec::new()
        };
        let cross_project = self.run_passes(cross_pairs(&projects));

        // Intra-project passes never contribute to gaps.
        let gaps = gaps::analyze(&projects, &cross_project, self.threshold)?;
        let gap_counts = gaps::gap_counts(&gaps);

        let pii_enabled = self.config.pii.effective_enabled();
        let pii_flags = if pii_enabled {
            let elements: Vec<&TaxonomyElement> =
                projects.values().flat_map(|p| p.elements.iter()).collect();
            self.classifier.classify_all(elements)
        } else {
            Vec::new()
        };

        let mut hygiene = HygieneAnalyzer::new(&self.config.hygiene);
        if pii_enabled {
            hygiene = hygiene.with_classifier(&self.classifier);
        }
        let hygiene = hygiene.analyze(&projects, reference_date);

        let mut report = AuditReport::new(reference_date, self.threshold, self.mode);
        report.projects = projects.values().map(ProjectSummary::from).collect();
        report.duplicates = summarize_duplicates(&intra_project);
        report.intra_project = intra_project;
        report.cross_project = cross_project;
        report.gaps = gaps;
        report.gap_counts = gap_counts;
        report.pii_flags = pii_flags;
        report.hygiene = hygiene;
        report.excluded_elements = issues.len();

        info!(
            projects = report.projects.len(),
            threshold = %self.threshold,
            mode = %self.mode,
            intra_passes = report.intra_project.len(),
            cross_passes = report.cross_project.len(),
            gaps = report.gaps.len(),
            pii_flags = report.pii_flags.len(),
            issues = issues.len(),
            "audit complete"
        );

        let mut outcome = AuditOutcome::new(report);
        for issue in issues {
            debug!(%issue, "element excluded");
            outcome.add_issue(issue);
        }
        Ok(outcome)
    }

    /// Passes are independent, so they run in parallel; output keeps pass order.
    fn run_passes(
        &self,
        passes: Vec<(&ProjectTaxonomy, &ProjectTaxonomy, ElementKind)>,
    ) -> Vec<MatchAssignment> {
        passes
            .into_par_iter()
            .map(|(left, right, kind)| {
                self.matcher
                    .match_elements(left, right, kind, self.threshold, self.mode)
            })
            .collect()
    }
}

fn intra_pairs(projects: &Projects) -> Vec<(&ProjectTaxonomy, &ProjectTaxonomy, ElementKind)> {
    projects
        .values()
        .flat_map(|p| ElementKind::all().iter().map(move |kind| (p, p, *kind)))
        .collect()
}

/// Every unordered pair once, lower project id on the left.
fn cross_pairs(projects: &Projects) -> Vec<(&ProjectTaxonomy, &ProjectTaxonomy, ElementKind)> {
    let list: Vec<&ProjectTaxonomy> = projects.values().collect();
    let mut passes = Vec::new();
    for (i, left) in list.iter().enumerate() {
        for right in &list[i + 1..] {
            for kind in ElementKind::all() {
                passes.push((*left, *right, *kind));
            }
        }
    }
    passes
}
