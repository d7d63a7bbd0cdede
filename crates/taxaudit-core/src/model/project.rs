//! Per-project taxonomies.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::element::{ElementKind, TaxonomyElement};

pub type ProjectId = String;

/// All projects of one audit run, keyed (and therefore ordered) by project id.
pub type Projects = BTreeMap<ProjectId, ProjectTaxonomy>;

/// The elements of one project, in input order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectTaxonomy {
    pub project_id: ProjectId,
    #[serde(default)]
    pub elements: Vec<TaxonomyElement>,
}

impl ProjectTaxonomy {
    pub fn new(project_id: impl Into<String>) -> Self {
        Self {
            project_id: project_id.into(),
            elements: Vec::new(),
        }
    }

    pub fn with_elements(project_id: impl Into<String>, elements: Vec<TaxonomyElement>) -> Self {
        Self {
            project_id: project_id.into(),
            elements,
        }
    }

    pub fn push(&mut self, element: TaxonomyElement) {
        self.elements.push(element);
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Elements of one kind, in input order.
    pub fn of_kind(&self, kind: ElementKind) -> impl Iterator<Item = &TaxonomyElement> {
        self.elements.iter().filter(move |e| e.kind == kind)
    }

    /// Collect taxonomies into the keyed form the engine consumes.
    pub fn into_projects<I>(taxonomies: I) -> Projects
    where
        I: IntoIterator<Item = ProjectTaxonomy>,
    {
        taxonomies
            .into_iter()
            .map(|t| (t.project_id.clone(), t))
            .collect()
    }
}
