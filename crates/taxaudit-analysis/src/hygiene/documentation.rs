//! Missing categories and descriptions.

use serde::Serialize;

use taxaudit_core::model::{ElementKind, ElementRef, TaxonomyElement};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DocumentationReport {
    pub events_missing_category: Vec<ElementRef>,
    pub events_missing_description: Vec<ElementRef>,
    pub event_properties_missing_description: Vec<ElementRef>,
    pub user_properties_missing_description: Vec<ElementRef>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DocumentationCounts {
    pub events_missing_category: usize,
    pub events_missing_description: usize,
    pub event_properties_missing_description: usize,
    pub user_properties_missing_description: usize,
}

impl DocumentationReport {
    pub fn counts(&self) -> DocumentationCounts {
        DocumentationCounts {
            events_missing_category: self.events_missing_category.len(),
            events_missing_description: self.events_missing_description.len(),
            event_properties_missing_description: self.event_properties_missing_description.len(),
            user_properties_missing_description: self.user_properties_missing_description.len(),
        }
    }
}

/// Blank values count as missing.
pub fn documentation(elements: &[TaxonomyElement]) -> DocumentationReport {
    let mut report = DocumentationReport::default();
    for element in elements {
        match element.kind {
            ElementKind::Event => {
                if element.missing_category() {
                    report.events_missing_category.push(element.to_ref());
                }
                if element.missing_description() {
                    report.events_missing_description.push(element.to_ref());
                }
            }
            ElementKind::EventProperty if element.missing_description() => {
                report.event_properties_missing_description.push(element.to_ref());
            }
            ElementKind::UserProperty if element.missing_description() => {
                report.user_properties_missing_description.push(element.to_ref());
            }
            _ => {}
        }
    }
    report.events_missing_category.sort();
    report.events_missing_description.sort();
    report.event_properties_missing_description.sort();
    report.user_properties_missing_description.sort();
    report
}
