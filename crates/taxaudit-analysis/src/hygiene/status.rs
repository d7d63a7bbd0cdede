//! Schema status distribution.

use std::collections::BTreeMap;

use serde::Serialize;

use taxaudit_core::model::{ElementKind, SchemaStatus, TaxonomyElement};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatusCount {
    pub status: SchemaStatus,
    pub count: usize,
    pub percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatusDistribution {
    pub kind: ElementKind,
    pub total: usize,
    /// Most common status first.
    pub statuses: Vec<StatusCount>,
}

/// One distribution per kind present in `elements`.
pub fn status_distribution(elements: &[TaxonomyElement]) -> Vec<StatusDistribution> {
    let mut by_kind: BTreeMap<ElementKind, BTreeMap<SchemaStatus, usize>> = BTreeMap::new();
    for element in elements {
        *by_kind
            .entry(element.kind)
            .or_default()
            .entry(element.schema_status)
            .or_default() += 1;
    }
    by_kind
        .into_iter()
        .map(|(kind, counts)| {
            let total: usize = counts.values().sum();
            let mut statuses: Vec<StatusCount> = counts
                .into_iter()
                .map(|(status, count)| StatusCount {
                    status,
                    count,
                    percentage: count as f64 / total as f64 * 100.0,
                })
                .collect();
            statuses.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.status.cmp(&b.status)));
            StatusDistribution {
                kind,
                total,
                statuses,
            }
        })
        .collect()
}
