//! Event usage: unused events and identical-volume groups.

use std::collections::BTreeMap;

use serde::Serialize;

use taxaudit_core::constants::USAGE_WINDOW_DAYS;
use taxaudit_core::model::{ElementKind, ElementRef, TaxonomyElement};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UnusedEvent {
    pub element: ElementRef,
    pub volume: u64,
    pub queries: u64,
    /// Share of the project's total event volume, rounded to 2 decimals.
    pub volume_pct: f64,
}

/// Events of one project that share the same non-zero volume.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VolumeDuplicateGroup {
    pub volume: u64,
    pub events: Vec<ElementRef>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UsageReport {
    /// Days the volume and query counters cover.
    pub window_days: u32,
    pub total_event_volume: u64,
    pub unused_count: usize,
    /// Highest-volume unused events first.
    pub top_unused: Vec<UnusedEvent>,
    /// Lowest-volume unused events first.
    pub bottom_unused: Vec<UnusedEvent>,
    /// Sorted by volume descending; events inside sorted by name.
    pub volume_duplicates: Vec<VolumeDuplicateGroup>,
}

pub fn usage(elements: &[TaxonomyElement], top_n: usize) -> UsageReport {
    let events: Vec<&TaxonomyElement> = elements
        .iter()
        .filter(|e| e.kind == ElementKind::Event)
        .collect();
    let total: u64 = events.iter().map(|e| e.volume_90d).sum();

    let mut unused: Vec<UnusedEvent> = events
        .iter()
        .filter(|e| e.queries_90d == 0)
        .map(|e| UnusedEvent {
            element: e.to_ref(),
            volume: e.volume_90d,
            queries: e.queries_90d,
            volume_pct: volume_share(e.volume_90d, total),
        })
        .collect();

    unused.sort_by(|a, b| b.volume.cmp(&a.volume).then_with(|| a.element.cmp(&b.element)));
    let top_unused = unused.iter().take(top_n).cloned().collect();
    unused.sort_by(|a, b| a.volume.cmp(&b.volume).then_with(|| a.element.cmp(&b.element)));
    let bottom_unused = unused.iter().take(top_n).cloned().collect();

    let mut by_volume: BTreeMap<u64, Vec<ElementRef>> = BTreeMap::new();
    for e in events.iter().filter(|e| e.volume_90d > 0) {
        by_volume.entry(e.volume_90d).or_default().push(e.to_ref());
    }
    let volume_duplicates = by_volume
        .into_iter()
        .rev()
        .filter(|(_, refs)| refs.len() > 1)
        .map(|(volume, mut events)| {
            events.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.id.cmp(&b.id)));
            VolumeDuplicateGroup { volume, events }
        })
        .collect();

    UsageReport {
        window_days: USAGE_WINDOW_DAYS,
        total_event_volume: total,
        unused_count: unused.len(),
        top_unused,
        bottom_unused,
        volume_duplicates,
    }
}

fn volume_share(volume: u64, total: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    let pct = volume as f64 / total as f64 * 100.0;
    (pct * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn volume_share_rounds_to_two_places() {
        assert_eq!(volume_share(1, 3), 33.33);
        assert_eq!(volume_share(2, 3), 66.67);
        assert_eq!(volume_share(5, 0), 0.0);
    }
}
