//! Stale and single-day elements.

use chrono::{Days, NaiveDate};
use serde::Serialize;

use taxaudit_core::model::{ElementRef, TaxonomyElement};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LifecycleEntry {
    pub element: ElementRef,
    pub first_seen: Option<NaiveDate>,
    pub last_seen: Option<NaiveDate>,
}

impl From<&TaxonomyElement> for LifecycleEntry {
    fn from(e: &TaxonomyElement) -> Self {
        Self {
            element: e.to_ref(),
            first_seen: e.first_seen,
            last_seen: e.last_seen,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LifecycleReport {
    /// Last seen more than `stale_after_days` before the reference date.
    pub stale: Vec<LifecycleEntry>,
    /// First and last seen on the same day.
    pub single_day: Vec<LifecycleEntry>,
}

/// Elements with missing dates never qualify for either list.
pub fn lifecycle(
    elements: &[TaxonomyElement],
    reference_date: NaiveDate,
    stale_after_days: u32,
) -> LifecycleReport {
    let cutoff = reference_date.checked_sub_days(Days::new(u64::from(stale_after_days)));
    let mut report = LifecycleReport::default();
    for element in elements {
        if let (Some(cutoff), Some(last_seen)) = (cutoff, element.last_seen) {
            if last_seen < cutoff {
                report.stale.push(element.into());
            }
        }
        if element.first_seen.is_some() && element.first_seen == element.last_seen {
            report.single_day.push(element.into());
        }
    }
    report.stale.sort_by(|a, b| a.element.cmp(&b.element));
    report.single_day.sort_by(|a, b| a.element.cmp(&b.element));
    report
}
