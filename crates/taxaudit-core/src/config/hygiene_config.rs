//! Hygiene report configuration.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_STALE_AFTER_DAYS, DEFAULT_TOP_N};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct HygieneConfig {
    /// Days since last seen after which an element is stale. Default: 365.
    pub stale_after_days: Option<u32>,
    /// Length of top/bottom lists. Default: 10.
    pub top_n: Option<usize>,
    /// Date staleness is measured from. Default: the run's reference date.
    pub reference_date: Option<NaiveDate>,
}

impl HygieneConfig {
    pub fn effective_stale_after_days(&self) -> u32 {
        self.stale_after_days.unwrap_or(DEFAULT_STALE_AFTER_DAYS)
    }

    pub fn effective_top_n(&self) -> usize {
        self.top_n.unwrap_or(DEFAULT_TOP_N)
    }
}
