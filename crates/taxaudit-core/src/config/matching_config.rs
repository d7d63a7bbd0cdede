//! Matching configuration.

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_THRESHOLD;
use crate::errors::ConfigError;
use crate::model::{MatchingMode, Threshold};

/// Configuration for the matching engine and, through it, gap analysis.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct MatchingConfig {
    /// Minimum similarity in `[0, 1]`. Default: 0.80.
    pub threshold: Option<f64>,
    /// Selection policy. Default: best_match.
    pub mode: Option<MatchingMode>,
    /// Also look for near-duplicates inside each project. Default: true.
    pub intra_project: Option<bool>,
}

impl MatchingConfig {
    /// Returns the validated threshold, defaulting to 0.80.
    pub fn effective_threshold(&self) -> Result<Threshold, ConfigError> {
        Threshold::new(self.threshold.unwrap_or(DEFAULT_THRESHOLD))
    }

    pub fn effective_mode(&self) -> MatchingMode {
        self.mode.unwrap_or_default()
    }

    pub fn effective_intra_project(&self) -> bool {
        self.intra_project.unwrap_or(true)
    }
}
