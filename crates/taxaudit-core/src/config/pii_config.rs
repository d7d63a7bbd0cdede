//! PII classifier configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_SAMPLE_LIMIT;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct PiiConfig {
    /// Run the classifier at all. Default: true.
    pub enabled: Option<bool>,
    /// TOML pattern library replacing the built-in one.
    pub library_path: Option<PathBuf>,
    /// Sample values inspected per element. Default: 5.
    pub sample_limit: Option<usize>,
}

impl PiiConfig {
    pub fn effective_enabled(&self) -> bool {
        self.enabled.unwrap_or(true)
    }

    pub fn effective_sample_limit(&self) -> usize {
        self.sample_limit.unwrap_or(DEFAULT_SAMPLE_LIMIT)
    }
}
