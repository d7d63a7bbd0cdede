//! Similarity threshold and matching mode.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_THRESHOLD;
use crate::errors::ConfigError;

/// Minimum similarity score for two elements to match. Always within `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Threshold(f64);

impl Threshold {
    /// Admits every pair.
    pub const ANY: Threshold = Threshold(0.0);
    /// Admits only identical normalized names.
    pub const EXACT: Threshold = Threshold(1.0);

    pub fn new(value: f64) -> Result<Self, ConfigError> {
        if value.is_finite() && (0.0..=1.0).contains(&value) {
            Ok(Self(value))
        } else {
            Err(ConfigError::InvalidThreshold { value })
        }
    }

    /// Accepts the 0–100 scale some exports and older configs use.
    pub fn from_percent(value: f64) -> Result<Self, ConfigError> {
        Self::new(value / 100.0).map_err(|_| ConfigError::InvalidThreshold { value })
    }

    pub fn value(self) -> f64 {
        self.0
    }

    /// True when `score` meets this threshold.
    pub fn admits(self, score: f64) -> bool {
        score >= self.0
    }
}

impl Default for Threshold {
    fn default() -> Self {
        Self(DEFAULT_THRESHOLD)
    }
}

impl TryFrom<f64> for Threshold {
    type Error = ConfigError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Threshold> for f64 {
    fn from(t: Threshold) -> Self {
        t.0
    }
}

impl fmt::Display for Threshold {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

/// How candidates above the threshold become final matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchingMode {
    /// Greedy one-to-one assignment in descending score order.
    #[default]
    BestMatch,
    /// Every candidate above the threshold.
    AllPairs,
}

impl MatchingMode {
    pub fn name(&self) -> &'static str {
        match self {
            Self::BestMatch => "best_match",
            Self::AllPairs => "all_pairs",
        }
    }
}

impl FromStr for MatchingMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "best_match" => Ok(Self::BestMatch),
            "all_pairs" => Ok(Self::AllPairs),
            other => Err(ConfigError::ValidationFailed {
                field: "matching.mode".to_string(),
                message: format!("unknown mode '{other}', expected best_match or all_pairs"),
            }),
        }
    }
}

impl fmt::Display for MatchingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
