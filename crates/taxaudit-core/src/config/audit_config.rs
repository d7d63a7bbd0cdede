//! Top-level audit configuration with layered resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{HygieneConfig, MatchingConfig, PiiConfig};
use crate::constants::{PROJECT_CONFIG_FILE, USER_CONFIG_DIR};
use crate::errors::ConfigError;
use crate::model::{MatchingMode, Threshold};

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. CLI flags (applied via `apply_cli_overrides`)
/// 2. Environment variables (`TAXAUDIT_*`)
/// 3. Project config (`taxaudit.toml` in the audit root)
/// 4. User config (`~/.taxaudit/config.toml`)
/// 5. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AuditConfig {
    pub matching: MatchingConfig,
    pub pii: PiiConfig,
    pub hygiene: HygieneConfig,
}

/// Override arguments a front end can apply on top of every other layer.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub threshold: Option<f64>,
    pub mode: Option<MatchingMode>,
    pub intra_project: Option<bool>,
    pub pii_library: Option<PathBuf>,
    pub stale_after_days: Option<u32>,
}

const ENV_THRESHOLD: &str = "TAXAUDIT_MATCHING_THRESHOLD";
const ENV_MODE: &str = "TAXAUDIT_MATCHING_MODE";
const ENV_PII_LIBRARY: &str = "TAXAUDIT_PII_LIBRARY";
const ENV_STALE_AFTER_DAYS: &str = "TAXAUDIT_HYGIENE_STALE_AFTER_DAYS";

impl AuditConfig {
    /// Load configuration with layered resolution rooted at `root`.
    pub fn load(root: &Path, cli_overrides: Option<&CliOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Lowest priority: user config. A broken user file is reported, a
        // missing one is not.
        if let Some(user_config_path) = Self::user_config_path() {
            if user_config_path.exists() {
                Self::merge_toml_file(&mut config, &user_config_path)?;
            }
        }

        let project_config_path = root.join(PROJECT_CONFIG_FILE);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        Self::apply_env_overrides(&mut config)?;

        if let Some(cli) = cli_overrides {
            Self::apply_cli_overrides(&mut config, cli);
        }

        Self::validate(&config)?;

        Ok(config)
    }

    /// Load configuration from a TOML string (no layering, still validated).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: AuditConfig = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate the configuration values.
    pub fn validate(config: &AuditConfig) -> Result<(), ConfigError> {
        if let Some(threshold) = config.matching.threshold {
            Threshold::new(threshold).map_err(|_| ConfigError::ValidationFailed {
                field: "matching.threshold".to_string(),
                message: format!("{threshold} is not between 0.0 and 1.0"),
            })?;
        }
        if config.pii.sample_limit == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "pii.sample_limit".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if config.hygiene.top_n == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "hygiene.top_n".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        Ok(())
    }

    /// Returns the user config path: `~/.taxaudit/config.toml`.
    fn user_config_path() -> Option<PathBuf> {
        home_dir().map(|h| h.join(USER_CONFIG_DIR).join("config.toml"))
    }

    /// Merge a TOML file into the existing config. Unknown keys are ignored.
    /// A relative `pii.library_path` is resolved against the file's directory.
    fn merge_toml_file(config: &mut AuditConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let mut file_config: AuditConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        if let (Some(library), Some(dir)) = (&file_config.pii.library_path, path.parent()) {
            if library.is_relative() {
                file_config.pii.library_path = Some(dir.join(library));
            }
        }

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`; `other` wins wherever it has a value.
    fn merge(base: &mut AuditConfig, other: &AuditConfig) {
        // Matching
        if other.matching.threshold.is_some() {
            base.matching.threshold = other.matching.threshold;
        }
        if other.matching.mode.is_some() {
            base.matching.mode = other.matching.mode;
        }
        if other.matching.intra_project.is_some() {
            base.matching.intra_project = other.matching.intra_project;
        }

        // PII
        if other.pii.enabled.is_some() {
            base.pii.enabled = other.pii.enabled;
        }
        if other.pii.library_path.is_some() {
            base.pii.library_path = other.pii.library_path.clone();
        }
        if other.pii.sample_limit.is_some() {
            base.pii.sample_limit = other.pii.sample_limit;
        }

        // Hygiene
        if other.hygiene.stale_after_days.is_some() {
            base.hygiene.stale_after_days = other.hygiene.stale_after_days;
        }
        if other.hygiene.top_n.is_some() {
            base.hygiene.top_n = other.hygiene.top_n;
        }
        if other.hygiene.reference_date.is_some() {
            base.hygiene.reference_date = other.hygiene.reference_date;
        }
    }

    /// Apply environment variable overrides. A threshold that is not a number
    /// is an error; other unparseable values are logged and skipped.
    fn apply_env_overrides(config: &mut AuditConfig) -> Result<(), ConfigError> {
        if let Ok(val) = std::env::var(ENV_THRESHOLD) {
            let v = val.trim().parse::<f64>().map_err(|_| ConfigError::ValidationFailed {
                field: "matching.threshold".to_string(),
                message: format!("{ENV_THRESHOLD}={val:?} is not a number"),
            })?;
            config.matching.threshold = Some(v);
        }
        if let Ok(val) = std::env::var(ENV_MODE) {
            match val.parse::<MatchingMode>() {
                Ok(v) => config.matching.mode = Some(v),
                Err(e) => tracing::warn!(var = ENV_MODE, error = %e, "ignoring override"),
            }
        }
        if let Ok(val) = std::env::var(ENV_PII_LIBRARY) {
            if !val.trim().is_empty() {
                config.pii.library_path = Some(PathBuf::from(val));
            }
        }
        if let Ok(val) = std::env::var(ENV_STALE_AFTER_DAYS) {
            match val.parse::<u32>() {
                Ok(v) => config.hygiene.stale_after_days = Some(v),
                Err(_) => tracing::warn!(var = ENV_STALE_AFTER_DAYS, value = %val, "ignoring non-numeric override"),
            }
        }
        Ok(())
    }

    /// Apply CLI overrides (highest priority).
    fn apply_cli_overrides(config: &mut AuditConfig, cli: &CliOverrides) {
        if let Some(v) = cli.threshold {
            config.matching.threshold = Some(v);
        }
        if let Some(v) = cli.mode {
            config.matching.mode = Some(v);
        }
        if let Some(v) = cli.intra_project {
            config.matching.intra_project = Some(v);
        }
        if let Some(ref v) = cli.pii_library {
            config.pii.library_path = Some(v.clone());
        }
        if let Some(v) = cli.stale_after_days {
            config.hygiene.stale_after_days = Some(v);
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}

/// Cross-platform home directory resolution.
fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
}
