//! Shared constants for the taxonomy audit engine.

/// taxaudit version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default similarity threshold for matching.
pub const DEFAULT_THRESHOLD: f64 = 0.80;

/// Default number of sample values the PII classifier inspects per element.
pub const DEFAULT_SAMPLE_LIMIT: usize = 5;

/// Default age in days after which an element counts as stale.
pub const DEFAULT_STALE_AFTER_DAYS: u32 = 365;

/// Default size of top/bottom lists in hygiene reports.
pub const DEFAULT_TOP_N: usize = 10;

/// Project-level config file name.
pub const PROJECT_CONFIG_FILE: &str = "taxaudit.toml";

/// User-level config directory name under `$HOME`.
pub const USER_CONFIG_DIR: &str = ".taxaudit";

/// Environment variable holding the log filter.
pub const LOG_ENV_VAR: &str = "TAXAUDIT_LOG";

/// Usage window the volume and query counters cover.
pub const USAGE_WINDOW_DAYS: u32 = 90;
