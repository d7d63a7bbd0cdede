//! Configuration system for taxaudit.
//! TOML-based, layered resolution: CLI > env > project > user > defaults.

pub mod audit_config;
pub mod hygiene_config;
pub mod matching_config;
pub mod pii_config;

pub use audit_config::{AuditConfig, CliOverrides};
pub use hygiene_config::HygieneConfig;
pub use matching_config::MatchingConfig;
pub use pii_config::PiiConfig;
