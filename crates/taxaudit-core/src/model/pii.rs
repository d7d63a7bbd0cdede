//! PII categories, confidence tiers, and flags.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::element::ElementRef;

/// Closed set of PII categories a pattern library may define.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PiiCategory {
    Email,
    Phone,
    PersonName,
    PostalAddress,
    GovernmentId,
    FinancialAccount,
    DateOfBirth,
    DeviceIdentifier,
    Location,
    Credential,
    Health,
    Demographic,
}

impl PiiCategory {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Phone => "phone",
            Self::PersonName => "person_name",
            Self::PostalAddress => "postal_address",
            Self::GovernmentId => "government_id",
            Self::FinancialAccount => "financial_account",
            Self::DateOfBirth => "date_of_birth",
            Self::DeviceIdentifier => "device_identifier",
            Self::Location => "location",
            Self::Credential => "credential",
            Self::Health => "health",
            Self::Demographic => "demographic",
        }
    }

    pub fn all() -> &'static [PiiCategory] {
        &[
            Self::Email,
            Self::Phone,
            Self::PersonName,
            Self::PostalAddress,
            Self::GovernmentId,
            Self::FinancialAccount,
            Self::DateOfBirth,
            Self::DeviceIdentifier,
            Self::Location,
            Self::Credential,
            Self::Health,
            Self::Demographic,
        ]
    }

    pub fn parse_str(s: &str) -> Option<Self> {
        let wanted = s.trim().to_ascii_lowercase().replace([' ', '-'], "_");
        Self::all().iter().copied().find(|c| c.name() == wanted)
    }
}

impl fmt::Display for PiiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// How a flag was reached. Declaration order is precedence order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PiiConfidence {
    /// Whole name equals a category keyword.
    Exact,
    /// A category regex matched the name or a sample value.
    Pattern,
    /// A keyword occurs somewhere inside the name.
    Heuristic,
}

impl PiiConfidence {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Exact => "exact",
            Self::Pattern => "pattern",
            Self::Heuristic => "heuristic",
        }
    }
}

impl fmt::Display for PiiConfidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Which string produced the flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PiiSource {
    Name,
    SampleValue,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PiiFlag {
    pub element: ElementRef,
    pub category: PiiCategory,
    pub confidence: PiiConfidence,
    pub matched_token: String,
    pub source: PiiSource,
}
