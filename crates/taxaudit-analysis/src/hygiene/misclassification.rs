//! Event properties that look like they belong on the user.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;
use smallvec::SmallVec;

use taxaudit_core::model::{ElementKind, ElementRef, TaxonomyElement};

use crate::pii::PiiClassifier;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MisclassificationReason {
    StartsWithUser,
    ContainsVersion,
    ContainsPlan,
    ContainsSource,
    ContainsMedium,
    ContainsUtm,
    ContainsTotal,
    LocationMetadata,
    CampaignMetadata,
    UserIdentifyingData,
}

impl MisclassificationReason {
    pub fn label(&self) -> &'static str {
        match self {
            Self::StartsWithUser => "Starts with 'user_'",
            Self::ContainsVersion => "Contains 'version'",
            Self::ContainsPlan => "Contains 'plan'",
            Self::ContainsSource => "Contains 'source'",
            Self::ContainsMedium => "Contains 'medium'",
            Self::ContainsUtm => "Contains 'utm'",
            Self::ContainsTotal => "Contains 'total'",
            Self::LocationMetadata => "Location Metadata",
            Self::CampaignMetadata => "Campaign Metadata",
            Self::UserIdentifyingData => "User Identifying Data Match",
        }
    }
}

impl fmt::Display for MisclassificationReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

static NAME_RULES: LazyLock<Vec<(MisclassificationReason, Regex)>> = LazyLock::new(|| {
    use MisclassificationReason::*;
    [
        (StartsWithUser, r"(?i)^user_"),
        (ContainsVersion, r"(?i)version"),
        (ContainsPlan, r"(?i)plan"),
        (ContainsSource, r"(?i)source"),
        (ContainsMedium, r"(?i)medium"),
        (ContainsUtm, r"(?i)utm"),
        (ContainsTotal, r"(?i)total"),
        (LocationMetadata, r"(?i)latitude|longitude|country|region|timezone"),
        (CampaignMetadata, r"(?i)campaign|source|medium|utm_"),
    ]
    .into_iter()
    .filter_map(|(reason, pattern)| Regex::new(pattern).ok().map(|re| (reason, re)))
    .collect()
});

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MisclassifiedProperty {
    pub element: ElementRef,
    /// Every rule that fired, in rule order.
    pub reasons: SmallVec<[MisclassificationReason; 4]>,
}

/// Check event properties only. With a classifier, any PII flag adds
/// `UserIdentifyingData`.
pub fn find_misclassified(
    elements: &[TaxonomyElement],
    classifier: Option<&PiiClassifier>,
) -> Vec<MisclassifiedProperty> {
    let mut flagged: Vec<MisclassifiedProperty> = elements
        .iter()
        .filter(|e| e.kind == ElementKind::EventProperty)
        .filter_map(|e| {
            let mut reasons: SmallVec<[MisclassificationReason; 4]> = NAME_RULES
                .iter()
                .filter(|(_, re)| re.is_match(&e.name))
                .map(|(reason, _)| *reason)
                .collect();
            if classifier.is_some_and(|c| c.classify(e).is_some()) {
                reasons.push(MisclassificationReason::UserIdentifyingData);
            }
            (!reasons.is_empty()).then(|| MisclassifiedProperty {
                element: e.to_ref(),
                reasons,
            })
        })
        .collect();
    flagged.sort_by(|a, b| a.element.cmp(&b.element));
    flagged
}
