//! Naming-style profile.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use taxaudit_core::model::{ElementKind, TaxonomyElement};

/// Naming conventions, in the order they are tested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum NamingStyle {
    #[serde(rename = "UPPER CASE")]
    UpperCase,
    #[serde(rename = "lower case")]
    LowerCase,
    #[serde(rename = "Sentence case")]
    SentenceCase,
    #[serde(rename = "Title Case")]
    TitleCase,
    #[serde(rename = "PascalCase")]
    PascalCase,
    #[serde(rename = "camelCase")]
    CamelCase,
    #[serde(rename = "snake_case")]
    SnakeCase,
    #[serde(rename = "kebab-case")]
    KebabCase,
    #[serde(rename = "SCREAMING_SNAKE_CASE")]
    ScreamingSnakeCase,
    #[serde(rename = "Other")]
    Other,
}

impl NamingStyle {
    pub fn label(&self) -> &'static str {
        match self {
            Self::UpperCase => "UPPER CASE",
            Self::LowerCase => "lower case",
            Self::SentenceCase => "Sentence case",
            Self::TitleCase => "Title Case",
            Self::PascalCase => "PascalCase",
            Self::CamelCase => "camelCase",
            Self::SnakeCase => "snake_case",
            Self::KebabCase => "kebab-case",
            Self::ScreamingSnakeCase => "SCREAMING_SNAKE_CASE",
            Self::Other => "Other",
        }
    }
}

impl fmt::Display for NamingStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

static STYLE_RULES: LazyLock<Vec<(NamingStyle, Regex)>> = LazyLock::new(|| {
    [
        (NamingStyle::UpperCase, r"^[A-Z\s]+$"),
        (NamingStyle::LowerCase, r"^[a-z\s]+$"),
        (NamingStyle::SentenceCase, r"^[A-Z][a-z]*(?:\s[a-z]+)*$"),
        (NamingStyle::TitleCase, r"^(?:[A-Z][a-z]+\s*)+$"),
        (NamingStyle::PascalCase, r"^[A-Z][a-zA-Z0-9]+(?:[A-Z][a-zA-Z0-9]+)*$"),
        (NamingStyle::CamelCase, r"^[a-z]+(?:[A-Z][a-zA-Z0-9]*)*$"),
        (NamingStyle::SnakeCase, r"^[a-z]+(?:_[a-z0-9]+)*$"),
        (NamingStyle::KebabCase, r"^[a-z]+(?:-[a-z0-9]+)*$"),
        (NamingStyle::ScreamingSnakeCase, r"^[A-Z]+(?:_[A-Z0-9]+)*$"),
    ]
    .into_iter()
    .filter_map(|(style, pattern)| Regex::new(pattern).ok().map(|re| (style, re)))
    .collect()
});

/// First style whose rule matches the raw name. Blank names are `Other`.
pub fn classify_style(name: &str) -> NamingStyle {
    if name.trim().is_empty() {
        return NamingStyle::Other;
    }
    STYLE_RULES
        .iter()
        .find(|(_, re)| re.is_match(name))
        .map_or(NamingStyle::Other, |(style, _)| *style)
}

/// Style counts for one kind within one project.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SyntaxProfile {
    pub kind: ElementKind,
    pub total: usize,
    pub counts: BTreeMap<NamingStyle, usize>,
    /// Most frequent style; ties go to the style tested first.
    pub dominant: Option<NamingStyle>,
}

/// One profile per kind present in `elements`.
pub fn profile_syntax(elements: &[TaxonomyElement]) -> Vec<SyntaxProfile> {
    let mut by_kind: BTreeMap<ElementKind, BTreeMap<NamingStyle, usize>> = BTreeMap::new();
    for element in elements {
        *by_kind
            .entry(element.kind)
            .or_default()
            .entry(classify_style(&element.name))
            .or_default() += 1;
    }
    by_kind
        .into_iter()
        .map(|(kind, counts)| {
            let dominant = counts
                .iter()
                .max_by(|(sa, ca), (sb, cb)| ca.cmp(cb).then_with(|| sb.cmp(sa)))
                .map(|(style, _)| *style);
            SyntaxProfile {
                kind,
                total: counts.values().sum(),
                counts,
                dominant,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn styles_follow_rule_order() {
        assert_eq!(classify_style("SIGNED UP"), NamingStyle::UpperCase);
        assert_eq!(classify_style("signed up"), NamingStyle::LowerCase);
        assert_eq!(classify_style("Signed up"), NamingStyle::SentenceCase);
        assert_eq!(classify_style("Signed Up"), NamingStyle::TitleCase);
        assert_eq!(classify_style("SignedUp2"), NamingStyle::PascalCase);
        assert_eq!(classify_style("signedUp"), NamingStyle::CamelCase);
        assert_eq!(classify_style("signed_up"), NamingStyle::SnakeCase);
        assert_eq!(classify_style("signed-up"), NamingStyle::KebabCase);
        assert_eq!(classify_style("SIGNED_UP"), NamingStyle::ScreamingSnakeCase);
        assert_eq!(classify_style("Signed_Up 2"), NamingStyle::Other);
        assert_eq!(classify_style("   "), NamingStyle::Other);
    }

    #[test]
    fn single_lowercase_word_is_lower_case() {
        assert_eq!(classify_style("login"), NamingStyle::LowerCase);
    }

    #[test]
    fn title_case_is_tested_before_pascal_case() {
        // Title Case allows zero spaces between capitalized words.
        assert_eq!(classify_style("SignedUp"), NamingStyle::TitleCase);
    }
}
