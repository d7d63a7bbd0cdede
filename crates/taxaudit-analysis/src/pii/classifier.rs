//! Three-tier PII classifier.
//!
//! Tiers are tried in order and the first hit wins:
//!
//! 1. `exact`: the name's `_`-joined form equals a keyword.
//! 2. `pattern`: a name regex matches the space-joined lowercase name, or a
//!    value regex matches one of the first `sample_limit` sample values.
//! 3. `heuristic`: a keyword's tokens appear contiguously in the name, or its
//!    compact form is a substring of the name's compact form.
//!
//! Inside a tier, library order decides.

use std::cmp::Ordering;

use rayon::prelude::*;
use tracing::debug;

use taxaudit_core::constants::DEFAULT_SAMPLE_LIMIT;
use taxaudit_core::model::{PiiConfidence, PiiFlag, PiiSource, TaxonomyElement};

use super::library::{CompiledCategory, PiiKeyword, PiiLibrary};
use crate::similarity::NormalizedName;

pub struct PiiClassifier {
    library: PiiLibrary,
    sample_limit: usize,
}

impl PiiClassifier {
    pub fn new(library: PiiLibrary) -> Self {
        Self {
            library,
            sample_limit: DEFAULT_SAMPLE_LIMIT,
        }
    }

    pub fn with_sample_limit(mut self, sample_limit: usize) -> Self {
        self.sample_limit = sample_limit;
        self
    }

    pub fn library(&self) -> &PiiLibrary {
        &self.library
    }

    /// Classify one element. Elements whose name normalizes to nothing are
    /// never flagged.
    pub fn classify(&self, element: &TaxonomyElement) -> Option<PiiFlag> {
        let name = NormalizedName::new(&element.name);
        if name.is_empty() {
            return None;
        }
        let flag = |category: &CompiledCategory, confidence, matched_token: String, source| PiiFlag {
            element: element.to_ref(),
            category: category.category,
            confidence,
            matched_token,
            source,
        };

        let canonical = name.canonical();
        for category in self.library.categories() {
            if let Some(kw) = category.keywords.iter().find(|k| k.canonical == canonical) {
                return Some(flag(category, PiiConfidence::Exact, kw.raw.clone(), PiiSource::Name));
            }
        }

        let spaced = name.spaced();
        let samples = &element.sample_values[..element.sample_values.len().min(self.sample_limit)];
        for category in self.library.categories() {
            if let Some(m) = category.patterns.iter().find_map(|re| re.find(&spaced)) {
                return Some(flag(
                    category,
                    PiiConfidence::Pattern,
                    m.as_str().to_string(),
                    PiiSource::Name,
                ));
            }
            // The regex source is reported, never the sample value itself.
            if let Some(re) = category
                .value_patterns
                .iter()
                .find(|re| samples.iter().any(|v| re.is_match(v.trim())))
            {
                return Some(flag(
                    category,
                    PiiConfidence::Pattern,
                    re.as_str().to_string(),
                    PiiSource::SampleValue,
                ));
            }
        }

        let compact = name.compact();
        for category in self.library.categories() {
            if let Some(kw) = category
                .keywords
                .iter()
                .find(|k| self.heuristic_hit(k, name.tokens(), &compact))
            {
                return Some(flag(category, PiiConfidence::Heuristic, kw.raw.clone(), PiiSource::Name));
            }
        }

        None
    }

    fn heuristic_hit(&self, keyword: &PiiKeyword, tokens: &[String], compact: &str) -> bool {
        let n = keyword.tokens.len();
        if n <= tokens.len() && tokens.windows(n).any(|w| w == keyword.tokens.as_slice()) {
            return true;
        }
        keyword.compact.chars().count() >= self.library.min_substring_len()
            && compact.contains(keyword.compact.as_str())
    }

    /// Classify many elements in parallel. Flags come back sorted by
    /// project, kind, name, and id.
    pub fn classify_all<'a, I>(&self, elements: I) -> Vec<PiiFlag>
    where
        I: IntoParallelIterator<Item = &'a TaxonomyElement>,
    {
        let mut flags: Vec<PiiFlag> = elements
            .into_par_iter()
            .filter_map(|e| self.classify(e))
            .collect();
        flags.sort_by(flag_order);
        debug!(flags = flags.len(), "PII classification complete");
        flags
    }
}

fn flag_order(a: &PiiFlag, b: &PiiFlag) -> Ordering {
    a.element.cmp(&b.element)
}

#[cfg(test)]
mod tests {
    use super::*;
    use taxaudit_core::model::{ElementKind, PiiCategory};

    fn classifier() -> PiiClassifier {
        PiiClassifier::new(PiiLibrary::embedded().unwrap())
    }

    fn prop(name: &str) -> TaxonomyElement {
        TaxonomyElement::new("A", ElementKind::EventProperty, "1", name)
    }

    #[test]
    fn exact_keyword_wins() {
        let flag = classifier().classify(&prop("Email Address")).unwrap();
        assert_eq!(flag.category, PiiCategory::Email);
        assert_eq!(flag.confidence, PiiConfidence::Exact);
    }

    #[test]
    fn short_keywords_do_not_match_inside_words() {
        assert!(classifier().classify(&prop("page_type")).is_none());
        assert!(classifier().classify(&prop("usage count")).is_none());
    }

    #[test]
    fn sample_values_are_capped() {
        let e = prop("contact")
            .with_samples(["a", "b", "c", "d", "e", "someone@example.com"]);
        assert!(classifier().classify(&e).is_none());
        let flag = classifier().with_sample_limit(6).classify(&e).unwrap();
        assert_eq!(flag.source, PiiSource::SampleValue);
        assert_eq!(flag.category, PiiCategory::Email);
    }
}
