//! Property tests for the algebraic guarantees of scoring, matching, gaps,
//! and PII precedence.

use std::collections::BTreeSet;

use proptest::prelude::*;

use taxaudit_analysis::gaps::analyze;
use taxaudit_analysis::matching::MatchingEngine;
use taxaudit_analysis::pii::{PiiClassifier, PiiLibrary};
use taxaudit_analysis::similarity::{score, NameScorer, NormalizedName, TokenSortRatio};
use taxaudit_core::model::{
    ElementKind, ElementRef, MatchingMode, PiiConfidence, ProjectTaxonomy, Projects,
    TaxonomyElement, Threshold,
};

fn name_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z]{1,6}([ _.-][a-zA-Z]{1,6}){0,2}"
}

fn project(id: &str, names: &[String]) -> ProjectTaxonomy {
    ProjectTaxonomy::with_elements(
        id,
        names
            .iter()
            .enumerate()
            .map(|(i, n)| TaxonomyElement::new(id, ElementKind::Event, format!("{id}{i}"), n.clone()))
            .collect(),
    )
}

// ── Scorer ────────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn score_is_symmetric(a in "[ -~]{0,20}", b in "[ -~]{0,20}") {
        prop_assert_eq!(score(&a, &b), score(&b, &a));
    }

    #[test]
    fn score_is_reflexive(a in "[ -~]{0,20}") {
        prop_assert_eq!(score(&a, &a), 1.0);
    }

    #[test]
    fn score_is_bounded(a in "[ -~]{0,20}", b in "[ -~]{0,20}") {
        let s = score(&a, &b);
        prop_assert!((0.0..=1.0).contains(&s), "score {} out of range", s);
    }

    #[test]
    fn case_and_separators_do_not_matter(a in name_strategy()) {
        let variant = a.to_uppercase().replace([' ', '.', '-'], "_");
        prop_assert_eq!(score(&a, &variant), 1.0);
    }

    #[test]
    fn upper_bound_never_underestimates(a in name_strategy(), b in name_strategy()) {
        let (na, nb) = (NormalizedName::new(&a), NormalizedName::new(&b));
        prop_assert!(TokenSortRatio.upper_bound(&na, &nb) >= TokenSortRatio.score_normalized(&na, &nb));
    }
}

// ── Matching ──────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn raising_the_threshold_only_removes_candidates(
        left in prop::collection::vec(name_strategy(), 0..8),
        right in prop::collection::vec(name_strategy(), 0..8),
        low in 0.0f64..1.0,
        bump in 0.0f64..0.5,
    ) {
        let high = (low + bump).min(1.0);
        let (a, b) = (project("A", &left), project("B", &right));
        let engine = MatchingEngine::new();
        let lo = engine.match_elements(&a, &b, ElementKind::Event, Threshold::new(low).unwrap(), MatchingMode::AllPairs);
        let hi = engine.match_elements(&a, &b, ElementKind::Event, Threshold::new(high).unwrap(), MatchingMode::AllPairs);
        prop_assert!(hi.len() <= lo.len());
        prop_assert_eq!(&lo.matches[..hi.len()], hi.matches.as_slice());
    }

    #[test]
    fn raising_the_threshold_only_removes_best_matches(
        left in prop::collection::vec(name_strategy(), 0..8),
        right in prop::collection::vec(name_strategy(), 0..8),
        low in 0.0f64..1.0,
        bump in 0.0f64..0.5,
    ) {
        let high = (low + bump).min(1.0);
        let (a, b) = (project("A", &left), project("B", &right));
        let engine = MatchingEngine::new();
        let lo = engine.match_elements(&a, &b, ElementKind::Event, Threshold::new(low).unwrap(), MatchingMode::BestMatch);
        let hi = engine.match_elements(&a, &b, ElementKind::Event, Threshold::new(high).unwrap(), MatchingMode::BestMatch);
        for m in &hi.matches {
            prop_assert!(lo.matches.contains(m), "{} ~ {} lost at the lower threshold", m.left, m.right);
        }
    }

    #[test]
    fn best_match_is_one_to_one(
        left in prop::collection::vec(name_strategy(), 0..10),
        right in prop::collection::vec(name_strategy(), 0..10),
        t in 0.0f64..1.0,
    ) {
        let (a, b) = (project("A", &left), project("B", &right));
        let out = MatchingEngine::new().match_elements(&a, &b, ElementKind::Event, Threshold::new(t).unwrap(), MatchingMode::BestMatch);
        let mut seen: BTreeSet<&ElementRef> = BTreeSet::new();
        for m in &out.matches {
            prop_assert!(seen.insert(&m.left), "{} matched twice", m.left);
            prop_assert!(seen.insert(&m.right), "{} matched twice", m.right);
        }
    }

    #[test]
    fn input_order_does_not_change_output(
        left in prop::collection::vec(name_strategy(), 0..8),
        right in prop::collection::vec(name_strategy(), 0..8),
        t in 0.0f64..1.0,
    ) {
        let t = Threshold::new(t).unwrap();
        let engine = MatchingEngine::new();
        let (a, b) = (project("A", &left), project("B", &right));
        let mut a_rev = a.clone();
        a_rev.elements.reverse();
        let mut b_rev = b.clone();
        b_rev.elements.reverse();
        let x = engine.match_elements(&a, &b, ElementKind::Event, t, MatchingMode::BestMatch);
        let y = engine.match_elements(&a_rev, &b_rev, ElementKind::Event, t, MatchingMode::BestMatch);
        prop_assert_eq!(x, y);
    }
}

// ── Gaps ──────────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn every_element_is_matched_or_gapped(
        left in prop::collection::vec(name_strategy(), 0..8),
        right in prop::collection::vec(name_strategy(), 0..8),
        t in 0.0f64..1.0,
    ) {
        let t = Threshold::new(t).unwrap();
        let projects: Projects = ProjectTaxonomy::into_projects(vec![project("A", &left), project("B", &right)]);
        let pass = MatchingEngine::new().match_elements(&projects["A"], &projects["B"], ElementKind::Event, t, MatchingMode::BestMatch);
        let gaps = analyze(&projects, std::slice::from_ref(&pass), t).unwrap();
        let gapped: BTreeSet<&ElementRef> = gaps.iter().map(|g| &g.element).collect();
        for taxonomy in projects.values() {
            for element in &taxonomy.elements {
                let r = element.to_ref();
                prop_assert!(
                    pass.contains(&r) != gapped.contains(&r),
                    "{} must be exactly one of matched or gapped", r
                );
            }
        }
    }
}

// ── PII precedence ────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn whole_keyword_names_are_always_exact(
        idx in 0usize..1000,
        upper in any::<bool>(),
        sep in prop::sample::select(vec!["_", "-", " ", "."]),
    ) {
        let classifier = PiiClassifier::new(PiiLibrary::embedded().unwrap());
        let keywords: Vec<&str> = classifier
            .library()
            .categories()
            .iter()
            .flat_map(|c| c.keywords.iter().map(|k| k.raw.as_str()))
            .collect();
        let keyword = keywords[idx % keywords.len()];
        let mut name = keyword.replace('_', sep);
        if upper {
            name = name.to_uppercase();
        }
        let element = TaxonomyElement::new("A", ElementKind::EventProperty, "1", name.clone());
        let flag = classifier.classify(&element);
        prop_assert!(flag.is_some(), "{} not flagged", name);
        if let Some(flag) = flag {
            prop_assert_eq!(flag.confidence, PiiConfidence::Exact);
        }
    }
}
