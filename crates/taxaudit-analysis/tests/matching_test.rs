//! Matching engine tests: thresholds, modes, ordering, and intra-project passes.

use taxaudit_analysis::matching::MatchingEngine;
use taxaudit_analysis::similarity::{NameScorer, NormalizedName};
use taxaudit_core::model::{ElementKind, MatchingMode, ProjectTaxonomy, TaxonomyElement, Threshold};

fn project(id: &str, kind: ElementKind, names: &[&str]) -> ProjectTaxonomy {
    ProjectTaxonomy::with_elements(
        id,
        names
            .iter()
            .enumerate()
            .map(|(i, n)| TaxonomyElement::new(id, kind, format!("{id}-{i}"), *n))
            .collect(),
    )
}

fn t(v: f64) -> Threshold {
    Threshold::new(v).unwrap()
}

/// Scenario: "Signed Up" and "signed_up" in two projects match at 0.8.
#[test]
fn normalized_equal_names_match() {
    let a = project("A", ElementKind::Event, &["Signed Up"]);
    let b = project("B", ElementKind::Event, &["signed_up"]);
    let out = MatchingEngine::new().match_elements(&a, &b, ElementKind::Event, t(0.8), MatchingMode::BestMatch);
    assert_eq!(out.len(), 1);
    assert!(out.matches[0].score >= 0.8);
    assert_eq!(out.matches[0].left.project_id, "A");
    assert_eq!(out.matches[0].right.project_id, "B");
}

/// Scenario: at 1.0 "Login" and "Log In" do not match.
#[test]
fn exact_threshold_rejects_near_misses() {
    let a = project("A", ElementKind::Event, &["Login"]);
    let b = project("B", ElementKind::Event, &["Log In"]);
    let out = MatchingEngine::new().match_elements(&a, &b, ElementKind::Event, Threshold::EXACT, MatchingMode::BestMatch);
    assert!(out.is_empty());
}

/// Threshold 0 with all-pairs returns the full cross product.
#[test]
fn zero_threshold_returns_every_pair() {
    let a = project("A", ElementKind::Event, &["alpha", "beta", "gamma"]);
    let b = project("B", ElementKind::Event, &["delta", "epsilon"]);
    let out = MatchingEngine::new().match_elements(&a, &b, ElementKind::Event, Threshold::ANY, MatchingMode::AllPairs);
    assert_eq!(out.len(), 6);
}

/// Best-match keeps each element in at most one match and prefers higher scores.
#[test]
fn best_match_is_one_to_one() {
    let a = project("A", ElementKind::Event, &["order placed", "order place"]);
    let b = project("B", ElementKind::Event, &["order_placed"]);
    let all = MatchingEngine::new().match_elements(&a, &b, ElementKind::Event, t(0.8), MatchingMode::AllPairs);
    assert_eq!(all.len(), 2);
    let best = MatchingEngine::new().match_elements(&a, &b, ElementKind::Event, t(0.8), MatchingMode::BestMatch);
    assert_eq!(best.len(), 1);
    assert_eq!(best.matches[0].left.name, "order placed");
    assert_eq!(best.matches[0].score, 1.0);
}

/// Equal scores are broken by left name, so input order cannot matter.
#[test]
fn ties_break_on_names_not_input_order() {
    let forward = project("A", ElementKind::Event, &["zz login", "aa login"]);
    let backward = project("A", ElementKind::Event, &["aa login", "zz login"]);
    let b = project("B", ElementKind::Event, &["login"]);
    let engine = MatchingEngine::new();
    let x = engine.match_elements(&forward, &b, ElementKind::Event, t(0.5), MatchingMode::BestMatch);
    let y = engine.match_elements(&backward, &b, ElementKind::Event, t(0.5), MatchingMode::BestMatch);
    assert_eq!(x.matches[0].left.name, "aa login");
    assert_eq!(y.matches[0].left.name, "aa login");
}

/// Only elements of the requested kind are compared.
#[test]
fn other_kinds_are_ignored() {
    let mut a = project("A", ElementKind::Event, &["plan"]);
    a.push(TaxonomyElement::new("A", ElementKind::EventProperty, "p", "plan"));
    let b = project("B", ElementKind::EventProperty, &["plan"]);
    let out = MatchingEngine::new().match_elements(&a, &b, ElementKind::EventProperty, t(0.9), MatchingMode::AllPairs);
    assert_eq!(out.len(), 1);
    assert_eq!(out.matches[0].left.id, "p");
    assert_eq!(out.kind, ElementKind::EventProperty);
}

/// Intra-project duplicates: one candidate per unordered pair.
#[test]
fn intra_project_pairs_are_unordered() {
    let p = project("A", ElementKind::UserProperty, &["plan_type", "Plan Type", "plan-type"]);
    let out = MatchingEngine::new().match_elements(&p, &p, ElementKind::UserProperty, Threshold::EXACT, MatchingMode::AllPairs);
    assert!(out.is_intra_project());
    assert_eq!(out.len(), 3);
    for m in &out.matches {
        assert!((m.left.name.as_str(), m.left.id.as_str()) < (m.right.name.as_str(), m.right.id.as_str()));
    }
    let best = MatchingEngine::new().match_elements(&p, &p, ElementKind::UserProperty, Threshold::EXACT, MatchingMode::BestMatch);
    assert_eq!(best.len(), 1);
}

/// Empty projects produce an empty assignment, not an error.
#[test]
fn empty_projects() {
    let a = ProjectTaxonomy::new("A");
    let b = ProjectTaxonomy::new("B");
    let out = MatchingEngine::new().match_elements(&a, &b, ElementKind::Event, t(0.8), MatchingMode::BestMatch);
    assert!(out.is_empty());
    assert_eq!(out.excluded_elements, 0);
    assert_eq!(out.threshold, t(0.8));
}

/// Any scorer can be plugged in; one without a bound scores every pair.
#[test]
fn custom_scorer_without_blocking() {
    struct SameFirstToken;
    impl NameScorer for SameFirstToken {
        fn score_normalized(&self, a: &NormalizedName, b: &NormalizedName) -> f64 {
            if a.tokens().first() == b.tokens().first() {
                1.0
            } else {
                0.0
            }
        }
    }

    let a = project("A", ElementKind::Event, &["cart viewed", "x"]);
    let b = project("B", ElementKind::Event, &["cart_abandoned_by_user_after_timeout"]);
    let engine = MatchingEngine::with_scorer(SameFirstToken);
    let out = engine.match_elements(&a, &b, ElementKind::Event, t(0.9), MatchingMode::AllPairs);
    assert_eq!(out.compared_pairs, 2);
    assert_eq!(out.len(), 1);
    assert_eq!(out.matches[0].left.name, "cart viewed");
}
