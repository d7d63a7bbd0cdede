//! Gap analyzer tests.

use std::collections::BTreeSet;

use taxaudit_analysis::gaps::{analyze, gap_counts};
use taxaudit_analysis::matching::MatchingEngine;
use taxaudit_core::errors::GapError;
use taxaudit_core::model::{
    ElementKind, MatchAssignment, MatchingMode, ProjectTaxonomy, Projects, TaxonomyElement,
    Threshold,
};

fn projects(layout: &[(&str, &[(ElementKind, &str)])]) -> Projects {
    ProjectTaxonomy::into_projects(layout.iter().map(|(pid, elements)| {
        ProjectTaxonomy::with_elements(
            *pid,
            elements
                .iter()
                .enumerate()
                .map(|(i, (kind, name))| TaxonomyElement::new(*pid, *kind, format!("{pid}{i}"), *name))
                .collect(),
        )
    }))
}

/// Cross-project passes for every pair and kind, the way a run builds them.
fn cross_passes(projects: &Projects, threshold: Threshold) -> Vec<MatchAssignment> {
    let engine = MatchingEngine::new();
    let list: Vec<&ProjectTaxonomy> = projects.values().collect();
    let mut out = Vec::new();
    for i in 0..list.len() {
        for j in i + 1..list.len() {
            for kind in ElementKind::all() {
                out.push(engine.match_elements(list[i], list[j], *kind, threshold, MatchingMode::BestMatch));
            }
        }
    }
    out
}

fn set(items: &[&str]) -> BTreeSet<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Scenario: user_email only in A at 0.9 is missing from B.
#[test]
fn element_only_in_one_project_is_a_gap() {
    let p = projects(&[
        ("A", &[(ElementKind::EventProperty, "user_email")]),
        ("B", &[]),
    ]);
    let t = Threshold::new(0.9).unwrap();
    let gaps = analyze(&p, &cross_passes(&p, t), t).unwrap();
    assert_eq!(gaps.len(), 1);
    assert_eq!(gaps[0].element.name, "user_email");
    assert_eq!(gaps[0].missing_from, set(&["B"]));
}

/// Scenario: matched names produce no gap.
#[test]
fn matched_elements_are_not_gaps() {
    let p = projects(&[
        ("A", &[(ElementKind::Event, "Signed Up")]),
        ("B", &[(ElementKind::Event, "signed_up")]),
    ]);
    let t = Threshold::new(0.8).unwrap();
    assert!(analyze(&p, &cross_passes(&p, t), t).unwrap().is_empty());
}

/// Scenario: at 1.0 Login and Log In each have a gap against the other.
#[test]
fn exact_threshold_gaps_both_ways() {
    let p = projects(&[
        ("A", &[(ElementKind::Event, "Login")]),
        ("B", &[(ElementKind::Event, "Log In")]),
    ]);
    let gaps = analyze(&p, &cross_passes(&p, Threshold::EXACT), Threshold::EXACT).unwrap();
    assert_eq!(gaps.len(), 2);
    assert_eq!(gaps[0].element.project_id, "A");
    assert_eq!(gaps[0].missing_from, set(&["B"]));
    assert_eq!(gaps[1].element.project_id, "B");
    assert_eq!(gaps[1].missing_from, set(&["A"]));
}

/// With three projects, missing_from aggregates every project lacking a match.
#[test]
fn missing_from_aggregates_projects() {
    let p = projects(&[
        ("A", &[(ElementKind::Event, "Trial Started")]),
        ("B", &[(ElementKind::Event, "trial_started")]),
        ("C", &[]),
    ]);
    let t = Threshold::new(0.8).unwrap();
    let gaps = analyze(&p, &cross_passes(&p, t), t).unwrap();
    assert_eq!(gaps.len(), 2);
    assert!(gaps.iter().all(|g| g.missing_from == set(&["C"])));

    let counts = gap_counts(&gaps);
    assert_eq!(counts.len(), 2);
    assert_eq!(counts[0].project_id, "A");
    assert_eq!(counts[0].missing_from, "C");
    assert_eq!(counts[0].count, 1);
}

/// A match of a different kind does not cover an element.
#[test]
fn kinds_do_not_cover_each_other() {
    let p = projects(&[
        ("A", &[(ElementKind::Event, "plan")]),
        ("B", &[(ElementKind::EventProperty, "plan")]),
    ]);
    let t = Threshold::new(0.8).unwrap();
    assert_eq!(analyze(&p, &cross_passes(&p, t), t).unwrap().len(), 2);
}

/// Output is ordered by project, name, kind, id.
#[test]
fn output_is_sorted() {
    let p = projects(&[
        ("B", &[(ElementKind::Event, "zeta"), (ElementKind::Event, "alpha")]),
        ("A", &[(ElementKind::UserProperty, "mid"), (ElementKind::Event, "mid")]),
    ]);
    let gaps = analyze(&p, &[], Threshold::default()).unwrap();
    let keys: Vec<_> = gaps
        .iter()
        .map(|g| (g.element.project_id.as_str(), g.element.name.as_str(), g.element.kind))
        .collect();
    assert_eq!(
        keys,
        vec![
            ("A", "mid", ElementKind::Event),
            ("A", "mid", ElementKind::UserProperty),
            ("B", "alpha", ElementKind::Event),
            ("B", "zeta", ElementKind::Event),
        ]
    );
}

/// Evidence carries the element's usage numbers.
#[test]
fn evidence_copies_usage() {
    let mut p = projects(&[("A", &[]), ("B", &[])]);
    if let Some(a) = p.get_mut("A") {
        a.push(TaxonomyElement::new("A", ElementKind::Event, "e", "Upgraded").with_usage(77, 3));
    }
    let gaps = analyze(&p, &[], Threshold::default()).unwrap();
    assert_eq!(gaps[0].evidence.volume, 77);
    assert_eq!(gaps[0].evidence.queries, 3);
}

/// Assignments made at a different threshold are rejected.
#[test]
fn threshold_mismatch_is_an_error() {
    let p = projects(&[
        ("A", &[(ElementKind::Event, "Login")]),
        ("B", &[(ElementKind::Event, "Login")]),
    ]);
    let passes = cross_passes(&p, Threshold::new(0.7).unwrap());
    let err = analyze(&p, &passes, Threshold::new(0.8).unwrap()).unwrap_err();
    assert!(matches!(err, GapError::ThresholdMismatch { expected, found, .. } if expected == 0.8 && found == 0.7));
}

/// Assignments naming absent projects are rejected.
#[test]
fn unknown_project_is_an_error() {
    let p = projects(&[("A", &[])]);
    let stray = MatchAssignment::empty(ElementKind::Event, "A", "Z", Threshold::default(), MatchingMode::BestMatch);
    let err = analyze(&p, &[stray], Threshold::default()).unwrap_err();
    assert!(matches!(err, GapError::UnknownProject(ref id) if id == "Z"));
}

/// Intra-project assignments neither cover nor create gaps; empty names never gap.
#[test]
fn intra_assignments_and_empty_names_are_ignored() {
    let p = projects(&[
        ("A", &[(ElementKind::Event, "Login"), (ElementKind::Event, "login"), (ElementKind::Event, "...")]),
        ("B", &[]),
    ]);
    let t = Threshold::new(0.8).unwrap();
    let a = &p["A"];
    let intra = MatchingEngine::new().match_elements(a, a, ElementKind::Event, t, MatchingMode::BestMatch);
    assert_eq!(intra.len(), 1);
    let gaps = analyze(&p, &[intra], t).unwrap();
    assert_eq!(gaps.len(), 2);
    assert!(gaps.iter().all(|g| g.element.name != "..."));
}

/// No projects, no gaps.
#[test]
fn empty_input() {
    assert!(analyze(&Projects::new(), &[], Threshold::default()).unwrap().is_empty());
}
