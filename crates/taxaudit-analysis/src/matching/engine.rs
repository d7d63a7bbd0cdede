//! The matching pass.

use rayon::prelude::*;
use tracing::debug;

use taxaudit_core::model::{
    ElementKind, MatchAssignment, MatchCandidate, MatchingMode, ProjectTaxonomy, TaxonomyElement,
    Threshold,
};

use super::selection::{greedy_one_to_one, sort_candidates};
use crate::similarity::{NameScorer, NormalizedName, TokenSortRatio};

/// Elements of one kind from one project, each with its normalized name.
/// Built once per pass and only read afterwards.
struct PassSide<'a> {
    entries: Vec<(&'a TaxonomyElement, NormalizedName)>,
    excluded: usize,
}

impl<'a> PassSide<'a> {
    fn build(project: &'a ProjectTaxonomy, kind: ElementKind) -> Self {
        let mut entries = Vec::new();
        let mut excluded = 0;
        for element in project.of_kind(kind) {
            let normalized = NormalizedName::new(&element.name);
            if normalized.is_empty() {
                excluded += 1;
            } else {
                entries.push((element, normalized));
            }
        }
        Self { entries, excluded }
    }
}

/// Runs matching passes with a pluggable scorer.
#[derive(Debug, Clone, Default)]
pub struct MatchingEngine<S: NameScorer = TokenSortRatio> {
    scorer: S,
}

impl MatchingEngine<TokenSortRatio> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<S: NameScorer> MatchingEngine<S> {
    pub fn with_scorer(scorer: S) -> Self {
        Self { scorer }
    }

    pub fn scorer(&self) -> &S {
        &self.scorer
    }

    /// Match the `kind` elements of `left` against those of `right`.
    ///
    /// When both sides are the same project the pass looks for duplicates:
    /// no element pairs with itself, each unordered pair is scored once, and
    /// `left` is the element with the smaller (name, id).
    pub fn match_elements(
        &self,
        left: &ProjectTaxonomy,
        right: &ProjectTaxonomy,
        kind: ElementKind,
        threshold: Threshold,
        mode: MatchingMode,
    ) -> MatchAssignment {
        let intra = left.project_id == right.project_id;
        let left_side = PassSide::build(left, kind);
        let (right_side, excluded) = if intra {
            (None, left_side.excluded)
        } else {
            let side = PassSide::build(right, kind);
            let excluded = left_side.excluded + side.excluded;
            (Some(side), excluded)
        };
        let right_entries = right_side.as_ref().map_or(&left_side.entries, |s| &s.entries);

        let (mut candidates, compared_pairs) = self.collect_candidates(
            &left_side.entries,
            right_entries,
            intra,
            kind,
            threshold,
        );
        sort_candidates(&mut candidates);
        let found = candidates.len();

        let matches = match mode {
            MatchingMode::AllPairs => candidates,
            MatchingMode::BestMatch => greedy_one_to_one(candidates),
        };

        debug!(
            kind = %kind,
            left = %left.project_id,
            right = %right.project_id,
            threshold = %threshold,
            mode = %mode,
            compared_pairs,
            candidates = found,
            matches = matches.len(),
            excluded,
            "matching pass complete"
        );

        MatchAssignment {
            kind,
            left_project: left.project_id.clone(),
            right_project: right.project_id.clone(),
            threshold,
            mode,
            matches,
            excluded_elements: excluded,
            compared_pairs,
        }
    }

    /// Parallel over left entries. Pairs whose upper bound is already below
    /// the threshold are never scored.
    fn collect_candidates(
        &self,
        left: &[(&TaxonomyElement, NormalizedName)],
        right: &[(&TaxonomyElement, NormalizedName)],
        intra: bool,
        kind: ElementKind,
        threshold: Threshold,
    ) -> (Vec<MatchCandidate>, usize) {
        let cutoff = threshold.value();
        (0..left.len())
            .into_par_iter()
            .map(|i| {
                let (l_elem, l_name) = &left[i];
                let start = if intra { i + 1 } else { 0 };
                let mut found = Vec::new();
                let mut compared = 0usize;
                for (r_elem, r_name) in &right[start..] {
                    if self.scorer.upper_bound(l_name, r_name) < cutoff {
                        continue;
                    }
                    compared += 1;
                    let score = self.scorer.score_normalized(l_name, r_name);
                    if threshold.admits(score) {
                        found.push(orient(l_elem, r_elem, score, kind, intra));
                    }
                }
                (found, compared)
            })
            .reduce(
                || (Vec::new(), 0),
                |(mut acc, n), (found, m)| {
                    acc.extend(found);
                    (acc, n + m)
                },
            )
    }
}

fn orient(
    a: &TaxonomyElement,
    b: &TaxonomyElement,
    score: f64,
    kind: ElementKind,
    intra: bool,
) -> MatchCandidate {
    let swap = intra && (b.name.as_str(), b.id.as_str()) < (a.name.as_str(), a.id.as_str());
    let (left, right) = if swap { (b, a) } else { (a, b) };
    MatchCandidate {
        left: left.to_ref(),
        right: right.to_ref(),
        score,
        kind,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(id: &str, names: &[&str]) -> ProjectTaxonomy {
        ProjectTaxonomy::with_elements(
            id,
            names
                .iter()
                .enumerate()
                .map(|(i, n)| TaxonomyElement::new(id, ElementKind::Event, format!("{id}{i}"), *n))
                .collect(),
        )
    }

    #[test]
    fn intra_pass_never_pairs_an_element_with_itself() {
        let p = project("A", &["Signed Up", "Sign Up", "Logged In"]);
        let a = MatchingEngine::new().match_elements(
            &p,
            &p,
            ElementKind::Event,
            Threshold::ANY,
            MatchingMode::AllPairs,
        );
        assert_eq!(a.len(), 3);
        assert!(a.matches.iter().all(|m| m.left != m.right));
        assert_eq!(a.compared_pairs, 3);
    }

    #[test]
    fn intra_pass_orients_by_name_then_id() {
        let p = project("A", &["zeta", "Zeta"]);
        let a = MatchingEngine::new().match_elements(
            &p,
            &p,
            ElementKind::Event,
            Threshold::EXACT,
            MatchingMode::BestMatch,
        );
        assert_eq!(a.len(), 1);
        assert_eq!(a.matches[0].left.name, "Zeta");
    }

    #[test]
    fn empty_names_are_excluded_and_counted() {
        let a = project("A", &["Signed Up", "   ", "__"]);
        let b = project("B", &["signed_up", "-"]);
        let out = MatchingEngine::new().match_elements(
            &a,
            &b,
            ElementKind::Event,
            Threshold::ANY,
            MatchingMode::AllPairs,
        );
        assert_eq!(out.excluded_elements, 3);
        assert_eq!(out.len(), 1);
    }

    #[test]
    fn length_blocking_skips_hopeless_pairs() {
        let a = project("A", &["ab"]);
        let b = project("B", &["abcdefghijklmnop"]);
        let out = MatchingEngine::new().match_elements(
            &a,
            &b,
            ElementKind::Event,
            Threshold::new(0.8).unwrap(),
            MatchingMode::AllPairs,
        );
        assert_eq!(out.compared_pairs, 0);
        assert!(out.is_empty());
    }
}
