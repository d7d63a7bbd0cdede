//! Candidate ordering and greedy one-to-one selection.

use std::cmp::Ordering;

use taxaudit_core::model::{ElementRef, MatchCandidate};
use taxaudit_core::types::collections::FxHashSet;

/// Score descending, then left name, left project, right name, right project,
/// left id, right id ascending. Input order never matters.
pub fn candidate_order(a: &MatchCandidate, b: &MatchCandidate) -> Ordering {
    b.score
        .total_cmp(&a.score)
        .then_with(|| a.left.name.cmp(&b.left.name))
        .then_with(|| a.left.project_id.cmp(&b.left.project_id))
        .then_with(|| a.right.name.cmp(&b.right.name))
        .then_with(|| a.right.project_id.cmp(&b.right.project_id))
        .then_with(|| a.left.id.cmp(&b.left.id))
        .then_with(|| a.right.id.cmp(&b.right.id))
}

pub fn sort_candidates(candidates: &mut [MatchCandidate]) {
    candidates.sort_by(candidate_order);
}

/// Walk sorted candidates and accept each one whose sides are both still
/// free. An element is "used" no matter which side it appeared on, so
/// intra-project passes stay one-to-one as well.
pub fn greedy_one_to_one(sorted: Vec<MatchCandidate>) -> Vec<MatchCandidate> {
    let mut assigned: FxHashSet<ElementRef> = FxHashSet::default();
    let mut accepted = Vec::new();
    for candidate in sorted {
        if assigned.contains(&candidate.left) || assigned.contains(&candidate.right) {
            continue;
        }
        assigned.insert(candidate.left.clone());
        assigned.insert(candidate.right.clone());
        accepted.push(candidate);
    }
    accepted
}
