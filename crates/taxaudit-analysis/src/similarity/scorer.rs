//! Token-sort Indel similarity.
//!
//! Both names are normalized, their tokens sorted and re-joined, and the
//! sorted strings compared with the Indel ratio
//! `1 - (la + lb - 2 * LCS) / (la + lb)`. Re-ordered tokens therefore score
//! 1.0, while a short shared fragment of two long names scores low.

use super::normalize::NormalizedName;

/// Scores two normalized names. Implementations must be pure, symmetric,
/// reflexive, and bounded to `[0, 1]`.
pub trait NameScorer: Sync {
    fn score_normalized(&self, a: &NormalizedName, b: &NormalizedName) -> f64;

    /// An upper bound on `score_normalized(a, b)` that is cheaper to compute.
    /// Pairs whose bound is below the threshold are never scored, so this must
    /// never underestimate. The default disables blocking.
    fn upper_bound(&self, _a: &NormalizedName, _b: &NormalizedName) -> f64 {
        1.0
    }
}

/// The default scorer.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokenSortRatio;

impl NameScorer for TokenSortRatio {
    fn score_normalized(&self, a: &NormalizedName, b: &NormalizedName) -> f64 {
        if a.sorted_key() == b.sorted_key() {
            return 1.0;
        }
        if a.is_empty() || b.is_empty() {
            return 0.0;
        }
        let lcs = lcs_len(a.sorted_chars(), b.sorted_chars());
        indel_ratio(a.char_len(), b.char_len(), lcs)
    }

    /// LCS never exceeds the shorter length, so the ratio with `lcs = min`
    /// bounds the real score. Same expression as the score, so the float
    /// comparison is exact.
    fn upper_bound(&self, a: &NormalizedName, b: &NormalizedName) -> f64 {
        if a.sorted_key() == b.sorted_key() {
            return 1.0;
        }
        max_possible_score(a.char_len(), b.char_len())
    }
}

/// Best score two sorted keys of these character lengths could reach.
pub fn max_possible_score(la: usize, lb: usize) -> f64 {
    if la + lb == 0 {
        return 1.0;
    }
    indel_ratio(la, lb, la.min(lb))
}

/// Score two already-normalized names with the default scorer.
pub fn score_normalized(a: &NormalizedName, b: &NormalizedName) -> f64 {
    TokenSortRatio.score_normalized(a, b)
}

/// Score two raw names with the default scorer.
pub fn score(a: &str, b: &str) -> f64 {
    score_normalized(&NormalizedName::new(a), &NormalizedName::new(b))
}

fn indel_ratio(la: usize, lb: usize, lcs: usize) -> f64 {
    let total = la + lb;
    let distance = total - 2 * lcs;
    1.0 - distance as f64 / total as f64
}

/// Longest common subsequence length, two-row DP over the shorter input.
fn lcs_len(a: &[char], b: &[char]) -> usize {
    let (long, short) = if a.len() >= b.len() { (a, b) } else { (b, a) };
    let mut prev = vec![0usize; short.len() + 1];
    let mut curr = vec![0usize; short.len() + 1];
    for &lc in long {
        for (j, &sc) in short.iter().enumerate() {
            curr[j + 1] = if lc == sc {
                prev[j] + 1
            } else {
                prev[j + 1].max(curr[j])
            };
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[short.len()]
}
