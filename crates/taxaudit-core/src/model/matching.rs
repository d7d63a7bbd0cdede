//! Match candidates and per-pass assignments.

use serde::{Deserialize, Serialize};

use super::element::{ElementKind, ElementRef};
use super::threshold::{MatchingMode, Threshold};

/// A scored pair of same-kind elements.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchCandidate {
    pub left: ElementRef,
    pub right: ElementRef,
    /// Similarity in `[0, 1]`.
    pub score: f64,
    pub kind: ElementKind,
}

impl MatchCandidate {
    /// True if `element` is either side of this candidate.
    pub fn touches(&self, element: &ElementRef) -> bool {
        &self.left == element || &self.right == element
    }
}

/// The final matches of one pass: one kind, one (possibly identical) project pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchAssignment {
    pub kind: ElementKind,
    pub left_project: String,
    pub right_project: String,
    pub threshold: Threshold,
    pub mode: MatchingMode,
    pub matches: Vec<MatchCandidate>,
    /// Elements skipped because their name normalizes to nothing.
    pub excluded_elements: usize,
    /// Pairs actually scored (after length blocking).
    pub compared_pairs: usize,
}

impl MatchAssignment {
    pub fn empty(
        kind: ElementKind,
        left_project: impl Into<String>,
        right_project: impl Into<String>,
        threshold: Threshold,
        mode: MatchingMode,
    ) -> Self {
        Self {
            kind,
            left_project: left_project.into(),
            right_project: right_project.into(),
            threshold,
            mode,
            matches: Vec::new(),
            excluded_elements: 0,
            compared_pairs: 0,
        }
    }

    /// Duplicate detection within one project.
    pub fn is_intra_project(&self) -> bool {
        self.left_project == self.right_project
    }

    /// True if the pass connects projects `a` and `b`, in either orientation.
    pub fn connects(&self, a: &str, b: &str) -> bool {
        (self.left_project == a && self.right_project == b)
            || (self.left_project == b && self.right_project == a)
    }

    /// True if `element` appears in any match of this pass.
    pub fn contains(&self, element: &ElementRef) -> bool {
        self.matches.iter().any(|m| m.touches(element))
    }

    pub fn len(&self) -> usize {
        self.matches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }
}
