//! Name similarity: normalization plus a token-sort Indel ratio.

pub mod normalize;
pub mod scorer;

pub use normalize::NormalizedName;
pub use scorer::{max_possible_score, score, score_normalized, NameScorer, TokenSortRatio};
