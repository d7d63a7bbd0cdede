//! Cross-project gap detection over finished matching passes.

pub mod analyzer;

pub use analyzer::{analyze, gap_counts, GapCount};
