//! Collection aliases shared across crates.

pub mod collections;

pub use collections::{FxHashMap, FxHashSet, SmallVec4};
