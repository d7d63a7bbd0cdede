//! Same-kind element matching across one or two projects.
//!
//! A pass scores every eligible pair, keeps candidates at or above the
//! threshold, orders them by a fixed key, and then either keeps them all or
//! assigns them greedily one-to-one.

pub mod engine;
pub mod selection;

pub use engine::MatchingEngine;
pub use selection::{candidate_order, greedy_one_to_one, sort_candidates};
