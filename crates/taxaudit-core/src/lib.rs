//! Core types, errors, configuration, and tracing for the taxonomy audit engine.
//!
//! Everything here is plain data plus validation. The algorithms live in
//! `taxaudit-analysis`.

pub mod config;
pub mod constants;
pub mod errors;
pub mod model;
pub mod tracing;
pub mod types;
