//! PII classification of element names and sample values.

pub mod classifier;
pub mod library;

pub use classifier::PiiClassifier;
pub use library::{CompiledCategory, PiiKeyword, PiiLibrary};
