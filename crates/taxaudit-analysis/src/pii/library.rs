//! Typed PII pattern library, loaded from TOML.
//!
//! ```toml
//! min_substring_len = 4
//!
//! [[categories]]
//! category = "email"
//! keywords = ["email", "email_address"]
//! patterns = ['\be ?mail\b']
//! value_patterns = ['^[^@\s]+@[^@\s]+\.[a-z]{2,}$']
//! ```
//!
//! Every regex is compiled at load time. A library that loads never fails
//! during classification.

use std::path::Path;

use regex::Regex;
use serde::{Deserialize, Serialize};

use taxaudit_core::errors::PatternLibraryError;
use taxaudit_core::model::PiiCategory;
use taxaudit_core::types::collections::FxHashSet;

use crate::similarity::NormalizedName;

const EMBEDDED_LIBRARY: &str = include_str!("default_library.toml");

/// One `[[categories]]` entry as written in TOML.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PiiCategoryDef {
    pub category: String,
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default)]
    pub patterns: Vec<String>,
    #[serde(default)]
    pub value_patterns: Vec<String>,
}

/// A whole library file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PiiLibraryFile {
    /// Keywords whose compact form is shorter than this never match as a
    /// bare substring of a name. 0 disables the guard.
    #[serde(default)]
    pub min_substring_len: usize,
    #[serde(default)]
    pub categories: Vec<PiiCategoryDef>,
}

/// A keyword with its precomputed normalized forms.
#[derive(Debug, Clone)]
pub struct PiiKeyword {
    pub raw: String,
    pub canonical: String,
    pub tokens: Vec<String>,
    pub compact: String,
}

impl PiiKeyword {
    fn new(raw: &str) -> Option<Self> {
        let normalized = NormalizedName::new(raw);
        if normalized.is_empty() {
            return None;
        }
        Some(Self {
            raw: raw.to_string(),
            canonical: normalized.canonical(),
            tokens: normalized.tokens().to_vec(),
            compact: normalized.compact(),
        })
    }
}

#[derive(Debug, Clone)]
pub struct CompiledCategory {
    pub category: PiiCategory,
    pub keywords: Vec<PiiKeyword>,
    pub patterns: Vec<Regex>,
    pub value_patterns: Vec<Regex>,
}

/// Ordered categories. Earlier categories take precedence within a tier.
#[derive(Debug, Clone)]
pub struct PiiLibrary {
    categories: Vec<CompiledCategory>,
    min_substring_len: usize,
}

impl PiiLibrary {
    /// The library compiled into the crate.
    pub fn embedded() -> Result<Self, PatternLibraryError> {
        Self::load_from_str(EMBEDDED_LIBRARY)
    }

    pub fn load_from_str(toml_str: &str) -> Result<Self, PatternLibraryError> {
        let file: PiiLibraryFile =
            toml::from_str(toml_str).map_err(|e| PatternLibraryError::Parse(e.to_string()))?;
        Self::compile(file)
    }

    pub fn load_from_file(path: &Path) -> Result<Self, PatternLibraryError> {
        let content = std::fs::read_to_string(path).map_err(|e| PatternLibraryError::Read {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        let library = Self::load_from_str(&content)?;
        tracing::debug!(
            path = %path.display(),
            categories = library.len(),
            "loaded PII pattern library"
        );
        Ok(library)
    }

    fn compile(file: PiiLibraryFile) -> Result<Self, PatternLibraryError> {
        let mut seen = FxHashSet::default();
        let mut categories = Vec::with_capacity(file.categories.len());
        for def in file.categories {
            let category = PiiCategory::parse_str(&def.category)
                .ok_or_else(|| PatternLibraryError::UnknownCategory(def.category.clone()))?;
            if !seen.insert(category) {
                return Err(PatternLibraryError::DuplicateCategory(category.name().to_string()));
            }
            categories.push(compile_category(category, &def)?);
        }
        Ok(Self {
            categories,
            min_substring_len: file.min_substring_len,
        })
    }

    pub fn categories(&self) -> &[CompiledCategory] {
        &self.categories
    }

    pub fn min_substring_len(&self) -> usize {
        self.min_substring_len
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

fn compile_category(
    category: PiiCategory,
    def: &PiiCategoryDef,
) -> Result<CompiledCategory, PatternLibraryError> {
    let keywords: Vec<PiiKeyword> = def.keywords.iter().filter_map(|k| PiiKeyword::new(k)).collect();
    let patterns = compile_all(category, &def.patterns)?;
    let value_patterns = compile_all(category, &def.value_patterns)?;
    if keywords.is_empty() && patterns.is_empty() && value_patterns.is_empty() {
        return Err(PatternLibraryError::EmptyCategory {
            category: category.name().to_string(),
        });
    }
    Ok(CompiledCategory {
        category,
        keywords,
        patterns,
        value_patterns,
    })
}

fn compile_all(category: PiiCategory, sources: &[String]) -> Result<Vec<Regex>, PatternLibraryError> {
    sources
        .iter()
        .map(|source| {
            Regex::new(source).map_err(|e| PatternLibraryError::InvalidRegex {
                category: category.name().to_string(),
                pattern: source.clone(),
                message: e.to_string(),
            })
        })
        .collect()
}
