//! Name normalization shared by the scorer, the matcher, and the PII classifier.
//!
//! Lowercases, and treats every run of non-alphanumeric characters (`_`, `-`,
//! `.`, whitespace, ...) as a single token break, so `"Signed Up"`,
//! `"signed_up"` and `" SIGNED--UP "` all normalize to the same tokens.

use taxaudit_core::types::SmallVec4;

/// A name broken into lowercase alphanumeric tokens, plus the sorted form the
/// scorer compares.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedName {
    tokens: SmallVec4<String>,
    sorted_key: String,
    sorted_chars: Vec<char>,
}

impl NormalizedName {
    pub fn new(raw: &str) -> Self {
        let tokens = tokenize(raw);
        let mut sorted: Vec<&str> = tokens.iter().map(String::as_str).collect();
        sorted.sort_unstable();
        let sorted_key = sorted.join(" ");
        let sorted_chars = sorted_key.chars().collect();
        Self {
            tokens,
            sorted_key,
            sorted_chars,
        }
    }

    /// True when the name has no alphanumeric content at all.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Tokens in their original order.
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Tokens sorted and joined by single spaces.
    pub fn sorted_key(&self) -> &str {
        &self.sorted_key
    }

    pub(crate) fn sorted_chars(&self) -> &[char] {
        &self.sorted_chars
    }

    /// Length in characters of the sorted key.
    pub fn char_len(&self) -> usize {
        self.sorted_chars.len()
    }

    /// Tokens in original order joined by `_`: `"User Email"` -> `"user_email"`.
    pub fn canonical(&self) -> String {
        self.tokens.join("_")
    }

    /// Tokens in original order joined by spaces: `"ssn_last4"` -> `"ssn last4"`.
    pub fn spaced(&self) -> String {
        self.tokens.join(" ")
    }

    /// Tokens concatenated: `"e-mail"` -> `"email"`.
    pub fn compact(&self) -> String {
        self.tokens.concat()
    }
}

/// Split into lowercase alphanumeric tokens.
pub fn tokenize(raw: &str) -> SmallVec4<String> {
    let mut tokens = SmallVec4::new();
    let mut current = String::new();
    for ch in raw.chars() {
        if ch.is_alphanumeric() {
            current.extend(ch.to_lowercase());
        } else if !current.is_empty() {
            tokens.push(std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        tokens.push(current);
    }
    tokens
}
