#![allow(dead_code)]

//! Tokenizer — turns a raw document into the set of distinct lower-cased terms.
//!
//! No stemming, no punctuation stripping, no stop words: `"Rust,"` and `"rust"`
//! are different tokens. Iteration is lexicographic so any truncated view of a
//! set is reproducible across calls.

use std::collections::BTreeSet;

/// Distinct normalized tokens of a single document, kept in sorted order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenSet {
    tokens: BTreeSet<String>,
}

impl TokenSet {
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn contains(&self, token: &str) -> bool {
        self.tokens.contains(token)
    }

    /// Tokens in lexicographic order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(String::as_str)
    }

    /// Tokens of `self` that `other` lacks, in lexicographic order.
    pub fn missing_from<'a>(&'a self, other: &'a TokenSet) -> impl Iterator<Item = &'a str> {
        self.tokens.difference(&other.tokens).map(String::as_str)
    }
}

/// Lower-cases `text` and splits it on Unicode whitespace. Duplicates collapse.
pub fn tokenize(text: &str) -> TokenSet {
    TokenSet {
        tokens: text.to_lowercase().split_whitespace().map(str::to_owned).collect(),
    }
}
