//! Language presets.
//!
//! A [`Language`] bundles the data that varies per corpus language: the tag
//! written into the final wordlist, the alphabet a normalized word may use,
//! and the correlated-character table for similarity scoring. Presets exist
//! for English and Swedish; other languages can be built from parts.

use serde::{Deserialize, Serialize};

use crate::similarity::CorrelationTable;

/// Per-language data for wordlist construction.
///
/// # Examples
///
/// ```
/// use wordforge::language::Language;
///
/// let swedish = Language::swedish();
/// assert!(swedish.is_allowed('å'));
/// assert!(swedish.is_allowed('q'));
/// assert!(!swedish.is_allowed('ñ'));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Language {
    /// Language tag carried into the final wordlist, e.g. `"English"`.
    pub tag: String,
    /// Every character a normalized word may consist of.
    pub alphabet: String,
    /// Correlated character pairs for similarity scoring.
    pub correlations: CorrelationTable,
}

impl Language {
    /// Create a language from parts.
    pub fn new<S: Into<String>>(tag: S, alphabet: S, correlations: CorrelationTable) -> Self {
        Language {
            tag: tag.into(),
            alphabet: alphabet.into(),
            correlations,
        }
    }

    /// The English preset.
    pub fn english() -> Self {
        Language::new(
            "English",
            "abcdefghijklmnopqrstuvwxyz",
            CorrelationTable::english(),
        )
    }

    /// The Swedish preset.
    pub fn swedish() -> Self {
        Language::new(
            "Swedish",
            "abcdefghijklmnopqrstuvwxyzåäö",
            CorrelationTable::swedish(),
        )
    }

    /// Whether `c` belongs to this language's alphabet.
    pub fn is_allowed(&self, c: char) -> bool {
        self.alphabet.contains(c)
    }
}
