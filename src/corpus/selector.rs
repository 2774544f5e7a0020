//! Record selection.
//!
//! The selection predicate decides which parsed records are worth offering
//! to the conflict resolver at all. Short function words, pronouns,
//! prepositions and the like make poor mnemonic words no matter how
//! frequent they are.

use serde::{Deserialize, Serialize};

use crate::corpus::record::{LexicalRecord, PartOfSpeech};

/// Trait for selection predicates over parsed records.
pub trait RecordSelector: Send + Sync {
    /// Whether `record` should be considered for the wordlist.
    fn select(&self, record: &LexicalRecord) -> bool;

    /// Get the name of this selector (for debugging and configuration).
    fn name(&self) -> &'static str;
}

/// Settings for the default selector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectorConfig {
    /// Minimum word length in characters.
    pub min_word_length: usize,
    /// Parts of speech eligible for the wordlist.
    pub allowed_pos: Vec<PartOfSpeech>,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        SelectorConfig {
            min_word_length: 3,
            allowed_pos: vec![
                PartOfSpeech::Noun,
                PartOfSpeech::Adjective,
                PartOfSpeech::Verb,
                PartOfSpeech::CardinalNumber,
                PartOfSpeech::Possessive,
            ],
        }
    }
}

/// The default selector: a minimum word length and an allow-list of parts
/// of speech.
///
/// # Examples
///
/// ```
/// use wordforge::corpus::{DefaultSelector, RecordSelector};
/// use wordforge::corpus::{LexicalRecord, Lemma, PartOfSpeech};
///
/// let selector = DefaultSelector::default();
/// let record = LexicalRecord {
///     word: "hus".to_string(),
///     pos: PartOfSpeech::Noun,
///     lemmas: vec![Lemma::of_word("hus", PartOfSpeech::Noun)],
///     compound: false,
///     occurrences: 100,
///     relative_frequency: 9,
///     line_index: 0,
/// };
/// assert!(selector.select(&record));
/// ```
#[derive(Debug, Clone, Default)]
pub struct DefaultSelector {
    config: SelectorConfig,
}

impl DefaultSelector {
    /// Create a selector with explicit settings.
    pub fn with_config(config: SelectorConfig) -> Self {
        DefaultSelector { config }
    }

    /// The settings of this selector.
    pub fn config(&self) -> &SelectorConfig {
        &self.config
    }
}

impl RecordSelector for DefaultSelector {
    fn select(&self, record: &LexicalRecord) -> bool {
        record.word.chars().count() >= self.config.min_word_length
            && self.config.allowed_pos.contains(&record.pos)
    }

    fn name(&self) -> &'static str {
        "default"
    }
}
