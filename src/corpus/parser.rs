//! Line parsing for PoS-tagged frequency corpora.
//!
//! The canonical format is the Språkbanken statistics export: six
//! tab-separated fields per line.
//!
//! ```text
//! word form \t PoS tag \t lemgrams \t compound marker \t occurrences \t freq/million
//! ```
//!
//! The lemgram field packs zero or more `base..pos.index` references between
//! pipes, e.g. `|land..nn.3|land..nn.1|`; a bare `|` means none are known.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::corpus::record::{Lemma, LexicalRecord, PartOfSpeech, normalize_word};
use crate::corpus::source::RawLine;
use crate::language::Language;

/// Field separator within a corpus line.
const FIELD_DELIMITER: char = '\t';

/// Lemgram separator within the lemgram field.
const LEMGRAM_DELIMITER: char = '|';

/// Number of tab-separated fields per line.
const FIELD_COUNT: usize = 6;

/// Why a corpus line could not be parsed into a [`LexicalRecord`].
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    /// The line did not split into the expected number of fields.
    #[error("expected {expected} tab-separated fields, got {got}")]
    WrongFieldCount {
        /// Fields found on the line.
        got: usize,
        /// Fields the format requires.
        expected: usize,
    },

    /// A numeric field did not parse as an integer.
    #[error("not an integer: {0:?}")]
    InvalidInteger(String),

    /// A numeric field did not parse as a number.
    #[error("not a number: {0:?}")]
    InvalidNumber(String),

    /// The PoS field held an unknown tag code.
    #[error("unknown part-of-speech tag: {0:?}")]
    UnknownPosTag(String),

    /// The word form was empty after normalization.
    #[error("empty word form")]
    EmptyWord,

    /// The word form used a character outside the language alphabet.
    #[error("word {word:?} contains disallowed character {character:?}")]
    DisallowedCharacter {
        /// The offending (lowercased) word.
        word: String,
        /// The first character outside the alphabet.
        character: char,
    },

    /// The compound-marker field was neither `-` nor `+`.
    #[error("invalid compound marker: {0:?}")]
    InvalidCompoundMarker(String),

    /// A lemgram reference did not follow `base..pos.index`.
    #[error("malformed lemgram: {0:?}")]
    MalformedLemgram(String),
}

/// How the pipeline reacts to a line that fails to parse.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParseMode {
    /// Skip malformed lines and continue (the default).
    #[default]
    Lenient,
    /// Abort the run on the first malformed line.
    Strict,
}

/// Trait for parsers that turn raw corpus lines into records.
///
/// Returning `Ok(None)` marks the line as carrying no record (e.g. a
/// comment or blank line); returning `Err` marks it malformed, which the
/// pipeline treats according to its [`ParseMode`].
pub trait LineParser: Send + Sync {
    /// Parse one raw line.
    fn parse(&self, line: &RawLine) -> Result<Option<LexicalRecord>, ParseError>;

    /// Get the name of this parser (for debugging and configuration).
    fn name(&self) -> &'static str;
}

/// Parser for the six-field tab-separated Språkbanken statistics format.
///
/// # Examples
///
/// ```
/// use wordforge::corpus::{LineParser, RawLine, TabSeparatedParser};
/// use wordforge::language::Language;
///
/// let parser = TabSeparatedParser::new(Language::swedish());
/// let line = RawLine {
///     text: "åren\tNN\t|år..nn.1|\t-\t9945\t802.9".to_string(),
///     index: 12,
/// };
/// let record = parser.parse(&line).unwrap().unwrap();
/// assert_eq!(record.word, "åren");
/// assert_eq!(record.lemmas[0].base(), "år");
/// assert_eq!(record.line_index, 12);
/// ```
#[derive(Debug, Clone)]
pub struct TabSeparatedParser {
    language: Language,
}

impl TabSeparatedParser {
    /// Create a parser normalizing words against `language`'s alphabet.
    pub fn new(language: Language) -> Self {
        TabSeparatedParser { language }
    }

    fn parse_lemgrams(
        &self,
        field: &str,
        word: &str,
        pos: PartOfSpeech,
    ) -> Vec<Lemma> {
        let mut lemmas = Vec::new();
        for part in field.split(LEMGRAM_DELIMITER).filter(|p| !p.is_empty()) {
            match self.parse_lemgram(part) {
                Ok(lemma) => lemmas.push(lemma),
                // A broken lemgram field degrades to a self-lemma below; it
                // never fails the whole line.
                Err(_) => {
                    lemmas.clear();
                    break;
                }
            }
        }
        if lemmas.is_empty() {
            lemmas.push(Lemma::of_word(word, pos));
        }
        lemmas
    }

    /// Parse one `base..pos.index` reference.
    fn parse_lemgram(&self, part: &str) -> Result<Lemma, ParseError> {
        let malformed = || ParseError::MalformedLemgram(part.to_string());

        let (base, pos_and_index) = part.split_once("..").ok_or_else(malformed)?;
        let (pos, index) = pos_and_index.split_once('.').ok_or_else(malformed)?;

        let base = normalize_word(base, &self.language)?;
        // Lemgram PoS codes are lowercase variants of the SUC tags.
        let pos = PartOfSpeech::parse_tag(&pos.to_uppercase())?;
        let index: u32 = index
            .parse()
            .map_err(|_| ParseError::InvalidInteger(index.to_string()))?;

        Ok(Lemma::new(base, pos, index))
    }
}

impl LineParser for TabSeparatedParser {
    fn parse(&self, line: &RawLine) -> Result<Option<LexicalRecord>, ParseError> {
        if line.text.is_empty() {
            return Ok(None);
        }

        let fields: Vec<&str> = line.text.split(FIELD_DELIMITER).collect();
        if fields.len() != FIELD_COUNT {
            return Err(ParseError::WrongFieldCount {
                got: fields.len(),
                expected: FIELD_COUNT,
            });
        }

        let word = normalize_word(fields[0], &self.language)?;
        let pos = PartOfSpeech::parse_tag(fields[1])?;
        let lemmas = self.parse_lemgrams(fields[2], &word, pos);

        let compound = match fields[3] {
            "-" => false,
            "+" => true,
            other => return Err(ParseError::InvalidCompoundMarker(other.to_string())),
        };

        let occurrences: u64 = fields[4]
            .parse()
            .map_err(|_| ParseError::InvalidInteger(fields[4].to_string()))?;

        let relative_frequency = fields[5]
            .parse::<f64>()
            .map_err(|_| ParseError::InvalidNumber(fields[5].to_string()))?
            as u64;

        Ok(Some(LexicalRecord {
            word,
            pos,
            lemmas,
            compound,
            occurrences,
            relative_frequency,
            line_index: line.index,
        }))
    }

    fn name(&self) -> &'static str {
        "tab_separated"
    }
}
