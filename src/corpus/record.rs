//! The parsed corpus record model.

use serde::{Deserialize, Serialize};

use crate::corpus::parser::ParseError;
use crate::language::Language;

/// Part-of-speech tags of the SUC tagset used by PoS-tagged frequency
/// corpora (Språkbanken and compatible sources).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PartOfSpeech {
    /// AB
    Adverb,
    /// DT
    Determiner,
    /// HA
    RelativeInterrogativeAdverb,
    /// HD
    RelativeInterrogativeDeterminer,
    /// HP
    RelativeInterrogativePronoun,
    /// HS
    RelativeInterrogativePossessive,
    /// IE
    InfinitiveMarker,
    /// IN
    Interjection,
    /// JJ
    Adjective,
    /// KN
    Conjunction,
    /// NN
    Noun,
    /// PC
    Participle,
    /// PL
    Particle,
    /// PM
    ProperNoun,
    /// PN
    Pronoun,
    /// PP
    Preposition,
    /// PS
    Possessive,
    /// RG
    CardinalNumber,
    /// RO
    OrdinalNumber,
    /// SN
    Subjunction,
    /// UO
    ForeignWord,
    /// VB
    Verb,
}

impl PartOfSpeech {
    /// Parse a SUC tag code such as `"NN"` or `"VB"`.
    pub fn parse_tag(tag: &str) -> Result<Self, ParseError> {
        use PartOfSpeech::*;
        Ok(match tag {
            "AB" => Adverb,
            "DT" => Determiner,
            "HA" => RelativeInterrogativeAdverb,
            "HD" => RelativeInterrogativeDeterminer,
            "HP" => RelativeInterrogativePronoun,
            "HS" => RelativeInterrogativePossessive,
            "IE" => InfinitiveMarker,
            "IN" => Interjection,
            "JJ" => Adjective,
            "KN" => Conjunction,
            "NN" => Noun,
            "PC" => Participle,
            "PL" => Particle,
            "PM" => ProperNoun,
            "PN" => Pronoun,
            "PP" => Preposition,
            "PS" => Possessive,
            "RG" => CardinalNumber,
            "RO" => OrdinalNumber,
            "SN" => Subjunction,
            "UO" => ForeignWord,
            "VB" => Verb,
            other => return Err(ParseError::UnknownPosTag(other.to_string())),
        })
    }

    /// The SUC tag code for this part of speech.
    pub fn tag(&self) -> &'static str {
        use PartOfSpeech::*;
        match self {
            Adverb => "AB",
            Determiner => "DT",
            RelativeInterrogativeAdverb => "HA",
            RelativeInterrogativeDeterminer => "HD",
            RelativeInterrogativePronoun => "HP",
            RelativeInterrogativePossessive => "HS",
            InfinitiveMarker => "IE",
            Interjection => "IN",
            Adjective => "JJ",
            Conjunction => "KN",
            Noun => "NN",
            Participle => "PC",
            Particle => "PL",
            ProperNoun => "PM",
            Pronoun => "PN",
            Preposition => "PP",
            Possessive => "PS",
            CardinalNumber => "RG",
            OrdinalNumber => "RO",
            Subjunction => "SN",
            ForeignWord => "UO",
            Verb => "VB",
        }
    }
}

impl std::fmt::Display for PartOfSpeech {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.tag())
    }
}

/// Normalize a raw token into a word: lowercase, every character drawn from
/// the language alphabet.
pub fn normalize_word(raw: &str, language: &Language) -> Result<String, ParseError> {
    let word = raw.to_lowercase();
    if word.is_empty() {
        return Err(ParseError::EmptyWord);
    }
    for c in word.chars() {
        if !language.is_allowed(c) {
            return Err(ParseError::DisallowedCharacter { word, character: c });
        }
    }
    Ok(word)
}

/// A lemma reference: the canonical base form of a word, its part of
/// speech, and a disambiguation index separating homographs.
///
/// The disambiguation index is excluded from equality and hashing: for
/// conflict resolution, `land..nn.1` and `land..nn.3` name the same
/// headword.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lemma {
    base: String,
    pos: PartOfSpeech,
    index: u32,
}

impl Lemma {
    /// Create a lemma from a normalized base form.
    pub fn new(base: String, pos: PartOfSpeech, index: u32) -> Self {
        Lemma { base, pos, index }
    }

    /// The lemma of a word form itself (base form equals the word).
    pub fn of_word(word: &str, pos: PartOfSpeech) -> Self {
        Lemma::new(word.to_string(), pos, 0)
    }

    /// The canonical base form.
    pub fn base(&self) -> &str {
        &self.base
    }

    /// The part of speech.
    pub fn pos(&self) -> PartOfSpeech {
        self.pos
    }

    /// The disambiguation index.
    pub fn index(&self) -> u32 {
        self.index
    }
}

impl PartialEq for Lemma {
    fn eq(&self, other: &Self) -> bool {
        // omit `index`
        self.base == other.base && self.pos == other.pos
    }
}

impl Eq for Lemma {}

impl std::hash::Hash for Lemma {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        // omit `index`
        self.base.hash(state);
        self.pos.hash(state);
    }
}

impl std::fmt::Display for Lemma {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.base, self.pos)
    }
}

/// An immutable corpus entry: one word form with its tag, lemmas and
/// frequency figures.
///
/// For conflict resolution, record identity is the lowercase word form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LexicalRecord {
    /// The normalized (lowercase) word form.
    pub word: String,
    /// Part-of-speech tag of this word form.
    pub pos: PartOfSpeech,
    /// Lemma references; empty lemgram fields fall back to a self-lemma.
    pub lemmas: Vec<Lemma>,
    /// Whether the corpus marks this form as a compound word.
    pub compound: bool,
    /// Absolute occurrence count in the corpus.
    pub occurrences: u64,
    /// Relative frequency per one million tokens.
    pub relative_frequency: u64,
    /// Zero-based index of the originating corpus line.
    pub line_index: usize,
}

impl LexicalRecord {
    /// Whether any lemma of this record has `base` as its base form.
    pub fn has_lemma_base(&self, base: &str) -> bool {
        self.lemmas.iter().any(|lemma| lemma.base() == base)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tag_roundtrip() {
        for tag in [
            "AB", "DT", "HA", "HD", "HP", "HS", "IE", "IN", "JJ", "KN", "NN", "PC", "PL", "PM",
            "PN", "PP", "PS", "RG", "RO", "SN", "UO", "VB",
        ] {
            let pos = PartOfSpeech::parse_tag(tag).unwrap();
            assert_eq!(pos.tag(), tag);
        }
    }

    #[test]
    fn test_unknown_tag() {
        assert!(matches!(
            PartOfSpeech::parse_tag("XX"),
            Err(ParseError::UnknownPosTag(tag)) if tag == "XX"
        ));
    }

    #[test]
    fn test_normalize_lowercases() {
        let english = Language::english();
        assert_eq!(normalize_word("Bygga", &Language::swedish()).unwrap(), "bygga");
        assert_eq!(normalize_word("ABLE", &english).unwrap(), "able");
    }

    #[test]
    fn test_normalize_rejects_foreign_characters() {
        let english = Language::english();
        assert!(matches!(
            normalize_word("naïve", &english),
            Err(ParseError::DisallowedCharacter { character: 'ï', .. })
        ));
        assert!(matches!(
            normalize_word("", &english),
            Err(ParseError::EmptyWord)
        ));
    }

    #[test]
    fn test_lemma_equality_ignores_index() {
        let a = Lemma::new("land".to_string(), PartOfSpeech::Noun, 1);
        let b = Lemma::new("land".to_string(), PartOfSpeech::Noun, 3);
        let c = Lemma::new("land".to_string(), PartOfSpeech::Verb, 1);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_has_lemma_base() {
        let record = LexicalRecord {
            word: "sprang".to_string(),
            pos: PartOfSpeech::Verb,
            lemmas: vec![Lemma::of_word("springa", PartOfSpeech::Verb)],
            compound: false,
            occurrences: 10,
            relative_frequency: 2,
            line_index: 7,
        };
        assert!(record.has_lemma_base("springa"));
        assert!(!record.has_lemma_base("sprang"));
    }
}
