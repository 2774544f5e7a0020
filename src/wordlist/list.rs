//! The final, validated wordlist.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::wordlist::policy::ValidationPolicy;
use crate::wordlist::validator::validate;

/// A [BIP39][bip]-style mnemonic wordlist in some language.
///
/// A `WordList` only exists after successful structural validation: the
/// constructor runs [`validate`] and fails with the violation otherwise.
/// The words are unique, lexicographically sorted, and exactly as many as
/// the policy required.
///
/// [bip]: https://github.com/bitcoin/bips/blob/master/bip-0039.mediawiki
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordList {
    words: Vec<String>,
    language: String,
}

impl WordList {
    /// Validate `words` against `policy` and construct the list.
    pub fn validated<S: Into<String>>(
        words: Vec<String>,
        language: S,
        policy: &ValidationPolicy,
    ) -> Result<Self> {
        validate(&words, policy)?;
        Ok(WordList {
            words,
            language: language.into(),
        })
    }

    /// The words, in lexicographic order.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// The language tag.
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Number of words in the list.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the list is empty (never true for a validated list under a
    /// BIP-39 policy).
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::WordForgeError;
    use crate::wordlist::validator::Violation;

    #[test]
    fn test_validated_construction() {
        let policy = ValidationPolicy {
            required_count: 3,
            ..Default::default()
        };
        let list = WordList::validated(
            vec![
                "apple".to_string(),
                "robot".to_string(),
                "zebra".to_string(),
            ],
            "English",
            &policy,
        )
        .unwrap();
        assert_eq!(list.len(), 3);
        assert_eq!(list.language(), "English");
        assert_eq!(list.words()[0], "apple");
    }

    #[test]
    fn test_violation_propagates() {
        let policy = ValidationPolicy {
            required_count: 3,
            ..Default::default()
        };
        let result = WordList::validated(
            vec!["apple".to_string(), "zebra".to_string()],
            "English",
            &policy,
        );
        assert!(matches!(
            result,
            Err(WordForgeError::Validation(Violation::WrongCount {
                actual: 2,
                required: 3
            }))
        ));
    }
}
