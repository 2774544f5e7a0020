//! Structural validation of candidate wordlists.

use ahash::AHashMap;
use thiserror::Error;

use crate::similarity::similarity;
use crate::wordlist::policy::ValidationPolicy;

/// A violation of the wordlist invariants.
///
/// Every variant names the offending word(s); a violation is surfaced to
/// the caller and never auto-retried.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Violation {
    /// The list did not hold exactly the required number of words.
    #[error("expected exactly {required} words, got {actual}")]
    WrongCount {
        /// Words actually present.
        actual: usize,
        /// Words required by the policy.
        required: usize,
    },

    /// Two words share the identifying prefix.
    #[error("words are not unambiguously identified by their prefix: {word0:?} vs {word1:?}")]
    AmbiguousPrefix {
        /// The earlier word of the colliding pair, in scan order.
        word0: String,
        /// The later word of the colliding pair.
        word1: String,
    },

    /// Two words score above the similarity threshold.
    #[error("words are too similar: {word0:?} vs {word1:?} at {score:.4}")]
    TooSimilar {
        /// The earlier word of the pair, in list order.
        word0: String,
        /// The later word of the pair.
        word1: String,
        /// The similarity score that exceeded the threshold.
        score: f64,
    },

    /// The list is not in lexicographic order.
    #[error("words are not lexicographically sorted")]
    NotSorted,
}

/// Validate a candidate wordlist against `policy`.
///
/// `words` must already be unique and is checked in the order given. The
/// checks run in a fixed order and short-circuit at the first failure:
/// count, then prefix uniqueness, then pairwise similarity, then sort
/// order. Disabled rules are skipped. The input is never mutated.
///
/// # Examples
///
/// ```
/// use wordforge::wordlist::{ValidationPolicy, Violation, validate};
///
/// let policy = ValidationPolicy {
///     required_count: 2,
///     ..Default::default()
/// };
/// let words = vec!["apple".to_string(), "zebra".to_string()];
/// assert_eq!(validate(&words, &policy), Ok(()));
///
/// let words = vec!["zebra".to_string(), "apple".to_string()];
/// assert_eq!(validate(&words, &policy), Err(Violation::NotSorted));
/// ```
pub fn validate(words: &[String], policy: &ValidationPolicy) -> Result<(), Violation> {
    if words.len() != policy.required_count {
        return Err(Violation::WrongCount {
            actual: words.len(),
            required: policy.required_count,
        });
    }

    if let Some(rule) = &policy.prefix
        && let Some((word0, word1)) = find_prefix_collision(words, rule.length)
    {
        return Err(Violation::AmbiguousPrefix { word0, word1 });
    }

    if let Some(rule) = &policy.similarity {
        for i in 0..words.len() {
            for j in (i + 1)..words.len() {
                let score = similarity(&words[i], &words[j], &rule.params);
                if score > rule.threshold {
                    return Err(Violation::TooSimilar {
                        word0: words[i].clone(),
                        word1: words[j].clone(),
                        score,
                    });
                }
            }
        }
    }

    if policy.require_sorted {
        let mut sorted = words.to_vec();
        sorted.sort();
        if sorted != words {
            return Err(Violation::NotSorted);
        }
    }

    Ok(())
}

/// First pair of words sharing a `length`-character prefix, scanning in the
/// given order. The earlier word of the pair comes first.
pub(crate) fn find_prefix_collision(
    words: &[String],
    length: usize,
) -> Option<(String, String)> {
    let mut seen: AHashMap<String, &str> = AHashMap::with_capacity(words.len());
    for word in words {
        let prefix: String = word.chars().take(length).collect();
        if let Some(existing) = seen.get(&prefix) {
            return Some((existing.to_string(), word.clone()));
        }
        seen.insert(prefix, word);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlist::policy::{PrefixRule, SimilarityRule};

    /// 2048 four-letter words over an eight-letter alphabet chosen to avoid
    /// the English correlated pairs. Distinct four-letter words are
    /// prefix-unique by construction and never score above 0.8125.
    fn sample_wordlist() -> Vec<String> {
        let letters = ['b', 'c', 'f', 'g', 'h', 'i', 'j', 'k'];
        let mut words = Vec::with_capacity(2048);
        'outer: for a in letters {
            for b in letters {
                for c in letters {
                    for d in letters {
                        words.push(format!("{a}{b}{c}{d}"));
                        if words.len() == 2048 {
                            break 'outer;
                        }
                    }
                }
            }
        }
        words
    }

    #[test]
    fn test_valid_wordlist_passes() {
        let words = sample_wordlist();
        assert_eq!(validate(&words, &ValidationPolicy::default()), Ok(()));
    }

    #[test]
    fn test_wrong_count() {
        let mut words = sample_wordlist();
        words.pop();
        assert_eq!(
            validate(&words, &ValidationPolicy::default()),
            Err(Violation::WrongCount {
                actual: 2047,
                required: 2048
            })
        );
    }

    #[test]
    fn test_not_sorted() {
        let mut words = sample_wordlist();
        words.swap(17, 1009);
        assert_eq!(
            validate(&words, &ValidationPolicy::default()),
            Err(Violation::NotSorted)
        );
    }

    #[test]
    fn test_ambiguous_prefix() {
        let mut words = sample_wordlist();
        // Same four-letter prefix as the first word, different tail.
        words[1] = format!("{}y", words[0]);
        let result = validate(&words, &ValidationPolicy::default());
        assert_eq!(
            result,
            Err(Violation::AmbiguousPrefix {
                word0: words[0].clone(),
                word1: words[1].clone(),
            })
        );
    }

    #[test]
    fn test_too_similar() {
        let mut words = sample_wordlist();
        // Prefix-unique (a vs e at position 3) but correlated there and
        // identical everywhere else: scores 0.96152... under the English
        // table. Both replacements sort before the third sample word.
        words[0] = "bbbabbbbbb".to_string();
        words[1] = "bbbebbbbbb".to_string();
        let result = validate(&words, &ValidationPolicy::default());
        match result {
            Err(Violation::TooSimilar { word0, word1, score }) => {
                assert_eq!(word0, "bbbabbbbbb");
                assert_eq!(word1, "bbbebbbbbb");
                assert!(score > 0.92);
            }
            other => panic!("expected TooSimilar, got {other:?}"),
        }
    }

    #[test]
    fn test_first_colliding_pair_is_reported() {
        let policy = ValidationPolicy {
            required_count: 4,
            prefix: Some(PrefixRule { length: 2 }),
            similarity: None,
            require_sorted: false,
        };
        let words = vec![
            "abcd".to_string(),
            "efgh".to_string(),
            "abzz".to_string(),
            "efzz".to_string(),
        ];
        assert_eq!(
            validate(&words, &policy),
            Err(Violation::AmbiguousPrefix {
                word0: "abcd".to_string(),
                word1: "abzz".to_string(),
            })
        );
    }

    #[test]
    fn test_disabled_rules_are_skipped() {
        let policy = ValidationPolicy {
            required_count: 2,
            prefix: None,
            similarity: None,
            require_sorted: false,
        };
        // Unsorted, prefix-colliding, near-identical: only the count rule runs.
        let words = vec!["builds".to_string(), "build".to_string()];
        assert_eq!(validate(&words, &policy), Ok(()));
    }

    #[test]
    fn test_similarity_threshold_is_exclusive() {
        // A score of exactly the threshold passes; only strictly greater
        // fails. "bb" vs "bc" scores exactly 0.25.
        let policy = ValidationPolicy {
            required_count: 2,
            prefix: None,
            similarity: Some(SimilarityRule {
                threshold: 0.25,
                ..Default::default()
            }),
            require_sorted: false,
        };
        let words = vec!["bb".to_string(), "bc".to_string()];
        assert_eq!(validate(&words, &policy), Ok(()));
    }
}
