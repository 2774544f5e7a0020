//! Validation policy configuration.

use serde::{Deserialize, Serialize};

use crate::error::{Result, WordForgeError};
use crate::similarity::SimilarityParams;

/// Number of words a BIP-39 style wordlist must hold.
pub const REQUIRED_WORD_COUNT: usize = 2048;

/// Default prefix length under which words must be unambiguous.
pub const DEFAULT_PREFIX_LENGTH: usize = 4;

/// Default similarity threshold above which a word pair is rejected.
pub const DEFAULT_SIMILARITY_THRESHOLD: f64 = 0.92;

/// The prefix-uniqueness rule: the first `length` characters must identify
/// a word unambiguously.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrefixRule {
    /// Prefix length in characters.
    pub length: usize,
}

impl Default for PrefixRule {
    fn default() -> Self {
        PrefixRule {
            length: DEFAULT_PREFIX_LENGTH,
        }
    }
}

/// The pairwise-dissimilarity rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimilarityRule {
    /// Scores strictly above this threshold are violations.
    pub threshold: f64,
    /// Metric parameters, including the correlated-character table.
    pub params: SimilarityParams,
}

impl Default for SimilarityRule {
    fn default() -> Self {
        SimilarityRule {
            threshold: DEFAULT_SIMILARITY_THRESHOLD,
            params: SimilarityParams::default(),
        }
    }
}

/// Explicit configuration of the wordlist invariants.
///
/// Every rule is independently toggleable: a disabled rule is simply `None`.
/// There are no flag combinations with undefined meaning.
///
/// # Examples
///
/// ```
/// use wordforge::wordlist::ValidationPolicy;
///
/// let policy = ValidationPolicy::default();
/// assert_eq!(policy.required_count, 2048);
/// assert!(policy.prefix.is_some());
/// assert!(policy.similarity.is_some());
/// assert!(policy.require_sorted);
/// policy.ensure_valid().unwrap();
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationPolicy {
    /// Exact number of words the final list must hold.
    pub required_count: usize,
    /// Prefix-uniqueness rule, or `None` to skip it.
    pub prefix: Option<PrefixRule>,
    /// Pairwise-dissimilarity rule, or `None` to skip it.
    pub similarity: Option<SimilarityRule>,
    /// Whether the list must be lexicographically sorted.
    pub require_sorted: bool,
}

impl Default for ValidationPolicy {
    fn default() -> Self {
        ValidationPolicy {
            required_count: REQUIRED_WORD_COUNT,
            prefix: Some(PrefixRule::default()),
            similarity: Some(SimilarityRule::default()),
            require_sorted: true,
        }
    }
}

impl ValidationPolicy {
    /// Default policy with the similarity rule using the given parameters.
    pub fn with_similarity_params(params: SimilarityParams) -> Self {
        ValidationPolicy {
            similarity: Some(SimilarityRule {
                threshold: DEFAULT_SIMILARITY_THRESHOLD,
                params,
            }),
            ..Default::default()
        }
    }

    /// Check the policy parameters themselves.
    pub fn ensure_valid(&self) -> Result<()> {
        if let Some(prefix) = &self.prefix
            && prefix.length == 0
        {
            return Err(WordForgeError::invalid_config(
                "prefix length must be at least 1",
            ));
        }
        if let Some(similarity) = &self.similarity
            && !(0.0..=1.0).contains(&similarity.threshold)
        {
            return Err(WordForgeError::invalid_config(format!(
                "similarity threshold must lie in [0, 1], got {}",
                similarity.threshold
            )));
        }
        Ok(())
    }
}
