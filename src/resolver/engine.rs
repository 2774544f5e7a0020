//! The conflict resolver.

use serde::{Deserialize, Serialize};

use crate::corpus::record::LexicalRecord;
use crate::error::Result;
use crate::resolver::ledger::{ConflictLedger, ConflictReport};
use crate::resolver::rule::{
    ConflictRule, LemmaConflictRule, PrefixConflictRule, SimilarityConflictRule,
};
use crate::similarity::SimilarityParams;
use crate::wordlist::list::WordList;
use crate::wordlist::policy::{
    DEFAULT_PREFIX_LENGTH, DEFAULT_SIMILARITY_THRESHOLD, ValidationPolicy,
};

/// Which conflict rules the resolver applies, and with what parameters.
///
/// The priority order is fixed (lemma, then prefix, then similarity); each
/// rule is independently toggleable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolverConfig {
    /// Apply the same-lemma-same-PoS rule.
    pub lemma_rule: bool,
    /// Prefix length for the ambiguous-prefix rule, or `None` to skip it.
    pub prefix_length: Option<usize>,
    /// Threshold for the too-similar rule, or `None` to skip it.
    pub similarity_threshold: Option<f64>,
    /// Metric parameters for the too-similar rule.
    pub similarity_params: SimilarityParams,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        ResolverConfig {
            lemma_rule: true,
            prefix_length: Some(DEFAULT_PREFIX_LENGTH),
            similarity_threshold: Some(DEFAULT_SIMILARITY_THRESHOLD),
            similarity_params: SimilarityParams::default(),
        }
    }
}

impl ResolverConfig {
    /// Derive a resolver configuration from a validation policy, so the
    /// streaming pre-screen and the final validation enforce the same
    /// invariants.
    pub fn from_policy(policy: &ValidationPolicy) -> Self {
        ResolverConfig {
            lemma_rule: true,
            prefix_length: policy.prefix.as_ref().map(|rule| rule.length),
            similarity_threshold: policy.similarity.as_ref().map(|rule| rule.threshold),
            similarity_params: policy
                .similarity
                .as_ref()
                .map(|rule| rule.params.clone())
                .unwrap_or_default(),
        }
    }
}

/// Streaming conflict resolver.
///
/// Feed records in corpus order with [`offer`](Self::offer); at the end,
/// [`finish`](Self::finish) sorts the surviving words and runs the final
/// structural validation. Every record that lost a conflict is available in
/// the [`ConflictLedger`] for review.
///
/// Conflicts never cascade: a firing rule only ever compares the arriving
/// record against the accepted set, and an eviction does not re-validate
/// the remaining accepted members against each other.
///
/// # Examples
///
/// ```
/// use wordforge::corpus::{Lemma, LexicalRecord, PartOfSpeech};
/// use wordforge::resolver::{ConflictResolver, ResolverConfig};
///
/// let mut resolver = ConflictResolver::new(ResolverConfig::default());
/// resolver.offer(LexicalRecord {
///     word: "abandon".to_string(),
///     pos: PartOfSpeech::Verb,
///     lemmas: vec![Lemma::of_word("abandon", PartOfSpeech::Verb)],
///     compound: false,
///     occurrences: 100,
///     relative_frequency: 10,
///     line_index: 0,
/// });
/// assert_eq!(resolver.accepted().len(), 1);
/// ```
pub struct ConflictResolver {
    rules: Vec<Box<dyn ConflictRule>>,
    accepted: Vec<LexicalRecord>,
    ledger: ConflictLedger,
}

impl ConflictResolver {
    /// Create a resolver with the given rule configuration.
    pub fn new(config: ResolverConfig) -> Self {
        let mut rules: Vec<Box<dyn ConflictRule>> = Vec::new();
        if config.lemma_rule {
            rules.push(Box::new(LemmaConflictRule));
        }
        if let Some(length) = config.prefix_length {
            rules.push(Box::new(PrefixConflictRule { length }));
        }
        if let Some(threshold) = config.similarity_threshold {
            rules.push(Box::new(SimilarityConflictRule {
                threshold,
                params: config.similarity_params,
            }));
        }
        ConflictResolver {
            rules,
            accepted: Vec::new(),
            ledger: ConflictLedger::new(),
        }
    }

    /// Process one record.
    ///
    /// Rules run in priority order; the first hit evicts the conflicting
    /// accepted member, books the arriving record into the ledger under the
    /// evicted reference, and ends processing for this record. Without a
    /// hit the record is accepted.
    pub fn offer(&mut self, record: LexicalRecord) {
        for rule in &self.rules {
            if let Some(index) = rule.check(&self.accepted, &record) {
                let evicted = self.accepted.remove(index);
                self.ledger.record(rule.reason(), &evicted, record);
                return;
            }
        }
        self.accepted.push(record);
    }

    /// The currently accepted records, in first-seen order.
    pub fn accepted(&self) -> &[LexicalRecord] {
        &self.accepted
    }

    /// The conflict ledger accumulated so far.
    pub fn ledger(&self) -> &ConflictLedger {
        &self.ledger
    }

    /// The sorted conflict report.
    pub fn report(&self) -> ConflictReport {
        self.ledger.report()
    }

    /// The unique lowercase survivor words, sorted lexicographically.
    ///
    /// Sorting plus dedup removes any residual exact duplicates (possible
    /// only when both pairwise rules are disabled) and satisfies the sort
    /// invariant.
    pub fn survivor_words(&self) -> Vec<String> {
        let mut words: Vec<String> = self.accepted.iter().map(|r| r.word.clone()).collect();
        words.sort();
        words.dedup();
        words
    }

    /// Finalize: sort the survivors and validate them against `policy`.
    pub fn finish<S: Into<String>>(self, language: S, policy: &ValidationPolicy) -> Result<WordList> {
        WordList::validated(self.survivor_words(), language, policy)
    }
}
