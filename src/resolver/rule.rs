//! Conflict rules.
//!
//! Each rule inspects the tentative pairing of the accepted set with one
//! arriving record and answers whether the arrival conflicts with an
//! accepted member. Rules are plain values applied by the resolver in a
//! fixed priority order; the first hit wins and the remaining rules are
//! not consulted for that record.

use crate::corpus::record::LexicalRecord;
use crate::resolver::ledger::ConflictReason;
use crate::similarity::{SimilarityParams, similarity};

/// Trait for conflict rules evaluated against `(accepted set, new record)`.
///
/// A hit names the index of the accepted member to evict. Only pairs
/// involving the arriving record are ever considered; accepted members are
/// never re-checked against each other.
pub trait ConflictRule: Send + Sync {
    /// Index of the conflicting accepted member, if any.
    fn check(&self, accepted: &[LexicalRecord], incoming: &LexicalRecord) -> Option<usize>;

    /// The ledger reason recorded when this rule fires.
    fn reason(&self) -> ConflictReason;

    /// Get the name of this rule (for debugging and configuration).
    fn name(&self) -> &'static str;
}

/// Fires when an accepted record shares the arrival's part of speech, has a
/// different word, and is named as base form by one of the arrival's
/// lemmas. In other words: the arrival is an inflection of an accepted
/// headword.
#[derive(Debug, Clone, Copy, Default)]
pub struct LemmaConflictRule;

impl ConflictRule for LemmaConflictRule {
    fn check(&self, accepted: &[LexicalRecord], incoming: &LexicalRecord) -> Option<usize> {
        accepted.iter().position(|a| {
            a.pos == incoming.pos && a.word != incoming.word && incoming.has_lemma_base(&a.word)
        })
    }

    fn reason(&self) -> ConflictReason {
        ConflictReason::SameLemmaSamePos
    }

    fn name(&self) -> &'static str {
        "same_lemma_same_pos"
    }
}

/// Fires when an accepted word shares the arrival's identifying prefix.
#[derive(Debug, Clone, Copy)]
pub struct PrefixConflictRule {
    /// Prefix length in characters.
    pub length: usize,
}

impl ConflictRule for PrefixConflictRule {
    fn check(&self, accepted: &[LexicalRecord], incoming: &LexicalRecord) -> Option<usize> {
        let prefix: Vec<char> = incoming.word.chars().take(self.length).collect();
        accepted
            .iter()
            .position(|a| a.word.chars().take(self.length).eq(prefix.iter().copied()))
    }

    fn reason(&self) -> ConflictReason {
        ConflictReason::AmbiguousPrefix
    }

    fn name(&self) -> &'static str {
        "ambiguous_prefix"
    }
}

/// Fires when an accepted word scores above the similarity threshold
/// against the arrival.
#[derive(Debug, Clone)]
pub struct SimilarityConflictRule {
    /// Scores strictly above this threshold conflict.
    pub threshold: f64,
    /// Metric parameters.
    pub params: SimilarityParams,
}

impl ConflictRule for SimilarityConflictRule {
    fn check(&self, accepted: &[LexicalRecord], incoming: &LexicalRecord) -> Option<usize> {
        accepted
            .iter()
            .position(|a| similarity(&a.word, &incoming.word, &self.params) > self.threshold)
    }

    fn reason(&self) -> ConflictReason {
        ConflictReason::TooSimilar
    }

    fn name(&self) -> &'static str {
        "too_similar"
    }
}
