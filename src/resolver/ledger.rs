//! The conflict ledger.
//!
//! Whenever a conflict rule fires, both involved records leave the running:
//! the pre-existing accepted record is evicted and the arriving record is
//! not accepted. The ledger keeps the bookkeeping of who displaced whom so
//! an operator can manually pick replacements when the corpus yields fewer
//! survivors than the wordlist needs.

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use crate::corpus::record::LexicalRecord;

/// Why a record conflicted with an accepted one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ConflictReason {
    /// Same part of speech, and the arriving record's lemma names the
    /// accepted word as its base form.
    SameLemmaSamePos,
    /// The words share the identifying prefix.
    AmbiguousPrefix,
    /// The words score above the similarity threshold.
    TooSimilar,
}

impl std::fmt::Display for ConflictReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ConflictReason::SameLemmaSamePos => "same lemma, same part of speech",
            ConflictReason::AmbiguousPrefix => "ambiguous prefix",
            ConflictReason::TooSimilar => "too similar",
        };
        write!(f, "{name}")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct LedgerKey {
    reason: ConflictReason,
    reference: String,
}

/// One reported ledger bucket: a reference word and the ordered words that
/// lost to it under one reason.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConflictEntry {
    /// The conflict reason of this bucket.
    pub reason: ConflictReason,
    /// The evicted reference word the bucket is keyed by.
    pub reference: String,
    /// Words displaced by the reference, in arrival order.
    pub displaced: Vec<String>,
}

/// The full, sorted conflict report.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConflictReport {
    /// All non-empty ledger buckets, sorted by reason then reference word.
    pub entries: Vec<ConflictEntry>,
}

impl ConflictReport {
    /// Total number of displaced records across all buckets.
    pub fn displaced_count(&self) -> usize {
        self.entries.iter().map(|e| e.displaced.len()).sum()
    }

    /// Whether no conflict was recorded at all.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Mapping from (reason, evicted reference) to the ordered records that
/// conflicted with it. Advisory only; never part of the final wordlist.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConflictLedger {
    buckets: AHashMap<LedgerKey, Vec<LexicalRecord>>,
}

impl ConflictLedger {
    /// Create an empty ledger.
    pub fn new() -> Self {
        ConflictLedger::default()
    }

    /// Record that `displaced` lost to `reference` under `reason`.
    pub fn record(
        &mut self,
        reason: ConflictReason,
        reference: &LexicalRecord,
        displaced: LexicalRecord,
    ) {
        self.buckets
            .entry(LedgerKey {
                reason,
                reference: reference.word.clone(),
            })
            .or_default()
            .push(displaced);
    }

    /// Number of non-empty buckets.
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Build the sorted, serializable report.
    pub fn report(&self) -> ConflictReport {
        let mut entries: Vec<ConflictEntry> = self
            .buckets
            .iter()
            .map(|(key, displaced)| ConflictEntry {
                reason: key.reason,
                reference: key.reference.clone(),
                displaced: displaced.iter().map(|r| r.word.clone()).collect(),
            })
            .collect();
        entries.sort_by(|a, b| {
            a.reason
                .cmp(&b.reason)
                .then_with(|| a.reference.cmp(&b.reference))
        });
        ConflictReport { entries }
    }
}
