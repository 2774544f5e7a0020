//! Tunable parameters for the similarity metric.

use serde::{Deserialize, Serialize};

/// Default partial credit granted to a correlated character pair.
pub const DEFAULT_CORRELATION_FACTOR: f64 = 0.4;

/// A pair of characters treated as partially interchangeable, with its own
/// partial-credit weight.
///
/// The pair is unordered: `(a, e)` and `(e, a)` are the same correlation.
/// A factor may legitimately exceed 1.0 for pairs that are near-homophones
/// in some language; the total similarity is still clamped to 1.0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CharCorrelation {
    /// One character of the pair.
    pub char0: char,
    /// The other character of the pair.
    pub char1: char,
    /// Partial credit relative to an exact character match.
    pub factor: f64,
}

impl CharCorrelation {
    /// Create a correlation with an explicit factor.
    pub fn new(char0: char, char1: char, factor: f64) -> Self {
        CharCorrelation {
            char0,
            char1,
            factor,
        }
    }

    /// Create a correlation with the default factor.
    pub fn with_default_factor(char0: char, char1: char) -> Self {
        Self::new(char0, char1, DEFAULT_CORRELATION_FACTOR)
    }
}

/// A per-language table of correlated character pairs.
///
/// # Examples
///
/// ```
/// use wordforge::similarity::CorrelationTable;
///
/// let table = CorrelationTable::english();
/// assert_eq!(table.factor('a', 'e'), Some(0.4));
/// assert_eq!(table.factor('e', 'a'), Some(0.4));
/// assert_eq!(table.factor('a', 'o'), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CorrelationTable {
    entries: Vec<CharCorrelation>,
}

impl CorrelationTable {
    /// Create an empty table (no partial credit for any pair).
    pub fn empty() -> Self {
        CorrelationTable {
            entries: Vec::new(),
        }
    }

    /// Create a table from explicit entries.
    pub fn new(entries: Vec<CharCorrelation>) -> Self {
        CorrelationTable { entries }
    }

    /// The default English table.
    pub fn english() -> Self {
        Self::new(vec![
            CharCorrelation::with_default_factor('a', 'e'),
            CharCorrelation::with_default_factor('d', 't'),
        ])
    }

    /// The default Swedish table.
    ///
    /// The n/t factor is above 1.0 on purpose: inflection pairs like
    /// "åren" vs "året" differ only in that position.
    pub fn swedish() -> Self {
        Self::new(vec![
            CharCorrelation::new('å', 'ä', 0.7),
            CharCorrelation::new('ö', 'o', 0.6),
            CharCorrelation::new('n', 't', 2.0),
        ])
    }

    /// Look up the factor for an unordered character pair.
    pub fn factor(&self, c0: char, c1: char) -> Option<f64> {
        self.entries
            .iter()
            .find(|e| (e.char0 == c0 && e.char1 == c1) || (e.char0 == c1 && e.char1 == c0))
            .map(|e| e.factor)
    }

    /// The entries of this table.
    pub fn entries(&self) -> &[CharCorrelation] {
        &self.entries
    }
}

/// Tunable parameters for [`similarity`](crate::similarity::similarity).
///
/// The metric walks both words position by position, carrying a weight that
/// starts at `first_char_weight` and decays by `same_length_scaling` after
/// every compared position, then by `different_length_scaling` for each
/// trailing character of the longer word.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimilarityParams {
    /// Weight of the first character position.
    pub first_char_weight: f64,
    /// Per-position decay while both words still have characters.
    pub same_length_scaling: f64,
    /// Per-position decay over the trailing characters of the longer word.
    pub different_length_scaling: f64,
    /// Correlated character pairs granting partial credit on mismatch.
    pub correlations: CorrelationTable,
}

impl Default for SimilarityParams {
    fn default() -> Self {
        SimilarityParams {
            first_char_weight: 0.5,
            same_length_scaling: 0.5,
            different_length_scaling: 0.5,
            correlations: CorrelationTable::english(),
        }
    }
}

impl SimilarityParams {
    /// Default parameters with a specific correlation table.
    pub fn with_correlations(correlations: CorrelationTable) -> Self {
        SimilarityParams {
            correlations,
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factor_lookup_is_unordered() {
        let table = CorrelationTable::swedish();
        assert_eq!(table.factor('å', 'ä'), Some(0.7));
        assert_eq!(table.factor('ä', 'å'), Some(0.7));
        assert_eq!(table.factor('o', 'ö'), Some(0.6));
        assert_eq!(table.factor('n', 't'), Some(2.0));
        assert_eq!(table.factor('a', 'b'), None);
    }

    #[test]
    fn test_default_params() {
        let params = SimilarityParams::default();
        assert_eq!(params.first_char_weight, 0.5);
        assert_eq!(params.same_length_scaling, 0.5);
        assert_eq!(params.different_length_scaling, 0.5);
        assert_eq!(params.correlations, CorrelationTable::english());
    }

    #[test]
    fn test_empty_table() {
        assert_eq!(CorrelationTable::empty().factor('a', 'e'), None);
    }
}
