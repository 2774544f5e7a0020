//! The positional word-similarity metric.

use serde::{Deserialize, Serialize};

use crate::similarity::params::SimilarityParams;

/// A scored word pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimilarityScore {
    /// First word of the pair.
    pub word0: String,
    /// Second word of the pair.
    pub word1: String,
    /// Similarity in [0, 1].
    pub score: f64,
}

impl SimilarityScore {
    /// Score a word pair under the given parameters.
    pub fn of(word0: &str, word1: &str, params: &SimilarityParams) -> Self {
        SimilarityScore {
            word0: word0.to_string(),
            word1: word1.to_string(),
            score: similarity(word0, word1, params),
        }
    }
}

impl std::fmt::Display for SimilarityScore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "\"{}\" vs \"{}\" @ {:.1}%",
            self.word0,
            self.word1,
            self.score * 100.0
        )
    }
}

/// Score the similarity of two words in [0, 1].
///
/// Conventions: either word empty scores 0, identical words score 1. The
/// general case walks the shared positions front to back with a decaying
/// weight: an equal character adds the current weight, a correlated pair
/// (per the table in `params`) adds the pair's factor times the weight, and
/// any other mismatch subtracts the weight. Trailing characters of the
/// longer word subtract the (further decaying) weight. Negative totals
/// clamp to 0 and the result never exceeds 1, even when a correlation
/// factor is above 1.
///
/// The exact operation order is part of the contract; reference wordlists
/// were curated against these scores.
///
/// # Examples
///
/// ```
/// use wordforge::similarity::{SimilarityParams, similarity};
///
/// let params = SimilarityParams::default();
/// assert!(similarity("build", "built", &params) > 0.92);
/// assert!(similarity("able", "cable", &params) <= 0.92);
/// ```
pub fn similarity(word0: &str, word1: &str, params: &SimilarityParams) -> f64 {
    if word0.is_empty() || word1.is_empty() {
        return 0.0;
    }
    if word0 == word1 {
        return 1.0;
    }

    let chars0: Vec<char> = word0.chars().collect();
    let chars1: Vec<char> = word1.chars().collect();
    let shortest = chars0.len().min(chars1.len());
    let longest = chars0.len().max(chars1.len());

    let mut score: f64 = 0.0;
    let mut weight = params.first_char_weight;

    for offset in 0..shortest {
        let c0 = chars0[offset];
        let c1 = chars1[offset];
        if c0 == c1 {
            score += weight;
        } else if let Some(factor) = params.correlations.factor(c0, c1) {
            score += factor * weight;
        } else {
            score -= weight;
        }
        weight *= params.same_length_scaling;
    }

    for _ in 0..(longest - shortest) {
        score -= weight;
        weight *= params.different_length_scaling;
    }

    if score < 0.0 {
        return 0.0;
    }
    score.min(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::similarity::params::{CharCorrelation, CorrelationTable};

    const THRESHOLD: f64 = 0.92;

    fn english() -> SimilarityParams {
        SimilarityParams::default()
    }

    #[test]
    fn test_empty_word_scores_zero() {
        let params = english();
        assert_eq!(similarity("", "abandon", &params), 0.0);
        assert_eq!(similarity("abandon", "", &params), 0.0);
        assert_eq!(similarity("", "", &params), 0.0);
    }

    #[test]
    fn test_identity() {
        let params = english();
        for word in ["a", "zoo", "abandon", "åtgärd"] {
            assert_eq!(similarity(word, word, &params), 1.0);
        }
    }

    #[test]
    fn test_symmetry() {
        let params = english();
        let words = ["build", "built", "woman", "women", "cable", "able", "zoo"];
        for w0 in words {
            for w1 in words {
                assert_eq!(
                    similarity(w0, w1, &params),
                    similarity(w1, w0, &params),
                    "asymmetric for {w0} / {w1}"
                );
            }
        }
    }

    #[test]
    fn test_range() {
        let params = SimilarityParams::with_correlations(CorrelationTable::swedish());
        let words = ["åren", "året", "natt", "tant", "nn", "tt", "ön", "on"];
        for w0 in words {
            for w1 in words {
                let s = similarity(w0, w1, &params);
                assert!((0.0..=1.0).contains(&s), "out of range for {w0} / {w1}: {s}");
            }
        }
    }

    #[test]
    fn test_known_similar_vectors() {
        let params = english();
        for (w0, w1) in [("build", "built"), ("woman", "women"), ("quick", "quickly")] {
            let s = similarity(w0, w1, &params);
            assert!(s > THRESHOLD, "{w0} / {w1} scored {s}, expected > {THRESHOLD}");
        }
    }

    #[test]
    fn test_known_dissimilar_vectors() {
        let params = english();
        for (w0, w1) in [("able", "cable"), ("abandon", "admit")] {
            let s = similarity(w0, w1, &params);
            assert!(s <= THRESHOLD, "{w0} / {w1} scored {s}, expected <= {THRESHOLD}");
        }
    }

    #[test]
    fn test_exact_positional_decay() {
        let params = english();
        // b/u/i/l equal: 0.5 + 0.25 + 0.125 + 0.0625; d vs t correlated at
        // 0.4 with weight 0.03125.
        let expected = 0.5 + 0.25 + 0.125 + 0.0625 + 0.4 * 0.03125;
        assert!((similarity("build", "built", &params) - expected).abs() < 1e-12);

        // Five equal positions, then two trailing characters.
        let expected = 0.96875 - 0.015625 - 0.0078125;
        assert!((similarity("quick", "quickly", &params) - expected).abs() < 1e-12);
    }

    #[test]
    fn test_factor_above_one_is_clamped() {
        let table = CorrelationTable::new(vec![CharCorrelation::new('n', 't', 2.0)]);
        let params = SimilarityParams::with_correlations(table);
        // Both positions hit the 2.0-factor pair: raw total 0.5*2 + 0.25*2 = 1.5.
        assert_eq!(similarity("nn", "tt", &params), 1.0);
    }

    #[test]
    fn test_swedish_inflection_pair() {
        let params = SimilarityParams::with_correlations(CorrelationTable::swedish());
        assert!(similarity("åren", "året", &params) > THRESHOLD);
    }

    #[test]
    fn test_score_display() {
        let score = SimilarityScore::of("woman", "women", &english());
        let rendered = score.to_string();
        assert!(rendered.contains("woman"));
        assert!(rendered.contains("women"));
        assert!(rendered.contains('%'));
    }
}
