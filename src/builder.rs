//! The end-to-end wordlist building pipeline.
//!
//! [`WordlistBuilder`] wires the pieces together: it streams raw lines from
//! the [`Corpus`], parses them into records, filters them through the
//! selection predicate, feeds the survivors to the [`ConflictResolver`],
//! and finally validates the result into a [`WordList`].

use serde::{Deserialize, Serialize};

use crate::corpus::parser::{LineParser, ParseMode};
use crate::corpus::selector::RecordSelector;
use crate::corpus::source::Corpus;
use crate::error::{Result, WordForgeError};
use crate::resolver::engine::{ConflictResolver, ResolverConfig};
use crate::resolver::ledger::ConflictReport;
use crate::wordlist::list::WordList;
use crate::wordlist::policy::ValidationPolicy;

/// Default number of corpus lines to read.
pub const DEFAULT_LINES_TO_READ: usize = 100_000;

/// Settings for a pipeline run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuilderConfig {
    /// Language tag of the produced wordlist.
    pub language_tag: String,
    /// How many corpus lines to read at most.
    pub lines_to_read: usize,
    /// How to react to malformed lines.
    pub parse_mode: ParseMode,
    /// The invariants enforced on the final list, and mirrored by the
    /// resolver's conflict rules during streaming.
    pub policy: ValidationPolicy,
}

impl Default for BuilderConfig {
    fn default() -> Self {
        BuilderConfig {
            language_tag: "English".to_string(),
            lines_to_read: DEFAULT_LINES_TO_READ,
            parse_mode: ParseMode::default(),
            policy: ValidationPolicy::default(),
        }
    }
}

/// Statistics and results of a completed run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuildOutcome {
    /// The validated wordlist.
    pub wordlist: WordList,
    /// The conflict report for operator review.
    pub report: ConflictReport,
    /// Lines read from the corpus (including skipped ones).
    pub lines_read: usize,
    /// Lines that failed to parse and were skipped (lenient mode only).
    pub lines_skipped: usize,
    /// Records discarded by the selection predicate.
    pub records_rejected: usize,
    /// Records offered to the conflict resolver.
    pub records_offered: usize,
}

/// The wordlist building pipeline.
pub struct WordlistBuilder {
    corpus: Corpus,
    parser: Box<dyn LineParser>,
    selector: Box<dyn RecordSelector>,
    config: BuilderConfig,
}

impl WordlistBuilder {
    /// Create a pipeline over `corpus` with the given collaborators.
    ///
    /// Fails if the policy parameters are invalid or no lines are budgeted.
    pub fn new(
        corpus: Corpus,
        parser: Box<dyn LineParser>,
        selector: Box<dyn RecordSelector>,
        config: BuilderConfig,
    ) -> Result<Self> {
        config.policy.ensure_valid()?;
        if config.lines_to_read == 0 {
            return Err(WordForgeError::invalid_config(
                "lines to read must be at least 1",
            ));
        }
        Ok(WordlistBuilder {
            corpus,
            parser,
            selector,
            config,
        })
    }

    /// Run the pipeline to completion.
    ///
    /// The corpus is opened once, read sequentially up to the configured
    /// line budget (the line at exactly the cutoff index is still
    /// processed), and closed on every exit path: explicitly on success and
    /// on streaming errors, via `Drop` if close itself fails.
    pub fn build(mut self) -> Result<BuildOutcome> {
        self.corpus.open()?;
        let streamed = self.stream();
        let closed = self.corpus.close();
        let (resolver, stats) = streamed?;
        closed?;

        let report = resolver.report();
        let wordlist = resolver.finish(self.config.language_tag.clone(), &self.config.policy)?;

        Ok(BuildOutcome {
            wordlist,
            report,
            lines_read: stats.lines_read,
            lines_skipped: stats.lines_skipped,
            records_rejected: stats.records_rejected,
            records_offered: stats.records_offered,
        })
    }

    fn stream(&mut self) -> Result<(ConflictResolver, StreamStats)> {
        let mut resolver = ConflictResolver::new(ResolverConfig::from_policy(&self.config.policy));
        let mut stats = StreamStats::default();

        // Inclusive cutoff: the record at exactly this index is processed.
        let cutoff = self.config.lines_to_read - 1;

        while let Some(line) = self.corpus.next_line()? {
            if line.index > cutoff {
                break;
            }
            stats.lines_read += 1;

            let record = match self.parser.parse(&line) {
                Ok(Some(record)) => record,
                Ok(None) => continue,
                Err(source) => match self.config.parse_mode {
                    ParseMode::Lenient => {
                        stats.lines_skipped += 1;
                        continue;
                    }
                    ParseMode::Strict => {
                        return Err(WordForgeError::parse(line.index, source));
                    }
                },
            };

            if !self.selector.select(&record) {
                stats.records_rejected += 1;
                continue;
            }

            stats.records_offered += 1;
            resolver.offer(record);
        }

        Ok((resolver, stats))
    }
}

#[derive(Debug, Default)]
struct StreamStats {
    lines_read: usize,
    lines_skipped: usize,
    records_rejected: usize,
    records_offered: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::parser::TabSeparatedParser;
    use crate::corpus::selector::DefaultSelector;
    use crate::language::Language;
    use crate::wordlist::validator::Violation;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn corpus_file(lines: &[&str]) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        for line in lines {
            writeln!(file, "{line}").unwrap();
        }
        file.flush().unwrap();
        file
    }

    fn builder_for(
        file: &NamedTempFile,
        config: BuilderConfig,
    ) -> WordlistBuilder {
        let corpus = Corpus::at(file.path()).unwrap();
        WordlistBuilder::new(
            corpus,
            Box::new(TabSeparatedParser::new(Language::swedish())),
            Box::new(DefaultSelector::default()),
            config,
        )
        .unwrap()
    }

    fn small_policy(count: usize) -> ValidationPolicy {
        ValidationPolicy {
            required_count: count,
            ..Default::default()
        }
    }

    #[test]
    fn test_end_to_end_small_corpus() {
        let file = corpus_file(&[
            "hus\tNN\t|hus..nn.1|\t-\t900\t80.0",
            "och\tKN\t|\t-\t800\t70.0", // rejected: conjunction
            "bygga\tVB\t|bygga..vb.1|\t-\t700\t60.0",
            "zebra\tNN\t|zebra..nn.1|\t-\t600\t50.0",
        ]);
        let config = BuilderConfig {
            language_tag: "Swedish".to_string(),
            policy: small_policy(3),
            ..Default::default()
        };

        let outcome = builder_for(&file, config).build().unwrap();
        assert_eq!(outcome.wordlist.words(), ["bygga", "hus", "zebra"]);
        assert_eq!(outcome.wordlist.language(), "Swedish");
        assert_eq!(outcome.lines_read, 4);
        assert_eq!(outcome.records_rejected, 1);
        assert_eq!(outcome.records_offered, 3);
        assert!(outcome.report.is_empty());
    }

    #[test]
    fn test_cutoff_is_inclusive() {
        let file = corpus_file(&[
            "hus\tNN\t|\t-\t900\t80.0",
            "zebra\tNN\t|\t-\t800\t70.0", // exactly at the cutoff index
            "bygga\tVB\t|\t-\t700\t60.0", // beyond the cutoff
        ]);
        let config = BuilderConfig {
            language_tag: "Swedish".to_string(),
            lines_to_read: 2,
            policy: small_policy(2),
            ..Default::default()
        };

        let outcome = builder_for(&file, config).build().unwrap();
        assert_eq!(outcome.lines_read, 2);
        assert_eq!(outcome.wordlist.words(), ["hus", "zebra"]);
    }

    #[test]
    fn test_lenient_mode_skips_malformed_lines() {
        let file = corpus_file(&[
            "hus\tNN\t|\t-\t900\t80.0",
            "not a corpus line",
            "zebra\tNN\t|\t-\t800\t70.0",
        ]);
        let config = BuilderConfig {
            language_tag: "Swedish".to_string(),
            policy: small_policy(2),
            ..Default::default()
        };

        let outcome = builder_for(&file, config).build().unwrap();
        assert_eq!(outcome.lines_skipped, 1);
        assert_eq!(outcome.wordlist.words(), ["hus", "zebra"]);
    }

    #[test]
    fn test_strict_mode_aborts_on_malformed_line() {
        let file = corpus_file(&[
            "hus\tNN\t|\t-\t900\t80.0",
            "not a corpus line",
        ]);
        let config = BuilderConfig {
            language_tag: "Swedish".to_string(),
            parse_mode: ParseMode::Strict,
            policy: small_policy(1),
            ..Default::default()
        };

        let result = builder_for(&file, config).build();
        assert!(matches!(
            result,
            Err(WordForgeError::Parse { line: 1, .. })
        ));
    }

    #[test]
    fn test_too_few_survivors_is_wrong_count() {
        let file = corpus_file(&["hus\tNN\t|\t-\t900\t80.0"]);
        let config = BuilderConfig {
            language_tag: "Swedish".to_string(),
            policy: small_policy(2),
            ..Default::default()
        };

        let result = builder_for(&file, config).build();
        assert!(matches!(
            result,
            Err(WordForgeError::Validation(Violation::WrongCount {
                actual: 1,
                required: 2
            }))
        ));
    }

    #[test]
    fn test_conflicts_surface_in_report() {
        let file = corpus_file(&[
            "bygga\tVB\t|bygga..vb.1|\t-\t900\t80.0",
            "hus\tNN\t|\t-\t800\t70.0",
            "byggde\tVB\t|bygga..vb.1|\t-\t700\t60.0",
        ]);
        let config = BuilderConfig {
            language_tag: "Swedish".to_string(),
            policy: small_policy(1),
            ..Default::default()
        };

        let outcome = builder_for(&file, config).build().unwrap();
        assert_eq!(outcome.wordlist.words(), ["hus"]);
        assert_eq!(outcome.report.entries.len(), 1);
        assert_eq!(outcome.report.entries[0].reference, "bygga");
        assert_eq!(outcome.report.entries[0].displaced, vec!["byggde"]);
    }

    #[test]
    fn test_zero_line_budget_is_rejected() {
        let file = corpus_file(&["hus\tNN\t|\t-\t900\t80.0"]);
        let corpus = Corpus::at(file.path()).unwrap();
        let result = WordlistBuilder::new(
            corpus,
            Box::new(TabSeparatedParser::new(Language::swedish())),
            Box::new(DefaultSelector::default()),
            BuilderConfig {
                lines_to_read: 0,
                ..Default::default()
            },
        );
        assert!(result.is_err());
    }
}
