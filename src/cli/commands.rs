//! Command implementations for the Wordforge CLI.

use std::fs::File;
use std::io::{BufRead, BufReader, Write};

use crate::builder::{BuilderConfig, WordlistBuilder};
use crate::cli::args::*;
use crate::cli::output::*;
use crate::corpus::parser::{ParseMode, TabSeparatedParser};
use crate::corpus::selector::DefaultSelector;
use crate::corpus::source::Corpus;
use crate::error::{Result, WordForgeError};
use crate::language::Language;
use crate::similarity::{SimilarityParams, SimilarityScore};
use crate::wordlist::policy::{PrefixRule, SimilarityRule, ValidationPolicy};
use crate::wordlist::validator::validate;

/// Execute a CLI command.
pub fn execute_command(args: WordforgeArgs) -> Result<()> {
    match &args.command {
        Command::Build(build_args) => build_wordlist(build_args.clone(), &args),
        Command::Check(check_args) => check_wordlist(check_args.clone(), &args),
        Command::Similarity(sim_args) => score_pair(sim_args.clone(), &args),
    }
}

fn language_for(preset: &LanguagePreset) -> Language {
    match preset {
        LanguagePreset::English => Language::english(),
        LanguagePreset::Swedish => Language::swedish(),
    }
}

/// Build a wordlist from a corpus.
fn build_wordlist(args: BuildArgs, cli_args: &WordforgeArgs) -> Result<()> {
    let language = language_for(&args.language);

    if cli_args.verbosity() > 0 {
        println!(
            "Building {} wordlist from: {}",
            language.tag,
            args.corpus_file.display()
        );
    }

    if args.output_file.exists() && !args.force {
        return Err(WordForgeError::other(
            "Output file already exists. Use --force to overwrite.",
        ));
    }

    let params = SimilarityParams::with_correlations(language.correlations.clone());
    let policy = ValidationPolicy {
        prefix: (!args.no_prefix_rule).then_some(PrefixRule {
            length: args.prefix_length,
        }),
        similarity: (!args.no_similarity_rule).then_some(SimilarityRule {
            threshold: args.threshold,
            params,
        }),
        require_sorted: !args.no_sort_rule,
        ..Default::default()
    };

    let config = BuilderConfig {
        language_tag: language.tag.clone(),
        lines_to_read: args.lines,
        parse_mode: if args.strict {
            ParseMode::Strict
        } else {
            ParseMode::Lenient
        },
        policy,
    };

    let corpus = Corpus::at(&args.corpus_file)?;
    let builder = WordlistBuilder::new(
        corpus,
        Box::new(TabSeparatedParser::new(language)),
        Box::new(DefaultSelector::default()),
        config,
    )?;

    let outcome = builder.build()?;

    let mut output = File::create(&args.output_file)?;
    for word in outcome.wordlist.words() {
        writeln!(output, "{word}")?;
    }

    output_result(
        "Wordlist built successfully",
        &BuildResult {
            language: outcome.wordlist.language().to_string(),
            words_written: outcome.wordlist.len(),
            output_file: args.output_file.to_string_lossy().to_string(),
            lines_read: outcome.lines_read,
            lines_skipped: outcome.lines_skipped,
            records_rejected: outcome.records_rejected,
            records_offered: outcome.records_offered,
            conflicts: outcome.report.displaced_count(),
            report: outcome.report,
        },
        cli_args,
    )
}

/// Validate an existing wordlist file.
fn check_wordlist(args: CheckArgs, cli_args: &WordforgeArgs) -> Result<()> {
    if cli_args.verbosity() > 1 {
        println!("Checking wordlist: {}", args.wordlist_file.display());
    }

    let language = language_for(&args.language);
    let reader = BufReader::new(File::open(&args.wordlist_file)?);
    let words: Vec<String> = reader
        .lines()
        .collect::<std::io::Result<Vec<_>>>()?
        .into_iter()
        .map(|line| line.trim().to_string())
        .filter(|line| !line.is_empty())
        .collect();

    let policy = ValidationPolicy {
        required_count: args.count,
        prefix: Some(PrefixRule {
            length: args.prefix_length,
        }),
        similarity: Some(SimilarityRule {
            threshold: args.threshold,
            params: SimilarityParams::with_correlations(language.correlations),
        }),
        require_sorted: true,
    };
    policy.ensure_valid()?;

    let validation = validate(&words, &policy);
    output_result(
        "Wordlist checked",
        &CheckResult {
            wordlist_file: args.wordlist_file.to_string_lossy().to_string(),
            words: words.len(),
            valid: validation.is_ok(),
            violation: validation.err().map(|v| v.to_string()),
        },
        cli_args,
    )
}

/// Score a single word pair.
fn score_pair(args: SimilarityArgs, cli_args: &WordforgeArgs) -> Result<()> {
    let language = language_for(&args.language);
    let params = SimilarityParams::with_correlations(language.correlations);
    let score = SimilarityScore::of(&args.word0, &args.word1, &params);

    output_result(
        &score.to_string(),
        &SimilarityResult {
            word0: score.word0.clone(),
            word1: score.word1.clone(),
            score: score.score,
        },
        cli_args,
    )
}
