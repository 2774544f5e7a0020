//! Command line argument parsing for the Wordforge CLI using clap.

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Wordforge - a curated BIP-39 mnemonic wordlist builder
#[derive(Parser, Debug, Clone)]
#[command(name = "wordforge")]
#[command(about = "Build BIP-39 compatible mnemonic wordlists from PoS-tagged frequency corpora")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct WordforgeArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl WordforgeArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Output formats supported by the CLI
#[derive(ValueEnum, Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable text
    Human,
    /// JSON
    Json,
}

/// Corpus languages with built-in presets
#[derive(ValueEnum, Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LanguagePreset {
    /// English alphabet and correlated-character table
    English,
    /// Swedish alphabet and correlated-character table
    Swedish,
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Build a wordlist from a corpus
    Build(BuildArgs),

    /// Validate an existing wordlist file
    Check(CheckArgs),

    /// Score the similarity of two words
    Similarity(SimilarityArgs),
}

/// Arguments for building a wordlist
#[derive(Parser, Debug, Clone)]
pub struct BuildArgs {
    /// The part-of-speech tagged corpus file
    #[arg(value_name = "CORPUS_FILE")]
    pub corpus_file: PathBuf,

    /// The output file for the wordlist
    #[arg(value_name = "OUTPUT_FILE")]
    pub output_file: PathBuf,

    /// Language preset for alphabet and correlated characters
    #[arg(short, long, default_value = "english")]
    pub language: LanguagePreset,

    /// Number of corpus lines to read
    #[arg(short = 'n', long, default_value = "100000")]
    pub lines: usize,

    /// Similarity threshold above which a word pair is rejected
    #[arg(long, default_value = "0.92")]
    pub threshold: f64,

    /// Prefix length under which words must be unambiguous
    #[arg(long, default_value = "4")]
    pub prefix_length: usize,

    /// Skip the prefix-uniqueness rule
    #[arg(long)]
    pub no_prefix_rule: bool,

    /// Skip the pairwise-similarity rule
    #[arg(long)]
    pub no_similarity_rule: bool,

    /// Skip the sort-order requirement
    #[arg(long)]
    pub no_sort_rule: bool,

    /// Abort on the first malformed corpus line instead of skipping it
    #[arg(long)]
    pub strict: bool,

    /// Overwrite the output file if it exists
    #[arg(long)]
    pub force: bool,
}

/// Arguments for validating an existing wordlist
#[derive(Parser, Debug, Clone)]
pub struct CheckArgs {
    /// Wordlist file, one word per line
    #[arg(value_name = "WORDLIST_FILE")]
    pub wordlist_file: PathBuf,

    /// Language preset for the correlated-character table
    #[arg(short, long, default_value = "english")]
    pub language: LanguagePreset,

    /// Similarity threshold above which a word pair is rejected
    #[arg(long, default_value = "0.92")]
    pub threshold: f64,

    /// Prefix length under which words must be unambiguous
    #[arg(long, default_value = "4")]
    pub prefix_length: usize,

    /// Required word count
    #[arg(long, default_value = "2048")]
    pub count: usize,
}

/// Arguments for scoring a word pair
#[derive(Parser, Debug, Clone)]
pub struct SimilarityArgs {
    /// First word
    #[arg(value_name = "WORD0")]
    pub word0: String,

    /// Second word
    #[arg(value_name = "WORD1")]
    pub word1: String,

    /// Language preset for the correlated-character table
    #[arg(short, long, default_value = "english")]
    pub language: LanguagePreset,
}
