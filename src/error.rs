//! Error types for the Wordforge library.
//!
//! All fallible operations in the crate return [`Result`], whose error type
//! is the [`WordForgeError`] enum. Granular error families keep their own
//! enums ([`CorpusError`], [`ParseError`], [`Violation`]) and convert into
//! the crate error via `#[from]`.
//!
//! # Examples
//!
//! ```
//! use wordforge::error::{Result, WordForgeError};
//!
//! fn example_operation() -> Result<()> {
//!     Err(WordForgeError::invalid_config("similarity threshold must lie in [0, 1]"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {e}"),
//! }
//! ```

use std::io;

use thiserror::Error;

use crate::corpus::parser::ParseError;
use crate::corpus::source::CorpusError;
use crate::wordlist::validator::Violation;

/// The main error type for Wordforge operations.
#[derive(Error, Debug)]
pub enum WordForgeError {
    /// I/O errors (file operations etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Corpus resource errors (missing file, double-open, use-after-close).
    #[error("Corpus error: {0}")]
    Corpus(#[from] CorpusError),

    /// A malformed corpus line, surfaced only in strict parse mode.
    #[error("Parse error at line {line}: {source}")]
    Parse {
        /// Zero-based index of the offending corpus line.
        line: usize,
        /// What was wrong with the line.
        source: ParseError,
    },

    /// Structural violation of the wordlist invariants.
    #[error("Validation error: {0}")]
    Validation(#[from] Violation),

    /// Invalid configuration (thresholds, rule parameters).
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON serialization/deserialization errors.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases.
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error.
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with [`WordForgeError`].
pub type Result<T> = std::result::Result<T, WordForgeError>;

impl WordForgeError {
    /// Create a new configuration error.
    pub fn invalid_config<S: Into<String>>(msg: S) -> Self {
        WordForgeError::Config(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        WordForgeError::Other(msg.into())
    }

    /// Wrap a [`ParseError`] together with the line it occurred on.
    pub fn parse(line: usize, source: ParseError) -> Self {
        WordForgeError::Parse { line, source }
    }
}
