//! # Wordforge
//!
//! A curated BIP-39 mnemonic wordlist builder for Rust.
//!
//! Wordforge turns a frequency-sorted, part-of-speech-tagged corpus into a
//! 2048-word mnemonic wordlist that satisfies the structural BIP-39
//! constraints: every word is unambiguously identified by a short prefix,
//! word pairs are dissimilar under a positional similarity metric, and the
//! list is lexicographically sorted.
//!
//! ## Features
//!
//! - Pure Rust implementation
//! - Bespoke positional word-similarity metric with per-language
//!   correlated-character tables
//! - Structural validation of candidate wordlists
//! - Streaming conflict resolution with an advisory conflict ledger
//! - Pluggable line parsing and record selection

pub mod builder;
pub mod cli;
pub mod corpus;
pub mod error;
pub mod language;
pub mod resolver;
pub mod similarity;
pub mod wordlist;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
