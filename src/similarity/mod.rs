//! Word similarity scoring.
//!
//! This module implements the handcrafted positional similarity metric used
//! to keep mnemonic wordlists free of confusable word pairs ("build" vs
//! "built", "woman" vs "women"). It is a bespoke heuristic, not a standard
//! edit distance: character agreement near the front of a word is worth far
//! more than agreement near the end.

pub mod metric;
pub mod params;

// Re-export commonly used types
pub use metric::*;
pub use params::*;
