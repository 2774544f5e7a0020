//! Streaming conflict resolution.
//!
//! The resolver consumes corpus records one at a time and incrementally
//! builds a candidate set that is pre-screened against the wordlist
//! invariants. Because the corpus is frequency-sorted, arrival order
//! approximates descending frequency; conflicts therefore drop later (less
//! frequent) arrivals, and every dropped alternative is recorded in a
//! ledger for human review.

pub mod engine;
pub mod ledger;
pub mod rule;

// Re-export commonly used types
pub use engine::*;
pub use ledger::*;
pub use rule::*;
