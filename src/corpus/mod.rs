//! Corpus access: the line source, the record model, parsing and selection.
//!
//! A corpus is a part-of-speech-tagged frequency list, one word form per
//! line, sorted with the most frequent word at line 0. This module owns the
//! file resource ([`source::Corpus`]), the parsed record model
//! ([`record::LexicalRecord`]), the pluggable line parser
//! ([`parser::LineParser`]) and the record selection seam
//! ([`selector::RecordSelector`]).

pub mod parser;
pub mod record;
pub mod selector;
pub mod source;

// Re-export commonly used types
pub use parser::*;
pub use record::*;
pub use selector::*;
pub use source::*;
