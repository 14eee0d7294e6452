//! Deterministic text heuristics for title/summary derivation.
//!
//! # Responsibility
//! - Tokenize note text and filter locale stop words.
//! - Extract heuristic titles and summaries without any I/O.
//! - Truncate long output on word boundaries.
//!
//! # Invariants
//! - Every function in this module is pure and infallible.
//! - Identical input and configuration always yield byte-identical output.

pub mod extract;
pub mod stop_words;
pub mod tokens;
pub mod truncate;
