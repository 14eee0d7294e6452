//! Title/summary derivation pipeline.
//!
//! # Responsibility
//! - Attempt one model-backed derivation under a time budget.
//! - Reject refusal-like or empty model output.
//! - Resolve every failure through the deterministic heuristic extractor.
//!
//! # Invariants
//! - Derivation entry points are total: failures never reach the caller.
//! - Exactly one model attempt per derivation call, no retries.
//! - The model is an injected capability; no process-wide session exists.

pub mod denylist;
pub mod error;
pub mod generator;
pub mod model;
pub mod prompt;
pub mod timeout;
