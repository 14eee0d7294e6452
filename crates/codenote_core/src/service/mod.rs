//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate model mutations and derivation into use-case level APIs.
//! - Keep UI/FFI layers decoupled from derivation details.

pub mod note_service;
