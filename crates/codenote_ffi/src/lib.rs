//! Flutter-facing FFI bindings for CodeNote core.

pub mod api;
