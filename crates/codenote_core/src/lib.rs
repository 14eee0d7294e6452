//! Core domain logic for CodeNote.
//! Notes, folders and the title/summary derivation pipeline live here; UI,
//! persistence and photo storage stay with the host app.

pub mod config;
pub mod derive;
pub mod logging;
pub mod model;
pub mod service;
pub mod text;

pub use config::{parse_locale, DerivationProfile, Locale, ProfileError, SummaryMode, TitleMode};
pub use derive::denylist::{Denylist, DEFAULT_REFUSAL_PHRASES};
pub use derive::error::DerivationError;
pub use derive::generator::{
    CompletedDerivation, Derived, DerivationSource, DerivedFields, TitleSummaryGenerator,
};
pub use derive::model::{HostResponse, LanguageModel, UnavailableModel};
pub use derive::prompt::{Prompt, PromptKind};
pub use logging::{default_log_level, init_logging, logging_status, LogLevel};
pub use model::folder::{Folder, FolderId};
pub use model::note::{preview_text, Note, NoteId};
pub use model::tags::{NoteKind, Priority, Status};
pub use model::ModelError;
pub use service::note_service::{DerivationHandle, NoteService};
pub use text::extract::TextExtractor;
pub use text::truncate::{truncate_at_word_boundary, ELLIPSIS};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
