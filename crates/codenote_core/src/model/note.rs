//! Note entity.
//!
//! # Responsibility
//! - Hold raw content, derived title/summary, tags and photos of one note.
//! - Track modification time for content and photo changes.
//!
//! # Invariants
//! - `modified_at` is bumped whenever content or photos change.
//! - Derived fields are only replaced by results computed from the current
//!   content (see `apply_derivation`).

use crate::derive::generator::{CompletedDerivation, DerivedFields};
use crate::model::folder::FolderId;
use crate::model::now_epoch_ms;
use crate::model::tags::{NoteKind, Priority, Status};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Content preview length in chars.
pub const PREVIEW_MAX_CHARS: usize = 100;

/// Stable note identifier.
pub type NoteId = Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: NoteId,
    pub title: String,
    pub content: String,
    /// Empty for content at or below the summary threshold.
    pub summary: String,
    pub created_at: i64,
    pub modified_at: i64,
    pub folder_id: Option<FolderId>,
    pub priority: Priority,
    pub status: Status,
    #[serde(rename = "type")]
    pub kind: NoteKind,
    pub photos: Vec<Vec<u8>>,
}

impl Note {
    /// Creates a note with default tags and no derived fields yet.
    pub fn new(content: impl Into<String>) -> Self {
        let now = now_epoch_ms();
        Self {
            id: Uuid::new_v4(),
            title: String::new(),
            content: content.into(),
            summary: String::new(),
            created_at: now,
            modified_at: now,
            folder_id: None,
            priority: Priority::default(),
            status: Status::default(),
            kind: NoteKind::default(),
            photos: Vec::new(),
        }
    }

    pub fn in_folder(folder_id: FolderId, content: impl Into<String>) -> Self {
        Self {
            folder_id: Some(folder_id),
            ..Self::new(content)
        }
    }

    /// Replaces content and bumps `modified_at`. Derived fields are untouched.
    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
        self.touch();
    }

    pub fn add_photo(&mut self, photo: Vec<u8>) {
        self.photos.push(photo);
        self.touch();
    }

    /// Removes the photo at `index`; out-of-range indexes change nothing.
    pub fn remove_photo(&mut self, index: usize) -> Option<Vec<u8>> {
        if index >= self.photos.len() {
            return None;
        }
        let removed = self.photos.remove(index);
        self.touch();
        Some(removed)
    }

    /// Assigns derived fields unconditionally.
    pub fn apply_fields(&mut self, fields: DerivedFields) {
        self.title = fields.title;
        self.summary = fields.summary;
    }

    /// Assigns derived fields when they were computed from the current
    /// content. Returns `false` and leaves the note unchanged otherwise.
    pub fn apply_derivation(&mut self, derivation: &CompletedDerivation) -> bool {
        if derivation.source_content != self.content {
            return false;
        }
        self.apply_fields(derivation.fields.clone());
        true
    }

    pub fn preview(&self) -> String {
        preview_text(&self.content)
    }

    fn touch(&mut self) {
        self.modified_at = now_epoch_ms().max(self.modified_at);
    }
}

/// First [`PREVIEW_MAX_CHARS`] chars of `content`, with `"..."` when cut.
pub fn preview_text(content: &str) -> String {
    match content.char_indices().nth(PREVIEW_MAX_CHARS) {
        Some((cut, _)) => format!("{}...", &content[..cut]),
        None => content.to_string(),
    }
}
