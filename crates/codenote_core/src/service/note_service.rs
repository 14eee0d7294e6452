//! Note use-case service.
//!
//! # Responsibility
//! - Create notes and replace their content with derived title/summary.
//! - Offer awaited and spawned (joinable) derivation flows.
//!
//! # Invariants
//! - A note created with blank content gets the placeholder title and no
//!   derivation run.
//! - `update_content` always leaves a non-empty title on the note.
//! - A spawned derivation always resolves; task failures fall back to the
//!   heuristic path.
//!
//! # Panics
//! - `spawn_derivation` must be called from within a Tokio runtime.

use crate::derive::generator::{CompletedDerivation, DerivedFields, TitleSummaryGenerator};
use crate::model::folder::Folder;
use crate::model::note::{Note, NoteId};
use log::{info, warn};
use std::sync::Arc;
use tokio::task::JoinHandle;

/// Note service facade over a shared derivation pipeline.
#[derive(Clone)]
pub struct NoteService {
    generator: Arc<TitleSummaryGenerator>,
}

impl NoteService {
    pub fn new(generator: TitleSummaryGenerator) -> Self {
        Self::with_shared(Arc::new(generator))
    }

    pub fn with_shared(generator: Arc<TitleSummaryGenerator>) -> Self {
        Self { generator }
    }

    pub fn generator(&self) -> &TitleSummaryGenerator {
        &self.generator
    }

    /// Creates a note, deriving title/summary only for non-blank content.
    pub async fn create_note(&self, content: impl Into<String>) -> Note {
        let mut note = Note::new(content);
        self.derive_into(&mut note).await;
        note
    }

    /// Creates a note inside `folder` and returns its id.
    pub async fn create_note_in_folder(
        &self,
        folder: &mut Folder,
        content: impl Into<String>,
    ) -> NoteId {
        let note = self.create_note(content).await;
        folder.add_note(note)
    }

    /// Replaces content, then derives and assigns title and summary.
    pub async fn update_content(
        &self,
        note: &mut Note,
        content: impl Into<String>,
    ) -> DerivedFields {
        note.set_content(content);
        let fields = self.generator.derive_fields(&note.content).await;
        note.apply_fields(fields.clone());
        info!(
            "event=note_content_updated module=service status=ok note_id={} content_chars={}",
            note.id,
            note.content.chars().count()
        );
        fields
    }

    /// Re-derives only the summary for unchanged content.
    pub async fn regenerate_summary(&self, note: &mut Note) -> String {
        let summary = self.generator.derive_summary(&note.content).await;
        note.summary = summary.clone();
        summary
    }

    /// Starts derivation on a background task.
    ///
    /// The caller applies the result with [`Note::apply_derivation`], which
    /// ignores it if the note's content changed in the meantime.
    pub fn spawn_derivation(&self, content: impl Into<String>) -> DerivationHandle {
        let content = content.into();
        let generator = Arc::clone(&self.generator);
        let task_content = content.clone();
        let task_generator = Arc::clone(&generator);
        let task = tokio::spawn(async move { task_generator.derive_fields(&task_content).await });
        DerivationHandle {
            content,
            generator,
            task,
        }
    }

    async fn derive_into(&self, note: &mut Note) {
        if note.content.trim().is_empty() {
            note.title = self.generator.profile().placeholder_title.clone();
            note.summary.clear();
            return;
        }
        let fields = self.generator.derive_fields(&note.content).await;
        note.apply_fields(fields);
    }
}

/// Joinable handle to a spawned derivation.
pub struct DerivationHandle {
    content: String,
    generator: Arc<TitleSummaryGenerator>,
    task: JoinHandle<DerivedFields>,
}

impl DerivationHandle {
    pub fn source_content(&self) -> &str {
        &self.content
    }

    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }

    /// Cancels the background task. A later `join` still resolves, using the
    /// heuristic fallback.
    pub fn abort(&self) {
        self.task.abort();
    }

    pub async fn join(self) -> CompletedDerivation {
        let fields = match self.task.await {
            Ok(fields) => fields,
            Err(err) => {
                warn!(
                    "event=derivation_join module=service status=fallback cancelled={} content_chars={}",
                    err.is_cancelled(),
                    self.content.chars().count()
                );
                self.generator.fallback_fields(&self.content)
            }
        };
        CompletedDerivation {
            source_content: self.content,
            fields,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::NoteService;
    use crate::config::DerivationProfile;
    use crate::derive::generator::TitleSummaryGenerator;

    fn offline_service() -> NoteService {
        NoteService::new(TitleSummaryGenerator::offline(DerivationProfile::default()))
    }

    #[tokio::test]
    async fn create_note_with_blank_content_uses_placeholder() {
        let note = offline_service().create_note("  ").await;
        assert_eq!(note.title, "New Note");
        assert_eq!(note.summary, "");
    }

    #[tokio::test]
    async fn regenerate_summary_keeps_title() {
        let service = offline_service();
        let mut note = service.create_note("Plan sprint review agenda").await;
        let title = note.title.clone();
        let summary = service.regenerate_summary(&mut note).await;
        assert_eq!(summary, "");
        assert_eq!(note.title, title);
    }
}
