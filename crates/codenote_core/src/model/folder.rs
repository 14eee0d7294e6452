//! Folder entity owning an ordered list of notes.

use crate::model::note::{Note, NoteId};
use crate::model::{now_epoch_ms, ModelError};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable folder identifier.
pub type FolderId = Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Folder {
    pub id: FolderId,
    pub name: String,
    pub created_at: i64,
    /// Insertion-ordered; dropped together with the folder.
    pub notes: Vec<Note>,
}

impl Folder {
    /// Creates an empty folder.
    ///
    /// # Errors
    /// - `EmptyFolderName` when `name` is blank after trimming.
    pub fn new(name: &str) -> Result<Self, ModelError> {
        Ok(Self {
            id: Uuid::new_v4(),
            name: normalize_folder_name(name)?,
            created_at: now_epoch_ms(),
            notes: Vec::new(),
        })
    }

    pub fn rename(&mut self, name: &str) -> Result<(), ModelError> {
        self.name = normalize_folder_name(name)?;
        Ok(())
    }

    pub fn note_count(&self) -> usize {
        self.notes.len()
    }

    /// Moves `note` into this folder and returns its id.
    pub fn add_note(&mut self, mut note: Note) -> NoteId {
        note.folder_id = Some(self.id);
        let id = note.id;
        self.notes.push(note);
        id
    }

    /// Detaches a note from this folder.
    pub fn remove_note(&mut self, id: NoteId) -> Option<Note> {
        let index = self.notes.iter().position(|note| note.id == id)?;
        let mut note = self.notes.remove(index);
        note.folder_id = None;
        Some(note)
    }

    pub fn note(&self, id: NoteId) -> Option<&Note> {
        self.notes.iter().find(|note| note.id == id)
    }

    pub fn note_mut(&mut self, id: NoteId) -> Option<&mut Note> {
        self.notes.iter_mut().find(|note| note.id == id)
    }
}

fn normalize_folder_name(name: &str) -> Result<String, ModelError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(ModelError::EmptyFolderName);
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::Folder;
    use crate::model::note::Note;
    use crate::model::ModelError;

    #[test]
    fn rejects_blank_names() {
        assert_eq!(Folder::new("   "), Err(ModelError::EmptyFolderName));
        let mut folder = Folder::new(" Work ").expect("folder");
        assert_eq!(folder.name, "Work");
        assert_eq!(folder.rename(""), Err(ModelError::EmptyFolderName));
        assert_eq!(folder.name, "Work");
    }

    #[test]
    fn add_and_remove_note_maintain_back_reference() {
        let mut folder = Folder::new("Ideas").expect("folder");
        let id = folder.add_note(Note::new("first idea"));
        assert_eq!(folder.note_count(), 1);
        assert_eq!(folder.note(id).and_then(|note| note.folder_id), Some(folder.id));

        let removed = folder.remove_note(id).expect("note should be removed");
        assert_eq!(removed.folder_id, None);
        assert_eq!(folder.note_count(), 0);
        assert!(folder.remove_note(id).is_none());
    }
}
