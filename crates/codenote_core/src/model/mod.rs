//! Note-taking domain model.
//!
//! # Responsibility
//! - Define notes, folders and note tag metadata.
//! - Keep derived title/summary fields next to the content they describe.
//!
//! # Invariants
//! - Every note and folder is identified by a stable UUID.
//! - A folder owns its notes; removing the folder drops them.
//! - Timestamps are Unix epoch milliseconds.

pub mod folder;
pub mod note;
pub mod tags;

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::{SystemTime, UNIX_EPOCH};

/// Current wall-clock time in Unix epoch milliseconds.
pub fn now_epoch_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| i64::try_from(elapsed.as_millis()).unwrap_or(i64::MAX))
        .unwrap_or(0)
}

/// Domain validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    EmptyFolderName,
    UnknownPriority(String),
    UnknownStatus(String),
    UnknownKind(String),
}

impl Display for ModelError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyFolderName => write!(f, "folder name must not be blank"),
            Self::UnknownPriority(value) => write!(f, "unknown priority: `{value}`"),
            Self::UnknownStatus(value) => write!(f, "unknown status: `{value}`"),
            Self::UnknownKind(value) => write!(f, "unknown note type: `{value}`"),
        }
    }
}

impl Error for ModelError {}
