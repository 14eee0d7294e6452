//! Tag-like note metadata: priority, status and type.
//!
//! Parsers accept every spelling the app has shipped with, including the
//! camel-case status labels (`notStart`, `inProgress`) and the spaced ones
//! (`Not Started`, `In Progress`).

use crate::config::Locale;
use crate::model::ModelError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    #[default]
    Low,
    Medium,
    High,
}

impl Priority {
    pub const ALL: [Priority; 3] = [Self::Low, Self::Medium, Self::High];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }

    pub fn parse(value: &str) -> Result<Self, ModelError> {
        match compact(value).as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            _ => Err(ModelError::UnknownPriority(value.trim().to_string())),
        }
    }
}

/// Work status of the note's subject.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    #[default]
    NotStarted,
    InProgress,
    Done,
}

impl Status {
    pub const ALL: [Status; 3] = [Self::NotStarted, Self::InProgress, Self::Done];

    /// Display label for a locale profile.
    ///
    /// The Polish build always showed the compact camel-case labels.
    pub fn label(self, locale: Locale) -> &'static str {
        match (self, locale) {
            (Self::NotStarted, Locale::English) => "Not Started",
            (Self::InProgress, Locale::English) => "In Progress",
            (Self::NotStarted, Locale::Polish) => "notStart",
            (Self::InProgress, Locale::Polish) => "inProgress",
            (Self::Done, _) => "Done",
        }
    }

    pub fn parse(value: &str) -> Result<Self, ModelError> {
        match compact(value).as_str() {
            "notstart" | "notstarted" => Ok(Self::NotStarted),
            "inprogress" => Ok(Self::InProgress),
            "done" => Ok(Self::Done),
            _ => Err(ModelError::UnknownStatus(value.trim().to_string())),
        }
    }
}

/// Note category. Serialized as `type` on the note.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoteKind {
    #[default]
    Feature,
    Bug,
    Improvement,
}

impl NoteKind {
    pub const ALL: [NoteKind; 3] = [Self::Feature, Self::Bug, Self::Improvement];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Feature => "Feature",
            Self::Bug => "Bug",
            Self::Improvement => "Improvement",
        }
    }

    pub fn parse(value: &str) -> Result<Self, ModelError> {
        match compact(value).as_str() {
            "feature" => Ok(Self::Feature),
            "bug" => Ok(Self::Bug),
            "improvement" => Ok(Self::Improvement),
            _ => Err(ModelError::UnknownKind(value.trim().to_string())),
        }
    }
}

fn compact(value: &str) -> String {
    value
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '_' && *c != '-')
        .flat_map(char::to_lowercase)
        .collect()
}
