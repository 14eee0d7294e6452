//! Structured prompts sent to the language model.

use crate::config::Locale;

const TITLE_INSTRUCTIONS: &[&str] = &[
    "Generate a concise title for this note in 2-4 words.",
    "Make it descriptive and professional.",
    "Only return the title, nothing else.",
];

const SUMMARY_INSTRUCTIONS: &[&str] = &[
    "You are summarizing TEXT CONTENT from a note.",
    "This is plain text, not an image or visual content.",
    "Create a brief summary of this note content.",
    "Keep it under 100 characters and focus on key points.",
    "Make it clear and informative.",
    "Only return the summary, nothing else.",
];

/// Which derived field a prompt asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptKind {
    Title,
    Summary,
}

/// Instructions plus the raw note text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    kind: PromptKind,
    instructions: Vec<String>,
    text: String,
}

impl Prompt {
    pub fn title(text: &str, locale: Locale) -> Self {
        Self::build(PromptKind::Title, TITLE_INSTRUCTIONS, text, locale)
    }

    pub fn summary(text: &str, locale: Locale) -> Self {
        Self::build(PromptKind::Summary, SUMMARY_INSTRUCTIONS, text, locale)
    }

    fn build(kind: PromptKind, base: &[&str], text: &str, locale: Locale) -> Self {
        let mut instructions: Vec<String> = base.iter().map(|line| (*line).to_string()).collect();
        if locale != Locale::English {
            instructions.push(format!("Respond in {}.", locale.language_name()));
        }
        Self {
            kind,
            instructions,
            text: text.to_string(),
        }
    }

    pub fn kind(&self) -> PromptKind {
        self.kind
    }

    pub fn instructions(&self) -> &[String] {
        &self.instructions
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Flattens to one string: instruction lines, a blank line, then the text.
    pub fn render(&self) -> String {
        format!("{}\n\n{}", self.instructions.join("\n"), self.text)
    }
}
