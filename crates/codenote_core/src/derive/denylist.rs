//! Refusal/non-answer detection for model responses.

/// Phrases that mark a model response as a refusal or a request for input.
pub const DEFAULT_REFUSAL_PHRASES: &[&str] = &[
    "I'm sorry, but I can't",
    "I cannot provide",
    "Could you please provide",
    "without the actual content",
    "I don't have access",
    "I'm unable to create",
    "I can't view or process",
    "I cannot fulfill that request",
    "I can't assist with that",
    "if you provide the text content",
    "However, if you provide",
    "I can't process text from",
    "I cannot assist with",
    "visual content",
    "modify visual content",
    "text-based summaries",
    "Please provide the note content",
];

/// Case-insensitive substring denylist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Denylist {
    phrases: Vec<String>,
}

impl Default for Denylist {
    fn default() -> Self {
        Self::new(DEFAULT_REFUSAL_PHRASES)
    }
}

impl Denylist {
    /// Builds a denylist; blank phrases are ignored.
    pub fn new<I, S>(phrases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            phrases: phrases
                .into_iter()
                .map(|phrase| phrase.as_ref().trim().to_lowercase())
                .filter(|phrase| !phrase.is_empty())
                .collect(),
        }
    }

    /// Returns the first (lowercased) phrase contained in `response`.
    pub fn find(&self, response: &str) -> Option<&str> {
        let normalized = normalize_apostrophes(&response.to_lowercase());
        self.phrases
            .iter()
            .find(|phrase| normalized.contains(normalize_apostrophes(phrase).as_str()))
            .map(String::as_str)
    }

    pub fn is_refusal(&self, response: &str) -> bool {
        self.find(response).is_some()
    }

    pub fn len(&self) -> usize {
        self.phrases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.phrases.is_empty()
    }
}

// Models frequently emit typographic apostrophes.
fn normalize_apostrophes(value: &str) -> String {
    value.replace('\u{2019}', "'")
}
