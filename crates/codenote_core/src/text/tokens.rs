//! Word and sentence tokenization.
//!
//! Words are whitespace-separated runs with leading/trailing punctuation
//! stripped, so `"milk,"` and `"(milk)"` both yield `milk`. Inner punctuation
//! (`don't`, `e-mail`) is preserved.

use crate::text::stop_words::StopWords;
use once_cell::sync::Lazy;
use regex::Regex;

/// Shortest word length that can carry meaning for titles and keywords.
pub const MIN_MEANINGFUL_CHARS: usize = 3;

static SENTENCE_END_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[.!?]+").expect("valid sentence regex"));
static TITLE_SENTENCE_END_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[.!?\n]+").expect("valid title sentence regex"));

/// Splits text into punctuation-trimmed words.
pub fn words(text: &str) -> impl Iterator<Item = &str> {
    text.split_whitespace()
        .map(|raw| raw.trim_matches(|c: char| !c.is_alphanumeric()))
        .filter(|word| !word.is_empty())
}

/// Whether a word survives length and stop-word filtering.
pub fn is_meaningful(word: &str, stop_words: &StopWords) -> bool {
    word.chars().count() >= MIN_MEANINGFUL_CHARS && !stop_words.contains(word)
}

/// Words that survive filtering, in input order.
pub fn meaningful_words<'a>(
    text: &'a str,
    stop_words: &'a StopWords,
) -> impl Iterator<Item = &'a str> + 'a {
    words(text).filter(move |word| is_meaningful(word, stop_words))
}

/// Trimmed, non-empty sentences split on `.`, `!` and `?`.
pub fn sentences(text: &str) -> Vec<&str> {
    SENTENCE_END_RE
        .split(text)
        .map(str::trim)
        .filter(|sentence| !sentence.is_empty())
        .collect()
}

/// First non-empty sentence, where line breaks also end a sentence.
pub fn first_sentence(text: &str) -> &str {
    TITLE_SENTENCE_END_RE
        .split(text)
        .map(str::trim)
        .find(|sentence| !sentence.is_empty())
        .unwrap_or("")
}

/// Lowercases a word and uppercases its first character.
pub fn capitalize(word: &str) -> String {
    let lower = word.to_lowercase();
    let mut chars = lower.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Char length of `words` joined by single spaces.
pub fn joined_len(words: &[&str]) -> usize {
    let chars: usize = words.iter().map(|word| word.chars().count()).sum();
    chars + words.len().saturating_sub(1)
}
