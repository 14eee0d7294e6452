//! Heuristic title and summary extraction.
//!
//! # Responsibility
//! - Produce a short title from the leading meaningful words of a note.
//! - Produce a length-bounded summary from sentences or keywords.
//!
//! # Invariants
//! - Extraction never fails and performs no I/O; an empty string means
//!   "nothing usable" and is resolved by the caller.
//! - Titles have at least two words or are empty.
//! - Summaries never exceed `hard_cap` chars plus the ellipsis marker.

use crate::config::{DerivationProfile, SummaryMode, TitleMode};
use crate::text::stop_words::StopWords;
use crate::text::tokens::{capitalize, first_sentence, joined_len, meaningful_words, sentences};
use crate::text::truncate::{truncate_at_word_boundary, ELLIPSIS};

const MIN_TITLE_WORDS: usize = 2;
const MIN_SENTENCE_CHARS: usize = 10;
const KEYWORD_ELLIPSIS_AFTER_CHARS: usize = 20;

/// Stateless extractor bound to one profile's settings.
#[derive(Debug, Clone)]
pub struct TextExtractor {
    stop_words: &'static StopWords,
    title_mode: TitleMode,
    title_max_words: usize,
    summary_threshold: usize,
    summary_mode: SummaryMode,
    short_passthrough: usize,
    keyword_count: usize,
    band_min: usize,
    band_max: usize,
    hard_cap: usize,
}

impl TextExtractor {
    pub fn new(profile: &DerivationProfile) -> Self {
        Self {
            stop_words: StopWords::for_locale(profile.locale),
            title_mode: profile.title_mode,
            title_max_words: profile.title_max_words,
            summary_threshold: profile.summary_threshold,
            summary_mode: profile.summary_mode,
            short_passthrough: profile.short_summary_passthrough,
            keyword_count: profile.keyword_count,
            band_min: profile.band_min,
            band_max: profile.band_max,
            hard_cap: profile.extract_hard_cap,
        }
    }

    pub fn stop_words(&self) -> &'static StopWords {
        self.stop_words
    }

    /// Builds a capitalized title, or `""` when fewer than two meaningful
    /// words are available.
    pub fn extract_title(&self, text: &str) -> String {
        let source = match self.title_mode {
            TitleMode::FirstSentence => first_sentence(text),
            TitleMode::LeadingWords => text,
        };
        let words: Vec<String> = meaningful_words(source, self.stop_words)
            .take(self.title_max_words)
            .map(capitalize)
            .collect();
        if words.len() < MIN_TITLE_WORDS {
            return String::new();
        }
        words.join(" ")
    }

    /// Builds a summary, or `""` for text at or below the threshold.
    ///
    /// The threshold counts every char of `text`, surrounding whitespace
    /// included; blank text never yields a summary.
    pub fn extract_summary(&self, text: &str) -> String {
        let trimmed = text.trim();
        if text.chars().count() <= self.summary_threshold || trimmed.is_empty() {
            return String::new();
        }
        let joined = match self.summary_mode {
            SummaryMode::Sentences => self.sentence_summary(trimmed),
            SummaryMode::Keywords => self.keyword_summary(trimmed),
        };
        truncate_at_word_boundary(&joined, self.hard_cap)
    }

    fn sentence_summary(&self, text: &str) -> String {
        if text.chars().count() <= self.short_passthrough {
            return text.to_string();
        }
        let candidates: Vec<&str> = sentences(text)
            .into_iter()
            .filter(|sentence| sentence.chars().count() > MIN_SENTENCE_CHARS)
            .collect();
        let Some(first) = candidates.first() else {
            return String::new();
        };

        let mut parts = vec![*first];
        if candidates.len() > 2 {
            parts.push(candidates[candidates.len() / 2]);
        }
        let joined = join_sentences(&parts);
        if joined.chars().count() > self.band_max && parts.len() > 1 {
            return join_sentences(&parts[..1]);
        }
        joined
    }

    fn keyword_summary(&self, text: &str) -> String {
        let keywords: Vec<&str> = meaningful_words(text, self.stop_words).collect();
        if keywords.is_empty() {
            return String::new();
        }

        // Shrink while above the band, grow while below it without overshooting.
        let mut count = self.keyword_count.min(keywords.len());
        loop {
            let len = joined_len(&keywords[..count]);
            if len > self.band_max && count > 1 {
                count -= 1;
            } else if len < self.band_min
                && count < keywords.len()
                && joined_len(&keywords[..=count]) <= self.band_max
            {
                count += 1;
            } else {
                break;
            }
        }

        let mut joined = keywords[..count].join(" ");
        if joined.chars().count() > KEYWORD_ELLIPSIS_AFTER_CHARS {
            joined.push_str(ELLIPSIS);
        }
        joined
    }
}

/// Joins with `". "`; the closing period is added only between two or more
/// sentences, so a lone sentence keeps its original ending.
fn join_sentences(parts: &[&str]) -> String {
    let joined = parts.join(". ");
    if parts.len() > 1 {
        format!("{joined}.")
    } else {
        joined
    }
}
