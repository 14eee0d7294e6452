//! Derivation profile configuration.
//!
//! # Responsibility
//! - Hold every threshold, cap and locale choice used by title/summary
//!   derivation as explicit data instead of literals scattered in code.
//! - Load caller overrides from JSON on top of a locale baseline.
//!
//! # Invariants
//! - A profile returned by any constructor in this module passes `validate()`.
//! - `band_min <= band_max`, all caps and the model timeout are non-zero.
//! - Locale strings are matched case-insensitively after trimming.

use crate::derive::denylist::DEFAULT_REFUSAL_PHRASES;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::Duration;

const DEFAULT_MODEL_TIMEOUT_MS: u64 = 10_000;
const DEFAULT_TITLE_MAX_WORDS: usize = 3;
const DEFAULT_TITLE_MAX_WORDS_MODEL: usize = 5;
const DEFAULT_KEYWORD_COUNT: usize = 18;
const DEFAULT_BAND_MIN: usize = 120;
const DEFAULT_BAND_MAX: usize = 210;
const DEFAULT_HARD_CAP: usize = 180;
const KEYWORD_SUMMARY_THRESHOLD: usize = 50;
const SENTENCE_SUMMARY_THRESHOLD: usize = 10;
const SENTENCE_SHORT_PASSTHROUGH: usize = 100;

/// Language profile for stop words, placeholder text and prompt wording.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Locale {
    #[serde(rename = "en", alias = "english")]
    English,
    #[serde(rename = "pl", alias = "polish")]
    Polish,
}

impl Locale {
    /// Short stable code used in configuration and FFI.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::English => "en",
            Self::Polish => "pl",
        }
    }

    /// English name of the language, used in model prompts.
    pub fn language_name(self) -> &'static str {
        match self {
            Self::English => "English",
            Self::Polish => "Polish",
        }
    }

    /// Title used when nothing better can be derived.
    pub fn placeholder_title(self) -> &'static str {
        match self {
            Self::English => "New Note",
            Self::Polish => "Nowa notatka",
        }
    }

    pub fn all() -> &'static [Locale] {
        &[Self::English, Self::Polish]
    }
}

impl Display for Locale {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parses a locale code (`en|english|pl|polish`, case-insensitive).
pub fn parse_locale(value: &str) -> Result<Locale, ProfileError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "en" | "en-us" | "en-gb" | "english" => Ok(Locale::English),
        "pl" | "pl-pl" | "polish" => Ok(Locale::Polish),
        other => Err(ProfileError::UnsupportedLocale(other.to_string())),
    }
}

/// How the heuristic extractor picks title words.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TitleMode {
    /// Meaningful words from the first sentence only.
    FirstSentence,
    /// Meaningful words from the whole text.
    LeadingWords,
}

/// How the heuristic extractor builds a summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SummaryMode {
    /// First sentence plus the middle sentence.
    Sentences,
    /// Stop-word filtered keyword run sized toward the target band.
    Keywords,
}

/// Complete configuration for one derivation pipeline instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DerivationProfile {
    pub locale: Locale,
    pub placeholder_title: String,
    /// Content at or below this many chars gets no summary.
    pub summary_threshold: usize,
    pub title_mode: TitleMode,
    /// Upper bound on heuristic title words.
    pub title_max_words: usize,
    /// Upper bound on words kept from a model-produced title.
    pub title_max_words_model: usize,
    pub summary_mode: SummaryMode,
    /// Sentence mode returns trimmed content of at most this many chars
    /// unchanged. `0` disables the pass-through.
    #[serde(default)]
    pub short_summary_passthrough: usize,
    /// Initial keyword count before band adjustment.
    pub keyword_count: usize,
    pub band_min: usize,
    pub band_max: usize,
    /// Hard cap applied inside the extractor.
    pub extract_hard_cap: usize,
    /// Hard cap applied to the final summary, model or fallback.
    pub summary_hard_cap: usize,
    pub model_timeout_ms: u64,
    /// Case-insensitive refusal phrases that reject a model response.
    pub denylist: Vec<String>,
}

impl Default for DerivationProfile {
    fn default() -> Self {
        Self::for_locale(Locale::English)
    }
}

impl DerivationProfile {
    /// Canonical keyword-mode profile for a locale.
    pub fn for_locale(locale: Locale) -> Self {
        Self {
            locale,
            placeholder_title: locale.placeholder_title().to_string(),
            summary_threshold: KEYWORD_SUMMARY_THRESHOLD,
            title_mode: TitleMode::FirstSentence,
            title_max_words: DEFAULT_TITLE_MAX_WORDS,
            title_max_words_model: DEFAULT_TITLE_MAX_WORDS_MODEL,
            summary_mode: SummaryMode::Keywords,
            short_summary_passthrough: 0,
            keyword_count: DEFAULT_KEYWORD_COUNT,
            band_min: DEFAULT_BAND_MIN,
            band_max: DEFAULT_BAND_MAX,
            extract_hard_cap: DEFAULT_HARD_CAP,
            summary_hard_cap: DEFAULT_HARD_CAP,
            model_timeout_ms: DEFAULT_MODEL_TIMEOUT_MS,
            denylist: DEFAULT_REFUSAL_PHRASES
                .iter()
                .map(|phrase| (*phrase).to_string())
                .collect(),
        }
    }

    /// English sentence-mode variant with the short summary threshold.
    pub fn english_sentences() -> Self {
        Self {
            summary_threshold: SENTENCE_SUMMARY_THRESHOLD,
            summary_mode: SummaryMode::Sentences,
            short_summary_passthrough: SENTENCE_SHORT_PASSTHROUGH,
            ..Self::for_locale(Locale::English)
        }
    }

    /// Polish keyword-mode variant.
    pub fn polish() -> Self {
        Self {
            title_mode: TitleMode::LeadingWords,
            title_max_words: 4,
            keyword_count: 20,
            ..Self::for_locale(Locale::Polish)
        }
    }

    /// Shipped profile for a locale: `polish()` for Polish, `for_locale` otherwise.
    pub fn baseline(locale: Locale) -> Self {
        match locale {
            Locale::Polish => Self::polish(),
            other => Self::for_locale(other),
        }
    }

    /// Builds a profile from a JSON document.
    ///
    /// The document may name a `locale`; every other field is optional and
    /// overrides the locale baseline. Unknown fields are rejected.
    ///
    /// # Errors
    /// - `InvalidProfile` when JSON is malformed or the result fails
    ///   `validate()`.
    /// - `UnsupportedLocale` when `locale` is not recognized.
    pub fn from_json(raw: &str) -> Result<Self, ProfileError> {
        let overrides: ProfileOverrides = serde_json::from_str(raw)
            .map_err(|err| ProfileError::InvalidProfile(format!("malformed profile json: {err}")))?;
        let locale = match overrides.locale.as_deref() {
            Some(value) => parse_locale(value)?,
            None => Locale::English,
        };
        let profile = overrides.apply(Self::baseline(locale));
        profile.validate()?;
        Ok(profile)
    }

    pub fn model_timeout(&self) -> Duration {
        Duration::from_millis(self.model_timeout_ms)
    }

    /// Checks internal consistency.
    ///
    /// # Errors
    /// Returns `InvalidProfile` naming the first violated constraint.
    pub fn validate(&self) -> Result<(), ProfileError> {
        if self.placeholder_title.trim().is_empty() {
            return Err(invalid("placeholder_title must not be blank"));
        }
        if self.title_max_words < 2 {
            return Err(invalid("title_max_words must be at least 2"));
        }
        if self.title_max_words_model == 0 {
            return Err(invalid("title_max_words_model must be positive"));
        }
        if self.keyword_count == 0 {
            return Err(invalid("keyword_count must be positive"));
        }
        if self.band_min > self.band_max {
            return Err(ProfileError::InvalidProfile(format!(
                "band_min ({}) must not exceed band_max ({})",
                self.band_min, self.band_max
            )));
        }
        if self.extract_hard_cap == 0 || self.summary_hard_cap == 0 {
            return Err(invalid("hard caps must be positive"));
        }
        if self.short_summary_passthrough > self.extract_hard_cap {
            return Err(invalid(
                "short_summary_passthrough must not exceed extract_hard_cap",
            ));
        }
        if self.model_timeout_ms == 0 {
            return Err(invalid("model_timeout_ms must be positive"));
        }
        Ok(())
    }
}

fn invalid(message: &str) -> ProfileError {
    ProfileError::InvalidProfile(message.to_string())
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ProfileOverrides {
    locale: Option<String>,
    placeholder_title: Option<String>,
    summary_threshold: Option<usize>,
    title_mode: Option<TitleMode>,
    title_max_words: Option<usize>,
    title_max_words_model: Option<usize>,
    summary_mode: Option<SummaryMode>,
    short_summary_passthrough: Option<usize>,
    keyword_count: Option<usize>,
    band_min: Option<usize>,
    band_max: Option<usize>,
    extract_hard_cap: Option<usize>,
    summary_hard_cap: Option<usize>,
    model_timeout_ms: Option<u64>,
    denylist: Option<Vec<String>>,
}

impl ProfileOverrides {
    fn apply(self, base: DerivationProfile) -> DerivationProfile {
        DerivationProfile {
            locale: base.locale,
            placeholder_title: self.placeholder_title.unwrap_or(base.placeholder_title),
            summary_threshold: self.summary_threshold.unwrap_or(base.summary_threshold),
            title_mode: self.title_mode.unwrap_or(base.title_mode),
            title_max_words: self.title_max_words.unwrap_or(base.title_max_words),
            title_max_words_model: self
                .title_max_words_model
                .unwrap_or(base.title_max_words_model),
            summary_mode: self.summary_mode.unwrap_or(base.summary_mode),
            short_summary_passthrough: self
                .short_summary_passthrough
                .unwrap_or(base.short_summary_passthrough),
            keyword_count: self.keyword_count.unwrap_or(base.keyword_count),
            band_min: self.band_min.unwrap_or(base.band_min),
            band_max: self.band_max.unwrap_or(base.band_max),
            extract_hard_cap: self.extract_hard_cap.unwrap_or(base.extract_hard_cap),
            summary_hard_cap: self.summary_hard_cap.unwrap_or(base.summary_hard_cap),
            model_timeout_ms: self.model_timeout_ms.unwrap_or(base.model_timeout_ms),
            denylist: self.denylist.unwrap_or(base.denylist),
        }
    }
}

/// Profile configuration errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileError {
    UnsupportedLocale(String),
    InvalidProfile(String),
}

impl Display for ProfileError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnsupportedLocale(value) => {
                write!(f, "unsupported locale `{value}`; expected en|pl")
            }
            Self::InvalidProfile(details) => write!(f, "invalid derivation profile: {details}"),
        }
    }
}

impl Error for ProfileError {}
