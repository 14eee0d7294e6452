//! Title/summary generator.
//!
//! # Responsibility
//! - Run one primary model attempt per derivation under the profile timeout.
//! - Validate the answer against the refusal denylist.
//! - Fall back to the heuristic extractor (or the placeholder) on failure.
//!
//! # Invariants
//! - Blank content yields the placeholder title without any model call.
//! - Content at or below `summary_threshold` chars (whitespace included)
//!   yields an empty summary without any model call; non-blank content above
//!   it always yields a non-empty one.
//! - Summaries never exceed `summary_hard_cap` chars plus the ellipsis.
//! - Log events carry lengths and reasons only, never note text.

use crate::config::DerivationProfile;
use crate::derive::denylist::Denylist;
use crate::derive::error::DerivationError;
use crate::derive::model::{LanguageModel, UnavailableModel};
use crate::derive::prompt::Prompt;
use crate::derive::timeout::with_timeout;
use crate::text::extract::TextExtractor;
use crate::text::truncate::truncate_at_word_boundary;
use log::{debug, info, warn};
use std::sync::Arc;

/// Where a derived string came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DerivationSource {
    /// Validated model output.
    Model,
    /// Heuristic output after the model attempt failed.
    Fallback(DerivationError),
    /// Placeholder title for blank content.
    Placeholder,
    /// Summary skipped because content is at or below the threshold.
    Skipped,
}

impl DerivationSource {
    fn label(&self) -> &'static str {
        match self {
            Self::Model => "model",
            Self::Fallback(_) => "fallback",
            Self::Placeholder => "placeholder",
            Self::Skipped => "skipped",
        }
    }
}

/// One derived string plus its provenance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Derived {
    pub text: String,
    pub source: DerivationSource,
}

/// Title and summary derived from the same content.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DerivedFields {
    pub title: String,
    pub summary: String,
}

/// Derived fields tagged with the content they were computed from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletedDerivation {
    pub source_content: String,
    pub fields: DerivedFields,
}

/// Model-first, heuristic-fallback derivation pipeline.
pub struct TitleSummaryGenerator {
    model: Arc<dyn LanguageModel>,
    profile: DerivationProfile,
    extractor: TextExtractor,
    denylist: Denylist,
}

impl TitleSummaryGenerator {
    pub fn new(model: Arc<dyn LanguageModel>, profile: DerivationProfile) -> Self {
        let extractor = TextExtractor::new(&profile);
        let denylist = Denylist::new(&profile.denylist);
        Self {
            model,
            profile,
            extractor,
            denylist,
        }
    }

    /// Generator that always takes the heuristic path.
    pub fn offline(profile: DerivationProfile) -> Self {
        Self::new(Arc::new(UnavailableModel), profile)
    }

    pub fn profile(&self) -> &DerivationProfile {
        &self.profile
    }

    pub fn extractor(&self) -> &TextExtractor {
        &self.extractor
    }

    pub async fn derive_title(&self, content: &str) -> String {
        self.derive_title_detailed(content).await.text
    }

    pub async fn derive_summary(&self, content: &str) -> String {
        self.derive_summary_detailed(content).await.text
    }

    /// Derives title and summary concurrently.
    pub async fn derive_fields(&self, content: &str) -> DerivedFields {
        let (title, summary) =
            tokio::join!(self.derive_title(content), self.derive_summary(content));
        DerivedFields { title, summary }
    }

    /// Derives a title and reports whether the model or a fallback produced it.
    pub async fn derive_title_detailed(&self, content: &str) -> Derived {
        let content_chars = content.chars().count();
        if content.trim().is_empty() {
            let derived = Derived {
                text: self.profile.placeholder_title.clone(),
                source: DerivationSource::Placeholder,
            };
            log_outcome("derive_title", &derived, content_chars);
            return derived;
        }

        let prompt = Prompt::title(content, self.profile.locale);
        let max_words = self.profile.title_max_words_model;
        let derived = match self
            .attempt_primary(&prompt, |answer| normalize_model_title(answer, max_words))
            .await
        {
            Ok(title) => Derived {
                text: title,
                source: DerivationSource::Model,
            },
            Err(err) => Derived {
                text: self.fallback_title(content),
                source: DerivationSource::Fallback(err),
            },
        };
        log_outcome("derive_title", &derived, content_chars);
        derived
    }

    /// Derives a summary and reports whether the model or a fallback produced it.
    pub async fn derive_summary_detailed(&self, content: &str) -> Derived {
        let content_chars = content.chars().count();
        if !self.summary_required(content) {
            let derived = Derived {
                text: String::new(),
                source: DerivationSource::Skipped,
            };
            log_outcome("derive_summary", &derived, content_chars);
            return derived;
        }

        let prompt = Prompt::summary(content, self.profile.locale);
        let derived = match self.attempt_primary(&prompt, str::to_string).await {
            Ok(summary) => Derived {
                text: truncate_at_word_boundary(&summary, self.profile.summary_hard_cap),
                source: DerivationSource::Model,
            },
            Err(err) => Derived {
                text: self.fallback_summary(content),
                source: DerivationSource::Fallback(err),
            },
        };
        log_outcome("derive_summary", &derived, content_chars);
        derived
    }

    /// Heuristic-only fields for `content`, honoring placeholder and threshold.
    pub fn fallback_fields(&self, content: &str) -> DerivedFields {
        let title = if content.trim().is_empty() {
            self.profile.placeholder_title.clone()
        } else {
            self.fallback_title(content)
        };
        let summary = if self.summary_required(content) {
            self.fallback_summary(content)
        } else {
            String::new()
        };
        DerivedFields { title, summary }
    }

    fn summary_required(&self, content: &str) -> bool {
        content.chars().count() > self.profile.summary_threshold && !content.trim().is_empty()
    }

    fn fallback_title(&self, content: &str) -> String {
        let extracted = self.extractor.extract_title(content);
        if extracted.is_empty() {
            self.profile.placeholder_title.clone()
        } else {
            extracted
        }
    }

    fn fallback_summary(&self, content: &str) -> String {
        let extracted = self.extractor.extract_summary(content);
        let summary = if extracted.is_empty() {
            content.trim().to_string()
        } else {
            extracted
        };
        truncate_at_word_boundary(&summary, self.profile.summary_hard_cap)
    }

    async fn attempt_primary(
        &self,
        prompt: &Prompt,
        normalize: impl Fn(&str) -> String,
    ) -> Result<String, DerivationError> {
        let answer = with_timeout(self.profile.model_timeout(), self.model.respond(prompt)).await?;
        let answer = answer.trim();
        if let Some(phrase) = self.denylist.find(answer) {
            debug!(
                "event=model_response_rejected module=derive status=fallback phrase=\"{}\" response_chars={}",
                phrase,
                answer.chars().count()
            );
            return Err(DerivationError::ModelRefusalResponse);
        }
        let normalized = normalize(answer);
        if normalized.is_empty() {
            return Err(DerivationError::ModelRefusalResponse);
        }
        Ok(normalized)
    }
}

fn normalize_model_title(answer: &str, max_words: usize) -> String {
    let unquoted = answer
        .trim_matches(|c: char| matches!(c, '"' | '\'' | '`' | '“' | '”' | '„' | '«' | '»'))
        .trim()
        .trim_end_matches('.');
    unquoted
        .split_whitespace()
        .take(max_words)
        .collect::<Vec<_>>()
        .join(" ")
}

fn log_outcome(event: &str, derived: &Derived, content_chars: usize) {
    match &derived.source {
        DerivationSource::Fallback(err) => warn!(
            "event={} module=derive status=fallback reason={} content_chars={} output_chars={}",
            event,
            err.reason(),
            content_chars,
            derived.text.chars().count()
        ),
        source => info!(
            "event={} module=derive status=ok source={} content_chars={} output_chars={}",
            event,
            source.label(),
            content_chars,
            derived.text.chars().count()
        ),
    }
}
