//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose title/summary derivation and note helpers to Dart via FRB.
//! - Let the host pass its on-device model answer in for validation.
//!
//! # Invariants
//! - Exported functions must not panic across FFI boundary.
//! - Return values are UTF-8 strings with stable meaning.
//! - The derivation profile is resolved once per process.

use codenote_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, parse_locale,
    ping as ping_inner, preview_text, DerivationProfile, HostResponse, Locale,
    TitleSummaryGenerator,
};
use log::warn;
use std::sync::{Arc, OnceLock};

const LOCALE_ENV: &str = "CODENOTE_LOCALE";
const PROFILE_JSON_ENV: &str = "CODENOTE_PROFILE_JSON";
static ACTIVE_PROFILE: OnceLock<DerivationProfile> = OnceLock::new();

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Sync call; may perform small file-system setup work.
/// - Safe to call repeatedly with the same `level + log_dir` (idempotent).
/// - Never panics; returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// Title and summary pair returned to Dart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteFieldsResponse {
    pub title: String,
    pub summary: String,
}

/// Derives a note title.
///
/// `model_response` is the raw answer of the platform model to the title
/// prompt, or `None` when no model ran.
///
/// # FFI contract
/// - Async call; completes without waiting on any model itself.
/// - Never empty: falls back to heuristics, then to the placeholder.
pub async fn derive_note_title(content: String, model_response: Option<String>) -> String {
    generator_for(model_response).derive_title(&content).await
}

/// Derives a note summary.
///
/// # FFI contract
/// - Async call; completes without waiting on any model itself.
/// - Returns empty string for content at or below the summary threshold.
pub async fn derive_note_summary(content: String, model_response: Option<String>) -> String {
    generator_for(model_response).derive_summary(&content).await
}

/// Heuristic-only title and summary for synchronous UI paths.
///
/// # FFI contract
/// - Sync call, pure computation over `content`.
#[flutter_rust_bridge::frb(sync)]
pub fn derive_note_fields_offline(content: String) -> NoteFieldsResponse {
    let fields = TitleSummaryGenerator::offline(active_profile().clone()).fallback_fields(&content);
    NoteFieldsResponse {
        title: fields.title,
        summary: fields.summary,
    }
}

/// List-row preview of note content.
#[flutter_rust_bridge::frb(sync)]
pub fn note_preview(content: String) -> String {
    preview_text(&content)
}

/// Locale codes accepted by `CODENOTE_LOCALE`.
#[flutter_rust_bridge::frb(sync)]
pub fn supported_locales() -> Vec<String> {
    Locale::all()
        .iter()
        .map(|locale| locale.as_str().to_string())
        .collect()
}

/// Locale code of the active derivation profile.
#[flutter_rust_bridge::frb(sync)]
pub fn active_locale() -> String {
    active_profile().locale.as_str().to_string()
}

fn generator_for(model_response: Option<String>) -> TitleSummaryGenerator {
    TitleSummaryGenerator::new(
        Arc::new(HostResponse::new(model_response)),
        active_profile().clone(),
    )
}

fn active_profile() -> &'static DerivationProfile {
    ACTIVE_PROFILE.get_or_init(|| {
        resolve_profile(
            std::env::var(PROFILE_JSON_ENV).ok().as_deref(),
            std::env::var(LOCALE_ENV).ok().as_deref(),
        )
    })
}

fn resolve_profile(profile_json: Option<&str>, locale: Option<&str>) -> DerivationProfile {
    if let Some(raw) = profile_json.map(str::trim).filter(|raw| !raw.is_empty()) {
        match DerivationProfile::from_json(raw) {
            Ok(profile) => return profile,
            Err(err) => warn!(
                "event=profile_resolve module=ffi status=fallback source=json error={}",
                err
            ),
        }
    }
    if let Some(code) = locale.map(str::trim).filter(|code| !code.is_empty()) {
        match parse_locale(code) {
            Ok(locale) => return DerivationProfile::baseline(locale),
            Err(err) => warn!(
                "event=profile_resolve module=ffi status=fallback source=locale error={}",
                err
            ),
        }
    }
    DerivationProfile::default()
}

#[cfg(test)]
mod tests {
    use super::{
        core_version, derive_note_fields_offline, derive_note_summary, derive_note_title,
        init_logging, note_preview, ping, resolve_profile, supported_locales,
    };
    use codenote_core::Locale;

    const ERRANDS: &str = "Buy milk, walk the dog, and finish the quarterly report before Friday.";

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }

    #[test]
    fn init_logging_rejects_empty_log_dir() {
        let error = init_logging("info".to_string(), String::new());
        assert!(!error.is_empty());
    }

    #[test]
    fn init_logging_rejects_unsupported_level() {
        let error = init_logging("verbose".to_string(), "tmp/logs".to_string());
        assert!(!error.is_empty());
    }

    #[tokio::test]
    async fn derive_note_title_uses_valid_host_answer() {
        let title =
            derive_note_title(ERRANDS.to_string(), Some("Errands Before Friday".to_string()))
                .await;
        assert_eq!(title, "Errands Before Friday");
    }

    #[tokio::test]
    async fn derive_note_title_falls_back_without_model() {
        assert!(!derive_note_title(ERRANDS.to_string(), None).await.is_empty());
        assert!(!derive_note_title(String::new(), None).await.is_empty());
    }

    #[tokio::test]
    async fn derive_note_summary_rejects_refusal_answer() {
        let refusal = "I cannot provide a summary without the actual content";
        let summary = derive_note_summary(ERRANDS.to_string(), Some(refusal.to_string())).await;
        assert!(!summary.is_empty());
        assert_ne!(summary, refusal);
    }

    #[tokio::test]
    async fn derive_note_summary_is_empty_for_short_content() {
        assert_eq!(derive_note_summary("tiny".to_string(), None).await, "");
    }

    #[test]
    fn offline_fields_match_async_fallback_contract() {
        let fields = derive_note_fields_offline(String::new());
        assert!(!fields.title.is_empty());
        assert!(fields.summary.is_empty());
    }

    #[test]
    fn note_preview_caps_long_content() {
        let preview = note_preview("x".repeat(150));
        assert_eq!(preview.len(), 103);
        assert!(preview.ends_with("..."));
    }

    #[test]
    fn supported_locales_lists_codes() {
        assert_eq!(supported_locales(), vec!["en".to_string(), "pl".to_string()]);
    }

    #[test]
    fn resolve_profile_prefers_json_then_locale_then_default() {
        let from_json = resolve_profile(Some(r#"{"locale": "pl"}"#), Some("en"));
        assert_eq!(from_json.locale, Locale::Polish);

        let from_locale = resolve_profile(Some("not json"), Some("PL"));
        assert_eq!(from_locale.placeholder_title, "Nowa notatka");

        let fallback = resolve_profile(None, Some("klingon"));
        assert_eq!(fallback.locale, Locale::English);
    }
}
