use async_trait::async_trait;
use codenote_core::{
    DerivationError, DerivationProfile, DerivationSource, HostResponse, LanguageModel, Prompt,
    PromptKind, TitleSummaryGenerator, UnavailableModel,
};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

const ERRANDS: &str = "Buy milk, walk the dog, and finish the quarterly report before Friday.";
const REFUSAL: &str = "I cannot provide a summary without the actual content";

/// Replies with a fixed answer per prompt kind and counts calls.
struct ScriptedModel {
    title: Result<String, DerivationError>,
    summary: Result<String, DerivationError>,
    calls: AtomicUsize,
}

impl ScriptedModel {
    fn answering(title: &str, summary: &str) -> Self {
        Self {
            title: Ok(title.to_string()),
            summary: Ok(summary.to_string()),
            calls: AtomicUsize::new(0),
        }
    }

    fn failing(err: DerivationError) -> Self {
        Self {
            title: Err(err.clone()),
            summary: Err(err),
            calls: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl LanguageModel for ScriptedModel {
    async fn respond(&self, prompt: &Prompt) -> Result<String, DerivationError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match prompt.kind() {
            PromptKind::Title => self.title.clone(),
            PromptKind::Summary => self.summary.clone(),
        }
    }
}

/// Never answers.
struct HangingModel;

#[async_trait]
impl LanguageModel for HangingModel {
    async fn respond(&self, _prompt: &Prompt) -> Result<String, DerivationError> {
        std::future::pending().await
    }
}

fn generator_with(model: Arc<dyn LanguageModel>) -> TitleSummaryGenerator {
    TitleSummaryGenerator::new(model, DerivationProfile::default())
}

#[tokio::test]
async fn empty_content_gets_placeholder_title_and_no_summary_without_model_call() {
    let model = Arc::new(ScriptedModel::answering("Should Not Be Used", "unused"));
    let generator = generator_with(model.clone());

    let fields = generator.derive_fields("").await;
    assert_eq!(fields.title, "New Note");
    assert_eq!(fields.summary, "");
    assert_eq!(model.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn content_at_or_below_threshold_gets_empty_summary() {
    let model = Arc::new(ScriptedModel::answering("Short", "A model summary"));
    let generator = generator_with(model.clone());
    let threshold = generator.profile().summary_threshold;

    for len in [1, threshold / 2, threshold] {
        let content = "x".repeat(len);
        let derived = generator.derive_summary_detailed(&content).await;
        assert_eq!(derived.text, "");
        assert_eq!(derived.source, DerivationSource::Skipped);
    }
    assert_eq!(model.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn whitespace_padded_content_above_threshold_gets_summary() {
    let generator = TitleSummaryGenerator::offline(DerivationProfile::default());
    let padded = format!("Quarterly report draft{}", " ".repeat(40));
    assert!(padded.chars().count() > generator.profile().summary_threshold);

    let derived = generator.derive_summary_detailed(&padded).await;
    assert_eq!(derived.text, "Quarterly report draft...");
    assert_eq!(
        derived.source,
        DerivationSource::Fallback(DerivationError::ModelUnavailable)
    );
}

#[tokio::test]
async fn blank_content_above_threshold_is_skipped_without_model_call() {
    let model = Arc::new(ScriptedModel::answering("Unused", "Unused summary"));
    let generator = generator_with(model.clone());

    let derived = generator.derive_summary_detailed(&" ".repeat(80)).await;
    assert_eq!(derived.text, "");
    assert_eq!(derived.source, DerivationSource::Skipped);
    assert_eq!(model.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn valid_model_answers_are_used() {
    let model = Arc::new(ScriptedModel::answering(
        "  \"Errands And Report\"  ",
        "Errands plus the quarterly report due Friday.",
    ));
    let generator = generator_with(model);

    let title = generator.derive_title_detailed(ERRANDS).await;
    assert_eq!(title.text, "Errands And Report");
    assert_eq!(title.source, DerivationSource::Model);

    let summary = generator.derive_summary_detailed(ERRANDS).await;
    assert_eq!(summary.text, "Errands plus the quarterly report due Friday.");
    assert_eq!(summary.source, DerivationSource::Model);
}

#[tokio::test]
async fn refusal_summary_is_replaced_by_heuristic_fallback() {
    let model = Arc::new(ScriptedModel::answering(REFUSAL, REFUSAL));
    let generator = generator_with(model);

    let summary = generator.derive_summary_detailed(ERRANDS).await;
    assert_ne!(summary.text, REFUSAL);
    assert_eq!(
        summary.source,
        DerivationSource::Fallback(DerivationError::ModelRefusalResponse)
    );
    assert_eq!(summary.text, generator.fallback_fields(ERRANDS).summary);

    let title = generator.derive_title_detailed(ERRANDS).await;
    assert_eq!(title.text, "Buy Milk Walk");
    assert_eq!(
        title.source,
        DerivationSource::Fallback(DerivationError::ModelRefusalResponse)
    );
}

#[tokio::test]
async fn blank_model_answer_counts_as_refusal() {
    let model = Arc::new(ScriptedModel::answering("   ", "\n"));
    let generator = generator_with(model);

    let title = generator.derive_title_detailed(ERRANDS).await;
    assert_eq!(
        title.source,
        DerivationSource::Fallback(DerivationError::ModelRefusalResponse)
    );
    assert!(!title.text.is_empty());
}

#[tokio::test]
async fn runtime_errors_fall_back() {
    let model = Arc::new(ScriptedModel::failing(DerivationError::ModelRuntimeError(
        "session crashed".to_string(),
    )));
    let generator = generator_with(model);

    let fields = generator.derive_fields(ERRANDS).await;
    assert_eq!(fields, generator.fallback_fields(ERRANDS));
}

#[tokio::test(start_paused = true)]
async fn hanging_model_times_out_into_fallback() {
    let generator = generator_with(Arc::new(HangingModel));
    let budget = generator.profile().model_timeout();

    let started = tokio::time::Instant::now();
    let title = generator.derive_title_detailed(ERRANDS).await;
    let elapsed = started.elapsed();

    assert_eq!(title.text, "Buy Milk Walk");
    assert_eq!(
        title.source,
        DerivationSource::Fallback(DerivationError::ModelTimeout(budget))
    );
    assert!(elapsed >= budget);
    assert!(elapsed < budget + Duration::from_millis(50));
}

#[tokio::test(start_paused = true)]
async fn title_and_summary_time_out_concurrently() {
    let generator = generator_with(Arc::new(HangingModel));
    let budget = generator.profile().model_timeout();

    let started = tokio::time::Instant::now();
    let fields = generator.derive_fields(ERRANDS).await;

    assert!(started.elapsed() < budget * 2);
    assert_eq!(fields, generator.fallback_fields(ERRANDS));
}

#[tokio::test]
async fn errands_summary_without_model_keeps_only_input_keywords() {
    let generator = generator_with(Arc::new(UnavailableModel));
    let summary = generator.derive_summary(ERRANDS).await;

    assert!(!summary.is_empty());
    assert!(summary.chars().count() <= 210);

    let input_words: Vec<String> = ERRANDS
        .split_whitespace()
        .map(|word| {
            word.trim_matches(|c: char| !c.is_alphanumeric())
                .to_lowercase()
        })
        .collect();
    let stop_words = generator.extractor().stop_words();
    for word in summary.trim_end_matches("...").split_whitespace() {
        let lower = word.to_lowercase();
        assert!(input_words.contains(&lower), "`{word}` is not from the input");
        assert!(!stop_words.contains(&lower), "`{word}` is a stop word");
    }
}

#[tokio::test]
async fn model_summary_is_capped_on_word_boundary() {
    let long_answer = "word ".repeat(60);
    let model = Arc::new(ScriptedModel::answering("Long Notes", &long_answer));
    let generator = generator_with(model);
    let cap = generator.profile().summary_hard_cap;

    let summary = generator.derive_summary(&"content ".repeat(20)).await;
    assert!(summary.ends_with("..."));
    let body = summary.trim_end_matches("...");
    assert!(body.chars().count() <= cap);
    assert!(body.ends_with("word"));
}

#[tokio::test]
async fn model_title_is_capped_to_five_words() {
    let model = Arc::new(ScriptedModel::answering(
        "Quarterly report and weekend errands before Friday",
        "unused",
    ));
    let generator = generator_with(model);

    let title = generator.derive_title(ERRANDS).await;
    assert_eq!(title, "Quarterly report and weekend errands");
}

#[tokio::test]
async fn host_response_is_validated_like_any_model() {
    let accepted = TitleSummaryGenerator::new(
        Arc::new(HostResponse::new(Some("Weekly Errands".to_string()))),
        DerivationProfile::default(),
    );
    assert_eq!(accepted.derive_title(ERRANDS).await, "Weekly Errands");

    let rejected = TitleSummaryGenerator::new(
        Arc::new(HostResponse::new(Some(
            "Please provide the note content.".to_string(),
        ))),
        DerivationProfile::default(),
    );
    assert_eq!(rejected.derive_title(ERRANDS).await, "Buy Milk Walk");
}

#[tokio::test]
async fn polish_profile_uses_polish_placeholder_and_stop_words() {
    let generator = TitleSummaryGenerator::offline(DerivationProfile::polish());

    assert_eq!(generator.derive_title("   ").await, "Nowa notatka");
    assert_eq!(
        generator
            .derive_title("Kupić mleko i chleb oraz zapłacić rachunki")
            .await,
        "Kupić Mleko Chleb Zapłacić"
    );
}

#[tokio::test]
async fn single_word_content_falls_back_to_placeholder_title() {
    let generator = TitleSummaryGenerator::offline(DerivationProfile::default());
    assert_eq!(generator.derive_title("Groceries").await, "New Note");
}
