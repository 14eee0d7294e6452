//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `codenote_core` linkage without the Flutter/FFI runtime.
//! - Run the offline title/summary derivation on the given text.
//!
//! Without text a built-in sample note is used, so the output stays
//! deterministic.

use clap::Parser;
use codenote_core::{parse_locale, preview_text, DerivationProfile, Locale, TitleSummaryGenerator};

const SAMPLE_NOTE: &str = "Buy milk, walk the dog, and finish the quarterly report before Friday. \
    The report needs updated revenue charts and a short risk section for the board.";

/// Derive a CodeNote title and summary offline.
#[derive(Parser, Debug)]
#[command(name = "codenote_cli")]
#[command(version, about, long_about = None)]
struct Args {
    /// Derivation locale (en|pl)
    #[arg(long, env = "CODENOTE_LOCALE", value_parser = parse_locale)]
    locale: Option<Locale>,

    /// Note text; words are joined with single spaces
    text: Vec<String>,
}

impl Args {
    fn profile(&self) -> DerivationProfile {
        self.locale
            .map(DerivationProfile::baseline)
            .unwrap_or_default()
    }

    fn content(&self) -> String {
        if self.text.is_empty() {
            SAMPLE_NOTE.to_string()
        } else {
            self.text.join(" ")
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let args = Args::parse();
    let profile = args.profile();
    let content = args.content();

    println!("codenote_core ping={}", codenote_core::ping());
    println!("codenote_core version={}", codenote_core::core_version());
    println!("locale={}", profile.locale);

    let generator = TitleSummaryGenerator::offline(profile);
    let fields = generator.derive_fields(&content).await;
    println!("title={}", fields.title);
    println!("summary={}", fields.summary);
    println!("preview={}", preview_text(&content));
}
