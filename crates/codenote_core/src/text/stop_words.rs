//! Static stop-word lists per locale.

use crate::config::Locale;
use once_cell::sync::Lazy;
use std::collections::HashSet;

const ENGLISH_STOP_WORDS: &[&str] = &[
    "a", "about", "after", "all", "also", "am", "an", "and", "any", "are", "as", "at", "be",
    "been", "before", "being", "but", "by", "can", "could", "did", "do", "does", "for", "from",
    "had", "has", "have", "he", "her", "him", "his", "how", "i", "if", "in", "into", "is", "it",
    "its", "just", "may", "me", "might", "my", "no", "not", "of", "on", "or", "our", "she",
    "should", "so", "than", "that", "the", "their", "them", "then", "there", "these", "they",
    "this", "those", "to", "too", "us", "very", "was", "we", "were", "what", "when", "where",
    "which", "who", "why", "will", "with", "would", "you", "your",
];

const POLISH_STOP_WORDS: &[&str] = &[
    "a", "aby", "ale", "bez", "bo", "być", "był", "była", "było", "by", "co", "czy", "dla", "do",
    "gdy", "i", "ich", "ja", "jak", "jako", "jej", "jego", "jest", "jeszcze", "już", "kiedy",
    "która", "które", "który", "którzy", "lub", "mi", "mnie", "może", "my", "na", "nad", "nie",
    "o", "od", "on", "ona", "one", "oni", "ono", "oraz", "po", "pod", "przez", "przy", "się",
    "sobie", "są", "tak", "także", "tam", "te", "tego", "tej", "ten", "też", "to", "tu", "tutaj",
    "ty", "tylko", "tym", "u", "w", "we", "więc", "wy", "z", "za", "ze", "że", "żeby",
];

static ENGLISH: Lazy<StopWords> = Lazy::new(|| StopWords::new(ENGLISH_STOP_WORDS));
static POLISH: Lazy<StopWords> = Lazy::new(|| StopWords::new(POLISH_STOP_WORDS));

/// Lowercase stop-word set for one locale.
#[derive(Debug)]
pub struct StopWords {
    words: HashSet<&'static str>,
}

impl StopWords {
    fn new(words: &'static [&'static str]) -> Self {
        Self {
            words: words.iter().copied().collect(),
        }
    }

    /// Returns the shared list for `locale`.
    pub fn for_locale(locale: Locale) -> &'static StopWords {
        match locale {
            Locale::English => Lazy::force(&ENGLISH),
            Locale::Polish => Lazy::force(&POLISH),
        }
    }

    /// Case-insensitive membership check.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word.to_lowercase().as_str())
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
