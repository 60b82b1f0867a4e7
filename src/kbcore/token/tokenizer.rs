use super::stopwords::is_stopword;
use once_cell::sync::Lazy;
use rust_stemmers::{Algorithm, Stemmer};
use serde::{Deserialize, Serialize};
use unicode_segmentation::UnicodeSegmentation;
use whatlang::Script;

static EN_STEMMER: Lazy<Stemmer> = Lazy::new(|| Stemmer::create(Algorithm::English));
static RU_STEMMER: Lazy<Stemmer> = Lazy::new(|| Stemmer::create(Algorithm::Russian));

/// Tokens shorter than this (in chars) carry no signal for ranking.
const MIN_TOKEN_CHARS: usize = 2;

/// How much linguistic normalization the deployment can afford.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum NormalizationTier {
    /// Lowercased raw tokens.
    #[default]
    Light,
    /// Stop-word removal and stemming on top of `Light`.
    Full,
}

#[derive(Debug, Clone)]
pub struct Segmentator {
    tier: NormalizationTier,
}

impl Segmentator {
    pub fn new(tier: NormalizationTier) -> Self {
        Segmentator { tier }
    }

    pub fn get_tier(&self) -> NormalizationTier {
        self.tier
    }

    /// Lowercase and blank out punctuation.
    pub fn normalize(&self, text: &str) -> String {
        text.to_lowercase()
            .chars()
            .map(|c| {
                if c.is_alphanumeric() || c == '_' || c.is_whitespace() {
                    c
                } else {
                    ' '
                }
            })
            .collect()
    }

    pub fn parse_tokens(&self, text: &str) -> Vec<String> {
        let words = text
            .unicode_words()
            .filter(|w| w.chars().count() >= MIN_TOKEN_CHARS);
        match self.tier {
            NormalizationTier::Light => words.map(str::to_owned).collect(),
            NormalizationTier::Full => words
                .filter(|w| !is_stopword(w))
                .filter(|w| w.chars().all(char::is_alphabetic))
                .map(stem)
                .collect(),
        }
    }

    pub fn tokenize(&self, text: &str) -> Vec<String> {
        self.parse_tokens(&self.normalize(text))
    }
}

// Pick the stemmer from the token's own script, never from the surrounding
// text, so a query word stems exactly like the same word in a document.
fn stem(word: &str) -> String {
    match whatlang::detect_script(word) {
        Some(Script::Cyrillic) => RU_STEMMER.stem(word).into_owned(),
        _ => EN_STEMMER.stem(word).into_owned(),
    }
}
