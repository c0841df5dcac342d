// Text normalizer: the cleaned form fed to the TF-IDF vectorizer.
//
// Lower-cases, tokenizes on word boundaries, keeps purely alphanumeric
// tokens that are not stop words, and re-joins them with single spaces.

use anyhow::Result;

use super::stopwords::StopWordSet;
use super::traits::WordTokenizer;
use super::words::UnicodeWordTokenizer;

/// Returned when no token survives filtering, so the vectorizer never sees
/// an empty document.
pub const EMPTY_PLACEHOLDER: &str = "empty";

/// Normalizer bound to a stop-word set and a word tokenizer.
pub struct Normalizer {
    stop_words: StopWordSet,
    tokenizer: Box<dyn WordTokenizer>,
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new(StopWordSet::english())
    }
}

impl Normalizer {
    pub fn new(stop_words: StopWordSet) -> Self {
        Self::with_tokenizer(stop_words, Box::new(UnicodeWordTokenizer))
    }

    pub fn with_tokenizer(stop_words: StopWordSet, tokenizer: Box<dyn WordTokenizer>) -> Self {
        Self {
            stop_words,
            tokenizer,
        }
    }

    /// Normalize `text`. Returns [`EMPTY_PLACEHOLDER`] when nothing survives.
    pub fn normalize(&self, text: &str) -> Result<String> {
        let lower = text.to_lowercase();
        let kept: Vec<String> = self
            .tokenizer
            .tokenize(&lower)?
            .into_iter()
            .filter(|t| !t.is_empty() && t.chars().all(char::is_alphanumeric))
            .filter(|t| !self.stop_words.contains(t))
            .collect();

        if kept.is_empty() {
            Ok(EMPTY_PLACEHOLDER.to_string())
        } else {
            Ok(kept.join(" "))
        }
    }
}
