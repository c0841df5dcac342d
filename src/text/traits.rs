// Segmentation traits: swap-ready abstractions.
//
// The scoring formulas only need word tokens and sentences. Keeping both
// behind traits means the scorer stays testable with any segmenter, and the
// default Unicode-based implementations can be replaced without touching
// the scoring code.

use anyhow::Result;

/// Splits text into word tokens. Every token holds a letter or digit;
/// punctuation on its own is never returned.
pub trait WordTokenizer: Send + Sync {
    fn tokenize(&self, text: &str) -> Result<Vec<String>>;
}

/// Splits text into sentences, in order, each trimmed of surrounding
/// whitespace.
pub trait SentenceSplitter: Send + Sync {
    fn split(&self, text: &str) -> Result<Vec<String>>;
}
