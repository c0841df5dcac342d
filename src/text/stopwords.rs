// Stop-word set: common low-information words excluded before analysis.
//
// The default list is NLTK's English stop words, served by the `stop-words`
// crate with its `nltk` feature. The set is built once and shared read-only
// by every scoring call.

use std::collections::HashSet;

use stop_words::{get, LANGUAGE};

/// Immutable set of lower-case stop words.
#[derive(Debug, Clone)]
pub struct StopWordSet {
    words: HashSet<String>,
}

impl StopWordSet {
    /// NLTK English stop words.
    pub fn english() -> Self {
        Self::from_words(get(LANGUAGE::English).iter().map(|w| w.to_string()))
    }

    /// Build a set from arbitrary words. Entries are lower-cased and trimmed.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();
        Self { words }
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Default for StopWordSet {
    fn default() -> Self {
        Self::english()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_english_contains_common_words() {
        let set = StopWordSet::english();
        for word in ["the", "and", "on", "is", "a", "of"] {
            assert!(set.contains(word), "{word} should be a stop word");
        }
    }

    #[test]
    fn test_english_keeps_topic_words() {
        let set = StopWordSet::english();
        for word in ["technology", "education", "students", "digital"] {
            assert!(!set.contains(word), "{word} should not be a stop word");
        }
    }

    #[test]
    fn test_from_words_lowercases_and_drops_blanks() {
        let set = StopWordSet::from_words(["The", "  AND ", ""]);
        assert_eq!(set.len(), 2);
        assert!(set.contains("the"));
        assert!(set.contains("and"));
    }
}
