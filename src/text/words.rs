// Unicode word tokenizer.
//
// Uses UAX #29 word boundaries from `unicode-segmentation`. Runs of
// punctuation and whitespace are boundaries, never tokens, and letters or
// digits from any script are kept intact. Words joined by a single hyphen
// with no space ("e-learning", "high-tech") stay one token.

use anyhow::Result;
use unicode_segmentation::UnicodeSegmentation;

use super::traits::WordTokenizer;

/// Default word tokenizer backed by Unicode word segmentation.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnicodeWordTokenizer;

impl WordTokenizer for UnicodeWordTokenizer {
    fn tokenize(&self, text: &str) -> Result<Vec<String>> {
        let mut tokens = Vec::new();
        let mut current: Option<String> = None;
        let mut segments = text.split_word_bounds().peekable();

        while let Some(segment) = segments.next() {
            if is_word(segment) {
                match current.as_mut() {
                    Some(token) if token.ends_with('-') => token.push_str(segment),
                    _ => {
                        tokens.extend(current.take());
                        current = Some(segment.to_string());
                    }
                }
            } else if segment == "-"
                && current.as_ref().is_some_and(|t| !t.ends_with('-'))
                && segments.peek().is_some_and(|next| is_word(next))
            {
                if let Some(token) = current.as_mut() {
                    token.push('-');
                }
            } else {
                tokens.extend(current.take());
            }
        }
        tokens.extend(current);

        Ok(tokens)
    }
}

/// A word segment holds at least one letter or digit.
fn is_word(segment: &str) -> bool {
    segment.chars().any(char::is_alphanumeric)
}

/// Count whitespace-separated words, the raw word count used by the
/// structure and vocabulary formulas.
pub fn whitespace_word_count(text: &str) -> usize {
    text.split_whitespace().count()
}
