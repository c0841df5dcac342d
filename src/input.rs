// Submission guard: decides whether raw input may reach the scorer.
//
// The scorer is never called with empty text or with the untouched
// placeholder prompt; the front end shows a warning instead.

use anyhow::Result;

use crate::error::EssayError;

/// Prompt shown in an empty editor. Submitting it unchanged is rejected.
pub const DEFAULT_PLACEHOLDER: &str = "Paste your essay here...";

/// Warning shown when a submission is rejected.
pub const EMPTY_INPUT_WARNING: &str = "Please input some text or words.";

/// Essay text that passed the guard, trimmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    text: String,
}

impl Submission {
    /// Trim `raw` and reject it if empty or equal to `placeholder`.
    pub fn parse(raw: &str, placeholder: &str) -> Result<Self> {
        let text = raw.trim();
        if text.is_empty() {
            return Err(EssayError::EmptyInput.into());
        }
        if text == placeholder.trim() {
            return Err(EssayError::PlaceholderInput.into());
        }
        Ok(Self {
            text: text.to_string(),
        })
    }

    /// Decode raw bytes as UTF-8, then apply [`Submission::parse`].
    pub fn from_bytes(bytes: Vec<u8>, placeholder: &str) -> Result<Self> {
        let raw = String::from_utf8(bytes).map_err(|e| EssayError::Encoding(e.to_string()))?;
        Self::parse(&raw, placeholder)
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}
