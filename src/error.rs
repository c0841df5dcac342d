// Typed errors for the essay scoring pipeline.
//
// Library functions return anyhow::Result like the rest of the crate; these
// variants are wrapped inside it so callers can downcast when they need to
// tell a rejected submission apart from a real failure.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EssayError {
    #[error("essay text is empty")]
    EmptyInput,

    #[error("essay text is still the placeholder prompt")]
    PlaceholderInput,

    #[error("input is not valid UTF-8: {0}")]
    Encoding(String),

    #[error("tokenization failed: {0}")]
    Tokenization(String),
}

impl EssayError {
    /// True for the variants the front end handles with a warning instead
    /// of an error exit.
    pub fn is_rejected_submission(&self) -> bool {
        matches!(self, EssayError::EmptyInput | EssayError::PlaceholderInput)
    }
}
