// Punctuation-driven sentence splitter.
//
// Scans whitespace-delimited tokens and closes a sentence after a token that
// ends in terminal punctuation. A period does not end a sentence when the
// token is a known abbreviation, a single-letter initial, or a dotted
// acronym. An ellipsis only ends a sentence when the next token starts with
// an uppercase letter.
//
// Unlike UAX #29 sentence boundaries, a lower-case word after a real full
// stop still starts a new sentence. The grammar check depends on seeing
// those sentences.

use std::collections::HashSet;

use anyhow::Result;

use super::traits::SentenceSplitter;

/// Abbreviations that end in a period without ending the sentence.
const ABBREVIATIONS: &[&str] = &[
    "mr", "mrs", "ms", "dr", "prof", "sr", "jr", "st", "mt", "ft", "vs", "etc", "al", "cf",
    "approx", "dept", "est", "fig", "figs", "inc", "ltd", "co", "corp", "no", "nos", "vol",
    "vols", "pp", "ed", "eds", "gen", "gov", "sen", "rep", "rev", "sgt", "capt", "col", "lt",
    "jan", "feb", "mar", "apr", "jun", "jul", "aug", "sep", "sept", "oct", "nov", "dec",
];

/// Characters that may trail terminal punctuation, e.g. `end."` or `(sic.)`.
const CLOSERS: &[char] = &['"', '\'', ')', ']', '}', '\u{201d}', '\u{2019}', '\u{bb}'];

/// Characters that may lead a token, e.g. `("Dr.`.
const OPENERS: &[char] = &['"', '\'', '(', '[', '{', '\u{201c}', '\u{2018}', '\u{ab}'];

/// Default sentence splitter.
#[derive(Debug, Clone)]
pub struct PunctuationSentenceSplitter {
    abbreviations: HashSet<String>,
}

impl Default for PunctuationSentenceSplitter {
    fn default() -> Self {
        Self::with_abbreviations(ABBREVIATIONS.iter().copied())
    }
}

impl PunctuationSentenceSplitter {
    /// Build a splitter with a custom abbreviation list (without trailing
    /// periods, case-insensitive).
    pub fn with_abbreviations<I, S>(abbreviations: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            abbreviations: abbreviations
                .into_iter()
                .map(|a| a.as_ref().trim_end_matches('.').to_lowercase())
                .collect(),
        }
    }

    /// Whether `token` (including its trailing punctuation) closes a sentence,
    /// given the token that follows it.
    fn ends_sentence(&self, token: &str, next: Option<&str>) -> bool {
        let core = token.trim_end_matches(CLOSERS);

        if core.ends_with("...") || core.ends_with('\u{2026}') {
            // Ellipsis: only a boundary before a capitalized word
            return next.is_none_or(starts_uppercase);
        }
        if core.ends_with('!') || core.ends_with('?') {
            return true;
        }
        if let Some(stem) = core.strip_suffix('.') {
            return !self.is_abbreviation(stem);
        }
        false
    }

    fn is_abbreviation(&self, stem: &str) -> bool {
        let stem = stem.trim_start_matches(OPENERS);
        if stem.is_empty() {
            return false;
        }

        let lower = stem.to_lowercase();
        if self.abbreviations.contains(&lower) {
            return true;
        }

        // Single-letter initial: "J. R. R. Tolkien"
        let mut chars = stem.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            return c.is_alphabetic();
        }

        // Dotted acronym: "e.g", "U.S", "Ph.D"
        stem.contains('.') && stem.split('.').all(|part| part.chars().count() <= 2)
    }
}

impl SentenceSplitter for PunctuationSentenceSplitter {
    fn split(&self, text: &str) -> Result<Vec<String>> {
        let tokens = whitespace_tokens(text);
        let mut sentences = Vec::new();
        let mut start: Option<usize> = None;

        for (i, &(tok_start, tok_end)) in tokens.iter().enumerate() {
            let begin = *start.get_or_insert(tok_start);
            let next = tokens.get(i + 1).map(|&(s, e)| &text[s..e]);

            if self.ends_sentence(&text[tok_start..tok_end], next) {
                sentences.push(text[begin..tok_end].trim().to_string());
                start = None;
            }
        }

        if let Some(begin) = start {
            let rest = text[begin..].trim();
            if !rest.is_empty() {
                sentences.push(rest.to_string());
            }
        }

        Ok(sentences)
    }
}

/// Byte ranges of whitespace-delimited tokens, Unicode whitespace aware.
fn whitespace_tokens(text: &str) -> Vec<(usize, usize)> {
    let mut tokens = Vec::new();
    let mut start: Option<usize> = None;

    for (idx, c) in text.char_indices() {
        match (c.is_whitespace(), start) {
            (true, Some(s)) => {
                tokens.push((s, idx));
                start = None;
            }
            (false, None) => start = Some(idx),
            _ => {}
        }
    }
    if let Some(s) = start {
        tokens.push((s, text.len()));
    }

    tokens
}

fn starts_uppercase(token: &str) -> bool {
    token
        .trim_start_matches(OPENERS)
        .chars()
        .next()
        .is_some_and(char::is_uppercase)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn split(text: &str) -> Vec<String> {
        PunctuationSentenceSplitter::default().split(text).unwrap()
    }

    #[test]
    fn test_basic_split() {
        assert_eq!(
            split("Technology improves education. Students learn digitally every day."),
            vec![
                "Technology improves education.",
                "Students learn digitally every day."
            ]
        );
    }

    #[test]
    fn test_lowercase_continuation_is_new_sentence() {
        assert_eq!(
            split("Hello world. this is bad."),
            vec!["Hello world.", "this is bad."]
        );
    }

    #[test]
    fn test_abbreviations_do_not_split() {
        assert_eq!(
            split("Dr. Smith met Mr. Jones at 5 p.m. on Monday. They talked."),
            vec!["Dr. Smith met Mr. Jones at 5 p.m. on Monday.", "They talked."]
        );
    }

    #[test]
    fn test_initials_do_not_split() {
        assert_eq!(
            split("J. R. R. Tolkien wrote books. Many people read them."),
            vec!["J. R. R. Tolkien wrote books.", "Many people read them."]
        );
    }

    #[test]
    fn test_question_exclamation_and_quotes() {
        assert_eq!(
            split("Is it true? \"Yes!\" she said. Fine"),
            vec!["Is it true?", "\"Yes!\"", "she said.", "Fine"]
        );
    }

    #[test]
    fn test_ellipsis_needs_capital_after() {
        assert_eq!(
            split("Wait... then go. Wait... Then go."),
            vec!["Wait... then go.", "Wait...", "Then go."]
        );
    }

    #[test]
    fn test_trailing_text_without_terminator() {
        assert_eq!(split("One. Two"), vec!["One.", "Two"]);
    }

    #[test]
    fn test_empty_and_whitespace() {
        assert!(split("").is_empty());
        assert!(split("  \n\t ").is_empty());
    }

    #[test]
    fn test_decimal_numbers_do_not_split() {
        assert_eq!(split("It costs 3.50 dollars today."), vec!["It costs 3.50 dollars today."]);
    }
}
