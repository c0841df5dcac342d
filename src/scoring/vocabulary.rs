// Vocabulary richness: lexical diversity plus a small length bonus.

use std::collections::HashSet;

use super::report::{round1, SCORE_MAX};

const DIVERSITY_SCALE: f64 = 15.0;
const WORDS_PER_BONUS_POINT: f64 = 150.0;

/// Distinct lower-cased whitespace-separated words. Punctuation stays
/// attached, so "day" and "day." are different words.
pub fn unique_word_count(text: &str) -> usize {
    text.split_whitespace()
        .map(str::to_lowercase)
        .collect::<HashSet<_>>()
        .len()
}

/// `unique / (words + 1)`; the +1 keeps an empty essay at 0.
pub fn lexical_diversity(unique_words: usize, word_count: usize) -> f64 {
    unique_words as f64 / (word_count as f64 + 1.0)
}

/// `min(10, diversity * 15 + words / 150)`. No lower clamp.
pub fn score_vocabulary(unique_words: usize, word_count: usize) -> f64 {
    let diversity = lexical_diversity(unique_words, word_count);
    let raw = diversity * DIVERSITY_SCALE + word_count as f64 / WORDS_PER_BONUS_POINT;
    round1(raw.min(SCORE_MAX))
}
