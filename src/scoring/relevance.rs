// Content relevance: how close the essay is to the reference topic.
//
// Similarity comes from the TF-IDF cosine between the normalized essay and
// the normalized reference topic. Very short essays get the floor score no
// matter how on-topic their few words are.

use super::report::{round1, SCORE_MAX, SCORE_MIN};

/// Essays with this many words or fewer always score the minimum.
pub const MIN_WORDS_FOR_RELEVANCE: usize = 5;

const SIMILARITY_SCALE: f64 = 20.0;
const BASELINE: f64 = 3.0;

/// `min(10, sim * 20 + 3)` when the essay has more than five words,
/// otherwise 1.0. Rounded to one decimal.
pub fn score_relevance(similarity: f64, word_count: usize) -> f64 {
    if word_count > MIN_WORDS_FOR_RELEVANCE {
        round1((similarity * SIMILARITY_SCALE + BASELINE).min(SCORE_MAX))
    } else {
        SCORE_MIN
    }
}
