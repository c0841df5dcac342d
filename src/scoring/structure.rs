// Coherence proxy: word count and average sentence length.
//
// Three fixed tiers with hard edges. Short essays score 2.0 regardless of
// their sentences; longer ones score 9.0 when the average sentence sits
// strictly between 10 and 25 words, 6.0 otherwise.

const MIN_WORDS: usize = 20;
const AVG_LOWER: f64 = 10.0;
const AVG_UPPER: f64 = 25.0;

const SHORT_SCORE: f64 = 2.0;
const BALANCED_SCORE: f64 = 9.0;
const UNBALANCED_SCORE: f64 = 6.0;

/// Words per sentence, or 0.0 when there are no sentences.
pub fn average_sentence_length(word_count: usize, sentence_count: usize) -> f64 {
    if sentence_count == 0 {
        0.0
    } else {
        word_count as f64 / sentence_count as f64
    }
}

pub fn score_structure(word_count: usize, avg_sentence_length: f64) -> f64 {
    if word_count < MIN_WORDS {
        SHORT_SCORE
    } else if avg_sentence_length > AVG_LOWER && avg_sentence_length < AVG_UPPER {
        BALANCED_SCORE
    } else {
        UNBALANCED_SCORE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_average_guards_zero_sentences() {
        assert_eq!(average_sentence_length(30, 0), 0.0);
        assert_eq!(average_sentence_length(30, 2), 15.0);
    }

    #[test]
    fn test_tier_boundaries() {
        assert_eq!(score_structure(19, 15.0), 2.0);
        assert_eq!(score_structure(20, 15.0), 9.0);
        assert_eq!(score_structure(20, 30.0), 6.0);
    }

    #[test]
    fn test_average_bounds_are_exclusive() {
        assert_eq!(score_structure(40, 10.0), 6.0);
        assert_eq!(score_structure(40, 10.5), 9.0);
        assert_eq!(score_structure(50, 25.0), 6.0);
        assert_eq!(score_structure(50, 0.0), 6.0);
    }
}
