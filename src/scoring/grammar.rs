// Grammar proxy: capitalization of sentence starts.
//
// No parsing. Each sentence whose first character is not an uppercase
// letter costs 1.5 points from a perfect 10.

use super::report::{round1, SCORE_MAX, SCORE_MIN};

const PENALTY_PER_ERROR: f64 = 1.5;

/// Count non-empty sentences that do not start with an uppercase letter.
///
/// Leading quotes or brackets count as a non-uppercase start.
pub fn count_capitalization_errors<S: AsRef<str>>(sentences: &[S]) -> usize {
    sentences
        .iter()
        .filter_map(|s| s.as_ref().chars().next())
        .filter(|c| !c.is_uppercase())
        .count()
}

/// `clamp(10 - errors * 1.5, 1, 10)`.
pub fn score_grammar(capitalization_errors: usize) -> f64 {
    let base = SCORE_MAX - capitalization_errors as f64 * PENALTY_PER_ERROR;
    round1(base.clamp(SCORE_MIN, SCORE_MAX))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_capitalized() {
        let sentences = ["One here.", "Two here.", "Three here."];
        assert_eq!(count_capitalization_errors(&sentences), 0);
        assert_eq!(score_grammar(0), 10.0);
    }

    #[test]
    fn test_one_lowercase_start() {
        let sentences = ["One here.", "two here.", "Three here."];
        assert_eq!(count_capitalization_errors(&sentences), 1);
        assert_eq!(score_grammar(1), 8.5);
    }

    #[test]
    fn test_empty_sentences_are_skipped() {
        let sentences = ["", "Fine."];
        assert_eq!(count_capitalization_errors(&sentences), 0);
    }

    #[test]
    fn test_digits_and_quotes_count_as_errors() {
        let sentences = ["42 is the answer.", "\"Quote\" first."];
        assert_eq!(count_capitalization_errors(&sentences), 2);
    }

    #[test]
    fn test_clamped_at_floor() {
        assert_eq!(score_grammar(6), 1.0);
        assert_eq!(score_grammar(100), 1.0);
        // 10 - 5 * 1.5 = 2.5
        assert_eq!(score_grammar(5), 2.5);
    }
}
