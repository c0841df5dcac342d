// ScoreReport, the structured result of scoring one essay, and the band
// used to color the total.

use serde::Serialize;

/// Lowest and highest value a clamped sub-score may take.
pub const SCORE_MIN: f64 = 1.0;
pub const SCORE_MAX: f64 = 10.0;

/// Display labels of the four sub-scores, in report order.
pub const LABELS: [&str; 4] = [
    "Content Relevance",
    "Grammar & Spelling",
    "Coherence & Structure",
    "Vocabulary Richness",
];

/// Four sub-scores plus their unweighted mean.
///
/// All scores are rounded to one decimal place. Relevance, grammar and
/// structure lie in [1.0, 10.0]; vocabulary lies in [0.0, 10.0].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreReport {
    pub relevance: f64,
    pub grammar: f64,
    pub structure: f64,
    pub vocabulary: f64,
    /// Mean of the four rounded scores, itself rounded
    pub total: f64,
    /// Band of the mean before rounding, so 7.025 is Good while it reads 7.0
    pub band: ScoreBand,
    /// Whitespace-separated words in the essay
    pub word_count: usize,
    pub sentence_count: usize,
}

impl ScoreReport {
    /// Assemble a report, rounding each score and computing the total.
    pub fn new(
        relevance: f64,
        grammar: f64,
        structure: f64,
        vocabulary: f64,
        word_count: usize,
        sentence_count: usize,
    ) -> Self {
        let relevance = round1(relevance);
        let grammar = round1(grammar);
        let structure = round1(structure);
        let vocabulary = round1(vocabulary);
        let mean = (relevance + grammar + structure + vocabulary) / 4.0;

        Self {
            relevance,
            grammar,
            structure,
            vocabulary,
            total: round1(mean),
            band: ScoreBand::from_total(mean),
            word_count,
            sentence_count,
        }
    }

    pub fn band(&self) -> ScoreBand {
        self.band
    }

    /// Labelled sub-scores in display order.
    pub fn rows(&self) -> [(&'static str, f64); 4] {
        [
            (LABELS[0], self.relevance),
            (LABELS[1], self.grammar),
            (LABELS[2], self.structure),
            (LABELS[3], self.vocabulary),
        ]
    }
}

/// Quality band of a total score, used for coloring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ScoreBand {
    Poor,
    Medium,
    Good,
}

impl ScoreBand {
    /// Thresholds are exclusive: exactly 7.0 is Medium, exactly 4.0 is Poor.
    pub fn from_total(total: f64) -> Self {
        match total {
            t if t > 7.0 => ScoreBand::Good,
            t if t > 4.0 => ScoreBand::Medium,
            _ => ScoreBand::Poor,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ScoreBand::Poor => "Poor",
            ScoreBand::Medium => "Medium",
            ScoreBand::Good => "Good",
        }
    }
}

impl std::fmt::Display for ScoreBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Round to one decimal place from the exact binary value, ties to even.
///
/// Scaling by ten first would round 6.55 (stored as 6.54999...) up to 6.6.
pub fn round1(value: f64) -> f64 {
    format!("{value:.1}").parse().unwrap_or(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rounds_and_averages() {
        let report = ScoreReport::new(5.8889, 8.5, 2.0, 10.0, 8, 2);
        assert_eq!(report.relevance, 5.9);
        // (5.9 + 8.5 + 2 + 10) / 4 = 6.6
        assert_eq!(report.total, 6.6);
        assert_eq!(report.band(), ScoreBand::Medium);
    }

    #[test]
    fn test_band_boundaries() {
        assert_eq!(ScoreBand::from_total(7.1), ScoreBand::Good);
        assert_eq!(ScoreBand::from_total(7.0), ScoreBand::Medium);
        assert_eq!(ScoreBand::from_total(4.1), ScoreBand::Medium);
        assert_eq!(ScoreBand::from_total(4.0), ScoreBand::Poor);
        assert_eq!(ScoreBand::from_total(0.0), ScoreBand::Poor);
    }

    #[test]
    fn test_json_field_names() {
        let report = ScoreReport::new(1.0, 10.0, 2.0, 5.0, 3, 1);
        let json = serde_json::to_value(&report).unwrap();
        for key in ["relevance", "grammar", "structure", "vocabulary", "total", "band"] {
            assert!(json.get(key).is_some(), "missing {key}");
        }
    }

    #[test]
    fn test_total_rounds_exact_value() {
        // The mean is stored just below 6.55
        let report = ScoreReport::new(5.9, 8.5, 2.0, 9.8, 100, 5);
        assert_eq!(report.total, 6.5);
    }

    #[test]
    fn test_band_uses_unrounded_mean() {
        // Mean 7.025 displays as 7.0 but is above the Good threshold
        let report = ScoreReport::new(10.0, 10.0, 6.0, 2.1, 100, 5);
        assert_eq!(report.total, 7.0);
        assert_eq!(report.band(), ScoreBand::Good);

        let exact = ScoreReport::new(10.0, 10.0, 6.0, 2.0, 100, 5);
        assert_eq!(exact.total, 7.0);
        assert_eq!(exact.band(), ScoreBand::Medium);
    }

    #[test]
    fn test_round1_near_halves() {
        // 0.35 is stored as 0.34999...; 0.45 as 0.45000...
        assert_eq!(round1(0.35), 0.3);
        assert_eq!(round1(0.45), 0.5);
        assert_eq!(round1(5.8876), 5.9);
        assert_eq!(round1(-0.0), 0.0);
    }
}
