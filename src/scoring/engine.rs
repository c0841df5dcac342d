// Essay scorer: orchestrates the four sub-scores for one essay.
//
// Given an essay, this module:
// 1. Extracts the shared features (word count, sentences, unique words)
// 2. Normalizes the essay and the reference topic
// 3. Computes the four sub-scores independently
// 4. Returns a ScoreReport with the rounded scores and their mean
//
// The scorer holds only immutable configuration, so one instance can serve
// any number of calls, from any thread.

use anyhow::{Context, Result};
use tracing::{debug, info};

use super::report::ScoreReport;
use super::{grammar, relevance, structure, vocabulary};
use crate::error::EssayError;
use crate::similarity::tfidf::TfIdfSimilarity;
use crate::similarity::traits::DocumentSimilarity;
use crate::text::normalize::Normalizer;
use crate::text::sentences::PunctuationSentenceSplitter;
use crate::text::stopwords::StopWordSet;
use crate::text::traits::SentenceSplitter;
use crate::text::words;

/// Subject the relevance score compares every essay against.
pub const REFERENCE_TOPIC: &str =
    "technology impact on education society learning development digital schools";

/// Fixed inputs of the scorer: stop words and the reference topic.
#[derive(Debug, Clone)]
pub struct ScorerConfig {
    pub stop_words: StopWordSet,
    pub reference_topic: String,
}

impl Default for ScorerConfig {
    fn default() -> Self {
        Self {
            stop_words: StopWordSet::english(),
            reference_topic: REFERENCE_TOPIC.to_string(),
        }
    }
}

/// Features shared by several sub-scores, computed once per essay.
#[derive(Debug, Clone, PartialEq)]
pub struct EssayFeatures {
    pub word_count: usize,
    pub unique_words: usize,
    pub sentences: Vec<String>,
}

impl EssayFeatures {
    pub fn extract(text: &str, splitter: &dyn SentenceSplitter) -> Result<Self> {
        let sentences = splitter
            .split(text)
            .context("Failed to split essay into sentences")?;

        Ok(Self {
            word_count: words::whitespace_word_count(text),
            unique_words: vocabulary::unique_word_count(text),
            sentences,
        })
    }

    pub fn average_sentence_length(&self) -> f64 {
        structure::average_sentence_length(self.word_count, self.sentences.len())
    }
}

/// Stateless essay scorer.
pub struct EssayScorer {
    normalizer: Normalizer,
    splitter: Box<dyn SentenceSplitter>,
    similarity: Box<dyn DocumentSimilarity>,
    /// Reference topic, normalized once at construction
    reference: String,
}

impl EssayScorer {
    /// Build a scorer with the default segmenters and TF-IDF similarity.
    pub fn new(config: ScorerConfig) -> Result<Self> {
        Self::with_components(
            config,
            Box::new(PunctuationSentenceSplitter::default()),
            Box::new(TfIdfSimilarity::default()),
        )
    }

    /// Build a scorer with custom sentence splitting and similarity.
    pub fn with_components(
        config: ScorerConfig,
        splitter: Box<dyn SentenceSplitter>,
        similarity: Box<dyn DocumentSimilarity>,
    ) -> Result<Self> {
        let normalizer = Normalizer::new(config.stop_words);
        let reference = normalizer
            .normalize(&config.reference_topic)
            .context("Failed to normalize the reference topic")?;

        debug!(reference = %reference, "Prepared reference topic");

        Ok(Self {
            normalizer,
            splitter,
            similarity,
            reference,
        })
    }

    /// The normalized reference topic.
    pub fn reference(&self) -> &str {
        &self.reference
    }

    pub fn normalizer(&self) -> &Normalizer {
        &self.normalizer
    }

    /// Score an essay.
    ///
    /// Rejects empty or whitespace-only text with [`EssayError::EmptyInput`];
    /// segmentation and vectorization failures propagate unchanged.
    pub fn evaluate(&self, text: &str) -> Result<ScoreReport> {
        if text.trim().is_empty() {
            return Err(EssayError::EmptyInput.into());
        }

        let features = EssayFeatures::extract(text, self.splitter.as_ref())?;

        // Relevance: TF-IDF cosine against the reference topic
        let cleaned = self.normalizer.normalize(text)?;
        let similarity = self
            .similarity
            .similarity(&self.reference, &cleaned)
            .context("Failed to compare essay with the reference topic")?;
        let relevance = relevance::score_relevance(similarity, features.word_count);

        let errors = grammar::count_capitalization_errors(&features.sentences);
        let grammar = grammar::score_grammar(errors);

        let avg_len = features.average_sentence_length();
        let structure = structure::score_structure(features.word_count, avg_len);

        let vocabulary = vocabulary::score_vocabulary(features.unique_words, features.word_count);

        debug!(
            similarity = format!("{:.4}", similarity),
            capitalization_errors = errors,
            avg_sentence_length = format!("{:.1}", avg_len),
            unique_words = features.unique_words,
            "Computed essay features"
        );

        let report = ScoreReport::new(
            relevance,
            grammar,
            structure,
            vocabulary,
            features.word_count,
            features.sentences.len(),
        );

        info!(
            words = report.word_count,
            sentences = report.sentence_count,
            relevance = report.relevance,
            grammar = report.grammar,
            structure = report.structure,
            vocabulary = report.vocabulary,
            total = report.total,
            "Scored essay"
        );

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCENARIO: &str = "Technology improves education. Students learn digitally every day.";

    fn scorer() -> EssayScorer {
        EssayScorer::new(ScorerConfig::default()).unwrap()
    }

    #[test]
    fn test_scenario_essay() {
        let report = scorer().evaluate(SCENARIO).unwrap();
        assert!(report.relevance > 5.0, "relevance {}", report.relevance);
        assert_eq!(report.relevance, 5.9);
        assert_eq!(report.grammar, 10.0);
        assert_eq!(report.structure, 2.0);
        assert_eq!(report.vocabulary, 10.0);
        assert_eq!(report.word_count, 8);
        assert_eq!(report.sentence_count, 2);
    }

    #[test]
    fn test_empty_is_rejected() {
        let err = scorer().evaluate("   \n").unwrap_err();
        assert_eq!(err.downcast_ref::<EssayError>(), Some(&EssayError::EmptyInput));
    }

    #[test]
    fn test_reference_is_normalized() {
        assert_eq!(
            scorer().reference(),
            "technology impact education society learning development digital schools"
        );
    }

    #[test]
    fn test_features_extract() {
        let features =
            EssayFeatures::extract("One two. Three four five.", &PunctuationSentenceSplitter::default())
                .unwrap();
        assert_eq!(features.word_count, 5);
        assert_eq!(features.sentences.len(), 2);
        assert!((features.average_sentence_length() - 2.5).abs() < 1e-9);
    }

    struct FixedSimilarity(f64);

    impl DocumentSimilarity for FixedSimilarity {
        fn similarity(&self, _a: &str, _b: &str) -> Result<f64> {
            Ok(self.0)
        }
    }

    #[test]
    fn test_custom_similarity_is_used() {
        let scorer = EssayScorer::with_components(
            ScorerConfig::default(),
            Box::new(PunctuationSentenceSplitter::default()),
            Box::new(FixedSimilarity(0.25)),
        )
        .unwrap();
        let report = scorer
            .evaluate("Any six words at all here.")
            .unwrap();
        // 0.25 * 20 + 3
        assert_eq!(report.relevance, 8.0);
    }
}
