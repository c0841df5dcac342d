// TF-IDF vector space over a small, fixed set of documents.
//
// The vocabulary is learned from exactly the documents passed in, so
// comparing an essay with the reference topic builds a two-document space:
// terms shared by both get the minimum IDF and terms unique to one side are
// boosted.
//
//   tf(t, d)  = raw count of t in d
//   idf(t)    = ln((1 + n) / (1 + df(t))) + 1
//   w(t, d)   = tf * idf, then each document vector is L2-normalized
//
// Terms are Unicode words of at least two characters, lower-cased.

use std::collections::HashMap;

use anyhow::Result;
use tracing::debug;
use unicode_segmentation::UnicodeSegmentation;

use super::cosine::{cosine_from_weights, magnitude, TermWeights};
use super::traits::DocumentSimilarity;
use crate::error::EssayError;

/// Shortest term kept by the analyzer, in characters.
const MIN_TERM_CHARS: usize = 2;

/// TF-IDF vectorizer with smoothed IDF and L2-normalized output.
#[derive(Debug, Clone, Copy)]
pub struct TfIdfVectorizer {
    /// Add one to document frequencies, as if an extra document contained
    /// every term once. Prevents zero divisions.
    pub smooth_idf: bool,
    /// Scale each vector to unit length.
    pub normalize: bool,
}

impl Default for TfIdfVectorizer {
    fn default() -> Self {
        Self {
            smooth_idf: true,
            normalize: true,
        }
    }
}

impl TfIdfVectorizer {
    /// Learn vocabulary and IDF from `docs`, returning one weight vector per
    /// document in input order.
    ///
    /// Fails when no document contains a single term.
    pub fn fit_transform(&self, docs: &[&str]) -> Result<Vec<TermWeights>> {
        let term_counts: Vec<HashMap<String, usize>> =
            docs.iter().map(|doc| count_terms(doc)).collect();

        let mut doc_freq: HashMap<&str, usize> = HashMap::new();
        for counts in &term_counts {
            for term in counts.keys() {
                *doc_freq.entry(term.as_str()).or_insert(0) += 1;
            }
        }

        if doc_freq.is_empty() {
            return Err(EssayError::Tokenization(
                "empty vocabulary; documents contain no terms".to_string(),
            )
            .into());
        }

        let n = docs.len() as f64;
        let smooth = if self.smooth_idf { 1.0 } else { 0.0 };
        let idf: HashMap<&str, f64> = doc_freq
            .iter()
            .map(|(term, &df)| (*term, ((n + smooth) / (df as f64 + smooth)).ln() + 1.0))
            .collect();

        debug!(
            documents = docs.len(),
            vocabulary = idf.len(),
            "Fitted TF-IDF vocabulary"
        );

        let vectors = term_counts
            .iter()
            .map(|counts| {
                let mut weights: TermWeights = counts
                    .iter()
                    .map(|(term, &tf)| (term.clone(), tf as f64 * idf[term.as_str()]))
                    .collect();
                if self.normalize {
                    l2_normalize(&mut weights);
                }
                weights
            })
            .collect();

        Ok(vectors)
    }
}

/// Similarity model used by the relevance score: a fresh two-document
/// TF-IDF space per comparison, then cosine similarity.
#[derive(Debug, Clone, Copy, Default)]
pub struct TfIdfSimilarity {
    pub vectorizer: TfIdfVectorizer,
}

impl DocumentSimilarity for TfIdfSimilarity {
    fn similarity(&self, doc_a: &str, doc_b: &str) -> Result<f64> {
        let vectors = self.vectorizer.fit_transform(&[doc_a, doc_b])?;
        Ok(cosine_from_weights(&vectors[0], &vectors[1]))
    }
}

fn count_terms(doc: &str) -> HashMap<String, usize> {
    let mut counts = HashMap::new();
    for word in doc.unicode_words() {
        if word.chars().count() < MIN_TERM_CHARS {
            continue;
        }
        *counts.entry(word.to_lowercase()).or_insert(0) += 1;
    }
    counts
}

fn l2_normalize(weights: &mut TermWeights) {
    let norm = magnitude(weights);
    if norm > 0.0 {
        for w in weights.values_mut() {
            *w /= norm;
        }
    }
}
