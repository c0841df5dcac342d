// Document similarity trait: swap-ready abstraction.
//
// The relevance score only needs one number comparing the essay with the
// reference topic. The default implementation is a two-document TF-IDF
// space with cosine similarity, but any model returning a score in [0, 1]
// can stand in.

use anyhow::Result;

pub trait DocumentSimilarity: Send + Sync {
    /// Similarity between two already-normalized documents, in [0.0, 1.0].
    fn similarity(&self, doc_a: &str, doc_b: &str) -> Result<f64>;
}
