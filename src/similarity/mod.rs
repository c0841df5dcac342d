// Document similarity: TF-IDF vectorization and cosine scoring.

pub mod cosine;
pub mod tfidf;
pub mod traits;
