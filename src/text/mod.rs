// Text processing: word and sentence segmentation, stop words, normalization.

pub mod normalize;
pub mod sentences;
pub mod stopwords;
pub mod traits;
pub mod words;
