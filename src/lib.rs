// essaymark: Heuristic essay scoring
//
// This is the library root. Each module corresponds to a stage of the
// scoring pipeline: input guarding, text processing, similarity, scoring,
// and output.

pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod pipeline;
pub mod scoring;
pub mod similarity;
pub mod text;
