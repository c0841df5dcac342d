// Scoring: the four heuristic sub-scores and the engine that combines them.

pub mod engine;
pub mod grammar;
pub mod relevance;
pub mod report;
pub mod structure;
pub mod vocabulary;
