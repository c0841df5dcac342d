// Pipelines that drive the scorer over more than one essay.

pub mod batch;
