// Recommendation engine: candidate scoring and ranking.

pub mod engine;
pub mod scoring;
