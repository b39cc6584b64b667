//! # Scoring Crate
//!
//! Ranks catalog items against a learned taste profile (plus an optional
//! peer-group signal) using a transparent, additive heuristic. Every
//! surviving item carries the list of reasons it scored, so callers can
//! show the user exactly why something was recommended.

pub mod scorer;

// Re-export main types
pub use scorer::{ItemScorer, RecommendationScore, ScorerConfig};
