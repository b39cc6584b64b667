//! Facade crate tying the learning, matching, scoring, and composing
//! stages together behind [`RecommendationEngine`].

pub mod config;
pub mod engine;

pub use config::EngineConfig;
pub use engine::RecommendationEngine;
