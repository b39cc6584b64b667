//! Engine-wide configuration.
//!
//! Every heuristic constant the engine uses lives in one of these
//! structs rather than inline in the code, so alternate weightings can
//! be exercised without code changes.

use outfits::ComposerConfig;
use scoring::ScorerConfig;
use taste::{LearnerConfig, MatcherConfig};

/// Aggregated configuration injected into the engine.
///
/// Defaults carry the production values: catalog slice of 100, peer
/// pool of 100, peer group of 10, popular-items cap of 50, ranked
/// output of 20, suggestion list of 5.
#[derive(Debug, Clone, Copy)]
pub struct EngineConfig {
    pub learner: LearnerConfig,
    pub matcher: MatcherConfig,
    pub scorer: ScorerConfig,
    pub composer: ComposerConfig,
    pub catalog_limit: usize,
}

impl EngineConfig {
    pub fn new() -> Self {
        Self {
            learner: LearnerConfig::default(),
            matcher: MatcherConfig::default(),
            scorer: ScorerConfig::default(),
            composer: ComposerConfig::default(),
            catalog_limit: 100,
        }
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new()
    }
}
