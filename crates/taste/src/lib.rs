//! # Taste Crate
//!
//! Builds the per-request taste signals the engine consumes:
//!
//! ### PreferenceLearner
//! Aggregates a user's wardrobe and explicit settings into a
//! [`UserPreferenceProfile`]: weighted color/brand rankings, style set,
//! category frequency, and wear history. Recomputed on every call,
//! never persisted.
//!
//! ### SimilarityMatcher
//! Compares that profile against a bounded pool of condensed peer
//! records and produces a [`PeerGroup`] plus a capped popular-items
//! signal for collaborative boosts.
//!
//! ## Example Usage
//!
//! ```ignore
//! use taste::{PreferenceLearner, SimilarityMatcher};
//! use std::sync::Arc;
//!
//! let learner = PreferenceLearner::new();
//! let profile = learner.learn(user_id, &wardrobe_items, settings.as_ref());
//!
//! let matcher = SimilarityMatcher::new(favorites_repo.clone());
//! let peers = matcher.find_peers(&profile, &candidate_pool);
//! ```

pub mod learner;
pub mod matcher;
pub mod profile;

// Re-export commonly used types
pub use learner::{LearnerConfig, PreferenceLearner};
pub use matcher::{MatcherConfig, SimilarityMatcher};
pub use profile::{PeerGroup, UserPreferenceProfile};
