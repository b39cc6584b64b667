//! Peer matching via weighted set-intersection similarity.
//!
//! ## Algorithm
//! 1. Score every candidate in the (bounded) pool:
//!    `3 x shared style tags + 2 x shared colors`. Plain intersection
//!    counts, not normalized by set size -- an intentional
//!    simplicity/speed tradeoff over cosine similarity.
//! 2. Keep candidates scoring strictly above the threshold, sort
//!    descending with the original pool order breaking ties, take the
//!    top 10 as the peer group.
//! 3. Fetch items those peers favorited, capped at 50, as the
//!    popular-items signal for scoring.

use std::collections::HashSet;
use std::sync::Arc;

use rayon::prelude::*;
use tracing::{debug, instrument, warn};
use wardrobe_store::{CondensedPeerPrefs, PeerFavoritesRepository};

use crate::profile::{PeerGroup, UserPreferenceProfile};

/// Tunable constants for peer matching. All caps are configuration,
/// never computed.
#[derive(Debug, Clone, Copy)]
pub struct MatcherConfig {
    /// Largest candidate pool the matcher will look at
    pub candidate_pool: usize,
    /// Candidates must score strictly above this to qualify as peers
    pub min_similarity: u32,
    /// Cap on the peer group
    pub max_peers: usize,
    /// Cap on the popular-items signal
    pub max_popular_items: usize,
    /// Weight of one shared style tag
    pub style_weight: u32,
    /// Weight of one shared color
    pub color_weight: u32,
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            candidate_pool: 100,
            min_similarity: 3,
            max_peers: 10,
            max_popular_items: 50,
            style_weight: 3,
            color_weight: 2,
        }
    }
}

/// Compares one profile against a pool of condensed peer records.
#[derive(Clone)]
pub struct SimilarityMatcher {
    favorites: Arc<dyn PeerFavoritesRepository>,
    config: MatcherConfig,
}

impl SimilarityMatcher {
    pub fn new(favorites: Arc<dyn PeerFavoritesRepository>) -> Self {
        Self {
            favorites,
            config: MatcherConfig::default(),
        }
    }

    /// Configure the matcher constants (default: the documented caps/weights)
    pub fn with_config(mut self, config: MatcherConfig) -> Self {
        self.config = config;
        self
    }

    /// Build a peer group for a profile from a candidate pool.
    ///
    /// An empty pool, no qualifying candidates, or a failed favorites
    /// read all degrade to a partially or fully empty group, never an error.
    #[instrument(skip(self, profile, pool), fields(user_id = profile.user_id, pool = pool.len()))]
    pub fn find_peers(
        &self,
        profile: &UserPreferenceProfile,
        pool: &[CondensedPeerPrefs],
    ) -> PeerGroup {
        let pool = &pool[..pool.len().min(self.config.candidate_pool)];
        if pool.is_empty() {
            return PeerGroup::empty();
        }

        // Score the pool in parallel; the original index travels along so
        // the descending sort can break ties deterministically.
        let mut scored: Vec<(usize, u32, Vec<String>)> = pool
            .par_iter()
            .enumerate()
            .filter_map(|(idx, candidate)| {
                let (score, shared_tags) = self.similarity(profile, candidate);
                if score > self.config.min_similarity {
                    Some((idx, score, shared_tags))
                } else {
                    None
                }
            })
            .collect();

        scored.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
        scored.truncate(self.config.max_peers);

        let peers: Vec<_> = scored.iter().map(|(idx, _, _)| pool[*idx].user_id).collect();

        let mut seen = HashSet::new();
        let mut shared_tags = Vec::new();
        for (_, _, tags) in scored {
            for tag in tags {
                if seen.insert(tag.clone()) {
                    shared_tags.push(tag);
                }
            }
        }

        let popular_items = if peers.is_empty() {
            HashSet::new()
        } else {
            match self
                .favorites
                .favorites_by_users(&peers, self.config.max_popular_items)
            {
                Ok(items) => items.into_iter().collect(),
                Err(e) => {
                    warn!("Peer favorites read failed, dropping popular-items signal: {e}");
                    HashSet::new()
                }
            }
        };

        debug!(
            "Matched {} peers ({} shared tags, {} popular items) for user {}",
            peers.len(),
            shared_tags.len(),
            popular_items.len(),
            profile.user_id
        );

        PeerGroup {
            peers,
            shared_tags,
            popular_items,
        }
    }

    /// Similarity score plus the shared tags, in the candidate's tag order.
    fn similarity(
        &self,
        profile: &UserPreferenceProfile,
        candidate: &CondensedPeerPrefs,
    ) -> (u32, Vec<String>) {
        let mut seen = HashSet::new();
        let mut shared_tags = Vec::new();
        for tag in &candidate.style_tags {
            let tag = tag.to_ascii_lowercase();
            if profile.preferred_styles.contains(&tag) && seen.insert(tag.clone()) {
                shared_tags.push(tag);
            }
        }

        let shared_colors = candidate
            .colors
            .iter()
            .map(|c| c.to_ascii_lowercase())
            .collect::<HashSet<_>>()
            .into_iter()
            .filter(|c| profile.likes_color(c))
            .count();

        let score = self.config.style_weight * shared_tags.len() as u32
            + self.config.color_weight * shared_colors as u32;
        (score, shared_tags)
    }
}
