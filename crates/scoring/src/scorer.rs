//! Catalog scoring against a taste profile.
//!
//! Scoring is strictly additive over independent, order-insensitive
//! signals. Each triggered signal contributes a fixed weight and one
//! human-readable reason string, so every recommendation carries an
//! auditable explanation. This is a transparent linear heuristic, not
//! a trained ranker.
//!
//! | Signal             | Condition                                  | Weight     |
//! |--------------------|--------------------------------------------|------------|
//! | Color match        | item color in favorite colors              | +15        |
//! | Brand match        | item brand in favorite brands              | +20        |
//! | Style overlap      | item tags intersect preferred styles       | +10 each   |
//! | Category gap       | user owns fewer than 5 in the category     | +10        |
//! | Peer popularity    | item favorited by the peer group           | +15        |
//! | Seasonal relevance | item season matches the current bucket     | +10        |
//!
//! Items scoring at or below the noise floor (15) are discarded: a
//! single weak signal alone is never recommendable. A missing color,
//! brand, category, or season is an absent signal, not an error.

use serde::{Deserialize, Serialize};
use taste::{PeerGroup, UserPreferenceProfile};
use tracing::{debug, instrument};
use wardrobe_store::{CatalogItem, ItemId, Season};

/// Tunable weights, thresholds, and caps for catalog scoring.
#[derive(Debug, Clone, Copy)]
pub struct ScorerConfig {
    pub color_weight: u32,
    pub brand_weight: u32,
    /// Weight per overlapping style tag
    pub style_weight: u32,
    pub category_gap_weight: u32,
    /// Owned-count below which a category counts as a gap
    pub category_gap_threshold: u32,
    pub peer_weight: u32,
    pub season_weight: u32,
    /// Items scoring at or below this are discarded
    pub noise_floor: u32,
    /// Cap on the ranked output
    pub max_results: usize,
    /// Reason count at which confidence saturates to 100
    pub confidence_saturation: usize,
}

impl Default for ScorerConfig {
    fn default() -> Self {
        Self {
            color_weight: 15,
            brand_weight: 20,
            style_weight: 10,
            category_gap_weight: 10,
            category_gap_threshold: 5,
            peer_weight: 15,
            season_weight: 10,
            noise_floor: 15,
            max_results: 20,
            confidence_saturation: 4,
        }
    }
}

/// One scored catalog item with its explanation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationScore {
    pub item_id: ItemId,
    pub score: u32,
    /// One entry per triggered signal
    pub reasons: Vec<String>,
    /// Percentage in [0, 100], a saturating function of the reason count
    pub confidence: u8,
}

/// Ranks catalog items against a profile and an optional peer signal.
#[derive(Debug, Clone, Default)]
pub struct ItemScorer {
    config: ScorerConfig,
}

impl ItemScorer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ScorerConfig) -> Self {
        Self { config }
    }

    /// Score a catalog slice and return the ranked survivors.
    ///
    /// Output is sorted descending by score (stable on ties, so equal
    /// scores keep catalog order), noise-floored, and capped.
    #[instrument(skip_all, fields(user_id = profile.user_id, items = items.len()))]
    pub fn score_items(
        &self,
        items: &[CatalogItem],
        profile: &UserPreferenceProfile,
        peers: &PeerGroup,
        season: Season,
    ) -> Vec<RecommendationScore> {
        let mut scored: Vec<RecommendationScore> = items
            .iter()
            .map(|item| self.score_item(item, profile, peers, season))
            .filter(|entry| entry.score > self.config.noise_floor)
            .collect();

        scored.sort_by(|a, b| b.score.cmp(&a.score));
        scored.truncate(self.config.max_results);

        debug!(
            "Scored {} catalog items, {} above the noise floor",
            items.len(),
            scored.len()
        );
        scored
    }

    /// Score a single item. Signals are independent; evaluation order
    /// only affects the order of the reason strings.
    pub fn score_item(
        &self,
        item: &CatalogItem,
        profile: &UserPreferenceProfile,
        peers: &PeerGroup,
        season: Season,
    ) -> RecommendationScore {
        let mut score = 0;
        let mut reasons = Vec::new();

        if let Some(color) = &item.color
            && profile.likes_color(color)
        {
            score += self.config.color_weight;
            reasons.push(format!("Matches your favorite color {}", color));
        }

        if let Some(brand) = &item.brand
            && profile.likes_brand(brand)
        {
            score += self.config.brand_weight;
            reasons.push(format!("From {}, a brand you wear a lot", brand));
        }

        let matched_styles: Vec<&str> = item
            .style_tags
            .iter()
            .filter(|tag| profile.preferred_styles.contains(&tag.to_ascii_lowercase()))
            .map(|tag| tag.as_str())
            .collect();
        if !matched_styles.is_empty() {
            score += self.config.style_weight * matched_styles.len() as u32;
            reasons.push(format!("Fits your style: {}", matched_styles.join(", ")));
        }

        if let Some(category) = &item.category
            && profile.category_count(category) < self.config.category_gap_threshold
        {
            score += self.config.category_gap_weight;
            reasons.push(format!("Fills a gap in your {} collection", category));
        }

        if peers.popular_items.contains(&item.id) {
            score += self.config.peer_weight;
            reasons.push("Popular with people who share your taste".to_string());
        }

        if item.season.is_some_and(|s| s.matches(season)) {
            score += self.config.season_weight;
            reasons.push(format!("Right for {}", season));
        }

        let confidence = self.confidence(reasons.len());
        RecommendationScore {
            item_id: item.id,
            score,
            reasons,
            confidence,
        }
    }

    /// `min(100, 100 * reasons / saturation)` -- more independent
    /// signals mean higher confidence, saturating at 4 by default.
    fn confidence(&self, reason_count: usize) -> u8 {
        let pct = reason_count * 100 / self.config.confidence_saturation;
        pct.min(100) as u8
    }
}
