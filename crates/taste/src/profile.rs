//! Learned taste profile and peer group types.
//!
//! Both are pure computed values: recomputed on every engine call,
//! never persisted, alive only for the duration of one request.

use std::collections::{HashMap, HashSet};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use wardrobe_store::{ItemId, UserId};

/// The learned + explicit summary of one user's taste signals.
///
/// Colors, brands, styles, and category keys are stored lowercased so
/// membership checks are case-insensitive regardless of how upstream
/// records were spelled. The top-K lists are length-bounded and ordered
/// by descending weight, ties preserving first-seen order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserPreferenceProfile {
    pub user_id: UserId,
    /// Top colors by weighted frequency, at most 5, heaviest first
    pub favorite_colors: Vec<String>,
    /// Top brands by weighted frequency, at most 5, heaviest first
    pub favorite_brands: Vec<String>,
    pub preferred_styles: HashSet<String>,
    /// How many items the user owns per category
    pub category_frequency: HashMap<String, u32>,
    /// Wear counts copied verbatim from wardrobe items
    pub wear_frequency: HashMap<ItemId, u32>,
    /// Last-worn dates copied verbatim from wardrobe items
    pub last_worn: HashMap<ItemId, NaiveDate>,
    /// Occasion counts. Wardrobe records carry no occasion field today,
    /// so this map stays empty; it is kept so occasion-aware callers
    /// have a stable shape to read.
    pub occasion_frequency: HashMap<String, u32>,
}

impl UserPreferenceProfile {
    /// Creates an empty profile for a user.
    pub fn new(user_id: UserId) -> Self {
        Self {
            user_id,
            favorite_colors: Vec::new(),
            favorite_brands: Vec::new(),
            preferred_styles: HashSet::new(),
            category_frequency: HashMap::new(),
            wear_frequency: HashMap::new(),
            last_worn: HashMap::new(),
            occasion_frequency: HashMap::new(),
        }
    }

    /// The single highest-weighted favorite color, if any.
    pub fn top_color(&self) -> Option<&str> {
        self.favorite_colors.first().map(|c| c.as_str())
    }

    /// Case-insensitive membership test against the favorite colors.
    pub fn likes_color(&self, color: &str) -> bool {
        self.favorite_colors
            .iter()
            .any(|c| c.eq_ignore_ascii_case(color))
    }

    /// Case-insensitive membership test against the favorite brands.
    pub fn likes_brand(&self, brand: &str) -> bool {
        self.favorite_brands
            .iter()
            .any(|b| b.eq_ignore_ascii_case(brand))
    }

    /// How many items the user owns in a category (case-insensitive).
    pub fn category_count(&self, category: &str) -> u32 {
        self.category_frequency
            .get(&category.to_ascii_lowercase())
            .copied()
            .unwrap_or(0)
    }
}

/// The bounded set of peers whose condensed preferences overlap the
/// target user's, plus the popular-items signal fetched from them.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PeerGroup {
    /// Peer user ids ordered by descending similarity, at most 10
    pub peers: Vec<UserId>,
    /// Style tags the target user shares with at least one peer
    pub shared_tags: Vec<String>,
    /// Items favorited by the peers, at most 50
    pub popular_items: HashSet<ItemId>,
}

impl PeerGroup {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.peers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_profile() {
        let profile = UserPreferenceProfile::new(7);
        assert_eq!(profile.user_id, 7);
        assert!(profile.favorite_colors.is_empty());
        assert_eq!(profile.top_color(), None);
        assert_eq!(profile.category_count("Tops"), 0);
    }

    #[test]
    fn test_case_insensitive_lookups() {
        let mut profile = UserPreferenceProfile::new(1);
        profile.favorite_colors.push("black".to_string());
        profile.favorite_brands.push("zara".to_string());
        profile.category_frequency.insert("tops".to_string(), 2);

        assert!(profile.likes_color("Black"));
        assert!(profile.likes_brand("ZARA"));
        assert!(!profile.likes_color("blue"));
        assert_eq!(profile.category_count("TOPS"), 2);
    }
}
