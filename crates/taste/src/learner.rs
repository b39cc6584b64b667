//! Preference learning: wardrobe items + explicit settings in,
//! [`UserPreferenceProfile`] out.
//!
//! ## Algorithm
//! 1. Count color, brand, and category frequency across owned items;
//!    favorite-flagged items add a configurable boost (+3 by default)
//!    to their color and brand counters.
//! 2. Keep the top 5 colors and top 5 brands by descending weight,
//!    tie-break on first-seen order (never randomized).
//! 3. Copy wear counts and last-worn dates verbatim.
//! 4. Merge explicit settings when present: preferred styles are a
//!    union, explicit favorite colors are appended then re-capped.

use std::collections::HashMap;

use tracing::{debug, instrument};
use wardrobe_store::{StyleSettings, UserId, WardrobeItem};

use crate::profile::UserPreferenceProfile;

/// Tunable constants for preference learning.
#[derive(Debug, Clone, Copy)]
pub struct LearnerConfig {
    /// Extra weight a favorite item adds to its color and brand counters
    pub favorite_boost: u32,
    /// Cap on the favorite-colors list
    pub top_colors: usize,
    /// Cap on the favorite-brands list
    pub top_brands: usize,
}

impl Default for LearnerConfig {
    fn default() -> Self {
        Self {
            favorite_boost: 3,
            top_colors: 5,
            top_brands: 5,
        }
    }
}

/// Turns raw item ownership and explicit settings into a taste profile.
#[derive(Debug, Clone, Default)]
pub struct PreferenceLearner {
    config: LearnerConfig,
}

impl PreferenceLearner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: LearnerConfig) -> Self {
        Self { config }
    }

    /// Configure the favorite boost (default: 3)
    pub fn with_favorite_boost(mut self, boost: u32) -> Self {
        self.config.favorite_boost = boost;
        self
    }

    /// Build a profile from a user's wardrobe and optional explicit settings.
    ///
    /// An empty wardrobe yields an empty profile; a missing settings
    /// record skips the merge step silently. Neither is an error.
    #[instrument(skip(self, items, settings), fields(user_id = user_id, items = items.len()))]
    pub fn learn(
        &self,
        user_id: UserId,
        items: &[WardrobeItem],
        settings: Option<&StyleSettings>,
    ) -> UserPreferenceProfile {
        let mut profile = UserPreferenceProfile::new(user_id);

        let mut colors = WeightedCounter::new();
        let mut brands = WeightedCounter::new();
        let mut categories = WeightedCounter::new();

        for item in items {
            let boost = if item.is_favorite {
                self.config.favorite_boost
            } else {
                0
            };
            if let Some(color) = &item.color {
                colors.add(color, 1 + boost);
            }
            if let Some(brand) = &item.brand {
                brands.add(brand, 1 + boost);
            }
            categories.add(&item.category, 1);

            profile.wear_frequency.insert(item.id, item.wear_count);
            if let Some(date) = item.last_worn {
                profile.last_worn.insert(item.id, date);
            }
        }

        profile.favorite_colors = colors.top(self.config.top_colors);
        profile.favorite_brands = brands.top(self.config.top_brands);
        profile.category_frequency = categories.into_counts();

        if let Some(settings) = settings {
            self.merge_settings(&mut profile, settings);
        }

        debug!(
            "Learned profile for user {}: {} colors, {} brands, {} styles, {} categories",
            user_id,
            profile.favorite_colors.len(),
            profile.favorite_brands.len(),
            profile.preferred_styles.len(),
            profile.category_frequency.len()
        );
        profile
    }

    /// Fold explicit settings into a learned profile.
    ///
    /// Styles are a union (explicit settings never overwrite learned
    /// signals); explicit colors are appended behind the learned ones,
    /// then the list is re-capped.
    fn merge_settings(&self, profile: &mut UserPreferenceProfile, settings: &StyleSettings) {
        for style in &settings.preferred_styles {
            profile.preferred_styles.insert(style.to_ascii_lowercase());
        }

        for color in &settings.favorite_colors {
            let color = color.to_ascii_lowercase();
            if !profile.favorite_colors.contains(&color) {
                profile.favorite_colors.push(color);
            }
        }
        profile.favorite_colors.truncate(self.config.top_colors);
    }
}

/// Frequency counter that remembers first-seen order for stable ties.
///
/// Keys are lowercased on insert so counting is case-insensitive.
struct WeightedCounter {
    order: Vec<String>,
    counts: HashMap<String, u32>,
}

impl WeightedCounter {
    fn new() -> Self {
        Self {
            order: Vec::new(),
            counts: HashMap::new(),
        }
    }

    fn add(&mut self, key: &str, weight: u32) {
        let key = key.to_ascii_lowercase();
        match self.counts.get_mut(&key) {
            Some(count) => *count += weight,
            None => {
                self.counts.insert(key.clone(), weight);
                self.order.push(key);
            }
        }
    }

    /// Top `k` keys by descending weight; the underlying sort is stable
    /// over first-seen order, so ties keep their discovery order.
    fn top(self, k: usize) -> Vec<String> {
        let counts = self.counts;
        let mut pairs: Vec<(String, u32)> = self
            .order
            .into_iter()
            .map(|key| {
                let count = counts.get(&key).copied().unwrap_or(0);
                (key, count)
            })
            .collect();
        pairs.sort_by(|a, b| b.1.cmp(&a.1));
        pairs.truncate(k);
        pairs.into_iter().map(|(key, _)| key).collect()
    }

    fn into_counts(self) -> HashMap<String, u32> {
        self.counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn item(id: u32, category: &str, color: Option<&str>, brand: Option<&str>) -> WardrobeItem {
        WardrobeItem {
            id,
            owner: 1,
            category: category.to_string(),
            color: color.map(str::to_string),
            brand: brand.map(str::to_string),
            is_favorite: false,
            wear_count: 0,
            last_worn: None,
            season: None,
            available: true,
        }
    }

    #[test]
    fn test_empty_wardrobe_gives_empty_profile() {
        let learner = PreferenceLearner::new();
        let profile = learner.learn(1, &[], None);

        assert!(profile.favorite_colors.is_empty());
        assert!(profile.favorite_brands.is_empty());
        assert!(profile.category_frequency.is_empty());
        assert!(profile.wear_frequency.is_empty());
    }

    #[test]
    fn test_top_lists_are_capped_at_five() {
        let learner = PreferenceLearner::new();
        let items: Vec<WardrobeItem> = (0..8)
            .map(|i| {
                item(
                    i,
                    "Tops",
                    Some(&format!("color-{}", i)),
                    Some(&format!("brand-{}", i)),
                )
            })
            .collect();

        let profile = learner.learn(1, &items, None);
        assert_eq!(profile.favorite_colors.len(), 5);
        assert_eq!(profile.favorite_brands.len(), 5);
    }

    #[test]
    fn test_favorite_boost_outranks_equal_raw_frequency() {
        let learner = PreferenceLearner::new();
        // "blue" appears twice plain, "black" appears twice with one favorite
        let mut items = vec![
            item(1, "Tops", Some("blue"), None),
            item(2, "Tops", Some("blue"), None),
            item(3, "Tops", Some("black"), None),
            item(4, "Tops", Some("black"), None),
        ];
        items[3].is_favorite = true;

        let profile = learner.learn(1, &items, None);
        // black: 1 + (1 + 3) = 5, blue: 2
        assert_eq!(profile.favorite_colors[0], "black");
        assert_eq!(profile.favorite_colors[1], "blue");
    }

    #[test]
    fn test_ties_keep_first_seen_order() {
        let learner = PreferenceLearner::new();
        let items = vec![
            item(1, "Tops", Some("red"), None),
            item(2, "Tops", Some("green"), None),
            item(3, "Tops", Some("blue"), None),
        ];

        let profile = learner.learn(1, &items, None);
        assert_eq!(profile.favorite_colors, vec!["red", "green", "blue"]);
    }

    #[test]
    fn test_counting_is_case_insensitive() {
        let learner = PreferenceLearner::new();
        let items = vec![
            item(1, "Tops", Some("Black"), Some("Zara")),
            item(2, "tops", Some("black"), Some("ZARA")),
        ];

        let profile = learner.learn(1, &items, None);
        assert_eq!(profile.favorite_colors, vec!["black"]);
        assert_eq!(profile.favorite_brands, vec!["zara"]);
        assert_eq!(profile.category_count("Tops"), 2);
    }

    #[test]
    fn test_wear_history_copied_verbatim() {
        let learner = PreferenceLearner::new();
        let mut worn = item(1, "Shoes", None, None);
        worn.wear_count = 12;
        worn.last_worn = NaiveDate::from_ymd_opt(2026, 8, 1);

        let profile = learner.learn(1, &[worn], None);
        assert_eq!(profile.wear_frequency[&1], 12);
        assert_eq!(
            profile.last_worn[&1],
            NaiveDate::from_ymd_opt(2026, 8, 1).unwrap()
        );
    }

    #[test]
    fn test_settings_merge_is_union_and_recapped() {
        let learner = PreferenceLearner::new();
        let items: Vec<WardrobeItem> = (0..5)
            .map(|i| item(i, "Tops", Some(&format!("color-{}", i)), None))
            .collect();
        let settings = StyleSettings {
            preferred_styles: vec!["Casual".to_string(), "boho".to_string()],
            favorite_colors: vec!["crimson".to_string(), "color-0".to_string()],
        };

        let profile = learner.learn(1, &items, Some(&settings));

        assert!(profile.preferred_styles.contains("casual"));
        assert!(profile.preferred_styles.contains("boho"));
        // Learned list was already full, so the explicit color is recapped away
        assert_eq!(profile.favorite_colors.len(), 5);
        assert!(!profile.favorite_colors.contains(&"crimson".to_string()));

        // With room to spare, explicit colors append without duplicating
        let short = vec![item(1, "Tops", Some("color-0"), None)];
        let profile = learner.learn(1, &short, Some(&settings));
        assert_eq!(profile.favorite_colors, vec!["color-0", "crimson"]);
    }

    #[test]
    fn test_missing_settings_skips_merge() {
        let learner = PreferenceLearner::new();
        let profile = learner.learn(1, &[item(1, "Tops", Some("black"), None)], None);
        assert!(profile.preferred_styles.is_empty());
        assert_eq!(profile.favorite_colors, vec!["black"]);
    }

    #[test]
    fn test_occasion_map_stays_empty() {
        let learner = PreferenceLearner::new();
        let profile = learner.learn(1, &[item(1, "Tops", None, None)], None);
        assert!(profile.occasion_frequency.is_empty());
    }
}
