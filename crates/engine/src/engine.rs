//! # Recommendation Engine
//!
//! This module coordinates the whole recommendation flow:
//! 1. Learn a taste profile from the user's wardrobe + explicit settings
//! 2. Match peers from a sampled candidate pool (popular-items signal)
//! 3. Score the active catalog slice against the profile
//! 4. Compose outfit suggestions from available inventory
//!
//! The catalog and peer reads are independent, read-only, and
//! idempotent, so `recommend_items` fetches them concurrently with
//! `tokio::join!` over `spawn_blocking`. Every stage catches its own
//! data-access failures and degrades to an empty value; the engine
//! never raises for missing or sparse data.
//!
//! Each call is stateless: profiles and peer groups are recomputed
//! fresh and nothing survives between invocations.

use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, info, instrument, warn};

use outfits::{OutfitComposer, OutfitSuggestion};
use scoring::{ItemScorer, RecommendationScore};
use taste::{PeerGroup, PreferenceLearner, SimilarityMatcher, UserPreferenceProfile};
use wardrobe_store::{
    CatalogRepository, PeerFavoritesRepository, PeerPreferencesRepository, Season,
    StylePreferencesRepository, StyleSettings, UserId, WardrobeItem, WardrobeRepository,
};

use crate::config::EngineConfig;

/// Facade over the learning, matching, scoring, and composing stages.
pub struct RecommendationEngine {
    wardrobe: Arc<dyn WardrobeRepository>,
    style_prefs: Arc<dyn StylePreferencesRepository>,
    catalog: Arc<dyn CatalogRepository>,
    peer_prefs: Arc<dyn PeerPreferencesRepository>,
    learner: PreferenceLearner,
    matcher: SimilarityMatcher,
    scorer: ItemScorer,
    composer: OutfitComposer,
    config: EngineConfig,
}

impl RecommendationEngine {
    /// Create an engine over the five data-access seams.
    pub fn new(
        wardrobe: Arc<dyn WardrobeRepository>,
        style_prefs: Arc<dyn StylePreferencesRepository>,
        catalog: Arc<dyn CatalogRepository>,
        peer_prefs: Arc<dyn PeerPreferencesRepository>,
        peer_favorites: Arc<dyn PeerFavoritesRepository>,
        config: EngineConfig,
    ) -> Self {
        let learner = PreferenceLearner::with_config(config.learner);
        let matcher = SimilarityMatcher::new(peer_favorites).with_config(config.matcher);
        let scorer = ItemScorer::with_config(config.scorer);
        let composer = OutfitComposer::standard().with_config(config.composer);
        Self {
            wardrobe,
            style_prefs,
            catalog,
            peer_prefs,
            learner,
            matcher,
            scorer,
            composer,
            config,
        }
    }

    /// Replace the outfit composer (custom strategies or slot taxonomy).
    pub fn with_composer(mut self, composer: OutfitComposer) -> Self {
        self.composer = composer;
        self
    }

    /// Learn the user's taste profile from their wardrobe and settings.
    ///
    /// A failed wardrobe read degrades to an empty profile; a failed
    /// settings read just skips the merge. Neither is surfaced.
    #[instrument(skip(self))]
    pub fn learn_preferences(&self, user_id: UserId) -> UserPreferenceProfile {
        let items = match self.wardrobe.items_for_user(user_id) {
            Ok(items) => items,
            Err(e) => {
                warn!("Wardrobe read failed for user {user_id}, using empty profile: {e}");
                return UserPreferenceProfile::new(user_id);
            }
        };
        let settings = self.fetch_settings(user_id);
        self.learner.learn(user_id, &items, settings.as_ref())
    }

    /// Match peers for an already-learned profile.
    ///
    /// A failed pool read degrades to an empty peer group.
    pub fn find_peers(&self, user_id: UserId, profile: &UserPreferenceProfile) -> PeerGroup {
        let pool = match self
            .peer_prefs
            .sample(user_id, self.config.matcher.candidate_pool)
        {
            Ok(pool) => pool,
            Err(e) => {
                warn!("Peer sample failed for user {user_id}, skipping peer signal: {e}");
                return PeerGroup::empty();
            }
        };
        self.matcher.find_peers(profile, &pool)
    }

    /// Rank the active catalog slice for a user.
    ///
    /// Returns at most 20 entries, sorted descending by score, each
    /// with its reasons. The catalog and peer reads run concurrently.
    pub async fn recommend_items(
        &self,
        user_id: UserId,
        wardrobe: &[WardrobeItem],
    ) -> Vec<RecommendationScore> {
        self.recommend_for_season(user_id, wardrobe, Season::current())
            .await
    }

    /// As [`recommend_items`], with the season bucket pinned by the
    /// caller. `recommend_items` passes the current UTC month's bucket.
    ///
    /// [`recommend_items`]: Self::recommend_items
    #[instrument(skip(self, wardrobe), fields(user_id = user_id, wardrobe = wardrobe.len()))]
    pub async fn recommend_for_season(
        &self,
        user_id: UserId,
        wardrobe: &[WardrobeItem],
        season: Season,
    ) -> Vec<RecommendationScore> {
        let start_time = Instant::now();

        let settings = self.fetch_settings(user_id);
        let profile = self.learner.learn(user_id, wardrobe, settings.as_ref());

        // Catalog slice and peer group are independent reads; fan out
        let (catalog_result, peers_result) = tokio::join!(
            tokio::task::spawn_blocking({
                let catalog = Arc::clone(&self.catalog);
                let limit = self.config.catalog_limit;
                move || catalog.active_items(limit)
            }),
            tokio::task::spawn_blocking({
                let peer_prefs = Arc::clone(&self.peer_prefs);
                let matcher = self.matcher.clone();
                let pool_limit = self.config.matcher.candidate_pool;
                let profile = profile.clone();
                move || match peer_prefs.sample(user_id, pool_limit) {
                    Ok(pool) => matcher.find_peers(&profile, &pool),
                    Err(e) => {
                        warn!("Peer sample failed for user {user_id}, skipping peer signal: {e}");
                        PeerGroup::empty()
                    }
                }
            })
        );

        let items = match catalog_result {
            Ok(Ok(items)) => items,
            Ok(Err(e)) => {
                warn!("Catalog read failed, nothing to recommend: {e}");
                Vec::new()
            }
            Err(e) => {
                warn!("Catalog task panicked, nothing to recommend: {e}");
                Vec::new()
            }
        };
        let peers = peers_result.unwrap_or_else(|e| {
            warn!("Peer matching task panicked, skipping peer signal: {e}");
            PeerGroup::empty()
        });

        info!(
            "Scoring {} catalog items against {} peers for user {}",
            items.len(),
            peers.peers.len(),
            user_id
        );
        let ranked = self.scorer.score_items(&items, &profile, &peers, season);

        info!(
            "Ranked {} recommendations for user {} in {:.2?}",
            ranked.len(),
            user_id,
            start_time.elapsed()
        );
        ranked
    }

    /// Compose up to 5 outfit suggestions from the user's wardrobe.
    ///
    /// Items flagged unavailable (in the laundry) are excluded before
    /// composition. `occasion` is accepted for API stability but does
    /// not influence composition yet: wardrobe records carry no
    /// occasion data to learn from.
    #[instrument(skip(self, wardrobe), fields(user_id = user_id))]
    pub fn compose_outfits(
        &self,
        user_id: UserId,
        wardrobe: &[WardrobeItem],
        occasion: Option<&str>,
    ) -> Vec<OutfitSuggestion> {
        if let Some(occasion) = occasion {
            debug!("Occasion {occasion:?} noted; occasion-aware composition not wired up");
        }

        let settings = self.fetch_settings(user_id);
        let profile = self.learner.learn(user_id, wardrobe, settings.as_ref());

        let available: Vec<WardrobeItem> = wardrobe
            .iter()
            .filter(|item| item.available)
            .cloned()
            .collect();
        debug!(
            "{} of {} wardrobe items available for composition",
            available.len(),
            wardrobe.len()
        );

        let suggestions = self.composer.compose(&available, &profile);
        info!(
            "Composed {} outfit suggestions for user {}",
            suggestions.len(),
            user_id
        );
        suggestions
    }

    /// Explicit settings, degraded to `None` on a failed read.
    fn fetch_settings(&self, user_id: UserId) -> Option<StyleSettings> {
        match self.style_prefs.settings_for_user(user_id) {
            Ok(settings) => settings,
            Err(e) => {
                warn!("Settings read failed for user {user_id}, skipping merge: {e}");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wardrobe_store::{
        CatalogItem, CondensedPeerPrefs, DataAccessError, InMemoryStore, ItemId, Result,
    };

    fn wardrobe_item(id: u32, category: &str, color: &str, is_favorite: bool) -> WardrobeItem {
        WardrobeItem {
            id,
            owner: 1,
            category: category.to_string(),
            color: Some(color.to_string()),
            brand: Some("Zara".to_string()),
            is_favorite,
            wear_count: 1,
            last_worn: None,
            season: None,
            available: true,
        }
    }

    fn build_test_store() -> Arc<InMemoryStore> {
        let mut store = InMemoryStore::new();

        for item in [
            wardrobe_item(1, "Shirt", "black", true),
            wardrobe_item(2, "Jeans", "black", true),
            wardrobe_item(3, "Sneakers", "black", true),
            wardrobe_item(4, "Blouse", "blue", false),
        ] {
            store.insert_wardrobe_item(item);
        }

        store.insert_settings(
            1,
            StyleSettings {
                preferred_styles: vec!["casual".to_string()],
                favorite_colors: vec![],
            },
        );

        store.insert_catalog_item(CatalogItem {
            id: 100,
            category: Some("Jackets".to_string()),
            color: Some("black".to_string()),
            brand: Some("Zara".to_string()),
            style_tags: vec!["casual".to_string()],
            season: Some(Season::All),
        });
        store.insert_catalog_item(CatalogItem {
            id: 101,
            category: None,
            color: Some("neon".to_string()),
            brand: Some("Unknown".to_string()),
            style_tags: vec![],
            season: None,
        });

        store.insert_peer_prefs(CondensedPeerPrefs {
            user_id: 2,
            style_tags: vec!["casual".to_string()],
            colors: vec!["black".to_string(), "blue".to_string()],
        });
        store.insert_peer_favorite(2, 100);

        Arc::new(store)
    }

    fn build_engine(store: Arc<InMemoryStore>) -> RecommendationEngine {
        RecommendationEngine::new(
            store.clone(),
            store.clone(),
            store.clone(),
            store.clone(),
            store,
            EngineConfig::default(),
        )
    }

    #[test]
    fn test_learn_preferences_from_store() {
        let engine = build_engine(build_test_store());
        let profile = engine.learn_preferences(1);

        assert_eq!(profile.favorite_colors[0], "black");
        assert!(profile.preferred_styles.contains("casual"));
        assert_eq!(profile.category_count("Shirt"), 1);
    }

    #[test]
    fn test_learn_preferences_degrades_on_failed_read() {
        struct FailingWardrobe;
        impl WardrobeRepository for FailingWardrobe {
            fn items_for_user(&self, _: UserId) -> Result<Vec<WardrobeItem>> {
                Err(DataAccessError::Unavailable {
                    source_name: "wardrobe".to_string(),
                })
            }
        }

        let store = build_test_store();
        let engine = RecommendationEngine::new(
            Arc::new(FailingWardrobe),
            store.clone(),
            store.clone(),
            store.clone(),
            store,
            EngineConfig::default(),
        );

        let profile = engine.learn_preferences(1);
        assert!(profile.favorite_colors.is_empty());
        assert!(profile.category_frequency.is_empty());
    }

    #[tokio::test]
    async fn test_recommend_items_scores_and_explains() {
        let store = build_test_store();
        let engine = build_engine(store.clone());
        let wardrobe = store.items_for_user(1).unwrap();

        let ranked = engine
            .recommend_for_season(1, &wardrobe, Season::Summer)
            .await;

        // Item 100: color 15 + brand 20 + style 10 + gap 10 + peer 15 + season 10
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].item_id, 100);
        assert_eq!(ranked[0].score, 80);
        assert_eq!(ranked[0].reasons.len(), 6);
        assert_eq!(ranked[0].confidence, 100);
    }

    #[tokio::test]
    async fn test_recommend_items_is_idempotent() {
        let store = build_test_store();
        let engine = build_engine(store.clone());
        let wardrobe = store.items_for_user(1).unwrap();

        let first = engine
            .recommend_for_season(1, &wardrobe, Season::Summer)
            .await;
        let second = engine
            .recommend_for_season(1, &wardrobe, Season::Summer)
            .await;

        let first_ids: Vec<ItemId> = first.iter().map(|r| r.item_id).collect();
        let second_ids: Vec<ItemId> = second.iter().map(|r| r.item_id).collect();
        assert_eq!(first_ids, second_ids);
        assert_eq!(
            first.iter().map(|r| r.score).collect::<Vec<_>>(),
            second.iter().map(|r| r.score).collect::<Vec<_>>()
        );
    }

    #[tokio::test]
    async fn test_recommend_items_degrades_on_catalog_failure() {
        struct FailingCatalog;
        impl CatalogRepository for FailingCatalog {
            fn active_items(&self, _: usize) -> Result<Vec<CatalogItem>> {
                Err(DataAccessError::Unavailable {
                    source_name: "catalog".to_string(),
                })
            }
        }

        let store = build_test_store();
        let engine = RecommendationEngine::new(
            store.clone(),
            store.clone(),
            Arc::new(FailingCatalog),
            store.clone(),
            store.clone(),
            EngineConfig::default(),
        );
        let wardrobe = store.items_for_user(1).unwrap();

        let ranked = engine
            .recommend_for_season(1, &wardrobe, Season::Summer)
            .await;
        assert!(ranked.is_empty());
    }

    #[tokio::test]
    async fn test_recommendations_survive_missing_peer_signal() {
        struct FailingPeers;
        impl PeerPreferencesRepository for FailingPeers {
            fn sample(&self, _: UserId, _: usize) -> Result<Vec<CondensedPeerPrefs>> {
                Err(DataAccessError::Unavailable {
                    source_name: "peers".to_string(),
                })
            }
        }

        let store = build_test_store();
        let engine = RecommendationEngine::new(
            store.clone(),
            store.clone(),
            store.clone(),
            Arc::new(FailingPeers),
            store.clone(),
            EngineConfig::default(),
        );
        let wardrobe = store.items_for_user(1).unwrap();

        let ranked = engine
            .recommend_for_season(1, &wardrobe, Season::Summer)
            .await;
        // Same item, minus the +15 peer signal
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].score, 65);
    }

    #[test]
    fn test_compose_outfits_uses_favorites_first() {
        let store = build_test_store();
        let engine = build_engine(store.clone());
        let wardrobe = store.items_for_user(1).unwrap();

        let suggestions = engine.compose_outfits(1, &wardrobe, None);
        assert!(!suggestions.is_empty());
        assert_eq!(suggestions[0].strategy, "favorites");
        assert_eq!(suggestions[0].item_ids(), [1, 2, 3]);
    }

    #[test]
    fn test_compose_outfits_excludes_unavailable_items() {
        let store = build_test_store();
        let engine = build_engine(store.clone());
        let mut wardrobe = store.items_for_user(1).unwrap();
        // Favorite shirt is in the laundry
        wardrobe[0].available = false;

        let suggestions = engine.compose_outfits(1, &wardrobe, None);
        for suggestion in &suggestions {
            assert!(!suggestion.item_ids().contains(&1));
        }
    }

    #[test]
    fn test_occasion_is_accepted_but_inert() {
        let store = build_test_store();
        let engine = build_engine(store.clone());
        let wardrobe = store.items_for_user(1).unwrap();

        let plain = engine.compose_outfits(1, &wardrobe, None);
        let with_occasion = engine.compose_outfits(1, &wardrobe, Some("wedding"));
        assert_eq!(plain.len(), with_occasion.len());
        for (a, b) in plain.iter().zip(&with_occasion) {
            assert_eq!(a.item_ids(), b.item_ids());
        }
    }
}
