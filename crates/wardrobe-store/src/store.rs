//! In-memory store backing tests and the demo CLI.
//!
//! Production deployments put real data sources behind the repository
//! traits; this store keeps everything in HashMap/BTreeMap indices and
//! can be populated record by record or from a JSON fixture file.

use std::collections::{BTreeMap, HashMap, HashSet};
use std::path::Path;

use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{DataAccessError, Result};
use crate::repositories::{
    CatalogRepository, PeerFavoritesRepository, PeerPreferencesRepository,
    StylePreferencesRepository, WardrobeRepository,
};
use crate::types::{CatalogItem, CondensedPeerPrefs, ItemId, StyleSettings, UserId, WardrobeItem};

/// Ordering policy for peer candidate sampling.
///
/// The engine is deterministic for a fixed sample order; deployments that
/// want sampling fairness across the user base opt into `Randomized`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SampleOrder {
    /// Ascending user id; two identical calls see the identical pool.
    #[default]
    Deterministic,
    /// Shuffle the pool before applying the limit.
    Randomized,
}

/// In-memory implementation of all five repository traits.
pub struct InMemoryStore {
    /// Wardrobe items grouped by owner, insertion order preserved
    wardrobe: HashMap<UserId, Vec<WardrobeItem>>,
    /// Active catalog slice in catalog order
    catalog: Vec<CatalogItem>,
    /// Explicit style settings keyed by user
    settings: HashMap<UserId, StyleSettings>,
    /// Condensed peer records, sorted by user id for deterministic sampling
    peer_prefs: BTreeMap<UserId, CondensedPeerPrefs>,
    /// Item ids favorited by each user, insertion order preserved
    peer_favorites: HashMap<UserId, Vec<ItemId>>,
    sample_order: SampleOrder,
}

impl InMemoryStore {
    /// Creates a new, empty store with deterministic sampling.
    pub fn new() -> Self {
        Self {
            wardrobe: HashMap::new(),
            catalog: Vec::new(),
            settings: HashMap::new(),
            peer_prefs: BTreeMap::new(),
            peer_favorites: HashMap::new(),
            sample_order: SampleOrder::Deterministic,
        }
    }

    /// Configure the peer sampling order (default: deterministic).
    pub fn with_sample_order(mut self, order: SampleOrder) -> Self {
        self.sample_order = order;
        self
    }

    /// Load a store from a JSON fixture file.
    pub fn load_from_json(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        let fixture: StoreFixture =
            serde_json::from_str(&raw).map_err(|e| DataAccessError::Malformed {
                entity: "fixture".to_string(),
                reason: e.to_string(),
            })?;
        let store = Self::from_fixture(fixture);
        let (items, catalog, peers) = store.counts();
        debug!(
            "Loaded fixture from {}: {} wardrobe items, {} catalog items, {} peers",
            path.as_ref().display(),
            items,
            catalog,
            peers
        );
        Ok(store)
    }

    /// Build a store from an already-parsed fixture.
    pub fn from_fixture(fixture: StoreFixture) -> Self {
        let mut store = Self::new();
        for item in fixture.wardrobe {
            store.insert_wardrobe_item(item);
        }
        for item in fixture.catalog {
            store.insert_catalog_item(item);
        }
        for entry in fixture.settings {
            store.insert_settings(entry.user_id, entry.settings);
        }
        for prefs in fixture.peers {
            store.insert_peer_prefs(prefs);
        }
        for favorite in fixture.peer_favorites {
            store.insert_peer_favorite(favorite.user_id, favorite.item_id);
        }
        store
    }

    // Mutators - used when seeding the store

    /// Insert a wardrobe item under its owner
    pub fn insert_wardrobe_item(&mut self, item: WardrobeItem) {
        self.wardrobe.entry(item.owner).or_default().push(item);
    }

    /// Append an item to the active catalog slice
    pub fn insert_catalog_item(&mut self, item: CatalogItem) {
        self.catalog.push(item);
    }

    /// Set a user's explicit style settings
    pub fn insert_settings(&mut self, user_id: UserId, settings: StyleSettings) {
        self.settings.insert(user_id, settings);
    }

    /// Insert a condensed peer preference record
    pub fn insert_peer_prefs(&mut self, prefs: CondensedPeerPrefs) {
        self.peer_prefs.insert(prefs.user_id, prefs);
    }

    /// Record that a user favorited an item
    pub fn insert_peer_favorite(&mut self, user_id: UserId, item_id: ItemId) {
        self.peer_favorites.entry(user_id).or_default().push(item_id);
    }

    /// Get counts for debugging/validation
    pub fn counts(&self) -> (usize, usize, usize) {
        let total_items = self.wardrobe.values().map(|v| v.len()).sum();
        (total_items, self.catalog.len(), self.peer_prefs.len())
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl WardrobeRepository for InMemoryStore {
    fn items_for_user(&self, user_id: UserId) -> Result<Vec<WardrobeItem>> {
        Ok(self.wardrobe.get(&user_id).cloned().unwrap_or_default())
    }
}

impl StylePreferencesRepository for InMemoryStore {
    fn settings_for_user(&self, user_id: UserId) -> Result<Option<StyleSettings>> {
        Ok(self.settings.get(&user_id).cloned())
    }
}

impl CatalogRepository for InMemoryStore {
    fn active_items(&self, limit: usize) -> Result<Vec<CatalogItem>> {
        Ok(self.catalog.iter().take(limit).cloned().collect())
    }
}

impl PeerPreferencesRepository for InMemoryStore {
    fn sample(&self, exclude_user: UserId, limit: usize) -> Result<Vec<CondensedPeerPrefs>> {
        let mut pool: Vec<CondensedPeerPrefs> = self
            .peer_prefs
            .values()
            .filter(|p| p.user_id != exclude_user)
            .cloned()
            .collect();
        if self.sample_order == SampleOrder::Randomized {
            pool.shuffle(&mut rand::rng());
        }
        pool.truncate(limit);
        Ok(pool)
    }
}

impl PeerFavoritesRepository for InMemoryStore {
    fn favorites_by_users(&self, user_ids: &[UserId], limit: usize) -> Result<Vec<ItemId>> {
        let mut seen = HashSet::new();
        let mut favorites = Vec::new();
        'users: for user_id in user_ids {
            for &item_id in self.peer_favorites.get(user_id).into_iter().flatten() {
                if seen.insert(item_id) {
                    favorites.push(item_id);
                    if favorites.len() >= limit {
                        break 'users;
                    }
                }
            }
        }
        Ok(favorites)
    }
}

// =============================================================================
// JSON Fixture Shapes
// =============================================================================

/// Top-level shape of a JSON fixture file.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct StoreFixture {
    #[serde(default)]
    pub wardrobe: Vec<WardrobeItem>,
    #[serde(default)]
    pub catalog: Vec<CatalogItem>,
    #[serde(default)]
    pub settings: Vec<UserSettingsEntry>,
    #[serde(default)]
    pub peers: Vec<CondensedPeerPrefs>,
    #[serde(default)]
    pub peer_favorites: Vec<PeerFavoriteEntry>,
}

/// Style settings for one user in a fixture file.
#[derive(Debug, Serialize, Deserialize)]
pub struct UserSettingsEntry {
    pub user_id: UserId,
    #[serde(flatten)]
    pub settings: StyleSettings,
}

/// One favorited item in a fixture file.
#[derive(Debug, Serialize, Deserialize)]
pub struct PeerFavoriteEntry {
    pub user_id: UserId,
    pub item_id: ItemId,
}
