//! Read-only repository traits the engine consumes.
//!
//! Persistence mechanics live behind these seams: the engine never
//! writes, never retries, and imposes no timeouts of its own. All
//! implementations must be `Send + Sync` so stages can fan out their
//! reads concurrently.

use crate::error::Result;
use crate::types::{CatalogItem, CondensedPeerPrefs, ItemId, StyleSettings, UserId, WardrobeItem};

/// Items a user owns.
pub trait WardrobeRepository: Send + Sync {
    fn items_for_user(&self, user_id: UserId) -> Result<Vec<WardrobeItem>>;
}

/// Explicit style settings a user saved, if any.
pub trait StylePreferencesRepository: Send + Sync {
    /// Returns `None` when the user never saved settings; that is not an error.
    fn settings_for_user(&self, user_id: UserId) -> Result<Option<StyleSettings>>;
}

/// The active catalog slice offered for scoring.
pub trait CatalogRepository: Send + Sync {
    /// At most `limit` items, in the catalog's own stable order.
    fn active_items(&self, limit: usize) -> Result<Vec<CatalogItem>>;
}

/// Condensed preference records for peer matching.
pub trait PeerPreferencesRepository: Send + Sync {
    /// Sample at most `limit` candidates, never including `exclude_user`.
    fn sample(&self, exclude_user: UserId, limit: usize) -> Result<Vec<CondensedPeerPrefs>>;
}

/// Items favorited by a set of users.
pub trait PeerFavoritesRepository: Send + Sync {
    /// Deduplicated item ids favorited by `user_ids`, capped at `limit`,
    /// in the order the users are given.
    fn favorites_by_users(&self, user_ids: &[UserId], limit: usize) -> Result<Vec<ItemId>>;
}
