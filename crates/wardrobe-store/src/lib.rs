//! # Wardrobe Store Crate
//!
//! Domain types and data-access seams for the recommendation engine:
//!
//! - Core records: [`WardrobeItem`], [`CatalogItem`], [`StyleSettings`],
//!   [`CondensedPeerPrefs`], and the [`Season`] bucket.
//! - [`DataAccessError`], the single error type for upstream read failures.
//! - The five read-only repository traits the engine consumes.
//! - [`InMemoryStore`], a HashMap-backed implementation of all five,
//!   used by tests and the demo CLI.

pub mod error;
pub mod repositories;
pub mod store;
pub mod types;

// Re-export commonly used types
pub use error::{DataAccessError, Result};
pub use repositories::{
    CatalogRepository, PeerFavoritesRepository, PeerPreferencesRepository,
    StylePreferencesRepository, WardrobeRepository,
};
pub use store::{InMemoryStore, SampleOrder, StoreFixture};
pub use types::{
    CatalogItem, CondensedPeerPrefs, ItemId, Season, StyleSettings, UserId, WardrobeItem,
};
