//! Core domain types for wardrobe and catalog data.
//!
//! This module defines the records the recommendation engine reads:
//! items a user owns, items in the shop catalog, explicit style settings,
//! and the condensed preference records exchanged for peer matching.

use chrono::{Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

// =============================================================================
// Type Aliases
// =============================================================================
// These make the domain clearer and prevent mixing up user IDs with item IDs

/// Unique identifier for a user
pub type UserId = u32;

/// Unique identifier for a wardrobe or catalog item
pub type ItemId = u32;

// =============================================================================
// Seasons
// =============================================================================

/// Season bucket for an item, plus `All` for garments worn year-round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Season {
    Spring,
    Summer,
    Fall,
    Winter,
    All,
}

impl Season {
    /// Map a calendar month (1-12) to its season bucket.
    ///
    /// Dec-Feb is winter, Mar-May spring, Jun-Aug summer, Sep-Nov fall.
    pub fn for_month(month: u32) -> Season {
        match month {
            12 | 1 | 2 => Season::Winter,
            3..=5 => Season::Spring,
            6..=8 => Season::Summer,
            _ => Season::Fall,
        }
    }

    /// Season bucket for the current UTC month.
    pub fn current() -> Season {
        Season::for_month(Utc::now().month())
    }

    /// Whether an item tagged with this season is wearable in `current`.
    ///
    /// `All` matches every bucket.
    pub fn matches(self, current: Season) -> bool {
        self == Season::All || self == current
    }
}

impl std::fmt::Display for Season {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Season::Spring => "spring",
            Season::Summer => "summer",
            Season::Fall => "fall",
            Season::Winter => "winter",
            Season::All => "all seasons",
        };
        write!(f, "{}", name)
    }
}

// =============================================================================
// Wardrobe and Catalog Items
// =============================================================================

/// An item a user owns.
///
/// Wear tracking (wear count, last worn, laundry state) is mutated by
/// actions outside this crate; the engine only reads these records.
/// Optional fields that are absent simply fail to trigger the signals
/// that would read them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WardrobeItem {
    pub id: ItemId,
    pub owner: UserId,
    pub category: String,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub brand: Option<String>,
    #[serde(default)]
    pub is_favorite: bool,
    #[serde(default)]
    pub wear_count: u32,
    #[serde(default)]
    pub last_worn: Option<NaiveDate>,
    #[serde(default)]
    pub season: Option<Season>,
    /// False while the item is unavailable, e.g. in the laundry.
    #[serde(default = "default_available")]
    pub available: bool,
}

fn default_available() -> bool {
    true
}

/// An item in the shop catalog.
///
/// Immutable snapshot read from the catalog source; not owned by any user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogItem {
    pub id: ItemId,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub brand: Option<String>,
    #[serde(default)]
    pub style_tags: Vec<String>,
    #[serde(default)]
    pub season: Option<Season>,
}

// =============================================================================
// Preference Records
// =============================================================================

/// Explicit style settings a user saved, if any.
///
/// Every field defaults to empty so a sparse or legacy record
/// deserializes to absent signals instead of failing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StyleSettings {
    #[serde(default)]
    pub preferred_styles: Vec<String>,
    #[serde(default)]
    pub favorite_colors: Vec<String>,
}

/// Condensed preference record for one peer candidate.
///
/// Only style tags and colors travel here, not full profiles,
/// to bound transfer cost when sampling a candidate pool.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CondensedPeerPrefs {
    pub user_id: UserId,
    #[serde(default)]
    pub style_tags: Vec<String>,
    #[serde(default)]
    pub colors: Vec<String>,
}
