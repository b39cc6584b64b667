//! Outfit slots and the category-to-slot mapping table.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// One of the three roles every outfit must fill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Slot {
    Top,
    Bottom,
    Shoes,
}

impl Slot {
    /// Every slot, in fill order.
    pub const ALL: [Slot; 3] = [Slot::Top, Slot::Bottom, Slot::Shoes];
}

impl std::fmt::Display for Slot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Slot::Top => "top",
            Slot::Bottom => "bottom",
            Slot::Shoes => "shoes",
        };
        write!(f, "{}", name)
    }
}

/// Configurable mapping from catalog categories to outfit slots.
///
/// Lookups are case-insensitive. Categories with no mapping (bags,
/// accessories, ...) belong to no slot and are skipped by every
/// fill strategy rather than treated as an error.
#[derive(Debug, Clone)]
pub struct SlotMap {
    categories: HashMap<String, Slot>,
}

impl SlotMap {
    /// Empty mapping; every category is slotless until added.
    pub fn empty() -> Self {
        Self {
            categories: HashMap::new(),
        }
    }

    /// Map an additional category to a slot (builder pattern).
    pub fn with_category(mut self, category: &str, slot: Slot) -> Self {
        self.categories.insert(category.to_ascii_lowercase(), slot);
        self
    }

    /// The slot a category fills, if it fills one.
    pub fn slot_for(&self, category: &str) -> Option<Slot> {
        self.categories.get(&category.to_ascii_lowercase()).copied()
    }
}

impl Default for SlotMap {
    /// Stock taxonomy used by the shipped catalog.
    fn default() -> Self {
        let mut map = Self::empty();
        for category in ["top", "tops", "shirt", "t-shirt", "blouse", "sweater"] {
            map = map.with_category(category, Slot::Top);
        }
        for category in ["bottom", "bottoms", "pants", "jeans", "skirt", "shorts"] {
            map = map.with_category(category, Slot::Bottom);
        }
        for category in ["shoes", "sneakers", "boots", "sandals", "heels"] {
            map = map.with_category(category, Slot::Shoes);
        }
        map
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_taxonomy() {
        let map = SlotMap::default();
        assert_eq!(map.slot_for("Blouse"), Some(Slot::Top));
        assert_eq!(map.slot_for("JEANS"), Some(Slot::Bottom));
        assert_eq!(map.slot_for("sneakers"), Some(Slot::Shoes));
        assert_eq!(map.slot_for("Accessories"), None);
    }

    #[test]
    fn test_custom_category() {
        let map = SlotMap::default().with_category("Kimono", Slot::Top);
        assert_eq!(map.slot_for("kimono"), Some(Slot::Top));
    }
}
