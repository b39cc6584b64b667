//! Favorites strategy: dress the user in pieces they already marked
//! as favorites.

use taste::UserPreferenceProfile;
use wardrobe_store::WardrobeItem;

use crate::slots::{Slot, SlotMap};
use crate::strategies::first_for_slot;
use crate::traits::{OutfitSuggestion, SlotFillStrategy};

/// Fills every slot with the first available favorite.
///
/// Requires at least 3 favorite items spanning the three slots;
/// otherwise contributes nothing.
#[derive(Debug, Clone)]
pub struct FavoritesStrategy {
    min_favorites: usize,
}

impl FavoritesStrategy {
    pub fn new() -> Self {
        Self { min_favorites: 3 }
    }
}

impl Default for FavoritesStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl SlotFillStrategy for FavoritesStrategy {
    fn name(&self) -> &'static str {
        "favorites"
    }

    fn confidence(&self) -> u8 {
        95
    }

    fn propose(
        &self,
        pool: &[WardrobeItem],
        _profile: &UserPreferenceProfile,
        slots: &SlotMap,
    ) -> Option<OutfitSuggestion> {
        let favorites: Vec<&WardrobeItem> = pool.iter().filter(|item| item.is_favorite).collect();
        if favorites.len() < self.min_favorites {
            return None;
        }

        let top = first_for_slot(&favorites, Slot::Top, slots)?;
        let bottom = first_for_slot(&favorites, Slot::Bottom, slots)?;
        let shoes = first_for_slot(&favorites, Slot::Shoes, slots)?;

        Some(OutfitSuggestion {
            name: "Your Favorites".to_string(),
            top,
            bottom,
            shoes,
            confidence: self.confidence(),
            reasoning: "Built entirely from pieces you marked as favorites".to_string(),
            strategy: self.name(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: u32, category: &str, is_favorite: bool) -> WardrobeItem {
        WardrobeItem {
            id,
            owner: 1,
            category: category.to_string(),
            color: None,
            brand: None,
            is_favorite,
            wear_count: 0,
            last_worn: None,
            season: None,
            available: true,
        }
    }

    #[test]
    fn test_fills_all_slots_from_favorites() {
        let pool = vec![
            item(1, "Shirt", true),
            item(2, "Jeans", true),
            item(3, "Sneakers", true),
            item(4, "Shirt", false), // non-favorite, must not be picked
        ];
        let strategy = FavoritesStrategy::new();
        let suggestion = strategy
            .propose(&pool, &UserPreferenceProfile::new(1), &SlotMap::default())
            .unwrap();

        assert_eq!(suggestion.item_ids(), [1, 2, 3]);
        assert_eq!(suggestion.name, "Your Favorites");
        assert_eq!(suggestion.confidence, 95);
    }

    #[test]
    fn test_unfillable_slot_yields_nothing() {
        // Three favorites but no favorite shoes
        let pool = vec![
            item(1, "Shirt", true),
            item(2, "Jeans", true),
            item(3, "Blouse", true),
            item(4, "Sneakers", false),
        ];
        let strategy = FavoritesStrategy::new();
        assert!(strategy
            .propose(&pool, &UserPreferenceProfile::new(1), &SlotMap::default())
            .is_none());
    }

    #[test]
    fn test_too_few_favorites_yields_nothing() {
        let pool = vec![item(1, "Shirt", true), item(2, "Jeans", true)];
        let strategy = FavoritesStrategy::new();
        assert!(strategy
            .propose(&pool, &UserPreferenceProfile::new(1), &SlotMap::default())
            .is_none());
    }

    #[test]
    fn test_unslotted_favorites_are_ignored() {
        // An accessory counts toward the favorite total but fills no slot
        let pool = vec![
            item(1, "Shirt", true),
            item(2, "Jeans", true),
            item(3, "Sneakers", true),
            item(4, "Accessories", true),
        ];
        let strategy = FavoritesStrategy::new();
        let suggestion = strategy
            .propose(&pool, &UserPreferenceProfile::new(1), &SlotMap::default())
            .unwrap();
        assert!(!suggestion.item_ids().contains(&4));
    }
}
