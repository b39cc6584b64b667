//! Rediscovery strategy: surface barely-worn pieces the user forgot
//! they own.

use taste::UserPreferenceProfile;
use wardrobe_store::WardrobeItem;

use crate::slots::{Slot, SlotMap};
use crate::strategies::first_for_slot;
use crate::traits::{OutfitSuggestion, SlotFillStrategy};

/// Fills slots from non-favorite items worn fewer than 3 times,
/// least-worn first. Shoes may fall back to the broader non-favorite
/// pool when no low-wear pair exists.
#[derive(Debug, Clone)]
pub struct RediscoveryStrategy {
    max_wear_count: u32,
}

impl RediscoveryStrategy {
    pub fn new() -> Self {
        Self { max_wear_count: 3 }
    }

    /// Configure the wear-count cutoff (default: 3)
    pub fn with_max_wear_count(mut self, max: u32) -> Self {
        self.max_wear_count = max;
        self
    }
}

impl Default for RediscoveryStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl SlotFillStrategy for RediscoveryStrategy {
    fn name(&self) -> &'static str {
        "rediscovery"
    }

    fn confidence(&self) -> u8 {
        75
    }

    fn propose(
        &self,
        pool: &[WardrobeItem],
        _profile: &UserPreferenceProfile,
        slots: &SlotMap,
    ) -> Option<OutfitSuggestion> {
        let non_favorites: Vec<&WardrobeItem> =
            pool.iter().filter(|item| !item.is_favorite).collect();

        let mut low_wear: Vec<&WardrobeItem> = non_favorites
            .iter()
            .copied()
            .filter(|item| item.wear_count < self.max_wear_count)
            .collect();
        // Stable: equal wear counts keep pool order
        low_wear.sort_by_key(|item| item.wear_count);

        let top = first_for_slot(&low_wear, Slot::Top, slots)?;
        let bottom = first_for_slot(&low_wear, Slot::Bottom, slots)?;
        let shoes = first_for_slot(&low_wear, Slot::Shoes, slots)
            .or_else(|| first_for_slot(&non_favorites, Slot::Shoes, slots))?;

        Some(OutfitSuggestion {
            name: "Rediscover Your Wardrobe".to_string(),
            top,
            bottom,
            shoes,
            confidence: self.confidence(),
            reasoning: "These pieces have barely been worn and deserve another look".to_string(),
            strategy: self.name(),
        })
    }
}
