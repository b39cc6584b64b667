//! Color-coordination strategy: build an outfit around the user's
//! highest-weighted favorite color.

use taste::UserPreferenceProfile;
use wardrobe_store::WardrobeItem;

use crate::slots::{Slot, SlotMap};
use crate::strategies::first_for_slot;
use crate::traits::{OutfitSuggestion, SlotFillStrategy};

/// Filters the pool to items whose color contains the top favorite
/// color (case-insensitive substring, so "jet black" matches "black")
/// and fills the slots from that subset.
#[derive(Debug, Clone, Default)]
pub struct ColorCoordinationStrategy;

impl ColorCoordinationStrategy {
    pub fn new() -> Self {
        Self
    }
}

impl SlotFillStrategy for ColorCoordinationStrategy {
    fn name(&self) -> &'static str {
        "color-coordination"
    }

    fn confidence(&self) -> u8 {
        85
    }

    fn propose(
        &self,
        pool: &[WardrobeItem],
        profile: &UserPreferenceProfile,
        slots: &SlotMap,
    ) -> Option<OutfitSuggestion> {
        // Profile colors are stored lowercased
        let color = profile.top_color()?;

        let matching: Vec<&WardrobeItem> = pool
            .iter()
            .filter(|item| {
                item.color
                    .as_ref()
                    .is_some_and(|c| c.to_ascii_lowercase().contains(color))
            })
            .collect();

        let top = first_for_slot(&matching, Slot::Top, slots)?;
        let bottom = first_for_slot(&matching, Slot::Bottom, slots)?;
        let shoes = first_for_slot(&matching, Slot::Shoes, slots)?;

        Some(OutfitSuggestion {
            name: format!("Your {} Collection", capitalize(color)),
            top,
            bottom,
            shoes,
            confidence: self.confidence(),
            reasoning: format!("Everything here coordinates around {}", color),
            strategy: self.name(),
        })
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
