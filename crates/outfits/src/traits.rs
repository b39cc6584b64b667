//! The strategy seam for outfit composition.
//!
//! Each strategy is one self-contained heuristic that either fills all
//! three slots from the pool it is given or contributes nothing at all.
//! Composition order between strategies affects list position only,
//! never suggestion content.

use serde::{Deserialize, Serialize};
use taste::UserPreferenceProfile;
use wardrobe_store::{ItemId, WardrobeItem};

use crate::slots::SlotMap;

/// A fully-filled outfit. Holding one item id per slot as separate
/// fields makes a partially-filled suggestion unrepresentable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutfitSuggestion {
    pub name: String,
    pub top: ItemId,
    pub bottom: ItemId,
    pub shoes: ItemId,
    /// Fixed per strategy
    pub confidence: u8,
    pub reasoning: String,
    /// Tag of the strategy that produced this suggestion
    pub strategy: &'static str,
}

impl OutfitSuggestion {
    /// The three item ids in slot order (top, bottom, shoes).
    pub fn item_ids(&self) -> [ItemId; 3] {
        [self.top, self.bottom, self.shoes]
    }
}

/// Core trait for outfit fill strategies.
///
/// `Send + Sync` so composition can run wherever the engine fans out.
/// Strategies are pure: no state survives between calls.
pub trait SlotFillStrategy: Send + Sync {
    /// Tag of this strategy (for logging and the suggestion's `strategy` field)
    fn name(&self) -> &'static str;

    /// The fixed confidence this strategy's suggestions carry
    fn confidence(&self) -> u8;

    /// Propose one outfit from the available pool.
    ///
    /// Returns `None` whenever any slot cannot be filled; "no outfit
    /// found" is a valid, non-exceptional result.
    fn propose(
        &self,
        pool: &[WardrobeItem],
        profile: &UserPreferenceProfile,
        slots: &SlotMap,
    ) -> Option<OutfitSuggestion>;
}
