//! Outfit fill strategies.

pub mod color_coordination;
pub mod favorites;
pub mod rediscovery;

pub use color_coordination::ColorCoordinationStrategy;
pub use favorites::FavoritesStrategy;
pub use rediscovery::RediscoveryStrategy;

use wardrobe_store::{ItemId, WardrobeItem};

use crate::slots::{Slot, SlotMap};

/// First item in the pool whose category maps to `slot`.
pub(crate) fn first_for_slot(
    pool: &[&WardrobeItem],
    slot: Slot,
    slots: &SlotMap,
) -> Option<ItemId> {
    pool.iter()
        .find(|item| slots.slot_for(&item.category) == Some(slot))
        .map(|item| item.id)
}
