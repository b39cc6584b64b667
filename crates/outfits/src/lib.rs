//! # Outfits Crate
//!
//! Composes multi-slot outfit suggestions from a user's available
//! wardrobe. Every suggestion fills exactly one item per required slot
//! (top, bottom, shoes); a strategy that cannot fill all three
//! contributes nothing.
//!
//! ## Architecture
//! - [`Slot`] / [`SlotMap`]: the configurable category-to-slot taxonomy
//! - [`SlotFillStrategy`]: the trait each heuristic implements
//! - `strategies/`: favorites (95), rediscovery (75), color coordination (85)
//! - [`OutfitComposer`]: runs strategies in priority order, caps output at 5

pub mod composer;
pub mod slots;
pub mod strategies;
pub mod traits;

// Re-export main types
pub use composer::{ComposerConfig, OutfitComposer};
pub use slots::{Slot, SlotMap};
pub use strategies::{ColorCoordinationStrategy, FavoritesStrategy, RediscoveryStrategy};
pub use traits::{OutfitSuggestion, SlotFillStrategy};
