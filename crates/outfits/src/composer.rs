//! The OutfitComposer runs fill strategies in priority order.
//!
//! ## Usage
//! ```ignore
//! let composer = OutfitComposer::standard();
//! let suggestions = composer.compose(&available_items, &profile);
//! ```
//!
//! Strategies are independent: composition order determines list
//! position only, never the content of any suggestion. A strategy that
//! cannot fill all three slots contributes zero suggestions.

use tracing::debug;

use taste::UserPreferenceProfile;
use wardrobe_store::WardrobeItem;

use crate::slots::SlotMap;
use crate::strategies::{ColorCoordinationStrategy, FavoritesStrategy, RediscoveryStrategy};
use crate::traits::{OutfitSuggestion, SlotFillStrategy};

/// Tunable constants for composition.
#[derive(Debug, Clone, Copy)]
pub struct ComposerConfig {
    /// Cap on the suggestion list
    pub max_suggestions: usize,
}

impl Default for ComposerConfig {
    fn default() -> Self {
        Self { max_suggestions: 5 }
    }
}

/// Composes outfit suggestions from a pool of available wardrobe items.
///
/// Stateless and single-pass: nothing survives between calls.
pub struct OutfitComposer {
    slots: SlotMap,
    strategies: Vec<Box<dyn SlotFillStrategy>>,
    config: ComposerConfig,
}

impl OutfitComposer {
    /// Create a composer with no strategies.
    pub fn new() -> Self {
        Self {
            slots: SlotMap::default(),
            strategies: Vec::new(),
            config: ComposerConfig::default(),
        }
    }

    /// The standard strategy stack, in priority order: favorites,
    /// rediscovery, color coordination.
    pub fn standard() -> Self {
        Self::new()
            .add_strategy(FavoritesStrategy::new())
            .add_strategy(RediscoveryStrategy::new())
            .add_strategy(ColorCoordinationStrategy::new())
    }

    /// Add a strategy to the end of the priority order (builder pattern).
    pub fn add_strategy(mut self, strategy: impl SlotFillStrategy + 'static) -> Self {
        self.strategies.push(Box::new(strategy));
        self
    }

    /// Replace the category-to-slot mapping table.
    pub fn with_slot_map(mut self, slots: SlotMap) -> Self {
        self.slots = slots;
        self
    }

    /// Configure composition constants.
    pub fn with_config(mut self, config: ComposerConfig) -> Self {
        self.config = config;
        self
    }

    /// Run every strategy against the pool and collect what they fill.
    ///
    /// `pool` must already be restricted to available items; callers
    /// exclude anything in the laundry upstream. An empty result is a
    /// valid outcome, never an error.
    pub fn compose(
        &self,
        pool: &[WardrobeItem],
        profile: &UserPreferenceProfile,
    ) -> Vec<OutfitSuggestion> {
        let mut suggestions = Vec::new();
        for strategy in &self.strategies {
            match strategy.propose(pool, profile, &self.slots) {
                Some(suggestion) => {
                    debug!("Strategy {} filled an outfit", strategy.name());
                    suggestions.push(suggestion);
                }
                None => {
                    debug!("Strategy {} could not fill all slots", strategy.name());
                }
            }
            if suggestions.len() >= self.config.max_suggestions {
                break;
            }
        }
        suggestions
    }
}

impl Default for OutfitComposer {
    fn default() -> Self {
        Self::new()
    }
}
