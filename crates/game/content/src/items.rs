//! Built-in item catalog. Handle numbering follows the same append-only rule
//! as the ability catalog.

use skirmish_core::env::{ItemDefinition, ItemEffect, ItemOracle};
use skirmish_core::state::{ItemHandle, StatusKind};

/// Well-known handles for the built-in catalog.
pub mod handles {
    use skirmish_core::state::ItemHandle;

    pub const HEALING_DRAUGHT: ItemHandle = ItemHandle(1);
    pub const ETHER_VIAL: ItemHandle = ItemHandle(2);
    pub const ANTIDOTE: ItemHandle = ItemHandle(3);
    pub const FLASH_POWDER: ItemHandle = ItemHandle(4);
}

/// The default item oracle.
pub struct BuiltinItems {
    items: Vec<ItemDefinition>,
}

impl BuiltinItems {
    pub fn new() -> Self {
        use handles::*;

        let items = vec![
            ItemDefinition::new(
                HEALING_DRAUGHT,
                "Healing Draught",
                "Bitter, red, effective.",
                ItemEffect::Heal(30),
            ),
            ItemDefinition::new(
                ETHER_VIAL,
                "Ether Vial",
                "Bottled second wind.",
                ItemEffect::RestoreEnergy(20),
            ),
            ItemDefinition::new(
                ANTIDOTE,
                "Antidote",
                "Purges poisons and worse.",
                ItemEffect::Cleanse,
            ),
            ItemDefinition::new(
                FLASH_POWDER,
                "Flash Powder",
                "A bang, a flash, a staggered foe.",
                ItemEffect::ApplyStatus(StatusKind::Stunned),
            ),
        ];
        Self { items }
    }

    /// Wraps an externally loaded catalog (see the `loaders` feature).
    pub fn from_catalog(items: Vec<ItemDefinition>) -> Self {
        Self { items }
    }
}

impl Default for BuiltinItems {
    fn default() -> Self {
        Self::new()
    }
}

impl ItemOracle for BuiltinItems {
    fn item(&self, handle: ItemHandle) -> Option<&ItemDefinition> {
        self.items.iter().find(|i| i.handle == handle)
    }

    fn all_items(&self) -> Vec<&ItemDefinition> {
        self.items.iter().collect()
    }
}
