//! Item definitions and the oracle that serves them.

use crate::state::{ItemHandle, StatusKind};

/// Oracle serving item definitions.
pub trait ItemOracle: Send + Sync {
    fn item(&self, handle: ItemHandle) -> Option<&ItemDefinition>;

    /// All definitions in this oracle, in handle order.
    fn all_items(&self) -> Vec<&ItemDefinition>;
}

/// Immutable single-use item descriptor.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemDefinition {
    pub handle: ItemHandle,
    pub name: String,
    pub description: String,
    pub effect: ItemEffect,
}

impl ItemDefinition {
    pub fn new(
        handle: ItemHandle,
        name: impl Into<String>,
        description: impl Into<String>,
        effect: ItemEffect,
    ) -> Self {
        Self {
            handle,
            name: name.into(),
            description: description.into(),
            effect,
        }
    }
}

/// What an item does when consumed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ItemEffect {
    /// Restore the user's HP.
    Heal(u32),

    /// Restore the user's EP.
    RestoreEnergy(u32),

    /// Strip all debuffs from the user.
    Cleanse,

    /// Attach a status effect to the opponent.
    ApplyStatus(StatusKind),
}
