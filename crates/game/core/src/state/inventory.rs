//! Combatant inventory: a bounded bag of single-use items plus at most one
//! equipped passive item.
//!
//! Invariant: the equipped handle, when present, always refers to an item
//! still in the bag. Consuming the last copy of the equipped item clears the
//! equip slot.

use arrayvec::ArrayVec;

use super::common::ItemHandle;
use crate::config::CombatConfig;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InventoryState {
    slots: ArrayVec<ItemHandle, { CombatConfig::MAX_INVENTORY_SLOTS }>,
    equipped: Option<ItemHandle>,
}

impl InventoryState {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn contains(&self, handle: ItemHandle) -> bool {
        self.slots.iter().any(|&h| h == handle)
    }

    /// Adds an item. Returns false if the bag is full.
    pub fn add(&mut self, handle: ItemHandle) -> bool {
        if self.slots.is_full() {
            return false;
        }
        self.slots.push(handle);
        true
    }

    /// Removes one copy of `handle`. Clears the equip slot if the last copy
    /// of the equipped item just left the bag. Returns false if absent.
    pub fn remove(&mut self, handle: ItemHandle) -> bool {
        let Some(index) = self.slots.iter().position(|&h| h == handle) else {
            return false;
        };
        self.slots.remove(index);
        if self.equipped == Some(handle) && !self.contains(handle) {
            self.equipped = None;
        }
        true
    }

    /// Equips `handle`. Returns false if the item is not in the bag.
    pub fn equip(&mut self, handle: ItemHandle) -> bool {
        if !self.contains(handle) {
            return false;
        }
        self.equipped = Some(handle);
        true
    }

    pub fn unequip(&mut self) {
        self.equipped = None;
    }

    pub fn equipped(&self) -> Option<ItemHandle> {
        self.equipped
    }

    pub fn iter(&self) -> impl Iterator<Item = ItemHandle> + '_ {
        self.slots.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}
