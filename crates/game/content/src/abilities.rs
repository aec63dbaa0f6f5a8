//! Built-in ability catalog.
//!
//! Handles are stable: save files and loadouts reference them, so existing
//! entries keep their numbers and new abilities append.

use skirmish_core::env::{Ability, AbilityEffect, AbilityError, AbilityOracle};
use skirmish_core::state::{AbilityHandle, StatusKind};

/// Well-known handles for the built-in catalog.
pub mod handles {
    use skirmish_core::state::AbilityHandle;

    pub const SLASH: AbilityHandle = AbilityHandle(1);
    pub const ARCANE_BOLT: AbilityHandle = AbilityHandle(2);
    pub const MEND: AbilityHandle = AbilityHandle(3);
    pub const MEDITATE: AbilityHandle = AbilityHandle(4);
    pub const VENOM_STRIKE: AbilityHandle = AbilityHandle(5);
    pub const CONCUSSIVE_BLOW: AbilityHandle = AbilityHandle(6);
    pub const STONE_SKIN: AbilityHandle = AbilityHandle(7);
    pub const SMOKE_STEP: AbilityHandle = AbilityHandle(8);
    pub const AEGIS: AbilityHandle = AbilityHandle(9);
    pub const WARD: AbilityHandle = AbilityHandle(10);
    pub const HUNTERS_BRAND: AbilityHandle = AbilityHandle(11);
    pub const CRUSHING_BLOW: AbilityHandle = AbilityHandle(12);
}

/// The default ability oracle.
pub struct BuiltinAbilities {
    abilities: Vec<Ability>,
}

impl BuiltinAbilities {
    pub fn new() -> Result<Self, AbilityError> {
        use AbilityEffect::*;
        use handles::*;

        let abilities = vec![
            Ability::new(SLASH, "Slash", "A quick blade strike.", 5, Damage, 12, None)?,
            Ability::new(
                ARCANE_BOLT,
                "Arcane Bolt",
                "A crackling dart of force.",
                20,
                Damage,
                20,
                None,
            )?,
            Ability::new(MEND, "Mend", "Knit flesh and bone.", 10, Heal, 25, None)?,
            Ability::new(
                MEDITATE,
                "Meditate",
                "Draw breath and focus.",
                0,
                EnergyGain,
                15,
                None,
            )?,
            Ability::new(
                VENOM_STRIKE,
                "Venom Strike",
                "A coated edge that keeps cutting.",
                12,
                ApplyStatus,
                0,
                Some(StatusKind::Poisoned),
            )?,
            Ability::new(
                CONCUSSIVE_BLOW,
                "Concussive Blow",
                "Rings the bell of anyone it lands on.",
                18,
                ApplyStatus,
                0,
                Some(StatusKind::Stunned),
            )?,
            Ability::new(
                STONE_SKIN,
                "Stone Skin",
                "Harden against the next blows.",
                8,
                Defense,
                0,
                None,
            )?,
            Ability::new(
                SMOKE_STEP,
                "Smoke Step",
                "Be elsewhere when the blow lands.",
                8,
                Evade,
                0,
                None,
            )?,
            Ability::new(
                AEGIS,
                "Aegis",
                "Conjure a ward that eats one hit.",
                15,
                Utility,
                0,
                Some(StatusKind::Shielded),
            )?,
            Ability::new(
                WARD,
                "Ward",
                "A circle no affliction crosses.",
                15,
                Utility,
                0,
                Some(StatusKind::Immunity),
            )?,
            Ability::new(
                HUNTERS_BRAND,
                "Hunter's Brand",
                "Marked prey cannot slip away.",
                6,
                ApplyStatus,
                0,
                Some(StatusKind::Marked),
            )?,
            Ability::new(
                CRUSHING_BLOW,
                "Crushing Blow",
                "Slow, expensive, and final.",
                35,
                Damage,
                40,
                None,
            )?,
        ];
        Ok(Self { abilities })
    }

    /// Wraps an externally loaded catalog (see the `loaders` feature).
    pub fn from_catalog(abilities: Vec<Ability>) -> Self {
        Self { abilities }
    }
}

impl AbilityOracle for BuiltinAbilities {
    fn ability(&self, handle: AbilityHandle) -> Option<&Ability> {
        self.abilities.iter().find(|a| a.handle() == handle)
    }

    fn all_abilities(&self) -> Vec<&Ability> {
        self.abilities.iter().collect()
    }
}
