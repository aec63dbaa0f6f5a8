//! Combatant state and the mutation API the resolver drives.
//!
//! The roster layer owns characters between battles; during a battle the
//! resolver has exclusive write access and mutates combatants only through
//! the methods here, keeping the resource and status invariants intact.

use arrayvec::ArrayVec;
use bitflags::bitflags;

use super::common::{AbilityHandle, CombatantId};
use super::inventory::InventoryState;
use super::log::CombatLog;
use super::resources::ResourceMeter;
use super::status::{StatusEffect, StatusEffects, StatusKind};
use crate::config::CombatConfig;

bitflags! {
    /// Transient combat flags driven by status-effect lifecycles.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct CombatantFlags: u8 {
        /// Set while Stunned: the next chosen action is forcibly skipped.
        const SKIP_ACTION = 1 << 0;
    }
}

/// Result of routing damage through the defensive-status pipeline.
///
/// Narration needs to distinguish a dodge from a shield break from a plain
/// hit, so the pipeline reports what happened to every point of damage.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DamageOutcome {
    /// Raw damage before any mitigation.
    pub planned: u32,
    /// The attack missed entirely (Evading, not Marked).
    pub evaded: bool,
    /// Damage eaten by a shield (which is now consumed).
    pub absorbed: u32,
    /// Damage actually subtracted from HP.
    pub applied: u32,
}

/// A combatant's battle-relevant state.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CombatantState {
    pub id: CombatantId,
    pub name: String,
    pub hp: ResourceMeter,
    pub ep: ResourceMeter,
    pub level: u8,
    pub xp: u32,
    pub status_effects: StatusEffects,
    pub flags: CombatantFlags,
    /// Ability loadout: three class slots plus one race bonus slot.
    pub abilities: ArrayVec<AbilityHandle, { CombatConfig::MAX_ABILITY_SLOTS }>,
    pub inventory: InventoryState,
}

impl CombatantState {
    pub fn new(id: CombatantId, name: impl Into<String>, hp_max: u32, ep_max: u32) -> Self {
        Self {
            id,
            name: name.into(),
            hp: ResourceMeter::at_max(hp_max),
            ep: ResourceMeter::at_max(ep_max),
            level: 1,
            xp: 0,
            status_effects: StatusEffects::empty(),
            flags: CombatantFlags::empty(),
            abilities: ArrayVec::new(),
            inventory: InventoryState::empty(),
        }
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        !self.hp.is_empty()
    }

    /// True while a stun forces this combatant to skip its action.
    pub fn must_skip(&self) -> bool {
        self.flags.contains(CombatantFlags::SKIP_ACTION)
    }

    /// Adds an ability to the loadout. Returns false when all slots are taken.
    pub fn learn_ability(&mut self, handle: AbilityHandle) -> bool {
        if self.abilities.is_full() || self.abilities.contains(&handle) {
            return false;
        }
        self.abilities.push(handle);
        true
    }

    pub fn knows_ability(&self, handle: AbilityHandle) -> bool {
        self.abilities.contains(&handle)
    }

    // ========================================================================
    // Damage pipeline
    // ========================================================================

    /// Applies incoming damage through the defensive statuses:
    /// Evading (full miss, suppressed by Marked) -> DefenseUp (halved) ->
    /// Shielded (absorbs up to the shield value, then breaks) -> HP.
    pub fn take_damage(&mut self, amount: u32, config: &CombatConfig) -> DamageOutcome {
        let mut outcome = DamageOutcome {
            planned: amount,
            evaded: false,
            absorbed: 0,
            applied: 0,
        };

        if self.has_status(StatusKind::Evading) && !self.has_status(StatusKind::Marked) {
            outcome.evaded = true;
            return outcome;
        }

        let mut remaining = amount;
        if self.has_status(StatusKind::DefenseUp) {
            remaining /= 2;
        }

        if remaining > 0 && self.has_status(StatusKind::Shielded) {
            outcome.absorbed = remaining.min(config.shield_absorb);
            remaining -= outcome.absorbed;
            self.remove_status(StatusKind::Shielded);
        }

        outcome.applied = self.hp.deplete(remaining);
        outcome
    }

    /// Predicts what [`take_damage`](Self::take_damage) would apply, without
    /// mutating anything. Used by AI lethality checks.
    pub fn preview_damage(&self, amount: u32, config: &CombatConfig) -> u32 {
        if self.has_status(StatusKind::Evading) && !self.has_status(StatusKind::Marked) {
            return 0;
        }
        let mut remaining = amount;
        if self.has_status(StatusKind::DefenseUp) {
            remaining /= 2;
        }
        if remaining > 0 && self.has_status(StatusKind::Shielded) {
            remaining -= remaining.min(config.shield_absorb);
        }
        remaining.min(self.hp.current())
    }

    /// Restores HP, capped at max. Returns the amount actually healed.
    pub fn heal(&mut self, amount: u32) -> u32 {
        self.hp.restore(amount)
    }

    /// Withdraws EP atomically. Returns false (untouched) if short.
    pub fn spend_ep(&mut self, cost: u32) -> bool {
        self.ep.spend(cost)
    }

    /// Restores EP, capped at max. Returns the amount actually gained.
    pub fn gain_ep(&mut self, amount: u32) -> u32 {
        self.ep.restore(amount)
    }

    // ========================================================================
    // Status lifecycle
    // ========================================================================

    /// Attaches a status effect, running its on-attach side effects.
    ///
    /// Returns false when the effect was not attached: the target is immune,
    /// or the cap dropped it (soft limit).
    pub fn add_status(&mut self, kind: StatusKind) -> bool {
        if self.has_status(StatusKind::Immunity) {
            tracing::debug!(combatant = %self.id, status = %kind, "status blocked by immunity");
            return false;
        }
        if !self.status_effects.add(StatusEffect::new(kind)) {
            return false;
        }
        // On-attach side effects.
        match kind {
            StatusKind::Stunned => self.flags.insert(CombatantFlags::SKIP_ACTION),
            StatusKind::Poisoned
            | StatusKind::DefenseUp
            | StatusKind::Evading
            | StatusKind::Immunity
            | StatusKind::Shielded
            | StatusKind::Marked => {}
        }
        true
    }

    /// Detaches a status effect, running its on-remove cleanup.
    pub fn remove_status(&mut self, kind: StatusKind) -> bool {
        if !self.status_effects.remove(kind) {
            return false;
        }
        self.on_status_detached(kind);
        true
    }

    pub fn has_status(&self, kind: StatusKind) -> bool {
        self.status_effects.has(kind)
    }

    /// Runs the turn-start lifecycle over every active effect: poison damage,
    /// duration decrements, and the expiry sweep (with detach cleanup).
    pub fn tick_statuses_turn_start(&mut self, config: &CombatConfig, log: &mut CombatLog) {
        let name = self.name.clone();

        let mut poison_damage = 0;
        for effect in self.status_effects.iter_mut() {
            if effect.kind.is_use_boxed() {
                continue;
            }
            if effect.kind == StatusKind::Poisoned {
                poison_damage += config.poison_tick_damage;
            }
            effect.remaining = effect.remaining.saturating_sub(1);
        }

        if poison_damage > 0 {
            // Poison ignores the defensive pipeline.
            let lost = self.hp.deplete(poison_damage);
            log.narrate(format!("{name} suffers {lost} poison damage."));
            if !self.is_alive() {
                log.narrate(format!("{name} succumbs to the poison!"));
            }
        }

        for kind in self.status_effects.sweep_expired() {
            self.on_status_detached(kind);
            log.narrate(format!("{name} is no longer {kind}."));
        }
    }

    /// Turn-end lifecycle hook. Part of the status contract; no variant in
    /// the current set reacts to turn end.
    pub fn tick_statuses_turn_end(&mut self) {
        for effect in self.status_effects.iter() {
            match effect.kind {
                StatusKind::Stunned
                | StatusKind::Poisoned
                | StatusKind::DefenseUp
                | StatusKind::Evading
                | StatusKind::Immunity
                | StatusKind::Shielded
                | StatusKind::Marked => {}
            }
        }
    }

    fn on_status_detached(&mut self, kind: StatusKind) {
        match kind {
            StatusKind::Stunned => self.flags.remove(CombatantFlags::SKIP_ACTION),
            StatusKind::Poisoned
            | StatusKind::DefenseUp
            | StatusKind::Evading
            | StatusKind::Immunity
            | StatusKind::Shielded
            | StatusKind::Marked => {}
        }
    }
}
