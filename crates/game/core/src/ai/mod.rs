//! Move selection for non-human combatants.
//!
//! A strategy is a pure function of the two combatants' current state plus
//! the injected environment; all randomness comes through the env's RNG
//! oracle with a caller-provided seed (use
//! [`TurnResolver::decision_seed`](crate::engine::TurnResolver::decision_seed)),
//! so bot battles replay identically under a fixed seed.

mod simple;
mod smart;

pub use simple::SimpleBot;
pub use smart::SmartBot;

use crate::action::Move;
use crate::env::{Ability, AbilityEffect, CombatEnv, ItemDefinition};
use crate::state::CombatantState;

pub trait AiStrategy: Send + Sync {
    /// Chooses a move for `actor` against `opponent`. Never blocks and never
    /// fails: with nothing affordable the universal Recharge is always legal.
    fn decide(
        &self,
        actor: &CombatantState,
        opponent: &CombatantState,
        env: &CombatEnv<'_>,
        seed: u64,
    ) -> Move;
}

/// Learned abilities the actor can pay for right now.
pub(crate) fn affordable_abilities<'a>(
    actor: &CombatantState,
    env: &CombatEnv<'a>,
) -> Vec<&'a Ability> {
    let Ok(oracle) = env.abilities() else {
        return Vec::new();
    };
    actor
        .abilities
        .iter()
        .filter_map(|&handle| oracle.ability(handle))
        .filter(|ability| ability.ep_cost() <= actor.ep.current())
        .collect()
}

/// Items currently in the actor's bag, deduplicated by handle.
pub(crate) fn usable_items<'a>(
    actor: &CombatantState,
    env: &CombatEnv<'a>,
) -> Vec<&'a ItemDefinition> {
    let Ok(oracle) = env.items() else {
        return Vec::new();
    };
    let mut seen = Vec::new();
    let mut items = Vec::new();
    for handle in actor.inventory.iter() {
        if seen.contains(&handle) {
            continue;
        }
        seen.push(handle);
        if let Some(item) = oracle.item(handle) {
            items.push(item);
        }
    }
    items
}

/// The cheapest EP cost across the actor's whole loadout (affordable or
/// not). Used to detect "too broke to act" situations.
pub(crate) fn cheapest_ability_cost(actor: &CombatantState, env: &CombatEnv<'_>) -> Option<u32> {
    let oracle = env.abilities().ok()?;
    actor
        .abilities
        .iter()
        .filter_map(|&handle| oracle.ability(handle))
        .map(Ability::ep_cost)
        .min()
}

/// True for abilities whose effect restores the caster's EP.
pub(crate) fn is_energy_ability(ability: &Ability) -> bool {
    ability.effect() == AbilityEffect::EnergyGain
}
