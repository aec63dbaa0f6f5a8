//! Heuristic strategy.
//!
//! Priority chain, first match wins:
//! 1. heal when below a third of max HP and a healing option exists
//! 2. refill energy when too broke for the cheapest learned ability
//! 3. take a guaranteed-lethal attack
//! 4. strongest affordable attack (ties broken by the injected RNG)
//! 5. a defensive or evasive option
//! 6. an energy option when EP is not full
//! 7. Recharge

use super::{
    AiStrategy, affordable_abilities, cheapest_ability_cost, is_energy_ability, usable_items,
};
use crate::action::Move;
use crate::env::{Ability, AbilityEffect, CombatEnv, ItemEffect};
use crate::state::CombatantState;

#[derive(Clone, Copy, Debug, Default)]
pub struct SmartBot;

impl AiStrategy for SmartBot {
    fn decide(
        &self,
        actor: &CombatantState,
        opponent: &CombatantState,
        env: &CombatEnv<'_>,
        seed: u64,
    ) -> Move {
        let config = env.combat_config();
        let abilities = affordable_abilities(actor, env);
        let items = usable_items(actor, env);

        // 1. Emergency heal.
        if actor.hp.current() <= actor.hp.max() / 3 {
            if let Some(chosen) = best_heal(&abilities, &items) {
                return chosen;
            }
        }

        // 2. Refill when the whole loadout is unaffordable.
        if let Some(cheapest) = cheapest_ability_cost(actor, env) {
            if actor.ep.current() < cheapest {
                if let Some(chosen) = energy_option(&abilities, &items) {
                    return chosen;
                }
            }
        }

        // 3. Close out the battle when a kill is on the table.
        let attacks: Vec<&Ability> = abilities
            .iter()
            .copied()
            .filter(|a| a.effect() == AbilityEffect::Damage)
            .collect();
        for attack in &attacks {
            let predicted = opponent.preview_damage(attack.magnitude(), &config);
            if predicted > 0 && predicted >= opponent.hp.current() {
                return Move::Ability(attack.handle());
            }
        }

        // 4. Otherwise hit as hard as possible; break ties randomly.
        if let Some(max_damage) = attacks.iter().map(|a| a.magnitude()).max() {
            let strongest: Vec<&Ability> = attacks
                .iter()
                .copied()
                .filter(|a| a.magnitude() == max_damage)
                .collect();
            let index = match env.rng() {
                Ok(rng) => rng.pick_index(seed, strongest.len()),
                Err(_) => 0,
            };
            return Move::Ability(strongest[index].handle());
        }

        // 5. Nothing offensive: look for cover.
        if let Some(defensive) = abilities
            .iter()
            .find(|a| matches!(a.effect(), AbilityEffect::Defense | AbilityEffect::Evade))
        {
            return Move::Ability(defensive.handle());
        }
        if actor.ep.current() >= config.defend_ep_cost {
            return Move::Defend;
        }

        // 6. Bank energy for later rounds.
        if !actor.ep.is_full() {
            if let Some(chosen) = energy_option(&abilities, &items) {
                return chosen;
            }
        }

        // 7. Always legal.
        Move::Recharge
    }
}

/// Strongest healing option: abilities first, then items.
fn best_heal(abilities: &[&Ability], items: &[&crate::env::ItemDefinition]) -> Option<Move> {
    let ability_heal = abilities
        .iter()
        .filter(|a| a.effect() == AbilityEffect::Heal)
        .max_by_key(|a| a.magnitude());
    if let Some(ability) = ability_heal {
        return Some(Move::Ability(ability.handle()));
    }
    items
        .iter()
        .filter_map(|item| match item.effect {
            ItemEffect::Heal(amount) => Some((item.handle, amount)),
            _ => None,
        })
        .max_by_key(|&(_, amount)| amount)
        .map(|(handle, _)| Move::Item(handle))
}

/// Any EP-restoring option: abilities first, then items.
fn energy_option(abilities: &[&Ability], items: &[&crate::env::ItemDefinition]) -> Option<Move> {
    if let Some(ability) = abilities.iter().find(|a| is_energy_ability(a)) {
        return Some(Move::Ability(ability.handle()));
    }
    items
        .iter()
        .find(|item| matches!(item.effect, ItemEffect::RestoreEnergy(_)))
        .map(|item| Move::Item(item.handle))
}
