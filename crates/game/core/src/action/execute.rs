//! Move execution: the single dispatch point that mutates combatants.
//!
//! Failure policy (see `crate::error`): anything wrong with the *submission*
//! was rejected before we get here, so the only `Err`s below are unresolved
//! handles or missing oracles. Everything that can go wrong *in* the round —
//! not enough EP, an item consumed earlier — fizzles softly: the move is
//! narrated as a failure and the round continues.

use super::{Move, MoveError};
use crate::config::CombatConfig;
use crate::env::{AbilityEffect, CombatEnv, ItemEffect};
use crate::state::{CombatLog, CombatantState, DamageOutcome, StatusKind};

/// Executes `chosen` for `actor` against `target`, appending narration.
pub fn execute_move(
    chosen: &Move,
    actor: &mut CombatantState,
    target: &mut CombatantState,
    env: &CombatEnv<'_>,
    log: &mut CombatLog,
) -> Result<(), MoveError> {
    let config = env.combat_config();
    match chosen {
        Move::Ability(handle) => {
            let ability = env
                .abilities()?
                .ability(*handle)
                .ok_or(MoveError::UnknownAbility(*handle))?
                .clone();
            apply_ability(&ability, actor, target, &config, log);
            Ok(())
        }
        Move::Item(handle) => {
            let item = env
                .items()?
                .item(*handle)
                .ok_or(MoveError::UnknownItem(*handle))?
                .clone();
            apply_item(&item, actor, target, log);
            Ok(())
        }
        Move::Defend => {
            apply_defend(actor, &config, log);
            Ok(())
        }
        Move::Recharge => {
            apply_recharge(actor, &config, log);
            Ok(())
        }
    }
}

fn apply_ability(
    ability: &crate::env::Ability,
    actor: &mut CombatantState,
    target: &mut CombatantState,
    config: &CombatConfig,
    log: &mut CombatLog,
) {
    // Upfront withdrawal: a short purse aborts the move before any other
    // mutation.
    if !actor.spend_ep(ability.ep_cost()) {
        tracing::warn!(
            actor = %actor.id,
            ability = ability.name(),
            ep = actor.ep.current(),
            cost = ability.ep_cost(),
            "move fizzled: insufficient EP"
        );
        log.narrate(format!(
            "{} tries to use {} but lacks the energy!",
            actor.name,
            ability.name()
        ));
        return;
    }

    log.narrate(format!("{} uses {}!", actor.name, ability.name()));

    match ability.effect() {
        AbilityEffect::Damage => {
            let outcome = target.take_damage(ability.magnitude(), config);
            narrate_damage(target, outcome, log);
        }
        AbilityEffect::Heal => {
            let healed = actor.heal(ability.magnitude());
            log.narrate(format!("{} recovers {healed} HP.", actor.name));
        }
        AbilityEffect::EnergyGain => {
            let gained = actor.gain_ep(ability.magnitude());
            log.narrate(format!("{} recovers {gained} EP.", actor.name));
        }
        AbilityEffect::ApplyStatus => match ability.status() {
            Some(kind) => attach_status(target, kind, log),
            // Unreachable for validated abilities; kept soft per policy.
            None => {
                tracing::warn!(ability = ability.name(), "apply_status ability without a status");
                log.narrate("...but nothing happens.".to_owned());
            }
        },
        AbilityEffect::Defense => {
            attach_status(actor, ability.status().unwrap_or(StatusKind::DefenseUp), log);
        }
        AbilityEffect::Evade => {
            attach_status(actor, ability.status().unwrap_or(StatusKind::Evading), log);
        }
        AbilityEffect::Utility => match ability.status() {
            Some(kind) => attach_status(actor, kind, log),
            None if ability.magnitude() > 0 => {
                let healed = actor.heal(ability.magnitude());
                log.narrate(format!("{} recovers {healed} HP.", actor.name));
            }
            None => {
                tracing::warn!(ability = ability.name(), "utility ability with no parameters");
                log.narrate("...but nothing happens.".to_owned());
            }
        },
    }
}

fn apply_item(
    item: &crate::env::ItemDefinition,
    actor: &mut CombatantState,
    target: &mut CombatantState,
    log: &mut CombatLog,
) {
    // The item must still be in the bag: it may have been consumed or traded
    // away since the move was chosen.
    if !actor.inventory.contains(item.handle) {
        tracing::warn!(actor = %actor.id, item = %item.handle, "move fizzled: item not in inventory");
        log.narrate(format!(
            "{} reaches for the {} but it is gone!",
            actor.name, item.name
        ));
        return;
    }

    log.narrate(format!("{} uses the {}.", actor.name, item.name));

    match item.effect {
        ItemEffect::Heal(amount) => {
            let healed = actor.heal(amount);
            log.narrate(format!("{} recovers {healed} HP.", actor.name));
        }
        ItemEffect::RestoreEnergy(amount) => {
            let gained = actor.gain_ep(amount);
            log.narrate(format!("{} recovers {gained} EP.", actor.name));
        }
        ItemEffect::Cleanse => {
            let debuffs: Vec<StatusKind> = actor
                .status_effects
                .iter()
                .map(|e| e.kind)
                .filter(|kind| kind.is_debuff())
                .collect();
            if debuffs.is_empty() {
                log.narrate(format!("{} feels no different.", actor.name));
            }
            for kind in debuffs {
                actor.remove_status(kind);
                log.narrate(format!("{} is cured of {kind}.", actor.name));
            }
        }
        ItemEffect::ApplyStatus(kind) => attach_status(target, kind, log),
    }

    // Single-use: consume the item and release the equip slot if this was
    // the last equipped copy.
    actor.inventory.remove(item.handle);
}

fn apply_defend(actor: &mut CombatantState, config: &CombatConfig, log: &mut CombatLog) {
    if !actor.spend_ep(config.defend_ep_cost) {
        tracing::warn!(actor = %actor.id, "defend fizzled: insufficient EP");
        log.narrate(format!(
            "{} tries to raise a guard but lacks the energy!",
            actor.name
        ));
        return;
    }
    log.narrate(format!("{} braces behind a raised guard.", actor.name));
    attach_status(actor, StatusKind::DefenseUp, log);
}

fn apply_recharge(actor: &mut CombatantState, config: &CombatConfig, log: &mut CombatLog) {
    let gained = actor.gain_ep(config.recharge_ep_gain);
    log.narrate(format!(
        "{} gathers energy, recovering {gained} EP.",
        actor.name
    ));
}

fn attach_status(who: &mut CombatantState, kind: StatusKind, log: &mut CombatLog) {
    if who.add_status(kind) {
        if kind.is_debuff() {
            log.narrate(format!("{} is {kind}!", who.name));
        } else {
            log.narrate(format!("{} gains {kind}.", who.name));
        }
    } else {
        log.narrate(format!("{} shrugs off the {kind} effect.", who.name));
    }
}

fn narrate_damage(target: &CombatantState, outcome: DamageOutcome, log: &mut CombatLog) {
    if outcome.evaded {
        log.narrate(format!("{} evades the blow!", target.name));
        return;
    }
    if outcome.absorbed > 0 {
        log.narrate(format!(
            "{}'s shield shatters, absorbing {} damage.",
            target.name, outcome.absorbed
        ));
    }
    log.narrate(format!("{} takes {} damage.", target.name, outcome.applied));
    if !target.is_alive() {
        log.narrate(format!("{} falls!", target.name));
    }
}
