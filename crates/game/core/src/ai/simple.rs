//! Uniform-random strategy.

use super::{AiStrategy, affordable_abilities, usable_items};
use crate::action::Move;
use crate::env::CombatEnv;
use crate::state::CombatantState;

/// Picks uniformly at random among everything currently usable: affordable
/// abilities plus items in the bag. Falls back to Recharge when broke and
/// empty-handed.
#[derive(Clone, Copy, Debug, Default)]
pub struct SimpleBot;

impl AiStrategy for SimpleBot {
    fn decide(
        &self,
        actor: &CombatantState,
        _opponent: &CombatantState,
        env: &CombatEnv<'_>,
        seed: u64,
    ) -> Move {
        let mut options: Vec<Move> = affordable_abilities(actor, env)
            .into_iter()
            .map(|ability| Move::Ability(ability.handle()))
            .collect();
        options.extend(
            usable_items(actor, env)
                .into_iter()
                .map(|item| Move::Item(item.handle)),
        );

        if options.is_empty() {
            return Move::Recharge;
        }
        match env.rng() {
            Ok(rng) => options[rng.pick_index(seed, options.len())],
            // No RNG injected: stay deterministic rather than guessing.
            Err(_) => options[0],
        }
    }
}
