//! Battle-end hooks: the seam between the resolver and external reward
//! flows (XP award, Hall-of-Fame ranking, persistence).
//!
//! Hooks observe the outcome; they cannot reach back into the finished
//! battle. Each registered hook fires exactly once per finished battle with
//! a decisive winner. A double knockout fires no hooks — there is no winner
//! to reward.

use crate::state::{CombatLog, CombatantState};

pub trait BattleEndHook: Send + Sync {
    fn on_battle_end(&self, winner: &CombatantState, loser: &CombatantState, log: &CombatLog);
}
