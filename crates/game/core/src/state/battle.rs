//! Battle value state: the two combatants, round counter, finished flag, and
//! the battle's combat log.
//!
//! `BattleState` is created by the resolver when a session starts, mutated
//! only by the resolver while the battle runs, and handed back to the caller
//! when it finishes.

use super::character::CombatantState;
use super::common::CombatantId;
use super::log::CombatLog;
use crate::action::Move;
use crate::error::{CombatError, ErrorSeverity};

/// Errors raised when assembling a battle from two combatants.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BattleInitError {
    /// A battle needs two distinct combatants.
    #[error("both slots refer to {0}")]
    SameCombatant(CombatantId),

    /// Both combatants must enter the battle alive.
    #[error("{0} has no HP left")]
    DeadCombatant(CombatantId),
}

impl CombatError for BattleInitError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::SameCombatant(_) => "BATTLE_SAME_COMBATANT",
            Self::DeadCombatant(_) => "BATTLE_DEAD_COMBATANT",
        }
    }
}

/// State of one running battle.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BattleState {
    combatants: [CombatantState; 2],
    /// 1-based round counter.
    pub round: u32,
    pub finished: bool,
    pub log: CombatLog,
}

impl BattleState {
    /// Creates a battle from two distinct, living combatants. The log starts
    /// cleared; the resolver writes the opening entry.
    pub fn new(a: CombatantState, b: CombatantState) -> Result<Self, BattleInitError> {
        if a.id == b.id {
            return Err(BattleInitError::SameCombatant(a.id));
        }
        for combatant in [&a, &b] {
            if !combatant.is_alive() {
                return Err(BattleInitError::DeadCombatant(combatant.id));
            }
        }
        Ok(Self {
            combatants: [a, b],
            round: 1,
            finished: false,
            log: CombatLog::new(),
        })
    }

    pub fn contains(&self, id: CombatantId) -> bool {
        self.combatants.iter().any(|c| c.id == id)
    }

    pub fn combatant(&self, id: CombatantId) -> Option<&CombatantState> {
        self.combatants.iter().find(|c| c.id == id)
    }

    pub fn combatant_mut(&mut self, id: CombatantId) -> Option<&mut CombatantState> {
        self.combatants.iter_mut().find(|c| c.id == id)
    }

    pub fn opponent_of(&self, id: CombatantId) -> Option<&CombatantState> {
        self.combatants.iter().find(|c| c.id != id)
    }

    /// Both combatants in slot order.
    pub fn combatants(&self) -> &[CombatantState; 2] {
        &self.combatants
    }

    pub fn combatants_mut(&mut self) -> &mut [CombatantState; 2] {
        &mut self.combatants
    }

    /// Simultaneous mutable access to a combatant and their opponent.
    pub fn pair_mut(
        &mut self,
        actor: CombatantId,
    ) -> Option<(&mut CombatantState, &mut CombatantState)> {
        let actor_slot = self.combatants.iter().position(|c| c.id == actor)?;
        let [a, b] = &mut self.combatants;
        Some(if actor_slot == 0 { (a, b) } else { (b, a) })
    }

    /// Runs turn-start status ticks for both combatants, in slot order.
    pub(crate) fn tick_statuses_turn_start(&mut self, config: &crate::config::CombatConfig) {
        let log = &mut self.log;
        for combatant in &mut self.combatants {
            combatant.tick_statuses_turn_start(config, log);
        }
    }

    /// Runs turn-end status ticks for both combatants, in slot order.
    pub(crate) fn tick_statuses_turn_end(&mut self) {
        for combatant in &mut self.combatants {
            combatant.tick_statuses_turn_end();
        }
    }

    /// Executes one move with actor/target oriented around `actor_id`,
    /// narrating into this battle's log.
    pub(crate) fn resolve_move(
        &mut self,
        actor_id: CombatantId,
        chosen: &Move,
        env: &crate::env::CombatEnv<'_>,
    ) -> Result<(), crate::action::MoveError> {
        let actor_slot = self
            .combatants
            .iter()
            .position(|c| c.id == actor_id)
            .unwrap_or(0);
        let [a, b] = &mut self.combatants;
        let (actor, target) = if actor_slot == 0 { (a, b) } else { (b, a) };
        crate::action::execute_move(chosen, actor, target, env, &mut self.log)
    }

    /// The surviving combatant, if exactly one side still stands.
    pub fn survivor(&self) -> Option<&CombatantState> {
        match (self.combatants[0].is_alive(), self.combatants[1].is_alive()) {
            (true, false) => Some(&self.combatants[0]),
            (false, true) => Some(&self.combatants[1]),
            _ => None,
        }
    }
}

/// Per-round collection of pending moves, in submission order.
///
/// Cleared after every round execution. Submission order doubles as the
/// tie-break for equal-priority moves.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TurnSelection {
    submitted: Vec<(CombatantId, Move)>,
}

impl TurnSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_submitted(&self, id: CombatantId) -> bool {
        self.submitted.iter().any(|(c, _)| *c == id)
    }

    /// Records a selection. The caller guarantees the id is unique; at most
    /// two entries ever exist.
    pub fn record(&mut self, id: CombatantId, chosen: Move) {
        debug_assert!(!self.has_submitted(id));
        self.submitted.push((id, chosen));
    }

    pub fn is_complete(&self) -> bool {
        self.submitted.len() == 2
    }

    pub fn len(&self) -> usize {
        self.submitted.len()
    }

    pub fn is_empty(&self) -> bool {
        self.submitted.is_empty()
    }

    /// Drains the selections in submission order.
    pub fn take(&mut self) -> Vec<(CombatantId, Move)> {
        core::mem::take(&mut self.submitted)
    }

    pub fn clear(&mut self) {
        self.submitted.clear();
    }
}
