//! Turn resolution: the authoritative reducer for battle state.
//!
//! The [`TurnResolver`] owns the battle lifecycle:
//!
//! ```text
//! Idle --start_battle--> AwaitingMoves --both submitted--> Executing
//!          ^                   ^                              |
//!          |                   +---- round continues ---------+
//!          +------------------------ battle finished ---------+
//! ```
//!
//! `submit_move` is the only entry point that triggers a cascading round
//! execution; it runs to completion before returning, so no partial-round
//! state is ever observable. All randomness used by callers (AI decisions)
//! derives from the resolver's seed and executed-round nonce.

mod errors;
mod hook;

pub use errors::BattleError;
pub use hook::BattleEndHook;

use crate::action::Move;
use crate::env::{CombatEnv, compute_seed};
use crate::state::{BattleState, CombatantId, CombatantState, TurnSelection};

/// Result of a successful `submit_move` call.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SubmitOutcome {
    /// Move recorded; waiting for the other side.
    Awaiting,

    /// Both moves were in; the round executed and the battle continues.
    /// `round` is the upcoming round number.
    RoundResolved { round: u32 },

    /// The round executed and ended the battle. The resolver is Idle again;
    /// the caller owns the final battle state.
    Finished(BattleReport),
}

/// Terminal outcome of a finished battle.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BattleReport {
    /// `None` on a double knockout.
    pub winner: Option<CombatantId>,
    pub battle: BattleState,
}

/// Lifecycle phase, for UI state and submission gating.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResolverPhase {
    Idle,
    AwaitingMoves { submitted: usize },
}

/// Orders and executes each round's moves and detects battle end.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TurnResolver {
    battle: Option<BattleState>,
    selection: TurnSelection,
    battle_seed: u64,
    /// Executed-round counter; part of every derived decision seed.
    nonce: u64,
    #[cfg_attr(feature = "serde", serde(skip))]
    hooks: Vec<Box<dyn BattleEndHook>>,
}

impl TurnResolver {
    /// Creates an idle resolver. The seed fixes every AI tie-break for the
    /// battles this resolver runs.
    pub fn new(battle_seed: u64) -> Self {
        Self {
            battle: None,
            selection: TurnSelection::new(),
            battle_seed,
            nonce: 0,
            hooks: Vec::new(),
        }
    }

    /// Registers a battle-end observer (XP award, ranking, ...).
    pub fn add_hook(&mut self, hook: Box<dyn BattleEndHook>) {
        self.hooks.push(hook);
    }

    pub fn phase(&self) -> ResolverPhase {
        match &self.battle {
            None => ResolverPhase::Idle,
            Some(_) => ResolverPhase::AwaitingMoves {
                submitted: self.selection.len(),
            },
        }
    }

    pub fn battle(&self) -> Option<&BattleState> {
        self.battle.as_ref()
    }

    /// Owned copy of the running battle's log, if any.
    pub fn log_snapshot(&self) -> Option<Vec<String>> {
        self.battle.as_ref().map(|b| b.log.snapshot())
    }

    /// Deterministic seed for an AI decision this round. `context`
    /// separates independent rolls within one decision.
    pub fn decision_seed(&self, actor: CombatantId, context: u32) -> u64 {
        compute_seed(self.battle_seed, self.nonce, actor.0, context)
    }

    /// Begins a battle between two distinct, living combatants.
    ///
    /// The battle's log starts cleared and receives the opening entry.
    pub fn start_battle(
        &mut self,
        a: CombatantState,
        b: CombatantState,
    ) -> Result<(), BattleError> {
        if self.battle.is_some() {
            return Err(BattleError::AlreadyActive);
        }
        let mut battle = BattleState::new(a, b)?;
        let [first, second] = battle.combatants();
        let opening = format!("{} squares off against {}!", first.name, second.name);
        battle.log.clear();
        battle.log.narrate(opening);
        tracing::debug!(seed = self.battle_seed, "battle started");
        self.selection.clear();
        self.battle = Some(battle);
        Ok(())
    }

    /// Records one combatant's move for the current round.
    ///
    /// Once both sides have submitted, the round executes synchronously
    /// before this call returns. An `Err` leaves all state untouched; the
    /// caller may retry with a valid submission.
    pub fn submit_move(
        &mut self,
        actor: CombatantId,
        chosen: Move,
        env: &CombatEnv<'_>,
    ) -> Result<SubmitOutcome, BattleError> {
        let battle = self.battle.as_ref().ok_or(BattleError::NoActiveBattle)?;
        let combatant = battle
            .combatant(actor)
            .ok_or(BattleError::UnknownCombatant(actor))?;
        if self.selection.has_submitted(actor) {
            return Err(BattleError::AlreadySubmitted(actor));
        }
        chosen.validate(combatant, env)?;

        self.selection.record(actor, chosen);
        if !self.selection.is_complete() {
            return Ok(SubmitOutcome::Awaiting);
        }
        self.execute_round(env)
    }

    /// Resolves one round: status ticks, ordered move execution, termination.
    fn execute_round(&mut self, env: &CombatEnv<'_>) -> Result<SubmitOutcome, BattleError> {
        let battle = self.battle.as_mut().ok_or(BattleError::NoActiveBattle)?;
        let config = env.combat_config();
        tracing::debug!(round = battle.round, "executing round");

        battle.tick_statuses_turn_start(&config);

        // Priority descending; the sort is stable, so equal priorities keep
        // submission order (the documented tie-break).
        let mut queue = self.selection.take();
        queue.sort_by_key(|(_, chosen)| core::cmp::Reverse(chosen.priority()));

        for (actor_id, chosen) in &queue {
            let Some(actor) = battle.combatant(*actor_id) else {
                continue;
            };
            let target_alive = battle
                .opponent_of(*actor_id)
                .is_some_and(|opponent| opponent.is_alive());
            if !actor.is_alive() || !target_alive {
                tracing::debug!(actor = %actor_id, "pairing skipped: combatant down");
                continue;
            }
            if actor.must_skip() {
                let name = actor.name.clone();
                battle.log.narrate(format!("{name} is stunned and cannot act!"));
                continue;
            }
            battle.resolve_move(*actor_id, chosen, env)?;
        }

        battle.tick_statuses_turn_end();
        self.nonce += 1;

        let both_alive = battle.combatants().iter().all(CombatantState::is_alive);
        if both_alive {
            battle.round += 1;
            return Ok(SubmitOutcome::RoundResolved {
                round: battle.round,
            });
        }

        battle.finished = true;
        match battle.survivor() {
            Some(winner) => {
                let name = winner.name.clone();
                battle.log.narrate(format!("{name} is victorious!"));
            }
            None => battle.log.narrate("Both combatants collapse!".to_owned()),
        }

        // Terminal: hand the battle back to the caller and return to Idle.
        let battle = self
            .battle
            .take()
            .ok_or(BattleError::NoActiveBattle)?;
        let winner = battle.survivor().map(|w| w.id);
        if let Some(winner_id) = winner {
            let winner_state = battle.combatant(winner_id);
            let loser_state = battle.opponent_of(winner_id);
            if let (Some(winner_state), Some(loser_state)) = (winner_state, loser_state) {
                tracing::debug!(winner = %winner_id, "battle finished");
                for hook in &self.hooks {
                    hook.on_battle_end(winner_state, loser_state, &battle.log);
                }
            }
        } else {
            tracing::debug!("battle finished in a double knockout");
        }

        Ok(SubmitOutcome::Finished(BattleReport { winner, battle }))
    }
}

impl core::fmt::Debug for TurnResolver {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("TurnResolver")
            .field("battle", &self.battle)
            .field("selection", &self.selection)
            .field("battle_seed", &self.battle_seed)
            .field("nonce", &self.nonce)
            .field("hooks", &self.hooks.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::{Ability, AbilityEffect, AbilityOracle};
    use crate::state::{AbilityHandle, StatusKind};

    struct TestAbilities(Vec<Ability>);

    impl AbilityOracle for TestAbilities {
        fn ability(&self, handle: AbilityHandle) -> Option<&Ability> {
            self.0.iter().find(|a| a.handle() == handle)
        }

        fn all_abilities(&self) -> Vec<&Ability> {
            self.0.iter().collect()
        }
    }

    fn warrior(id: u32, name: &str) -> CombatantState {
        CombatantState::new(CombatantId(id), name, 100, 50)
    }

    fn damage_ability(handle: u16, magnitude: u32) -> Ability {
        Ability::new(
            AbilityHandle(handle),
            format!("Strike {handle}"),
            "",
            10,
            AbilityEffect::Damage,
            magnitude,
            None,
        )
        .unwrap()
    }

    #[test]
    fn submissions_require_an_active_battle() {
        let mut resolver = TurnResolver::new(7);
        let env = CombatEnv::empty();
        let err = resolver
            .submit_move(CombatantId(1), Move::Recharge, &env)
            .unwrap_err();
        assert_eq!(err, BattleError::NoActiveBattle);
    }

    #[test]
    fn unknown_combatants_are_rejected_without_corrupting_state() {
        let mut resolver = TurnResolver::new(7);
        resolver
            .start_battle(warrior(1, "Ragnar"), warrior(2, "Elda"))
            .unwrap();
        let env = CombatEnv::empty();

        let err = resolver
            .submit_move(CombatantId(9), Move::Recharge, &env)
            .unwrap_err();
        assert_eq!(err, BattleError::UnknownCombatant(CombatantId(9)));

        // The valid side can still play the round.
        assert_eq!(
            resolver
                .submit_move(CombatantId(1), Move::Recharge, &env)
                .unwrap(),
            SubmitOutcome::Awaiting
        );
    }

    #[test]
    fn duplicate_submission_is_rejected() {
        let mut resolver = TurnResolver::new(7);
        resolver
            .start_battle(warrior(1, "Ragnar"), warrior(2, "Elda"))
            .unwrap();
        let env = CombatEnv::empty();

        resolver
            .submit_move(CombatantId(1), Move::Recharge, &env)
            .unwrap();
        let err = resolver
            .submit_move(CombatantId(1), Move::Defend, &env)
            .unwrap_err();
        assert_eq!(err, BattleError::AlreadySubmitted(CombatantId(1)));
    }

    #[test]
    fn defend_and_recharge_round_advances_the_battle() {
        let mut resolver = TurnResolver::new(7);
        resolver
            .start_battle(warrior(1, "Ragnar"), warrior(2, "Elda"))
            .unwrap();
        let env = CombatEnv::empty();

        resolver
            .submit_move(CombatantId(1), Move::Defend, &env)
            .unwrap();
        let outcome = resolver
            .submit_move(CombatantId(2), Move::Recharge, &env)
            .unwrap();
        assert_eq!(outcome, SubmitOutcome::RoundResolved { round: 2 });

        let battle = resolver.battle().unwrap();
        let a = battle.combatant(CombatantId(1)).unwrap();
        let b = battle.combatant(CombatantId(2)).unwrap();
        assert!(a.has_status(StatusKind::DefenseUp));
        assert_eq!(a.ep.current(), 45);
        assert_eq!(b.ep.current(), 50); // was full; recharge capped
        assert_eq!(battle.round, 2);
    }

    #[test]
    fn defend_executes_before_the_attack() {
        let abilities = TestAbilities(vec![damage_ability(1, 40)]);
        let env = CombatEnv::new(Some(&abilities), None, None, None);

        let mut attacker = warrior(1, "Ragnar");
        attacker.learn_ability(AbilityHandle(1));
        let defender = warrior(2, "Elda");

        let mut resolver = TurnResolver::new(7);
        resolver.start_battle(attacker, defender).unwrap();

        // Attack submitted first; Defend still resolves first on priority.
        resolver
            .submit_move(CombatantId(1), Move::Ability(AbilityHandle(1)), &env)
            .unwrap();
        resolver
            .submit_move(CombatantId(2), Move::Defend, &env)
            .unwrap();

        let battle = resolver.battle().unwrap();
        let defender = battle.combatant(CombatantId(2)).unwrap();
        assert_eq!(defender.hp.current(), 100 - 40 / 2);
    }

    #[test]
    fn lethal_round_finishes_the_battle_and_idles_the_resolver() {
        let abilities = TestAbilities(vec![damage_ability(1, 100)]);
        let env = CombatEnv::new(Some(&abilities), None, None, None);

        let mut attacker = warrior(1, "Ragnar");
        attacker.learn_ability(AbilityHandle(1));

        let mut resolver = TurnResolver::new(7);
        resolver.start_battle(attacker, warrior(2, "Elda")).unwrap();

        resolver
            .submit_move(CombatantId(1), Move::Ability(AbilityHandle(1)), &env)
            .unwrap();
        let outcome = resolver
            .submit_move(CombatantId(2), Move::Recharge, &env)
            .unwrap();

        let SubmitOutcome::Finished(report) = outcome else {
            panic!("expected a finished battle, got {outcome:?}");
        };
        assert_eq!(report.winner, Some(CombatantId(1)));
        assert!(report.battle.finished);
        assert_eq!(resolver.phase(), ResolverPhase::Idle);
        assert!(report
            .battle
            .log
            .iter()
            .any(|entry| entry.contains("victorious")));
    }

    #[test]
    fn dead_combatants_move_is_skipped_in_the_same_round() {
        let abilities = TestAbilities(vec![damage_ability(1, 100), damage_ability(2, 10)]);
        let env = CombatEnv::new(Some(&abilities), None, None, None);

        let mut a = warrior(1, "Ragnar");
        a.learn_ability(AbilityHandle(1));
        let mut b = warrior(2, "Elda");
        b.learn_ability(AbilityHandle(2));

        let mut resolver = TurnResolver::new(7);
        resolver.start_battle(a, b).unwrap();

        // Submission order decides the tie: Ragnar's lethal hit lands first,
        // so Elda's counter never executes.
        resolver
            .submit_move(CombatantId(1), Move::Ability(AbilityHandle(1)), &env)
            .unwrap();
        let outcome = resolver
            .submit_move(CombatantId(2), Move::Ability(AbilityHandle(2)), &env)
            .unwrap();

        let SubmitOutcome::Finished(report) = outcome else {
            panic!("expected a finished battle");
        };
        let winner = report.battle.combatant(CombatantId(1)).unwrap();
        assert_eq!(winner.hp.current(), 100);
    }

    #[test]
    fn stunned_combatant_skips_their_move() {
        let env = CombatEnv::empty();
        let mut stunned = warrior(2, "Elda");
        stunned.add_status(StatusKind::Stunned);

        let mut resolver = TurnResolver::new(7);
        resolver.start_battle(warrior(1, "Ragnar"), stunned).unwrap();

        resolver
            .submit_move(CombatantId(1), Move::Recharge, &env)
            .unwrap();
        resolver
            .submit_move(CombatantId(2), Move::Defend, &env)
            .unwrap();

        let battle = resolver.battle().unwrap();
        let elda = battle.combatant(CombatantId(2)).unwrap();
        assert!(!elda.has_status(StatusKind::DefenseUp));
        assert_eq!(elda.ep.current(), 50);
        assert!(battle.log.iter().any(|e| e.contains("cannot act")));
    }

    #[test]
    fn decision_seed_changes_per_round_and_actor() {
        let mut resolver = TurnResolver::new(7);
        resolver
            .start_battle(warrior(1, "Ragnar"), warrior(2, "Elda"))
            .unwrap();
        let env = CombatEnv::empty();

        let before = resolver.decision_seed(CombatantId(1), 0);
        assert_ne!(before, resolver.decision_seed(CombatantId(2), 0));

        resolver
            .submit_move(CombatantId(1), Move::Recharge, &env)
            .unwrap();
        resolver
            .submit_move(CombatantId(2), Move::Recharge, &env)
            .unwrap();
        assert_ne!(before, resolver.decision_seed(CombatantId(1), 0));
    }
}
