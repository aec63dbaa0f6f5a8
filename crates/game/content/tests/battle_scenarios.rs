//! End-to-end battle scenarios over the built-in content.

use skirmish_content::abilities::{BuiltinAbilities, handles};
use skirmish_content::items::BuiltinItems;
use skirmish_content::tables::DefaultTables;
use skirmish_core::Move;
use skirmish_core::ai::{AiStrategy, SimpleBot, SmartBot};
use skirmish_core::engine::{SubmitOutcome, TurnResolver};
use skirmish_core::env::{CombatEnv, PcgRng};
use skirmish_core::leveling::{LevelTable, process_level_up, xp_for_victory};
use skirmish_core::state::{CombatantId, CombatantState, StatusKind};

struct Fixtures {
    abilities: BuiltinAbilities,
    items: BuiltinItems,
    tables: DefaultTables,
    rng: PcgRng,
}

impl Fixtures {
    fn new() -> Self {
        Self {
            abilities: BuiltinAbilities::new().expect("built-in catalog is valid"),
            items: BuiltinItems::new(),
            tables: DefaultTables::default(),
            rng: PcgRng,
        }
    }

    fn env(&self) -> CombatEnv<'_> {
        CombatEnv::with_all(&self.abilities, &self.items, &self.tables, &self.rng)
    }
}

const RAGNAR: CombatantId = CombatantId(1);
const ELDA: CombatantId = CombatantId(2);

const BOT_LOADOUT: &[skirmish_core::state::AbilityHandle] = &[
    handles::SLASH,
    handles::ARCANE_BOLT,
    handles::MEND,
    handles::MEDITATE,
];

/// A level-1 warrior with the given loadout (at most the 3+1 slots).
fn warrior(
    id: CombatantId,
    name: &str,
    loadout: &[skirmish_core::state::AbilityHandle],
) -> CombatantState {
    let mut combatant = CombatantState::new(id, name, 100, 50);
    for &handle in loadout {
        assert!(combatant.learn_ability(handle), "loadout slot exhausted");
    }
    combatant
}

#[test]
fn defend_and_recharge_round() {
    let fixtures = Fixtures::new();
    let env = fixtures.env();

    let ragnar = warrior(RAGNAR, "Ragnar", &[]);
    let mut elda = warrior(ELDA, "Elda", &[]);
    elda.ep.deplete(10); // room to recharge into

    let mut resolver = TurnResolver::new(11);
    resolver.start_battle(ragnar, elda).unwrap();

    resolver.submit_move(RAGNAR, Move::Defend, &env).unwrap();
    let outcome = resolver.submit_move(ELDA, Move::Recharge, &env).unwrap();
    assert_eq!(outcome, SubmitOutcome::RoundResolved { round: 2 });

    let battle = resolver.battle().unwrap();
    let ragnar = battle.combatant(RAGNAR).unwrap();
    let elda = battle.combatant(ELDA).unwrap();
    assert!(ragnar.has_status(StatusKind::DefenseUp));
    assert_eq!(ragnar.ep.current(), 45);
    assert_eq!(elda.ep.current(), 45); // 40 + 5
    assert_eq!(battle.round, 2);
}

#[test]
fn arcane_bolt_without_the_energy_fizzles_softly() {
    let fixtures = Fixtures::new();
    let env = fixtures.env();

    let mut ragnar = warrior(RAGNAR, "Ragnar", &[handles::ARCANE_BOLT]);
    ragnar.ep.deplete(35); // 15 EP left; the bolt costs 20
    let elda = warrior(ELDA, "Elda", &[]);

    let mut resolver = TurnResolver::new(11);
    resolver.start_battle(ragnar, elda).unwrap();

    resolver
        .submit_move(RAGNAR, Move::Ability(handles::ARCANE_BOLT), &env)
        .unwrap();
    let outcome = resolver.submit_move(ELDA, Move::Recharge, &env).unwrap();

    // The round still completed.
    assert_eq!(outcome, SubmitOutcome::RoundResolved { round: 2 });
    let battle = resolver.battle().unwrap();
    assert_eq!(battle.combatant(RAGNAR).unwrap().ep.current(), 15);
    assert_eq!(battle.combatant(ELDA).unwrap().hp.current(), 100);
    assert!(
        battle
            .log
            .iter()
            .any(|entry| entry.contains("lacks the energy"))
    );
}

#[test]
fn lethal_hit_finishes_the_battle_and_feeds_the_reward_flow() {
    let fixtures = Fixtures::new();
    let env = fixtures.env();

    let ragnar = warrior(RAGNAR, "Ragnar", &[handles::CRUSHING_BLOW]);
    let mut elda = warrior(ELDA, "Elda", &[]);
    elda.hp.deplete(70); // 30 HP: Crushing Blow (40) is lethal

    let mut resolver = TurnResolver::new(11);
    resolver.start_battle(ragnar, elda).unwrap();

    resolver
        .submit_move(RAGNAR, Move::Ability(handles::CRUSHING_BLOW), &env)
        .unwrap();
    let outcome = resolver.submit_move(ELDA, Move::Recharge, &env).unwrap();

    let SubmitOutcome::Finished(report) = outcome else {
        panic!("expected a finished battle, got {outcome:?}");
    };
    assert_eq!(report.winner, Some(RAGNAR));
    assert!(report.battle.finished);

    // External reward flow: XP from the loser's pre-battle level.
    let winner = report.battle.combatant(RAGNAR).unwrap();
    let loser = report.battle.combatant(ELDA).unwrap();
    let xp = xp_for_victory(winner, loser).unwrap();
    assert_eq!(xp, 25 + 10 * 1);

    let mut winner = winner.clone();
    winner.xp += xp;
    let leveled = process_level_up(&mut winner, &LevelTable::default());
    assert!(!leveled); // 35 XP does not reach level 2
}

#[test]
fn poison_deals_five_damage_for_three_rounds() {
    let fixtures = Fixtures::new();
    let env = fixtures.env();

    let ragnar = warrior(RAGNAR, "Ragnar", &[handles::VENOM_STRIKE]);
    let elda = warrior(ELDA, "Elda", &[]);

    let mut resolver = TurnResolver::new(11);
    resolver.start_battle(ragnar, elda).unwrap();

    resolver
        .submit_move(RAGNAR, Move::Ability(handles::VENOM_STRIKE), &env)
        .unwrap();
    resolver.submit_move(ELDA, Move::Recharge, &env).unwrap();

    // Four more quiet rounds; the poison only lasts three of them.
    for _ in 0..4 {
        resolver.submit_move(RAGNAR, Move::Recharge, &env).unwrap();
        resolver.submit_move(ELDA, Move::Recharge, &env).unwrap();
    }

    let battle = resolver.battle().unwrap();
    let elda = battle.combatant(ELDA).unwrap();
    assert_eq!(elda.hp.current(), 100 - 3 * 5);
    assert!(!elda.has_status(StatusKind::Poisoned));
    let poison_entries = battle
        .log
        .iter()
        .filter(|entry| entry.contains("poison damage"))
        .count();
    assert_eq!(poison_entries, 3);
}

#[test]
fn stun_forces_exactly_two_skipped_turns() {
    let fixtures = Fixtures::new();
    let env = fixtures.env();

    let ragnar = warrior(RAGNAR, "Ragnar", &[handles::CONCUSSIVE_BLOW]);
    let mut elda = warrior(ELDA, "Elda", &[]);
    elda.ep.deplete(50); // track recharges precisely

    let mut resolver = TurnResolver::new(11);
    resolver.start_battle(ragnar, elda).unwrap();

    // Round 1: the stun lands before Elda's move (submission-order tie),
    // so her recharge is skipped.
    resolver
        .submit_move(RAGNAR, Move::Ability(handles::CONCUSSIVE_BLOW), &env)
        .unwrap();
    resolver.submit_move(ELDA, Move::Recharge, &env).unwrap();

    // Rounds 2 and 3: skipped again, then free.
    for _ in 0..2 {
        resolver.submit_move(RAGNAR, Move::Recharge, &env).unwrap();
        resolver.submit_move(ELDA, Move::Recharge, &env).unwrap();
    }

    let battle = resolver.battle().unwrap();
    let elda = battle.combatant(ELDA).unwrap();
    // Only the round-3 recharge went through.
    assert_eq!(elda.ep.current(), 5);
    assert!(!elda.has_status(StatusKind::Stunned));
    let skips = battle
        .log
        .iter()
        .filter(|entry| entry.contains("cannot act"))
        .count();
    assert_eq!(skips, 2);
}

fn run_bot_battle(seed: u64) -> (Option<CombatantId>, Vec<String>) {
    let fixtures = Fixtures::new();
    let env = fixtures.env();

    let mut resolver = TurnResolver::new(seed);
    resolver
        .start_battle(
            warrior(RAGNAR, "Ragnar", BOT_LOADOUT),
            warrior(ELDA, "Elda", BOT_LOADOUT),
        )
        .unwrap();

    let simple = SimpleBot;
    let smart = SmartBot;
    for _ in 0..200 {
        let battle = resolver.battle().expect("battle still running");
        let ragnar = battle.combatant(RAGNAR).unwrap().clone();
        let elda = battle.combatant(ELDA).unwrap().clone();

        let first = simple.decide(&ragnar, &elda, &env, resolver.decision_seed(RAGNAR, 0));
        resolver.submit_move(RAGNAR, first, &env).unwrap();
        let second = smart.decide(&elda, &ragnar, &env, resolver.decision_seed(ELDA, 0));
        match resolver.submit_move(ELDA, second, &env).unwrap() {
            SubmitOutcome::Finished(report) => {
                return (report.winner, report.battle.log.snapshot());
            }
            _ => continue,
        }
    }
    panic!("bot battle did not terminate");
}

#[test]
fn bot_battles_replay_identically_under_a_fixed_seed() {
    let (winner_a, log_a) = run_bot_battle(42);
    let (winner_b, log_b) = run_bot_battle(42);
    assert_eq!(winner_a, winner_b);
    assert_eq!(log_a, log_b);
}

#[test]
fn flash_powder_stuns_the_opponent() {
    let fixtures = Fixtures::new();
    let env = fixtures.env();

    let mut ragnar = warrior(RAGNAR, "Ragnar", &[]);
    ragnar
        .inventory
        .add(skirmish_content::items::handles::FLASH_POWDER);
    let elda = warrior(ELDA, "Elda", &[]);

    let mut resolver = TurnResolver::new(11);
    resolver.start_battle(ragnar, elda).unwrap();

    resolver
        .submit_move(
            RAGNAR,
            Move::Item(skirmish_content::items::handles::FLASH_POWDER),
            &env,
        )
        .unwrap();
    resolver.submit_move(ELDA, Move::Recharge, &env).unwrap();

    let battle = resolver.battle().unwrap();
    let ragnar = battle.combatant(RAGNAR).unwrap();
    let elda = battle.combatant(ELDA).unwrap();
    assert!(elda.has_status(StatusKind::Stunned));
    assert!(!ragnar
        .inventory
        .contains(skirmish_content::items::handles::FLASH_POWDER));
}

#[test]
fn battle_end_hook_drives_the_reward_flow() {
    use std::sync::{Arc, Mutex};

    struct RewardHook {
        awarded: Arc<Mutex<Option<(CombatantId, u32)>>>,
    }

    impl skirmish_core::engine::BattleEndHook for RewardHook {
        fn on_battle_end(
            &self,
            winner: &CombatantState,
            loser: &CombatantState,
            _log: &skirmish_core::state::CombatLog,
        ) {
            let xp = xp_for_victory(winner, loser).expect("distinct combatants");
            *self.awarded.lock().unwrap() = Some((winner.id, xp));
        }
    }

    let fixtures = Fixtures::new();
    let env = fixtures.env();

    let ragnar = warrior(RAGNAR, "Ragnar", &[handles::CRUSHING_BLOW]);
    let mut elda = warrior(ELDA, "Elda", &[]);
    elda.hp.deplete(70);

    let awarded = Arc::new(Mutex::new(None));
    let mut resolver = TurnResolver::new(11);
    resolver.add_hook(Box::new(RewardHook {
        awarded: Arc::clone(&awarded),
    }));
    resolver.start_battle(ragnar, elda).unwrap();

    resolver
        .submit_move(RAGNAR, Move::Ability(handles::CRUSHING_BLOW), &env)
        .unwrap();
    resolver.submit_move(ELDA, Move::Recharge, &env).unwrap();

    assert_eq!(*awarded.lock().unwrap(), Some((RAGNAR, 35)));
}
