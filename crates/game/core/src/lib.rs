//! Deterministic turn-based combat rules for a tactics-style RPG duel.
//!
//! `skirmish-core` resolves a battle between exactly two combatants: each
//! side submits one [`Move`] per round, the [`engine::TurnResolver`] orders
//! and executes them, advances status-effect lifecycles, narrates everything
//! into a [`CombatLog`], and detects victory. All content (abilities, items,
//! rules tables, randomness) is injected through the oracle traits in
//! [`env`]; the crate holds no global state and replays identically under a
//! fixed seed.

pub mod action;
pub mod ai;
pub mod config;
pub mod engine;
pub mod env;
pub mod error;
pub mod leveling;
pub mod state;

pub use action::{Move, MoveError, execute_move};
pub use ai::{AiStrategy, SimpleBot, SmartBot};
pub use config::CombatConfig;
pub use engine::{
    BattleEndHook, BattleError, BattleReport, ResolverPhase, SubmitOutcome, TurnResolver,
};
pub use env::{
    Ability, AbilityEffect, AbilityError, AbilityOracle, CombatEnv, ItemDefinition, ItemEffect,
    ItemOracle, OracleError, PcgRng, RngOracle, TablesOracle, compute_seed,
};
pub use error::{CombatError, ErrorSeverity};
pub use leveling::{LevelTable, LevelingError, process_level_up, xp_for_victory};
pub use state::{
    AbilityHandle, BattleInitError, BattleState, CombatLog, CombatantFlags, CombatantId,
    CombatantState, DamageOutcome, InventoryState, ItemHandle, LogError, ResourceMeter,
    StatusEffect, StatusEffects, StatusKind, TurnSelection,
};
