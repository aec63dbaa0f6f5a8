//! Stateless progression service: XP awards and level-ups.
//!
//! The threshold table is injected (usually from the tables oracle), never a
//! global. `xp_for_victory` and `process_level_up` are pure functions of
//! their inputs, usable from a battle-end hook or any external reward flow.

use crate::config::CombatConfig;
use crate::error::{CombatError, ErrorSeverity};
use crate::state::CombatantState;

/// Errors raised by the leveling service.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LevelingError {
    /// Winner and loser must be distinct combatants.
    #[error("winner and loser are the same combatant")]
    SameCombatant,

    /// A level table needs at least one threshold.
    #[error("level table is empty")]
    EmptyTable,

    /// Level 1 must start at zero cumulative XP.
    #[error("level table must start at 0 XP, found {0}")]
    NonZeroBase(u32),

    /// Thresholds must be strictly ascending.
    #[error("level table thresholds must ascend: {previous} >= {next}")]
    NonAscending { previous: u32, next: u32 },
}

impl CombatError for LevelingError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::SameCombatant => "LEVELING_SAME_COMBATANT",
            Self::EmptyTable => "LEVELING_EMPTY_TABLE",
            Self::NonZeroBase(_) => "LEVELING_NON_ZERO_BASE",
            Self::NonAscending { .. } => "LEVELING_NON_ASCENDING",
        }
    }
}

/// Ascending level thresholds: `thresholds[i]` is the minimum cumulative XP
/// for level `i + 1`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LevelTable {
    thresholds: Vec<u32>,
}

impl LevelTable {
    /// Validates and wraps a threshold list.
    pub fn new(thresholds: Vec<u32>) -> Result<Self, LevelingError> {
        let Some(&first) = thresholds.first() else {
            return Err(LevelingError::EmptyTable);
        };
        if first != 0 {
            return Err(LevelingError::NonZeroBase(first));
        }
        for pair in thresholds.windows(2) {
            if pair[0] >= pair[1] {
                return Err(LevelingError::NonAscending {
                    previous: pair[0],
                    next: pair[1],
                });
            }
        }
        Ok(Self { thresholds })
    }

    /// The highest level whose threshold is within `xp`.
    pub fn level_for_xp(&self, xp: u32) -> u8 {
        let reached = self
            .thresholds
            .iter()
            .take_while(|&&threshold| threshold <= xp)
            .count();
        reached.max(1) as u8
    }

    pub fn max_level(&self) -> u8 {
        self.thresholds.len() as u8
    }

    pub fn thresholds(&self) -> &[u32] {
        &self.thresholds
    }
}

impl Default for LevelTable {
    /// The standard five-level curve: 0 / 100 / 250 / 450 / 700.
    fn default() -> Self {
        Self {
            thresholds: vec![0, 100, 250, 450, 700],
        }
    }
}

/// XP awarded to `winner` for defeating `loser`:
/// `25 + 10 x loser.level`.
pub fn xp_for_victory(
    winner: &CombatantState,
    loser: &CombatantState,
) -> Result<u32, LevelingError> {
    if winner.id == loser.id {
        return Err(LevelingError::SameCombatant);
    }
    Ok(CombatConfig::XP_VICTORY_BASE + CombatConfig::XP_VICTORY_PER_LEVEL * loser.level as u32)
}

/// Raises the combatant to the highest level their XP affords.
///
/// Each level gained grants +10 max HP and +5 max EP; any level-up fully
/// restores both meters. Returns false (and mutates nothing) when the XP
/// does not reach a new level.
pub fn process_level_up(combatant: &mut CombatantState, table: &LevelTable) -> bool {
    let target = table.level_for_xp(combatant.xp);
    if target <= combatant.level {
        return false;
    }

    let gained = (target - combatant.level) as u32;
    combatant.hp.raise_max(gained * CombatConfig::LEVEL_UP_HP_BONUS);
    combatant.ep.raise_max(gained * CombatConfig::LEVEL_UP_EP_BONUS);
    combatant.hp.refill();
    combatant.ep.refill();
    combatant.level = target;
    tracing::debug!(combatant = %combatant.id, level = target, "level up");
    true
}
