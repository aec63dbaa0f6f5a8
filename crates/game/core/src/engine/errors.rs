//! Resolver errors.
//!
//! Every variant is a validation failure: the triggering call is rejected
//! and already-committed battle state is untouched. The caller may retry
//! with a corrected submission.

use crate::action::MoveError;
use crate::error::{CombatError, ErrorSeverity};
use crate::state::{BattleInitError, CombatantId};

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BattleError {
    /// `start_battle` while a battle is already running.
    #[error("a battle is already in progress")]
    AlreadyActive,

    /// A submission arrived with no battle running.
    #[error("no active battle")]
    NoActiveBattle,

    /// The submitting combatant is not part of this battle.
    #[error("{0} is not part of this battle")]
    UnknownCombatant(CombatantId),

    /// One move per combatant per round.
    #[error("{0} already submitted a move this round")]
    AlreadySubmitted(CombatantId),

    /// The two combatants cannot form a battle.
    #[error(transparent)]
    Init(#[from] BattleInitError),

    /// The submitted move does not resolve against the environment.
    #[error(transparent)]
    Move(#[from] MoveError),
}

impl CombatError for BattleError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::AlreadyActive
            | Self::NoActiveBattle
            | Self::UnknownCombatant(_)
            | Self::AlreadySubmitted(_) => ErrorSeverity::Validation,
            Self::Init(inner) => inner.severity(),
            Self::Move(inner) => inner.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::AlreadyActive => "BATTLE_ALREADY_ACTIVE",
            Self::NoActiveBattle => "BATTLE_NOT_ACTIVE",
            Self::UnknownCombatant(_) => "BATTLE_UNKNOWN_COMBATANT",
            Self::AlreadySubmitted(_) => "BATTLE_ALREADY_SUBMITTED",
            Self::Init(inner) => inner.error_code(),
            Self::Move(inner) => inner.error_code(),
        }
    }
}
