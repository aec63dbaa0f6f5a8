//! Move validation errors.
//!
//! These cover submit-time validation only. In-round failures (insufficient
//! EP, a consumed item) are soft: they become log narration, never `Err`.

use crate::env::OracleError;
use crate::error::{CombatError, ErrorSeverity};
use crate::state::{AbilityHandle, ItemHandle};

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MoveError {
    /// The handle does not resolve in the ability oracle.
    #[error("unknown ability {0}")]
    UnknownAbility(AbilityHandle),

    /// The ability exists but is not in the actor's loadout.
    #[error("{0} is not in the actor's loadout")]
    AbilityNotLearned(AbilityHandle),

    /// The handle does not resolve in the item oracle.
    #[error("unknown item {0}")]
    UnknownItem(ItemHandle),

    /// A required oracle is missing from the environment.
    #[error(transparent)]
    Oracle(#[from] OracleError),
}

impl CombatError for MoveError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::UnknownAbility(_) | Self::AbilityNotLearned(_) | Self::UnknownItem(_) => {
                ErrorSeverity::Validation
            }
            Self::Oracle(inner) => inner.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownAbility(_) => "MOVE_UNKNOWN_ABILITY",
            Self::AbilityNotLearned(_) => "MOVE_ABILITY_NOT_LEARNED",
            Self::UnknownItem(_) => "MOVE_UNKNOWN_ITEM",
            Self::Oracle(inner) => inner.error_code(),
        }
    }
}
