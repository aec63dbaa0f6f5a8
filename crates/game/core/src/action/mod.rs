//! Battle actions: the closed move set and its execution pipeline.
//!
//! A move is data; execution is one exhaustive dispatch in
//! [`execute::execute_move`]. Ability and item moves carry handles into the
//! content oracles, the two universal moves carry nothing.

mod error;
mod execute;

pub use error::MoveError;
pub use execute::execute_move;

use crate::env::CombatEnv;
use crate::state::{AbilityHandle, CombatantState, ItemHandle};

/// One combatant's chosen action for a round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Move {
    /// Use an ability from the actor's loadout.
    Ability(AbilityHandle),

    /// Consume a single-use item from the actor's inventory.
    Item(ItemHandle),

    /// Universal: raise a guard (grants Defense Up) for a fixed EP cost.
    Defend,

    /// Universal: recover a fixed amount of EP. Free, cannot fail.
    Recharge,
}

impl Move {
    /// Execution priority; higher executes first within a round. Defend
    /// resolves before attacks so the guard exists when the blow lands.
    pub const fn priority(&self) -> i8 {
        match self {
            Self::Defend => 1,
            Self::Ability(_) | Self::Item(_) | Self::Recharge => 0,
        }
    }

    /// EP withdrawn up front when this move executes.
    pub fn ep_cost(&self, env: &CombatEnv<'_>) -> Result<u32, MoveError> {
        match self {
            Self::Ability(handle) => {
                let ability = env
                    .abilities()?
                    .ability(*handle)
                    .ok_or(MoveError::UnknownAbility(*handle))?;
                Ok(ability.ep_cost())
            }
            Self::Item(_) | Self::Recharge => Ok(0),
            Self::Defend => Ok(env.combat_config().defend_ep_cost),
        }
    }

    /// Display name for menus and narration.
    pub fn label(&self, env: &CombatEnv<'_>) -> Result<String, MoveError> {
        match self {
            Self::Ability(handle) => {
                let ability = env
                    .abilities()?
                    .ability(*handle)
                    .ok_or(MoveError::UnknownAbility(*handle))?;
                Ok(ability.name().to_owned())
            }
            Self::Item(handle) => {
                let item = env
                    .items()?
                    .item(*handle)
                    .ok_or(MoveError::UnknownItem(*handle))?;
                Ok(item.name.clone())
            }
            Self::Defend => Ok("Defend".to_owned()),
            Self::Recharge => Ok("Recharge".to_owned()),
        }
    }

    /// Display description for menus.
    pub fn description(&self, env: &CombatEnv<'_>) -> Result<String, MoveError> {
        match self {
            Self::Ability(handle) => {
                let ability = env
                    .abilities()?
                    .ability(*handle)
                    .ok_or(MoveError::UnknownAbility(*handle))?;
                Ok(ability.description().to_owned())
            }
            Self::Item(handle) => {
                let item = env
                    .items()?
                    .item(*handle)
                    .ok_or(MoveError::UnknownItem(*handle))?;
                Ok(item.description.clone())
            }
            Self::Defend => Ok("Raise a guard against the next blow.".to_owned()),
            Self::Recharge => Ok("Catch your breath and recover energy.".to_owned()),
        }
    }

    /// Submit-time validation: the move must resolve against the environment
    /// and, for abilities, sit in the actor's loadout. Affordability is NOT
    /// checked here — running out of EP is an in-round soft failure.
    pub fn validate(&self, actor: &CombatantState, env: &CombatEnv<'_>) -> Result<(), MoveError> {
        match self {
            Self::Ability(handle) => {
                env.abilities()?
                    .ability(*handle)
                    .ok_or(MoveError::UnknownAbility(*handle))?;
                if !actor.knows_ability(*handle) {
                    return Err(MoveError::AbilityNotLearned(*handle));
                }
                Ok(())
            }
            Self::Item(handle) => {
                env.items()?
                    .item(*handle)
                    .ok_or(MoveError::UnknownItem(*handle))?;
                Ok(())
            }
            Self::Defend | Self::Recharge => Ok(()),
        }
    }
}
