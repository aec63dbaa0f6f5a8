//! Ability definitions and the oracle that serves them.
//!
//! Abilities are immutable content: the oracle owns the catalog, combatants
//! carry handles into it, and battle state never embeds a definition.

use crate::config::CombatConfig;
use crate::error::{CombatError, ErrorSeverity};
use crate::state::{AbilityHandle, StatusKind};

/// What an ability does when it resolves.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum AbilityEffect {
    /// Reduce the target's HP by the magnitude.
    Damage,
    /// Restore the caster's HP by the magnitude.
    Heal,
    /// Restore the caster's EP by the magnitude.
    EnergyGain,
    /// Attach the ability's status effect to the target.
    ApplyStatus,
    /// Attach the ability's status (default: Defense Up) to the caster.
    Defense,
    /// Attach the ability's status (default: Evading) to the caster.
    Evade,
    /// Attach the ability's status to the caster, or heal by the magnitude
    /// when no status is specified.
    Utility,
}

/// Validation errors for ability construction.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AbilityError {
    #[error("ability name must not be blank")]
    BlankName,

    #[error("EP cost {cost} exceeds the maximum of {max}")]
    CostOutOfRange { cost: u32, max: u32 },

    #[error("magnitude {value} exceeds the maximum of {max}")]
    MagnitudeOutOfRange { value: u32, max: u32 },

    #[error("effect kind apply_status requires a status kind")]
    MissingStatusKind,
}

impl CombatError for AbilityError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::BlankName => "ABILITY_BLANK_NAME",
            Self::CostOutOfRange { .. } => "ABILITY_COST_OUT_OF_RANGE",
            Self::MagnitudeOutOfRange { .. } => "ABILITY_MAGNITUDE_OUT_OF_RANGE",
            Self::MissingStatusKind => "ABILITY_MISSING_STATUS_KIND",
        }
    }
}

/// Immutable ability descriptor. Identity and equality are by handle.
///
/// Deliberately not `Deserialize`: construction must pass through
/// [`Ability::new`] so the content bounds always hold. Data files
/// deserialize into spec structs and convert.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Ability {
    handle: AbilityHandle,
    name: String,
    description: String,
    ep_cost: u32,
    effect: AbilityEffect,
    magnitude: u32,
    status: Option<StatusKind>,
}

impl Ability {
    /// Constructs a validated ability.
    ///
    /// EP cost and magnitude must respect the content bounds, and
    /// `ApplyStatus` abilities must name a status kind.
    pub fn new(
        handle: AbilityHandle,
        name: impl Into<String>,
        description: impl Into<String>,
        ep_cost: u32,
        effect: AbilityEffect,
        magnitude: u32,
        status: Option<StatusKind>,
    ) -> Result<Self, AbilityError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(AbilityError::BlankName);
        }
        if ep_cost > CombatConfig::MAX_EP_COST {
            return Err(AbilityError::CostOutOfRange {
                cost: ep_cost,
                max: CombatConfig::MAX_EP_COST,
            });
        }
        if magnitude > CombatConfig::MAX_EFFECT_VALUE {
            return Err(AbilityError::MagnitudeOutOfRange {
                value: magnitude,
                max: CombatConfig::MAX_EFFECT_VALUE,
            });
        }
        if effect == AbilityEffect::ApplyStatus && status.is_none() {
            return Err(AbilityError::MissingStatusKind);
        }
        Ok(Self {
            handle,
            name,
            description: description.into(),
            ep_cost,
            effect,
            magnitude,
            status,
        })
    }

    pub fn handle(&self) -> AbilityHandle {
        self.handle
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn ep_cost(&self) -> u32 {
        self.ep_cost
    }

    pub fn effect(&self) -> AbilityEffect {
        self.effect
    }

    pub fn magnitude(&self) -> u32 {
        self.magnitude
    }

    pub fn status(&self) -> Option<StatusKind> {
        self.status
    }
}

impl PartialEq for Ability {
    fn eq(&self, other: &Self) -> bool {
        self.handle == other.handle
    }
}

impl Eq for Ability {}

/// Oracle serving ability definitions.
pub trait AbilityOracle: Send + Sync {
    fn ability(&self, handle: AbilityHandle) -> Option<&Ability>;

    /// All definitions in this oracle, in handle order.
    fn all_abilities(&self) -> Vec<&Ability>;
}
