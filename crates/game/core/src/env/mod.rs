//! Read-only content environment consumed by the resolver and AI.
//!
//! Oracles expose ability/item definitions, rules tables, and randomness.
//! [`CombatEnv`] bundles them so the engine can reach everything it needs
//! without hard coupling to concrete implementations (content packs inject
//! their own — there are no singleton registries).

mod abilities;
mod error;
mod items;
mod rng;
mod tables;

pub use abilities::{Ability, AbilityEffect, AbilityError, AbilityOracle};
pub use error::OracleError;
pub use items::{ItemDefinition, ItemEffect, ItemOracle};
pub use rng::{PcgRng, RngOracle, compute_seed};
pub use tables::TablesOracle;

/// Aggregates the oracles required for battle resolution.
///
/// Every slot is optional so tests can run with exactly the content they
/// exercise; accessors return a typed [`OracleError`] when a required oracle
/// is missing.
#[derive(Clone, Copy)]
pub struct CombatEnv<'a> {
    abilities: Option<&'a dyn AbilityOracle>,
    items: Option<&'a dyn ItemOracle>,
    tables: Option<&'a dyn TablesOracle>,
    rng: Option<&'a dyn RngOracle>,
}

impl<'a> CombatEnv<'a> {
    pub fn new(
        abilities: Option<&'a dyn AbilityOracle>,
        items: Option<&'a dyn ItemOracle>,
        tables: Option<&'a dyn TablesOracle>,
        rng: Option<&'a dyn RngOracle>,
    ) -> Self {
        Self {
            abilities,
            items,
            tables,
            rng,
        }
    }

    pub fn with_all(
        abilities: &'a dyn AbilityOracle,
        items: &'a dyn ItemOracle,
        tables: &'a dyn TablesOracle,
        rng: &'a dyn RngOracle,
    ) -> Self {
        Self::new(Some(abilities), Some(items), Some(tables), Some(rng))
    }

    pub fn empty() -> Self {
        Self {
            abilities: None,
            items: None,
            tables: None,
            rng: None,
        }
    }

    /// Returns the ability oracle, or an error if not provided.
    pub fn abilities(&self) -> Result<&'a dyn AbilityOracle, OracleError> {
        self.abilities.ok_or(OracleError::AbilitiesNotAvailable)
    }

    /// Returns the item oracle, or an error if not provided.
    pub fn items(&self) -> Result<&'a dyn ItemOracle, OracleError> {
        self.items.ok_or(OracleError::ItemsNotAvailable)
    }

    /// Returns the tables oracle, or an error if not provided.
    pub fn tables(&self) -> Result<&'a dyn TablesOracle, OracleError> {
        self.tables.ok_or(OracleError::TablesNotAvailable)
    }

    /// Returns the RNG oracle, or an error if not provided.
    pub fn rng(&self) -> Result<&'a dyn RngOracle, OracleError> {
        self.rng.ok_or(OracleError::RngNotAvailable)
    }

    /// Balance configuration, falling back to defaults when no tables oracle
    /// is present. Status ticks and universal moves always have a config.
    pub fn combat_config(&self) -> crate::config::CombatConfig {
        self.tables
            .map(|tables| tables.combat_config().clone())
            .unwrap_or_default()
    }
}

impl core::fmt::Debug for CombatEnv<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("CombatEnv")
            .field("abilities", &self.abilities.is_some())
            .field("items", &self.items.is_some())
            .field("tables", &self.tables.is_some())
            .field("rng", &self.rng.is_some())
            .finish()
    }
}
