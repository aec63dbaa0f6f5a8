//! Oracle providing rules tables and balance configuration.
//!
//! Defines tunable mechanics (costs, tick damage, level thresholds), not
//! entity content — abilities and items have their own oracles.

use crate::config::CombatConfig;
use crate::leveling::LevelTable;

pub trait TablesOracle: Send + Sync {
    /// Balance knobs for move and status resolution.
    fn combat_config(&self) -> &CombatConfig;

    /// Level progression thresholds for the leveling service.
    fn level_table(&self) -> &LevelTable;
}
