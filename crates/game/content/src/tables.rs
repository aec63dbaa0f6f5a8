//! Default rules tables: balance config and the level curve.

use skirmish_core::config::CombatConfig;
use skirmish_core::env::TablesOracle;
use skirmish_core::leveling::LevelTable;

/// The standard tables oracle. Content packs can construct one from loaded
/// data (see the `loaders` feature) or take the defaults.
pub struct DefaultTables {
    config: CombatConfig,
    levels: LevelTable,
}

impl DefaultTables {
    pub fn new(config: CombatConfig, levels: LevelTable) -> Self {
        Self { config, levels }
    }
}

impl Default for DefaultTables {
    fn default() -> Self {
        Self {
            config: CombatConfig::default(),
            levels: LevelTable::default(),
        }
    }
}

impl TablesOracle for DefaultTables {
    fn combat_config(&self) -> &CombatConfig {
        &self.config
    }

    fn level_table(&self) -> &LevelTable {
        &self.levels
    }
}
