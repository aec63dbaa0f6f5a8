//! TOML loader for rules tables.

use std::path::Path;

use anyhow::Context;
use skirmish_core::config::CombatConfig;
use skirmish_core::leveling::LevelTable;

use super::LoadResult;
use crate::tables::DefaultTables;

/// On-disk shape of the rules tables.
///
/// ```toml
/// level_thresholds = [0, 100, 250, 450, 700]
///
/// [combat]
/// defend_ep_cost = 5
/// recharge_ep_gain = 5
/// poison_tick_damage = 5
/// shield_absorb = 15
/// ```
#[derive(Clone, Debug, serde::Deserialize)]
pub struct TablesSpec {
    pub level_thresholds: Vec<u32>,
    #[serde(default)]
    pub combat: Option<CombatConfig>,
}

pub struct TablesLoader;

impl TablesLoader {
    /// Loads and validates rules tables from a TOML file.
    pub fn load(path: &Path) -> LoadResult<DefaultTables> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading rules tables {}", path.display()))?;
        Self::parse(&text).with_context(|| format!("parsing rules tables {}", path.display()))
    }

    /// Parses rules tables from TOML text.
    pub fn parse(text: &str) -> LoadResult<DefaultTables> {
        let spec: TablesSpec = toml::from_str(text).context("malformed TOML")?;
        let levels = LevelTable::new(spec.level_thresholds).context("invalid level table")?;
        Ok(DefaultTables::new(
            spec.combat.unwrap_or_default(),
            levels,
        ))
    }
}
