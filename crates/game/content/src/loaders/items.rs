//! RON loader for item catalogs.

use std::path::Path;

use anyhow::Context;
use skirmish_core::env::{ItemDefinition, ItemEffect};
use skirmish_core::state::ItemHandle;

use super::LoadResult;

/// On-disk shape of one item entry.
///
/// ```ron
/// (
///     handle: 1,
///     name: "Healing Draught",
///     description: "Bitter, red, effective.",
///     effect: Heal(30),
/// )
/// ```
#[derive(Clone, Debug, serde::Deserialize)]
pub struct ItemSpec {
    pub handle: u16,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub effect: ItemEffect,
}

impl From<ItemSpec> for ItemDefinition {
    fn from(spec: ItemSpec) -> Self {
        ItemDefinition::new(
            ItemHandle(spec.handle),
            spec.name,
            spec.description,
            spec.effect,
        )
    }
}

pub struct ItemLoader;

impl ItemLoader {
    /// Loads an item catalog from a RON file.
    pub fn load(path: &Path) -> LoadResult<Vec<ItemDefinition>> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading item catalog {}", path.display()))?;
        Self::parse(&text).with_context(|| format!("parsing item catalog {}", path.display()))
    }

    /// Parses a catalog from RON text.
    pub fn parse(text: &str) -> LoadResult<Vec<ItemDefinition>> {
        let specs: Vec<ItemSpec> = ron::from_str(text).context("malformed RON")?;
        Ok(specs.into_iter().map(ItemDefinition::from).collect())
    }
}
