//! RON loader for ability catalogs.

use std::path::Path;

use anyhow::Context;
use skirmish_core::env::{Ability, AbilityEffect};
use skirmish_core::state::{AbilityHandle, StatusKind};

use super::LoadResult;

/// On-disk shape of one ability entry.
///
/// ```ron
/// (
///     handle: 1,
///     name: "Slash",
///     description: "A quick blade strike.",
///     ep_cost: 5,
///     effect: Damage,
///     magnitude: 12,
///     status: None,
/// )
/// ```
#[derive(Clone, Debug, serde::Deserialize)]
pub struct AbilitySpec {
    pub handle: u16,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub ep_cost: u32,
    pub effect: AbilityEffect,
    #[serde(default)]
    pub magnitude: u32,
    #[serde(default)]
    pub status: Option<StatusKind>,
}

impl AbilitySpec {
    fn build(self) -> LoadResult<Ability> {
        let name = self.name.clone();
        Ability::new(
            AbilityHandle(self.handle),
            self.name,
            self.description,
            self.ep_cost,
            self.effect,
            self.magnitude,
            self.status,
        )
        .with_context(|| format!("invalid ability '{name}'"))
    }
}

pub struct AbilityLoader;

impl AbilityLoader {
    /// Loads and validates an ability catalog from a RON file.
    pub fn load(path: &Path) -> LoadResult<Vec<Ability>> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading ability catalog {}", path.display()))?;
        Self::parse(&text).with_context(|| format!("parsing ability catalog {}", path.display()))
    }

    /// Parses a catalog from RON text.
    pub fn parse(text: &str) -> LoadResult<Vec<Ability>> {
        let specs: Vec<AbilitySpec> = ron::from_str(text).context("malformed RON")?;
        specs.into_iter().map(AbilitySpec::build).collect()
    }
}
