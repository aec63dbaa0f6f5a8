//! Data-file loaders for content packs.
//!
//! Catalogs ship as RON (abilities, items) and rules tables as TOML. Every
//! loader deserializes into a spec type and converts through the validating
//! core constructors, so a malformed or out-of-bounds data file fails the
//! load instead of corrupting a battle later.

mod abilities;
mod items;
mod tables;

pub use abilities::{AbilityLoader, AbilitySpec};
pub use items::{ItemLoader, ItemSpec};
pub use tables::{TablesLoader, TablesSpec};

/// Loader result type carrying file/parse context.
pub type LoadResult<T> = anyhow::Result<T>;
