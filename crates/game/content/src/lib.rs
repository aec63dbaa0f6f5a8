//! Static content and data-file loaders for skirmish battles.
//!
//! This crate houses the built-in ability/item catalogs and rules tables,
//! plus RON/TOML loaders for external content packs:
//! - Ability catalog (data-driven via RON)
//! - Item catalog (data-driven via RON)
//! - Rules tables and balance config (data-driven via TOML)
//!
//! Content is consumed by the core's oracle traits and never appears in
//! battle state. All loaders convert through the validating skirmish-core
//! constructors.

pub mod abilities;
pub mod items;
pub mod tables;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use abilities::BuiltinAbilities;
pub use items::BuiltinItems;
pub use tables::DefaultTables;

#[cfg(feature = "loaders")]
pub use loaders::{AbilityLoader, ItemLoader, TablesLoader};
