//! Meal catalog and content loaders.
//!
//! The catalog owns validation of meal records (positive price, known
//! difficulty tier, unique name) and hands validated [`Combatant`]s to the
//! battle engine. With the `loaders` feature, catalogs and battle
//! configuration can be read from TOML files.
//!
//! [`Combatant`]: arena_core::Combatant
mod catalog;
mod error;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use catalog::{MealCatalog, MealRecord};
pub use error::CatalogError;

#[cfg(feature = "loaders")]
pub use loaders::{CatalogLoader, ConfigLoader, LoadResult};
