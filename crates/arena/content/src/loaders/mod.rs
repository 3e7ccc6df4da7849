//! Content loaders for reading arena data from files.
//!
//! Catalogs and battle configuration are stored as TOML. Every meal read from
//! disk goes through [`MealCatalog::create_meal`](crate::MealCatalog::create_meal),
//! so file content obeys the same validation as meals created in code.

pub mod catalog;
pub mod config;

pub use catalog::CatalogLoader;
pub use config::ConfigLoader;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
