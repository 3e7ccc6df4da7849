//! Meal catalog loader.

use std::path::Path;

use anyhow::Context;
use serde::Deserialize;

use crate::MealCatalog;
use crate::loaders::{LoadResult, read_file};

/// On-disk shape of a catalog file.
///
/// ```toml
/// [[meals]]
/// name = "Pasta"
/// cuisine = "Italian"
/// price = 12.5
/// difficulty = "MED"
/// ```
#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    meals: Vec<MealEntry>,
}

#[derive(Debug, Deserialize)]
struct MealEntry {
    name: String,
    cuisine: String,
    price: f64,
    difficulty: String,
}

/// Loader for meal catalogs from TOML files.
pub struct CatalogLoader;

impl CatalogLoader {
    /// Load a catalog from a TOML file.
    ///
    /// Meals receive ids in file order, starting at 1.
    pub fn load(path: &Path) -> LoadResult<MealCatalog> {
        let content = read_file(path)?;
        Self::parse(&content).with_context(|| format!("Invalid catalog {}", path.display()))
    }

    /// Parse catalog TOML that is already in memory.
    pub fn parse(content: &str) -> LoadResult<MealCatalog> {
        let file: CatalogFile = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse catalog TOML: {}", e))?;

        let mut catalog = MealCatalog::new();
        for (index, entry) in file.meals.iter().enumerate() {
            catalog
                .create_meal(&entry.name, &entry.cuisine, entry.price, &entry.difficulty)
                .with_context(|| format!("meal #{} ('{}')", index + 1, entry.name))?;
        }
        Ok(catalog)
    }
}
