use std::io::Write;

use arena_content::{CatalogLoader, ConfigLoader};
use arena_core::{BattleConfig, CombatantId, Difficulty};

const CATALOG: &str = r#"
[[meals]]
name = "Pasta"
cuisine = "Italian"
price = 12.5
difficulty = "MED"

[[meals]]
name = "Sushi"
cuisine = "Japanese"
price = 25.0
difficulty = "HIGH"
"#;

#[test]
fn catalog_file_round_trips_into_combatants() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(CATALOG.as_bytes()).unwrap();

    let catalog = CatalogLoader::load(file.path()).unwrap();
    assert_eq!(catalog.len(), 2);

    let sushi = catalog.get_meal_by_name("Sushi").unwrap();
    assert_eq!(sushi.id, CombatantId(2));
    assert_eq!(sushi.difficulty, Difficulty::High);

    let combatant = catalog.combatant(CombatantId(1)).unwrap();
    assert_eq!(combatant.name, "Pasta");
}

#[test]
fn catalog_entries_are_validated() {
    let bad = r#"
[[meals]]
name = "Cake"
cuisine = "Dessert"
price = 5.0
difficulty = "EASY"
"#;
    let err = CatalogLoader::parse(bad).unwrap_err();
    let message = format!("{err:#}");
    assert!(message.contains("Cake"), "{message}");
    assert!(message.contains("Invalid difficulty level: EASY"), "{message}");
}

#[test]
fn empty_catalog_is_allowed() {
    let catalog = CatalogLoader::parse("").unwrap();
    assert!(catalog.is_empty());
}

#[test]
fn missing_catalog_file_reports_path() {
    let err = CatalogLoader::load(std::path::Path::new("/definitely/not/here.toml")).unwrap_err();
    assert!(err.to_string().contains("/definitely/not/here.toml"));
}

#[test]
fn config_defaults_and_overrides() {
    assert_eq!(ConfigLoader::parse("").unwrap(), BattleConfig::default());

    let config = ConfigLoader::parse("upset_scale = 250.0").unwrap();
    assert_eq!(config.upset_scale, 250.0);

    assert!(ConfigLoader::parse("upset_scale = 0.0").is_err());
    assert!(ConfigLoader::parse("upset_scale = -1.0").is_err());
}
