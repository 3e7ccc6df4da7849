//! Command-line entry point: pit two catalog meals against each other.
//!
//! ```bash
//! ARENA_CATALOG_PATH=meals.toml ARENA_STATS_PATH=stats.json \
//!     cargo run -p arena-cli -- "Pasta" "Sushi"
//! ```
mod config;

use std::sync::Arc;

use anyhow::{Context, Result, bail};
use arena_content::{CatalogLoader, ConfigLoader};
use arena_core::{BattleConfig, PcgRandom, StatsRecorder};
use arena_runtime::{
    Arena, ArenaConfig, ArenaHandle, FileStatsRepo, InMemoryStatsRepo, StatsRepository,
};
use config::CliConfig;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    setup_logging();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (first, second) = battle_pair(&args)?;

    let config = CliConfig::from_env();
    tracing::info!("Catalog: {}", config.catalog_path.display());

    let catalog = CatalogLoader::load(&config.catalog_path)?;
    let battle = match &config.config_path {
        Some(path) => ConfigLoader::load(path)?,
        None => BattleConfig::default(),
    };

    let repo: Arc<dyn StatsRepository> = match &config.stats_path {
        Some(path) => Arc::new(
            FileStatsRepo::open(path)
                .with_context(|| format!("Failed to open stats store {}", path.display()))?,
        ),
        None => Arc::new(InMemoryStatsRepo::new()),
    };
    let recorder: Arc<dyn StatsRecorder> = Arc::new(Arc::clone(&repo));

    let builder = Arena::builder()
        .config(ArenaConfig {
            battle,
            resolve_timeout: config.resolve_timeout,
        })
        .shared_stats(recorder);
    let builder = match config.seed {
        Some(seed) => {
            tracing::debug!("Using seeded draws: {}", seed);
            builder.rng(PcgRandom::new(seed))
        }
        None => builder,
    };
    let handle = ArenaHandle::new(builder.build()?);

    let mut names = std::collections::HashMap::new();
    for name in [first, second] {
        let meal = catalog.get_meal_by_name(name)?;
        names.insert(meal.id, meal.name.clone());
        handle.register(meal.to_combatant()).await?;
    }

    let winner = handle.resolve_battle().await?;
    let winner_name = names.get(&winner).map_or("<unknown>", String::as_str);
    println!("Winner: {winner_name}");

    for (id, name) in &names {
        if let Some(stats) = repo.stats(*id)? {
            println!(
                "  {:<24} battles {:>4}  wins {:>4}  win% {:>5.1}",
                name,
                stats.battles,
                stats.wins,
                stats.win_ratio() * 100.0
            );
        }
    }

    Ok(())
}

/// The two distinct meal names to battle.
fn battle_pair(args: &[String]) -> Result<(&str, &str)> {
    let [first, second] = args else {
        bail!("usage: meal-arena <meal name> <meal name>");
    };
    if first == second {
        bail!("a meal cannot battle itself: {first}");
    }
    Ok((first.as_str(), second.as_str()))
}

/// Setup logging to stderr, filtered by `RUST_LOG` (INFO by default).
fn setup_logging() {
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing::Level::INFO.into());

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
}
