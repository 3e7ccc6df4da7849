//! CLI configuration read from the environment.
use std::env;
use std::path::PathBuf;
use std::time::Duration;

use arena_runtime::ArenaConfig;

/// Settings for a single command-line battle.
#[derive(Clone, Debug)]
pub struct CliConfig {
    /// TOML catalog of meals (`[[meals]]` entries).
    pub catalog_path: PathBuf,
    /// JSON stats store. Counters stay in memory when unset.
    pub stats_path: Option<PathBuf>,
    /// Optional TOML battle configuration.
    pub config_path: Option<PathBuf>,
    pub resolve_timeout: Duration,
    /// Seed for replayable draws. Entropy-backed draws when unset.
    pub seed: Option<u64>,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            catalog_path: PathBuf::from("meals.toml"),
            stats_path: None,
            config_path: None,
            resolve_timeout: ArenaConfig::DEFAULT_RESOLVE_TIMEOUT,
            seed: None,
        }
    }
}

impl CliConfig {
    /// Construct CLI configuration from environment variables.
    ///
    /// Environment variables:
    /// - `ARENA_CATALOG_PATH` - meal catalog (default: `meals.toml`)
    /// - `ARENA_STATS_PATH` - JSON stats file (default: in-memory)
    /// - `ARENA_CONFIG_PATH` - battle config TOML (default: built-in)
    /// - `ARENA_RESOLVE_TIMEOUT_MS` - resolution timeout in milliseconds (default: 5000)
    /// - `ARENA_SEED` - deterministic seed (default: none)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(path) = read_env::<PathBuf>("ARENA_CATALOG_PATH") {
            config.catalog_path = path;
        }
        config.stats_path = read_env("ARENA_STATS_PATH");
        config.config_path = read_env("ARENA_CONFIG_PATH");
        if let Some(ms) = read_env::<u64>("ARENA_RESOLVE_TIMEOUT_MS") {
            config.resolve_timeout = Duration::from_millis(ms.max(1));
        }
        config.seed = read_env("ARENA_SEED");

        config
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
