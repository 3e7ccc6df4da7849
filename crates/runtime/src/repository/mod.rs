//! Repository layer for battle statistics.
//!
//! Repositories hold data that CHANGES as battles are fought: per-combatant
//! battle and win counters. Each repository implements the engine's
//! [`StatsRecorder`](arena_core::StatsRecorder) contract for writes and
//! [`StatsRepository`] for reads.

mod error;
mod file;
mod memory;
mod traits;

pub use error::{RepositoryError, Result};
pub use file::FileStatsRepo;
pub use memory::InMemoryStatsRepo;
pub use traits::{MealStats, StatsRepository};
pub(crate) use traits::ensure_live;
