//! In-memory repository implementations for tests and local runs.

mod stats;

pub use stats::InMemoryStatsRepo;
