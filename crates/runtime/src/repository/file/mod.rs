//! File-backed repository implementations.

mod stats;

pub use stats::FileStatsRepo;
