//! Runtime wiring for the battle engine.
//!
//! This crate wraps [`arena_core::BattleEngine`] in a thread-safe [`Arena`],
//! supplies production collaborators (an entropy-backed [`ThreadRandom`] and
//! stats repositories), and offers an async [`ArenaHandle`] for callers that
//! need non-blocking access or bounded latency.
//!
//! Modules are organized by responsibility:
//! - [`arena`] hosts the lock-guarded engine and its builder
//! - [`api`] exposes the error type and the async handle
//! - [`repository`] provides stats stores implementing the recorder contract
//! - [`random`] provides the production randomness source
pub mod api;
pub mod arena;
pub mod random;
pub mod repository;

pub use api::{ArenaHandle, Result, RuntimeError};
pub use arena::{Arena, ArenaBuilder, ArenaConfig};
pub use random::ThreadRandom;
pub use repository::{
    FileStatsRepo, InMemoryStatsRepo, MealStats, RepositoryError, StatsRepository,
};
