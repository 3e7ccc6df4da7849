//! Cloneable async façade over an [`Arena`].
//!
//! Every call runs the blocking arena operation on tokio's blocking pool, so
//! async callers never stall their executor. Battle resolution is bounded by
//! [`ArenaConfig::resolve_timeout`](crate::ArenaConfig::resolve_timeout).
use std::sync::Arc;
use std::time::Duration;

use arena_core::{Combatant, CombatantId};

use super::errors::{Result, RuntimeError};
use crate::arena::Arena;

/// Client-facing handle to interact with an arena.
#[derive(Clone)]
pub struct ArenaHandle {
    arena: Arc<Arena>,
    resolve_timeout: Duration,
}

impl ArenaHandle {
    pub fn new(arena: Arena) -> Self {
        Self::from_shared(Arc::new(arena))
    }

    pub fn from_shared(arena: Arc<Arena>) -> Self {
        let resolve_timeout = arena.config().resolve_timeout;
        Self {
            arena,
            resolve_timeout,
        }
    }

    /// The arena behind this handle, for synchronous access.
    pub fn arena(&self) -> &Arc<Arena> {
        &self.arena
    }

    async fn run_blocking<T, F>(&self, op: F) -> Result<T>
    where
        T: Send + 'static,
        F: FnOnce(&Arena) -> Result<T> + Send + 'static,
    {
        let arena = Arc::clone(&self.arena);
        tokio::task::spawn_blocking(move || op(&arena))
            .await
            .map_err(RuntimeError::WorkerJoin)?
    }

    pub async fn register(&self, combatant: Combatant) -> Result<()> {
        self.run_blocking(move |arena| arena.register(combatant))
            .await
    }

    pub async fn list_combatants(&self) -> Result<Vec<Combatant>> {
        self.run_blocking(|arena| arena.list_combatants()).await
    }

    pub async fn clear(&self) -> Result<()> {
        self.run_blocking(|arena| arena.clear()).await
    }

    /// Resolve the current battle, failing with [`RuntimeError::Timeout`] if it
    /// does not finish within the configured timeout.
    ///
    /// On timeout the resolution keeps running in the background and its
    /// outcome is discarded; the arena stays locked until it finishes.
    pub async fn resolve_battle(&self) -> Result<CombatantId> {
        let timeout = self.resolve_timeout;
        match tokio::time::timeout(timeout, self.run_blocking(|arena| arena.resolve_battle()))
            .await
        {
            Ok(result) => result,
            Err(_) => {
                tracing::warn!("Battle resolution exceeded {:?}", timeout);
                Err(RuntimeError::Timeout(timeout))
            }
        }
    }
}
