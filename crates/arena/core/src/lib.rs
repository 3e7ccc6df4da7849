//! Deterministic battle rules shared across the arena crates.
//!
//! `arena-core` defines the combatant model, the scoring function, the
//! score-weighted decision rule and the two-slot battle engine. It performs no
//! I/O: randomness and stats persistence are injected through the traits in
//! [`env`], so every rule can be exercised with deterministic stubs. All slot
//! mutation flows through [`engine::BattleEngine`].
pub mod config;
pub mod engine;
pub mod env;
pub mod error;
pub mod state;

pub use config::BattleConfig;
pub use engine::{BattleEngine, BattleError, Verdict, battle_score, decide};
pub use env::{
    BattleEnv, Env, EnvError, Outcome, PcgRandom, RandomSource, StatsError, StatsRecorder,
};
pub use error::{DomainError, ErrorSeverity};
pub use state::{Combatant, CombatantId, Difficulty, SlotSet};
