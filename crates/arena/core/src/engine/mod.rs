//! Combatant registration and battle resolution.
//!
//! The [`BattleEngine`] is the sole owner of the [`SlotSet`]. Slot state moves
//! through `EMPTY → ONE → TWO → (resolve) → ONE`, and `clear` returns it to
//! `EMPTY` from any state. `register` is the only operation that adds a
//! combatant; `resolve_battle` and `clear` are the only ones that remove one.
//!
//! The engine itself holds no lock. Callers sharing an engine across threads
//! wrap it (see the runtime's `Arena`).

mod errors;
mod score;

pub use errors::BattleError;
pub use score::{Verdict, battle_score, decide, normalized_delta};

use crate::config::BattleConfig;
use crate::env::{Env, RandomSource, StatsRecorder};
use crate::state::{Combatant, CombatantId, SlotSet};

/// Two-slot battle engine.
#[derive(Clone, Debug, Default)]
pub struct BattleEngine {
    slots: SlotSet,
    config: BattleConfig,
}

impl BattleEngine {
    /// Creates an empty engine.
    ///
    /// # Errors
    ///
    /// Returns `BattleError::InvalidConfig` unless `config.upset_scale` is
    /// finite and strictly positive.
    pub fn new(config: BattleConfig) -> Result<Self, BattleError> {
        if !config.is_valid() {
            return Err(BattleError::InvalidConfig {
                upset_scale: config.upset_scale,
            });
        }
        Ok(Self {
            slots: SlotSet::new(),
            config,
        })
    }

    pub fn config(&self) -> &BattleConfig {
        &self.config
    }

    /// Appends a combatant to the next open slot.
    ///
    /// # Errors
    ///
    /// Returns `BattleError::SlotsFull` when two combatants are already
    /// registered. The existing slots are left unchanged.
    pub fn register(&mut self, combatant: Combatant) -> Result<(), BattleError> {
        self.slots
            .push(combatant)
            .map_err(|_| BattleError::SlotsFull {
                capacity: self.slots.capacity(),
            })
    }

    /// Score a combatant. Independent of slot state and randomness.
    pub fn score(combatant: &Combatant) -> f64 {
        battle_score(combatant)
    }

    /// Current slots in insertion order.
    pub fn list_combatants(&self) -> &[Combatant] {
        self.slots.as_slice()
    }

    /// Empties the slot set. Always succeeds; idempotent.
    pub fn clear(&mut self) {
        self.slots.clear();
    }

    /// Resolves the battle and returns the winner's id.
    ///
    /// See [`BattleEngine::resolve`] for the full contract.
    pub fn resolve_battle<R, S>(&mut self, env: &Env<'_, R, S>) -> Result<CombatantId, BattleError>
    where
        R: RandomSource + ?Sized,
        S: StatsRecorder + ?Sized,
    {
        self.resolve(env).map(|verdict| verdict.winner)
    }

    /// Resolves the battle between the two registered combatants.
    ///
    /// Draws one value from the randomness source, decides the winner with
    /// [`decide`], reports `Win` then `Loss` through the stats recorder and
    /// finally drops the loser so the winner occupies slot 0.
    ///
    /// # Errors
    ///
    /// - `BattleError::InsufficientCombatants` when fewer than two are registered
    /// - `BattleError::Env` when a collaborator is missing from `env`
    /// - `BattleError::Stats` when the recorder fails
    ///
    /// The slot set is untouched on every error path. A recorder failure after
    /// the win was stored is not compensated.
    pub fn resolve<R, S>(&mut self, env: &Env<'_, R, S>) -> Result<Verdict, BattleError>
    where
        R: RandomSource + ?Sized,
        S: StatsRecorder + ?Sized,
    {
        let (a, b) = match self.slots.as_slice() {
            [a, b] => (a, b),
            other => {
                return Err(BattleError::InsufficientCombatants {
                    registered: other.len(),
                });
            }
        };

        let rng = env.rng()?;
        let stats = env.stats()?;

        let roll = rng.next_unit_float();
        let verdict = decide(a, b, roll, self.config.upset_scale);

        stats.record_battle(verdict.winner, verdict.loser)?;

        self.slots.remove(verdict.loser_slot);
        Ok(verdict)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;
    use crate::env::{EnvError, Outcome, StatsError};
    use crate::error::{DomainError, ErrorSeverity};
    use crate::state::Difficulty;

    struct FixedRandom(f64);

    impl RandomSource for FixedRandom {
        fn next_unit_float(&self) -> f64 {
            self.0
        }
    }

    #[derive(Default)]
    struct RecordingStats {
        calls: Mutex<Vec<(CombatantId, Outcome)>>,
    }

    impl StatsRecorder for RecordingStats {
        fn record_result(&self, id: CombatantId, outcome: Outcome) -> Result<(), StatsError> {
            self.calls.lock().unwrap().push((id, outcome));
            Ok(())
        }
    }

    struct FailingStats;

    impl StatsRecorder for FailingStats {
        fn record_result(&self, _id: CombatantId, _outcome: Outcome) -> Result<(), StatsError> {
            Err(StatsError::Storage("disk full".into()))
        }
    }

    fn meal_1() -> Combatant {
        Combatant::new(1, "Meal 1", 10.0, "Italian", Difficulty::High)
    }

    fn meal_2() -> Combatant {
        Combatant::new(2, "Meal 2", 15.0, "Chinese", Difficulty::Med)
    }

    fn engine_with_two() -> BattleEngine {
        let mut engine = BattleEngine::default();
        engine.register(meal_1()).unwrap();
        engine.register(meal_2()).unwrap();
        engine
    }

    #[test]
    fn third_registration_is_rejected_without_mutation() {
        let mut engine = engine_with_two();
        let meal_3 = Combatant::new(3, "Meal 3", 12.0, "Mexican", Difficulty::Low);

        let err = engine.register(meal_3).unwrap_err();
        assert_eq!(err, BattleError::SlotsFull { capacity: 2 });
        assert_eq!(err.error_code(), "BATTLE_SLOTS_FULL");
        assert!(err.severity().is_recoverable());
        assert_eq!(engine.list_combatants(), &[meal_1(), meal_2()]);
    }

    #[test]
    fn resolve_requires_two_combatants() {
        let rng = FixedRandom(0.5);
        let stats = RecordingStats::default();
        let env = Env::with_all(&rng, &stats);

        let mut engine = BattleEngine::default();
        assert_eq!(
            engine.resolve_battle(&env),
            Err(BattleError::InsufficientCombatants { registered: 0 })
        );

        engine.register(meal_1()).unwrap();
        assert_eq!(
            engine.resolve_battle(&env),
            Err(BattleError::InsufficientCombatants { registered: 1 })
        );
        assert_eq!(engine.list_combatants(), &[meal_1()]);
        assert!(stats.calls.lock().unwrap().is_empty());
    }

    #[test]
    fn low_roll_underdog_wins_and_stays_in_slot_zero() {
        let rng = FixedRandom(0.1);
        let stats = RecordingStats::default();
        let mut engine = engine_with_two();

        let winner = engine.resolve_battle(&Env::with_all(&rng, &stats)).unwrap();

        assert_eq!(winner, CombatantId(1));
        assert_eq!(engine.list_combatants(), &[meal_1()]);
        assert_eq!(
            *stats.calls.lock().unwrap(),
            vec![(CombatantId(1), Outcome::Win), (CombatantId(2), Outcome::Loss)]
        );
    }

    #[test]
    fn high_roll_favorite_wins_and_moves_to_slot_zero() {
        let rng = FixedRandom(0.9);
        let stats = RecordingStats::default();
        let mut engine = engine_with_two();

        let verdict = engine.resolve(&Env::with_all(&rng, &stats)).unwrap();

        assert_eq!(verdict.winner, CombatantId(2));
        assert_eq!(verdict.winner_score, 103.0);
        assert_eq!(verdict.loser_score, 69.0);
        assert_eq!(engine.list_combatants(), &[meal_2()]);
        assert_eq!(
            *stats.calls.lock().unwrap(),
            vec![(CombatantId(2), Outcome::Win), (CombatantId(1), Outcome::Loss)]
        );
    }

    #[test]
    fn winner_can_face_a_new_challenger() {
        let rng = FixedRandom(0.9);
        let stats = RecordingStats::default();
        let env = Env::with_all(&rng, &stats);
        let mut engine = engine_with_two();

        engine.resolve_battle(&env).unwrap();
        let challenger = Combatant::new(3, "Meal 3", 12.0, "Mexican", Difficulty::Low);
        engine.register(challenger.clone()).unwrap();

        assert_eq!(engine.list_combatants(), &[meal_2(), challenger]);
    }

    #[test]
    fn stats_failure_propagates_and_keeps_slots() {
        let rng = FixedRandom(0.9);
        let mut engine = engine_with_two();

        let err = engine
            .resolve_battle(&Env::with_all(&rng, &FailingStats))
            .unwrap_err();

        assert_eq!(err, BattleError::Stats(StatsError::Storage("disk full".into())));
        assert_eq!(err.severity(), ErrorSeverity::Fatal);
        assert_eq!(err.to_string(), "stats storage failure: disk full");
        assert_eq!(engine.list_combatants(), &[meal_1(), meal_2()]);
    }

    #[test]
    fn missing_collaborators_are_reported() {
        let rng = FixedRandom(0.9);
        let mut engine = engine_with_two();

        let env: Env<'_, FixedRandom, RecordingStats> = Env::new(Some(&rng), None);
        assert_eq!(
            engine.resolve_battle(&env),
            Err(BattleError::Env(EnvError::StatsNotAvailable))
        );

        let env: Env<'_, FixedRandom, RecordingStats> = Env::empty();
        assert_eq!(
            engine.resolve_battle(&env),
            Err(BattleError::Env(EnvError::RandomNotAvailable))
        );
        assert_eq!(engine.list_combatants().len(), 2);
    }

    #[test]
    fn clear_is_idempotent() {
        let mut engine = BattleEngine::default();
        engine.clear();
        assert!(engine.list_combatants().is_empty());

        let mut engine = engine_with_two();
        engine.clear();
        engine.clear();
        assert!(engine.list_combatants().is_empty());
    }

    #[test]
    fn invalid_upset_scale_is_rejected() {
        for scale in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let err = BattleEngine::new(BattleConfig::with_upset_scale(scale)).unwrap_err();
            assert!(matches!(err, BattleError::InvalidConfig { .. }), "{scale}");
            assert_eq!(err.error_code(), "BATTLE_INVALID_CONFIG");
            assert_eq!(err.severity(), ErrorSeverity::Validation);
        }
    }

    #[test]
    fn tie_goes_to_slot_zero_with_custom_scale() {
        let rng = FixedRandom(0.5);
        let stats = RecordingStats::default();
        let mut engine = BattleEngine::new(BattleConfig::with_upset_scale(0.5)).unwrap();
        let twin = Combatant::new(2, "Meal 1 again", 10.0, "Italian", Difficulty::High);
        engine.register(meal_1()).unwrap();
        engine.register(twin).unwrap();

        let verdict = engine.resolve(&Env::with_all(&rng, &stats)).unwrap();

        assert_eq!(verdict.winner, CombatantId(1));
        assert_eq!(verdict.threshold, 0.0);
        assert!(!verdict.upset);
    }

    #[test]
    fn trait_object_env_resolves() {
        let rng = FixedRandom(0.1);
        let stats = RecordingStats::default();
        let typed = Env::with_all(&rng, &stats);
        let env = typed.as_battle_env();
        let mut engine = engine_with_two();

        assert_eq!(engine.resolve_battle(&env), Ok(CombatantId(1)));
    }
}
