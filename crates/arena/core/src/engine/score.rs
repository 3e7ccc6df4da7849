//! Scoring and the score-weighted decision rule.

use crate::state::{Combatant, CombatantId};

/// Compute a combatant's battle score.
///
/// # Formula
///
/// ```text
/// score = price * len(cuisine) - penalty(difficulty)
/// ```
///
/// Pure and deterministic. An empty cuisine yields `-penalty`.
pub fn battle_score(combatant: &Combatant) -> f64 {
    combatant.price * combatant.cuisine_len() as f64 - f64::from(combatant.difficulty.penalty())
}

/// Scale the absolute score gap into a threshold in `[0, 1]`.
///
/// ```text
/// normalized = min(|a - b| / upset_scale, 1.0)
/// ```
pub fn normalized_delta(score_a: f64, score_b: f64, upset_scale: f64) -> f64 {
    ((score_a - score_b).abs() / upset_scale).min(1.0)
}

/// Full record of one battle decision.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Verdict {
    pub winner: CombatantId,
    pub loser: CombatantId,
    /// Slot the loser occupied before resolution.
    pub loser_slot: usize,
    pub winner_score: f64,
    pub loser_score: f64,
    /// Normalized score gap the draw was compared against.
    pub threshold: f64,
    /// Value drawn from the randomness source.
    pub roll: f64,
    /// True when the lower-scoring combatant won.
    pub upset: bool,
}

/// Decide a battle between the combatants in slot 0 (`a`) and slot 1 (`b`).
///
/// The higher scorer is the favorite; slot 0 counts as higher on an exact tie.
/// When `roll < normalized_delta` the underdog wins, otherwise the favorite
/// does. A wider score gap therefore makes an upset *more* likely, up to the
/// cap at 1.0. Callers must not invert this threshold.
pub fn decide(a: &Combatant, b: &Combatant, roll: f64, upset_scale: f64) -> Verdict {
    let score_a = battle_score(a);
    let score_b = battle_score(b);
    let threshold = normalized_delta(score_a, score_b, upset_scale);

    // (favorite slot, favorite score, underdog score)
    let (higher_slot, higher_score, lower_score) = if score_b > score_a {
        (1, score_b, score_a)
    } else {
        (0, score_a, score_b)
    };
    let lower_slot = 1 - higher_slot;

    let upset = roll < threshold;
    let (winner_slot, winner_score, loser_score) = if upset {
        (lower_slot, lower_score, higher_score)
    } else {
        (higher_slot, higher_score, lower_score)
    };
    let loser_slot = 1 - winner_slot;
    let by_slot = [a, b];

    Verdict {
        winner: by_slot[winner_slot].id,
        loser: by_slot[loser_slot].id,
        loser_slot,
        winner_score,
        loser_score,
        threshold,
        roll,
        upset,
    }
}
