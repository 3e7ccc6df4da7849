/// Battle configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BattleConfig {
    /// Divisor applied to the absolute score gap before it is capped at 1.0.
    /// Larger values make the outcome less sensitive to the score gap.
    pub upset_scale: f64,
}

impl BattleConfig {
    // ===== compile-time constants used as type parameters =====
    /// Number of slots in a battle. Slot 0 is filled before slot 1.
    pub const MAX_COMBATANTS: usize = 2;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_UPSET_SCALE: f64 = 100.0;

    pub fn new() -> Self {
        Self {
            upset_scale: Self::DEFAULT_UPSET_SCALE,
        }
    }

    pub fn with_upset_scale(upset_scale: f64) -> Self {
        Self { upset_scale }
    }

    /// Returns true when the scale is a finite, strictly positive number.
    pub fn is_valid(&self) -> bool {
        self.upset_scale.is_finite() && self.upset_scale > 0.0
    }
}

impl Default for BattleConfig {
    fn default() -> Self {
        Self::new()
    }
}
