use core::fmt;

/// Stable identifier of a combatant, used only when reporting results.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct CombatantId(pub u32);

impl fmt::Display for CombatantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl From<u32> for CombatantId {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

/// Preparation difficulty tier.
///
/// Each tier maps to a fixed score penalty. Harder dishes are penalized less.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "UPPERCASE"))]
#[strum(serialize_all = "UPPERCASE")]
pub enum Difficulty {
    High,
    Med,
    Low,
}

impl Difficulty {
    /// Score penalty: `HIGH → 1`, `MED → 2`, `LOW → 3`.
    pub const fn penalty(self) -> u32 {
        match self {
            Self::High => 1,
            Self::Med => 2,
            Self::Low => 3,
        }
    }
}

/// An entity eligible for battle.
///
/// Combatants are validated where they are created (the meal catalog); the
/// engine assumes `price > 0` and only reads the length of `cuisine`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Combatant {
    pub id: CombatantId,
    /// Display label, never used for scoring.
    pub name: String,
    pub price: f64,
    pub cuisine: String,
    pub difficulty: Difficulty,
}

impl Combatant {
    pub fn new(
        id: impl Into<CombatantId>,
        name: impl Into<String>,
        price: f64,
        cuisine: impl Into<String>,
        difficulty: Difficulty,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            cuisine: cuisine.into(),
            difficulty,
        }
    }

    /// Length of the cuisine label in characters. An empty label counts as 0.
    #[inline]
    pub fn cuisine_len(&self) -> usize {
        self.cuisine.chars().count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::str::FromStr;

    #[test]
    fn difficulty_penalties_are_ordered() {
        assert_eq!(Difficulty::High.penalty(), 1);
        assert_eq!(Difficulty::Med.penalty(), 2);
        assert_eq!(Difficulty::Low.penalty(), 3);
    }

    #[test]
    fn difficulty_parses_uppercase_labels_only() {
        assert_eq!(Difficulty::from_str("HIGH").unwrap(), Difficulty::High);
        assert_eq!(Difficulty::from_str("MED").unwrap(), Difficulty::Med);
        assert_eq!(Difficulty::from_str("LOW").unwrap(), Difficulty::Low);
        assert!(Difficulty::from_str("EASY").is_err());
        assert!(Difficulty::from_str("low").is_err());
        assert_eq!(Difficulty::Med.to_string(), "MED");
    }

    #[test]
    fn cuisine_length_counts_characters() {
        let meal = Combatant::new(1, "Crêpe", 4.0, "Française", Difficulty::Low);
        assert_eq!(meal.cuisine_len(), 9);

        let blank = Combatant::new(2, "Mystery", 4.0, "", Difficulty::Low);
        assert_eq!(blank.cuisine_len(), 0);
    }
}
