//! Battle state types.
//!
//! [`Combatant`] describes an entity eligible for battle; [`SlotSet`] is the
//! engine's transient holding area for the combatants awaiting a match.
mod combatant;
mod slots;

pub use combatant::{Combatant, CombatantId, Difficulty};
pub use slots::SlotSet;
