use arrayvec::ArrayVec;

use crate::config::BattleConfig;

use super::Combatant;

/// Ordered holding area for up to [`BattleConfig::MAX_COMBATANTS`] combatants.
///
/// Slot 0 is always filled before slot 1. The set is transient: it is never
/// persisted and is reset by [`SlotSet::clear`].
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SlotSet {
    slots: ArrayVec<Combatant, { BattleConfig::MAX_COMBATANTS }>,
}

impl SlotSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a combatant to the next open slot.
    ///
    /// Hands the combatant back untouched when every slot is taken.
    pub fn push(&mut self, combatant: Combatant) -> Result<(), Combatant> {
        self.slots
            .try_push(combatant)
            .map_err(|err| err.element())
    }

    /// Removes and returns the combatant at `index`, shifting later slots down.
    pub fn remove(&mut self, index: usize) -> Option<Combatant> {
        if index < self.slots.len() {
            Some(self.slots.remove(index))
        } else {
            None
        }
    }

    pub fn get(&self, index: usize) -> Option<&Combatant> {
        self.slots.get(index)
    }

    pub fn as_slice(&self) -> &[Combatant] {
        &self.slots
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.slots.is_full()
    }

    pub fn capacity(&self) -> usize {
        self.slots.capacity()
    }

    pub fn clear(&mut self) {
        self.slots.clear();
    }
}
