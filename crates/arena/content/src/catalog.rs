use std::collections::BTreeMap;

use arena_core::{Combatant, CombatantId, Difficulty};

use crate::error::CatalogError;

/// A meal known to the catalog.
///
/// Deleted meals keep their record (and id) but can no longer be looked up or
/// sent into battle.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MealRecord {
    pub id: CombatantId,
    pub name: String,
    pub cuisine: String,
    pub price: f64,
    pub difficulty: Difficulty,
    #[cfg_attr(feature = "serde", serde(default))]
    pub deleted: bool,
}

impl MealRecord {
    pub fn to_combatant(&self) -> Combatant {
        Combatant::new(
            self.id,
            self.name.clone(),
            self.price,
            self.cuisine.clone(),
            self.difficulty,
        )
    }
}

/// In-memory meal catalog with validated creation and soft deletion.
#[derive(Clone, Debug)]
pub struct MealCatalog {
    meals: BTreeMap<CombatantId, MealRecord>,
    next_id: u32,
}

impl MealCatalog {
    pub fn new() -> Self {
        Self {
            meals: BTreeMap::new(),
            next_id: 1,
        }
    }

    /// Validates and stores a new meal, returning its id.
    ///
    /// # Errors
    ///
    /// - `InvalidPrice` unless `price` is finite and positive
    /// - `InvalidDifficulty` unless `difficulty` is `LOW`, `MED` or `HIGH`
    /// - `EmptyName` / `DuplicateName` for a blank or already used name
    pub fn create_meal(
        &mut self,
        name: &str,
        cuisine: &str,
        price: f64,
        difficulty: &str,
    ) -> Result<CombatantId, CatalogError> {
        if !price.is_finite() || price <= 0.0 {
            return Err(CatalogError::InvalidPrice(price));
        }
        let difficulty: Difficulty = difficulty
            .parse()
            .map_err(|_| CatalogError::InvalidDifficulty(difficulty.to_string()))?;
        if name.trim().is_empty() {
            return Err(CatalogError::EmptyName);
        }
        if self.meals.values().any(|meal| meal.name == name) {
            return Err(CatalogError::DuplicateName(name.to_string()));
        }

        let id = CombatantId(self.next_id);
        self.next_id = id.0 + 1;
        self.meals.insert(
            id,
            MealRecord {
                id,
                name: name.to_string(),
                cuisine: cuisine.to_string(),
                price,
                difficulty,
                deleted: false,
            },
        );
        Ok(id)
    }

    /// Marks a meal as deleted.
    ///
    /// # Errors
    ///
    /// `NotFound` for an unknown id, `Deleted` if it was already deleted.
    pub fn delete_meal(&mut self, id: CombatantId) -> Result<(), CatalogError> {
        let meal = self.meals.get_mut(&id).ok_or(CatalogError::NotFound(id))?;
        if meal.deleted {
            return Err(CatalogError::Deleted(id));
        }
        meal.deleted = true;
        Ok(())
    }

    pub fn get_meal_by_id(&self, id: CombatantId) -> Result<&MealRecord, CatalogError> {
        let meal = self.meals.get(&id).ok_or(CatalogError::NotFound(id))?;
        if meal.deleted {
            return Err(CatalogError::Deleted(id));
        }
        Ok(meal)
    }

    pub fn get_meal_by_name(&self, name: &str) -> Result<&MealRecord, CatalogError> {
        let meal = self
            .meals
            .values()
            .find(|meal| meal.name == name)
            .ok_or_else(|| CatalogError::NameNotFound(name.to_string()))?;
        if meal.deleted {
            return Err(CatalogError::Deleted(meal.id));
        }
        Ok(meal)
    }

    /// Builds a battle-ready combatant for a live meal.
    pub fn combatant(&self, id: CombatantId) -> Result<Combatant, CatalogError> {
        self.get_meal_by_id(id).map(MealRecord::to_combatant)
    }

    /// Live (non-deleted) meals in id order.
    pub fn meals(&self) -> impl Iterator<Item = &MealRecord> {
        self.meals.values().filter(|meal| !meal.deleted)
    }

    pub fn len(&self) -> usize {
        self.meals().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drops every meal and restarts id assignment.
    pub fn clear(&mut self) {
        self.meals.clear();
        self.next_id = 1;
    }
}

impl Default for MealCatalog {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog_with_pasta() -> (MealCatalog, CombatantId) {
        let mut catalog = MealCatalog::new();
        let id = catalog.create_meal("Pasta", "Italian", 12.5, "MED").unwrap();
        (catalog, id)
    }

    #[test]
    fn create_and_lookup() {
        let (catalog, id) = catalog_with_pasta();
        let meal = catalog.get_meal_by_id(id).unwrap();
        assert_eq!(meal.name, "Pasta");
        assert_eq!(meal.difficulty, Difficulty::Med);
        assert_eq!(catalog.get_meal_by_name("Pasta").unwrap().id, id);
    }

    #[test]
    fn invalid_price_is_rejected() {
        let mut catalog = MealCatalog::new();
        let err = catalog.create_meal("Soup", "French", -10.0, "LOW").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid price: -10. Price must be a positive number."
        );
        assert!(catalog.create_meal("Soup", "French", 0.0, "LOW").is_err());
        assert!(catalog.create_meal("Soup", "French", f64::NAN, "LOW").is_err());
        assert!(catalog.is_empty());
    }

    #[test]
    fn invalid_difficulty_is_rejected() {
        let mut catalog = MealCatalog::new();
        let err = catalog.create_meal("Cake", "Dessert", 5.0, "EASY").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid difficulty level: EASY. Must be 'LOW', 'MED', or 'HIGH'."
        );
    }

    #[test]
    fn duplicate_name_is_rejected() {
        let (mut catalog, _) = catalog_with_pasta();
        let err = catalog.create_meal("Pasta", "Italian", 9.0, "LOW").unwrap_err();
        assert_eq!(err, CatalogError::DuplicateName("Pasta".into()));
    }

    #[test]
    fn soft_delete_hides_meal() {
        let (mut catalog, id) = catalog_with_pasta();
        catalog.delete_meal(id).unwrap();

        assert_eq!(catalog.get_meal_by_id(id), Err(CatalogError::Deleted(id)));
        assert_eq!(catalog.get_meal_by_name("Pasta"), Err(CatalogError::Deleted(id)));
        assert_eq!(catalog.delete_meal(id), Err(CatalogError::Deleted(id)));
        assert!(catalog.combatant(id).is_err());
        assert_eq!(catalog.len(), 0);
    }

    #[test]
    fn unknown_ids_and_names() {
        let catalog = MealCatalog::new();
        assert_eq!(
            catalog.get_meal_by_id(CombatantId(999)),
            Err(CatalogError::NotFound(CombatantId(999)))
        );
        assert_eq!(
            catalog.get_meal_by_name("Pasta").unwrap_err().to_string(),
            "Meal with name Pasta not found"
        );
    }

    #[test]
    fn combatant_copies_record_fields() {
        let (catalog, id) = catalog_with_pasta();
        let combatant = catalog.combatant(id).unwrap();
        assert_eq!(combatant.id, id);
        assert_eq!(combatant.price, 12.5);
        assert_eq!(combatant.cuisine, "Italian");
    }

    #[test]
    fn clear_restarts_ids() {
        let (mut catalog, first) = catalog_with_pasta();
        catalog.clear();
        assert!(catalog.is_empty());
        let again = catalog.create_meal("Pizza", "Italian", 15.0, "LOW").unwrap();
        assert_eq!(again, first);
    }
}
