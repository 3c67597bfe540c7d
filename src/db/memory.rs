// src/db/memory.rs

//! In-process recipe repository
//!
//! Same contract as the SQLite repository, kept in a map. IDs are handed
//! out from counters starting at 1, like SQLite's AUTOINCREMENT.

use super::repository::RecipeRepository;
use crate::error::{Error, Result};
use crate::recipe::Recipe;
use std::collections::{BTreeMap, HashSet};
use tracing::debug;

#[derive(Debug, Default)]
pub struct MemoryRecipeRepository {
    recipes: BTreeMap<i64, Recipe>,
    last_recipe_id: i64,
    last_ingredient_id: i64,
    last_instruction_id: i64,
}

fn next_id(last: &mut i64, preset: Option<i64>) -> i64 {
    match preset {
        Some(id) => {
            *last = (*last).max(id);
            id
        }
        None => {
            *last += 1;
            *last
        }
    }
}

impl MemoryRecipeRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}

impl RecipeRepository for MemoryRecipeRepository {
    fn find_by_id(&self, id: i64) -> Result<Recipe> {
        self.recipes
            .get(&id)
            .cloned()
            .ok_or_else(|| Error::NotFound(format!("recipe {}", id)))
    }

    fn save(&mut self, recipe: &mut Recipe) -> Result<i64> {
        recipe.validate()?;

        // Work on a copy and counters so a failure changes nothing
        let mut last_ingredient_id = self.last_ingredient_id;
        let mut last_instruction_id = self.last_instruction_id;
        let mut last_recipe_id = self.last_recipe_id;

        // Preset child IDs survive only when updating the recipe that owns them
        let previous = recipe.id().and_then(|id| self.recipes.get(&id));
        let owned_ingredients: HashSet<i64> = previous
            .map(|r| r.ingredients().iter().filter_map(|i| i.id()).collect())
            .unwrap_or_default();
        let owned_instructions: HashSet<i64> = previous
            .map(|r| r.instructions().iter().filter_map(|i| i.id()).collect())
            .unwrap_or_default();

        let mut stored = recipe.clone();
        let id = next_id(&mut last_recipe_id, recipe.id());
        stored.set_id(id)?;

        let ingredients = recipe
            .ingredients()
            .iter()
            .map(|i| {
                let preset = i.id().filter(|id| owned_ingredients.contains(id));
                i.clone().with_id(next_id(&mut last_ingredient_id, preset))
            })
            .collect::<Result<Vec<_>>>()?;
        stored.set_ingredients(ingredients)?;

        let instructions = recipe
            .instructions()
            .iter()
            .map(|i| {
                let preset = i.id().filter(|id| owned_instructions.contains(id));
                i.clone().with_id(next_id(&mut last_instruction_id, preset))
            })
            .collect::<Result<Vec<_>>>()?;
        stored.set_instructions(instructions)?;

        self.last_recipe_id = last_recipe_id;
        self.last_ingredient_id = last_ingredient_id;
        self.last_instruction_id = last_instruction_id;
        self.recipes.insert(id, stored.clone());
        *recipe = stored;

        debug!("Saved recipe {} in memory", id);
        Ok(id)
    }

    fn delete(&mut self, id: i64) -> Result<()> {
        self.recipes
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| Error::NotFound(format!("recipe {}", id)))
    }

    fn list(&self) -> Result<Vec<Recipe>> {
        Ok(self.recipes.values().cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recipe::{Ingredient, Instruction, MealCategory, MealType};

    fn salad() -> Recipe {
        let mut recipe =
            Recipe::new("Greek Salad", MealType::Salad, MealCategory::Meatless, 15, 2).unwrap();
        recipe
            .set_ingredients([
                Ingredient::new("Feta", 200.0, "g").unwrap(),
                Ingredient::new("Tomato", 3.0, "pc").unwrap(),
            ])
            .unwrap();
        recipe
            .set_instructions([
                Instruction::new("Chop the vegetables").unwrap(),
                Instruction::new("Crumble the feta on top").unwrap(),
            ])
            .unwrap();
        recipe
    }

    #[test]
    fn test_save_and_find() {
        let mut repo = MemoryRecipeRepository::new();
        let mut recipe = salad();

        let id = repo.save(&mut recipe).unwrap();
        assert_eq!(id, 1);
        assert_eq!(repo.find_by_id(id).unwrap(), recipe);

        let ids: Vec<Option<i64>> = recipe.instructions().iter().map(|i| i.id()).collect();
        assert_eq!(ids, vec![Some(1), Some(2)]);
    }

    #[test]
    fn test_save_again_updates_in_place() {
        let mut repo = MemoryRecipeRepository::new();
        let mut recipe = salad();
        let id = repo.save(&mut recipe).unwrap();

        recipe.set_cooking_time(20).unwrap();
        assert_eq!(repo.save(&mut recipe).unwrap(), id);
        assert_eq!(repo.len(), 1);
        assert_eq!(repo.find_by_id(id).unwrap().cooking_time(), 20);
    }

    #[test]
    fn test_preset_id_moves_counter() {
        let mut repo = MemoryRecipeRepository::new();
        let mut first = salad();
        first.set_id(10).unwrap();
        repo.save(&mut first).unwrap();

        let mut second = salad();
        assert_eq!(repo.save(&mut second).unwrap(), 11);
    }

    #[test]
    fn test_incomplete_recipe_is_rejected() {
        let mut repo = MemoryRecipeRepository::new();
        let mut recipe =
            Recipe::new("Nothing", MealType::Salad, MealCategory::Vegan, 0, 1).unwrap();

        assert!(repo.save(&mut recipe).is_err());
        assert!(repo.is_empty());
        assert_eq!(recipe.id(), None);
    }

    #[test]
    fn test_delete() {
        let mut repo = MemoryRecipeRepository::new();
        let id = repo.save(&mut salad()).unwrap();

        repo.delete(id).unwrap();
        assert!(repo.find_by_id(id).unwrap_err().is_not_found());
        assert!(repo.delete(id).unwrap_err().is_not_found());
        assert!(repo.list().unwrap().is_empty());
    }

    #[test]
    fn test_copied_recipe_gets_its_own_child_ids() {
        let mut repo = MemoryRecipeRepository::new();
        let mut original = salad();
        repo.save(&mut original).unwrap();

        let mut copy = original.to_card();
        copy.id = None;
        let mut copy = copy.into_recipe().unwrap();
        repo.save(&mut copy).unwrap();

        let ids = |r: &Recipe| -> Vec<Option<i64>> {
            r.ingredients().iter().map(|i| i.id()).collect()
        };
        assert_eq!(ids(&original), vec![Some(1), Some(2)]);
        assert_eq!(ids(&copy), vec![Some(3), Some(4)]);
        assert_eq!(copy.instructions()[0].id(), Some(3));
    }
}
