// src/db/repository.rs

//! Recipe repository - loading and saving whole recipe aggregates
//!
//! [`RecipeRepository`] is the boundary between the domain model and
//! storage. Implementations must apply `save` and `delete` atomically: a
//! failed call leaves the stored state as it was.

use super::models::{IngredientEntry, InstructionEntry, RecipeEntry};
use crate::error::{Error, Result};
use crate::recipe::Recipe;
use rusqlite::Connection;
use std::collections::HashSet;
use tracing::{debug, info};

/// Storage for recipe aggregates
pub trait RecipeRepository {
    /// Load a recipe with its ingredients and instructions
    ///
    /// Fails with `NotFound` if no recipe has this ID.
    fn find_by_id(&self, id: i64) -> Result<Recipe>;

    /// Insert or update a recipe
    ///
    /// The recipe is validated first. On success its ID, and the IDs of any
    /// ingredients or instructions that had none, are filled in.
    fn save(&mut self, recipe: &mut Recipe) -> Result<i64>;

    /// Delete a recipe with its ingredients and instructions
    fn delete(&mut self, id: i64) -> Result<()>;

    /// All recipes, ordered by ID
    fn list(&self) -> Result<Vec<Recipe>>;
}

/// Recipe repository backed by SQLite
pub struct SqliteRecipeRepository {
    conn: Connection,
}

impl SqliteRecipeRepository {
    /// Wrap a connection whose schema is already migrated
    pub fn new(conn: Connection) -> Self {
        Self { conn }
    }

    /// Open the database at `db_path`
    pub fn open(db_path: &str) -> Result<Self> {
        Ok(Self::new(super::open(db_path)?))
    }

    /// A throwaway repository in memory
    pub fn in_memory() -> Result<Self> {
        Ok(Self::new(super::open_in_memory()?))
    }

    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    /// Recipes whose name contains `pattern`, case-insensitive
    pub fn search(&self, pattern: &str) -> Result<Vec<Recipe>> {
        RecipeEntry::search_by_name(&self.conn, pattern)?
            .iter()
            .map(|entry| load_recipe(&self.conn, entry))
            .collect()
    }
}

/// Assemble an aggregate from its row and child rows
fn load_recipe(conn: &Connection, entry: &RecipeEntry) -> Result<Recipe> {
    let mut recipe = entry.to_recipe()?;
    let id = entry
        .id
        .ok_or_else(|| Error::InvalidOperation("recipe row has no ID".to_string()))?;

    let ingredients = IngredientEntry::find_by_recipe(conn, id)?
        .iter()
        .map(IngredientEntry::to_ingredient)
        .collect::<Result<Vec<_>>>()?;
    if !ingredients.is_empty() {
        recipe.set_ingredients(ingredients)?;
    }

    let instructions = InstructionEntry::find_by_recipe(conn, id)?
        .iter()
        .map(InstructionEntry::to_instruction)
        .collect::<Result<Vec<_>>>()?;
    if !instructions.is_empty() {
        recipe.set_instructions(instructions)?;
    }

    Ok(recipe)
}

/// Write a recipe and its children, returning the stored copy with IDs
///
/// A child keeps its preset ID only when it already belongs to the recipe
/// being updated; every other child gets a fresh ID from storage.
fn write_recipe(conn: &Connection, recipe: &Recipe) -> Result<Recipe> {
    let mut entry = RecipeEntry::from_recipe(recipe);

    let mut owned_ingredients: HashSet<i64> = HashSet::new();
    let mut owned_instructions: HashSet<i64> = HashSet::new();

    let id = match recipe.id() {
        Some(id) if RecipeEntry::exists(conn, id)? => {
            debug!("Updating recipe {}", id);
            owned_ingredients = IngredientEntry::find_by_recipe(conn, id)?
                .into_iter()
                .filter_map(|e| e.id)
                .collect();
            owned_instructions = InstructionEntry::find_by_recipe(conn, id)?
                .into_iter()
                .filter_map(|e| e.id)
                .collect();

            entry.update(conn, id)?;
            IngredientEntry::delete_for_recipe(conn, id)?;
            InstructionEntry::delete_for_recipe(conn, id)?;
            id
        }
        _ => entry.insert(conn)?,
    };

    let mut ingredients = Vec::with_capacity(recipe.ingredients().len());
    for ingredient in recipe.ingredients() {
        let mut row = IngredientEntry::new(id, ingredient);
        row.id = ingredient.id().filter(|i| owned_ingredients.contains(i));
        let ingredient_id = row.insert(conn)?;
        ingredients.push(ingredient.clone().with_id(ingredient_id)?);
    }

    let mut instructions = Vec::with_capacity(recipe.instructions().len());
    for (position, instruction) in recipe.instructions().iter().enumerate() {
        let mut row = InstructionEntry::new(id, position as i64, instruction);
        row.id = instruction.id().filter(|i| owned_instructions.contains(i));
        let instruction_id = row.insert(conn)?;
        instructions.push(instruction.clone().with_id(instruction_id)?);
    }

    let mut stored = recipe.clone();
    stored.set_id(id)?;
    stored.set_ingredients(ingredients)?;
    stored.set_instructions(instructions)?;
    Ok(stored)
}

impl RecipeRepository for SqliteRecipeRepository {
    fn find_by_id(&self, id: i64) -> Result<Recipe> {
        let entry = RecipeEntry::find_by_id(&self.conn, id)?
            .ok_or_else(|| Error::NotFound(format!("recipe {}", id)))?;
        load_recipe(&self.conn, &entry)
    }

    fn save(&mut self, recipe: &mut Recipe) -> Result<i64> {
        recipe.validate()?;

        let stored = super::transaction(&mut self.conn, |tx| write_recipe(tx, recipe))?;
        let id = stored.id().ok_or_else(|| {
            Error::InvalidOperation("stored recipe has no ID".to_string())
        })?;
        *recipe = stored;

        info!("Saved recipe {} ({})", id, recipe.name());
        Ok(id)
    }

    fn delete(&mut self, id: i64) -> Result<()> {
        super::transaction(&mut self.conn, |tx| {
            if !RecipeEntry::exists(tx, id)? {
                return Err(Error::NotFound(format!("recipe {}", id)));
            }
            IngredientEntry::delete_for_recipe(tx, id)?;
            InstructionEntry::delete_for_recipe(tx, id)?;
            RecipeEntry::delete(tx, id)
        })?;

        info!("Deleted recipe {}", id);
        Ok(())
    }

    fn list(&self) -> Result<Vec<Recipe>> {
        RecipeEntry::list_all(&self.conn)?
            .iter()
            .map(|entry| load_recipe(&self.conn, entry))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recipe::{Ingredient, Instruction, MealCategory, MealType};

    fn goulash() -> Recipe {
        let mut recipe =
            Recipe::new("Goulash", MealType::MainCourse, MealCategory::Meat, 120, 6).unwrap();
        recipe
            .set_ingredients([
                Ingredient::new("Beef", 1.0, "kg").unwrap(),
                Ingredient::new("Onion", 3.0, "pc").unwrap(),
                Ingredient::new("Paprika", 2.0, "tbsp").unwrap(),
            ])
            .unwrap();
        recipe
            .set_instructions([
                Instruction::new("Brown the meat").unwrap(),
                Instruction::new("Add onions and paprika").unwrap(),
                Instruction::new("Simmer for two hours").unwrap(),
            ])
            .unwrap();
        recipe
    }

    #[test]
    fn test_save_assigns_ids() {
        let mut repo = SqliteRecipeRepository::in_memory().unwrap();
        let mut recipe = goulash();

        let id = repo.save(&mut recipe).unwrap();
        assert_eq!(recipe.id(), Some(id));
        assert!(recipe.ingredients().iter().all(|i| i.id().is_some()));
        assert!(recipe.instructions().iter().all(|i| i.id().is_some()));
    }

    #[test]
    fn test_find_by_id_round_trip() {
        let mut repo = SqliteRecipeRepository::in_memory().unwrap();
        let mut recipe = goulash();
        let id = repo.save(&mut recipe).unwrap();

        let loaded = repo.find_by_id(id).unwrap();
        assert_eq!(loaded, recipe);

        let steps: Vec<&str> = loaded.instructions().iter().map(|i| i.text()).collect();
        assert_eq!(
            steps,
            vec!["Brown the meat", "Add onions and paprika", "Simmer for two hours"]
        );
    }

    #[test]
    fn test_find_missing_recipe() {
        let repo = SqliteRecipeRepository::in_memory().unwrap();
        assert!(repo.find_by_id(99).unwrap_err().is_not_found());
    }

    #[test]
    fn test_update_keeps_child_ids() {
        let mut repo = SqliteRecipeRepository::in_memory().unwrap();
        let mut recipe = goulash();
        let id = repo.save(&mut recipe).unwrap();
        let beef_id = recipe.ingredients().iter().next().unwrap().id();

        recipe.set_num_portions(8).unwrap();
        recipe.add_ingredient(Ingredient::new("Garlic", 2.0, "clove").unwrap());
        recipe.add_instruction(Instruction::new("Serve with bread").unwrap());
        assert_eq!(repo.save(&mut recipe).unwrap(), id);

        let loaded = repo.find_by_id(id).unwrap();
        assert_eq!(loaded.num_portions(), 8);
        assert_eq!(loaded.ingredients().len(), 4);
        assert_eq!(loaded.ingredients().iter().next().unwrap().id(), beef_id);
        assert_eq!(loaded.instructions().last().unwrap().text(), "Serve with bread");
        assert_eq!(repo.list().unwrap().len(), 1);
    }

    #[test]
    fn test_save_incomplete_recipe_writes_nothing() {
        let mut repo = SqliteRecipeRepository::in_memory().unwrap();
        let mut recipe =
            Recipe::new("Empty", MealType::Soup, MealCategory::Vegan, 10, 1).unwrap();

        let err = repo.save(&mut recipe).unwrap_err();
        assert_eq!(err.field(), Some("ingredients"));
        assert_eq!(recipe.id(), None);
        assert!(repo.list().unwrap().is_empty());
    }

    #[test]
    fn test_foreign_child_ids_are_replaced() {
        let mut repo = SqliteRecipeRepository::in_memory().unwrap();
        let mut first = goulash();
        repo.save(&mut first).unwrap();
        let taken_id = first.ingredients().iter().next().unwrap().id().unwrap();

        // Second recipe carries an ingredient ID owned by the first one
        let mut second = goulash();
        second.set_name("Borrowed Goulash").unwrap();
        second
            .set_ingredients([Ingredient::new("Beef", 1.0, "kg").unwrap().with_id(taken_id).unwrap()])
            .unwrap();
        repo.save(&mut second).unwrap();

        let beef = second.ingredients().iter().next().unwrap();
        assert_ne!(beef.id(), Some(taken_id));
        let first_id = first.id().unwrap();
        assert_eq!(repo.find_by_id(first_id).unwrap().ingredients().len(), 3);
    }

    #[test]
    fn test_failed_save_rolls_back() {
        let mut repo = SqliteRecipeRepository::in_memory().unwrap();
        repo.connection()
            .execute_batch(
                "CREATE TRIGGER no_steps BEFORE INSERT ON instructions
                 BEGIN SELECT RAISE(ABORT, 'steps are read-only'); END;",
            )
            .unwrap();

        let mut recipe = goulash();
        let err = repo.save(&mut recipe).unwrap_err();
        assert!(matches!(err, Error::Database(_)));
        assert_eq!(recipe.id(), None);
        assert!(repo.list().unwrap().is_empty());

        let ingredients: i64 = repo
            .connection()
            .query_row("SELECT COUNT(*) FROM ingredients", [], |row| row.get(0))
            .unwrap();
        assert_eq!(ingredients, 0);
    }

    #[test]
    fn test_delete() {
        let mut repo = SqliteRecipeRepository::in_memory().unwrap();
        let mut recipe = goulash();
        let id = repo.save(&mut recipe).unwrap();

        repo.delete(id).unwrap();
        assert!(repo.find_by_id(id).unwrap_err().is_not_found());
        assert!(repo.delete(id).unwrap_err().is_not_found());

        let orphans: i64 = repo
            .connection()
            .query_row("SELECT COUNT(*) FROM ingredients", [], |row| row.get(0))
            .unwrap();
        assert_eq!(orphans, 0);
    }

    #[test]
    fn test_search() {
        let mut repo = SqliteRecipeRepository::in_memory().unwrap();
        repo.save(&mut goulash()).unwrap();

        assert_eq!(repo.search("GOUL").unwrap().len(), 1);
        assert!(repo.search("pie").unwrap().is_empty());
    }
}
