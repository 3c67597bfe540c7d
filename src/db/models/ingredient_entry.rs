// src/db/models/ingredient_entry.rs

//! IngredientEntry model - ingredient lines owned by a recipe

use crate::error::Result;
use crate::recipe::Ingredient;
use rusqlite::{Connection, Row, params};

/// A row of the ingredients table
#[derive(Debug, Clone)]
pub struct IngredientEntry {
    pub id: Option<i64>,
    pub recipe_id: i64,
    pub name: String,
    pub amount: f64,
    pub unit: String,
}

impl IngredientEntry {
    /// Build the row for an ingredient of the given recipe
    pub fn new(recipe_id: i64, ingredient: &Ingredient) -> Self {
        Self {
            id: ingredient.id(),
            recipe_id,
            name: ingredient.name().to_string(),
            amount: ingredient.amount(),
            unit: ingredient.unit().to_string(),
        }
    }

    /// Insert this ingredient, keeping a preset `id`
    pub fn insert(&mut self, conn: &Connection) -> Result<i64> {
        conn.execute(
            "INSERT INTO ingredients (id, recipe_id, name, amount, unit)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                &self.id,
                &self.recipe_id,
                &self.name,
                &self.amount,
                &self.unit,
            ],
        )?;

        let id = conn.last_insert_rowid();
        self.id = Some(id);
        Ok(id)
    }

    /// Find all ingredients of a recipe
    pub fn find_by_recipe(conn: &Connection, recipe_id: i64) -> Result<Vec<Self>> {
        let mut stmt = conn.prepare(
            "SELECT id, recipe_id, name, amount, unit FROM ingredients
             WHERE recipe_id = ?1 ORDER BY id",
        )?;

        let entries = stmt
            .query_map([recipe_id], Self::from_row)?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(entries)
    }

    /// Remove all ingredients of a recipe
    pub fn delete_for_recipe(conn: &Connection, recipe_id: i64) -> Result<()> {
        conn.execute("DELETE FROM ingredients WHERE recipe_id = ?1", [recipe_id])?;
        Ok(())
    }

    /// Rebuild the domain value, revalidating the stored fields
    pub fn to_ingredient(&self) -> Result<Ingredient> {
        let ingredient = Ingredient::new(self.name.clone(), self.amount, self.unit.clone())?;
        match self.id {
            Some(id) => ingredient.with_id(id),
            None => Ok(ingredient),
        }
    }

    /// Convert a database row to an IngredientEntry
    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Self {
            id: Some(row.get(0)?),
            recipe_id: row.get(1)?,
            name: row.get(2)?,
            amount: row.get(3)?,
            unit: row.get(4)?,
        })
    }
}
