// src/db/models/recipe_entry.rs

//! RecipeEntry model - one row of the recipes table

use crate::error::Result;
use crate::recipe::{MealCategory, MealType, Recipe};
use rusqlite::{Connection, OptionalExtension, Row, params};
use std::str::FromStr;

/// A row of the recipes table, without ingredients or instructions
#[derive(Debug, Clone)]
pub struct RecipeEntry {
    pub id: Option<i64>,
    pub name: String,
    pub meal_type: MealType,
    pub meal_category: MealCategory,
    pub cooking_time: i32,
    pub num_portions: i32,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

const COLUMNS: &str =
    "id, name, meal_type, meal_category, cooking_time, num_portions, created_at, updated_at";

impl RecipeEntry {
    /// Build the row for a recipe's scalar attributes
    pub fn from_recipe(recipe: &Recipe) -> Self {
        Self {
            id: recipe.id(),
            name: recipe.name().to_string(),
            meal_type: recipe.meal_type(),
            meal_category: recipe.meal_category(),
            cooking_time: recipe.cooking_time(),
            num_portions: recipe.num_portions(),
            created_at: None,
            updated_at: None,
        }
    }

    /// Start an aggregate from this row; ingredients and instructions are
    /// loaded separately
    pub fn to_recipe(&self) -> Result<Recipe> {
        let mut recipe = Recipe::new(
            self.name.clone(),
            self.meal_type,
            self.meal_category,
            self.cooking_time,
            self.num_portions,
        )?;
        if let Some(id) = self.id {
            recipe.set_id(id)?;
        }
        Ok(recipe)
    }

    /// Insert this recipe row
    ///
    /// A preset `id` is kept; otherwise SQLite assigns one.
    pub fn insert(&mut self, conn: &Connection) -> Result<i64> {
        conn.execute(
            "INSERT INTO recipes (id, name, meal_type, meal_category, cooking_time, num_portions)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                &self.id,
                &self.name,
                self.meal_type.as_str(),
                self.meal_category.as_str(),
                &self.cooking_time,
                &self.num_portions,
            ],
        )?;

        let id = conn.last_insert_rowid();
        self.id = Some(id);
        Ok(id)
    }

    /// Overwrite the stored row with this entry's attributes
    pub fn update(&self, conn: &Connection, id: i64) -> Result<()> {
        conn.execute(
            "UPDATE recipes
             SET name = ?1, meal_type = ?2, meal_category = ?3, cooking_time = ?4,
                 num_portions = ?5, updated_at = CURRENT_TIMESTAMP
             WHERE id = ?6",
            params![
                &self.name,
                self.meal_type.as_str(),
                self.meal_category.as_str(),
                &self.cooking_time,
                &self.num_portions,
                id,
            ],
        )?;
        Ok(())
    }

    /// Find a recipe row by ID
    pub fn find_by_id(conn: &Connection, id: i64) -> Result<Option<Self>> {
        let mut stmt = conn.prepare(&format!("SELECT {COLUMNS} FROM recipes WHERE id = ?1"))?;
        let entry = stmt.query_row([id], Self::from_row).optional()?;
        Ok(entry)
    }

    /// Find recipes whose name contains `pattern` (case-insensitive)
    pub fn search_by_name(conn: &Connection, pattern: &str) -> Result<Vec<Self>> {
        let mut stmt = conn.prepare(&format!(
            "SELECT {COLUMNS} FROM recipes WHERE name LIKE '%' || ?1 || '%' ORDER BY id"
        ))?;

        let entries = stmt
            .query_map([pattern], Self::from_row)?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(entries)
    }

    /// List all recipe rows
    pub fn list_all(conn: &Connection) -> Result<Vec<Self>> {
        let mut stmt = conn.prepare(&format!("SELECT {COLUMNS} FROM recipes ORDER BY id"))?;

        let entries = stmt
            .query_map([], Self::from_row)?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(entries)
    }

    pub fn exists(conn: &Connection, id: i64) -> Result<bool> {
        let count: i64 = conn.query_row(
            "SELECT COUNT(*) FROM recipes WHERE id = ?1",
            [id],
            |row| row.get(0),
        )?;
        Ok(count > 0)
    }

    /// Delete a recipe row; ingredients and instructions cascade
    pub fn delete(conn: &Connection, id: i64) -> Result<()> {
        conn.execute("DELETE FROM recipes WHERE id = ?1", [id])?;
        Ok(())
    }

    /// Convert a database row to a RecipeEntry
    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        let meal_type_str: String = row.get(2)?;
        let meal_type = MealType::from_str(&meal_type_str).map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(2, rusqlite::types::Type::Text, Box::new(e))
        })?;

        let category_str: String = row.get(3)?;
        let meal_category = MealCategory::from_str(&category_str).map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(3, rusqlite::types::Type::Text, Box::new(e))
        })?;

        Ok(Self {
            id: Some(row.get(0)?),
            name: row.get(1)?,
            meal_type,
            meal_category,
            cooking_time: row.get(4)?,
            num_portions: row.get(5)?,
            created_at: row.get(6)?,
            updated_at: row.get(7)?,
        })
    }
}
