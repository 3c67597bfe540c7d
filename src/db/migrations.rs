// src/db/migrations.rs

//! Database migration implementations
//!
//! Each function upgrades the schema by exactly one version.

use crate::error::Result;
use rusqlite::Connection;
use tracing::{debug, info};

/// Initial schema - Version 1
///
/// Creates the recipe tables:
/// - recipes: One row per recipe aggregate
/// - ingredients: Ingredient lines, owned by one recipe
/// - instructions: Steps, owned by one recipe, ordered by position
pub fn migrate_v1(conn: &Connection) -> Result<()> {
    debug!("Creating schema version 1");

    conn.execute_batch(
        "
        -- Recipes: The aggregate root
        CREATE TABLE recipes (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL CHECK(length(trim(name)) > 0),
            meal_type TEXT NOT NULL CHECK(meal_type IN ('appetizer', 'soup', 'salad', 'main-course', 'side-dish', 'dessert', 'beverage')),
            meal_category TEXT NOT NULL CHECK(meal_category IN ('meat', 'meatless', 'fish', 'vegan')),
            cooking_time INTEGER NOT NULL CHECK(cooking_time >= 0),
            num_portions INTEGER NOT NULL CHECK(num_portions >= 1),
            created_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP,
            updated_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP
        );

        CREATE INDEX idx_recipes_name ON recipes(name);

        -- Ingredients: name/amount/unit lines of a recipe
        CREATE TABLE ingredients (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            recipe_id INTEGER NOT NULL,
            name TEXT NOT NULL,
            amount REAL NOT NULL CHECK(amount >= 0),
            unit TEXT NOT NULL,
            FOREIGN KEY (recipe_id) REFERENCES recipes(id) ON DELETE CASCADE
        );

        CREATE INDEX idx_ingredients_recipe_id ON ingredients(recipe_id);
        CREATE INDEX idx_ingredients_name ON ingredients(name);

        -- Instructions: ordered steps of a recipe
        CREATE TABLE instructions (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            recipe_id INTEGER NOT NULL,
            position INTEGER NOT NULL,
            text TEXT NOT NULL,
            UNIQUE(recipe_id, position),
            FOREIGN KEY (recipe_id) REFERENCES recipes(id) ON DELETE CASCADE
        );

        CREATE INDEX idx_instructions_recipe_id ON instructions(recipe_id);
        ",
    )?;

    info!("Schema version 1 created successfully");
    Ok(())
}
