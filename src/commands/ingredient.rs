// src/commands/ingredient.rs

//! Ingredient editing commands

use anyhow::Result;
use recipebook::{Ingredient, RecipeRepository, SqliteRecipeRepository};
use tracing::info;

/// Add one ingredient to a stored recipe
pub fn cmd_ingredient_add(
    recipe_id: i64,
    name: &str,
    amount: f64,
    unit: &str,
    db_path: &str,
) -> Result<()> {
    let ingredient = Ingredient::new(name, amount, unit)?;

    let mut repo = SqliteRecipeRepository::open(db_path)?;
    let mut recipe = repo.find_by_id(recipe_id)?;

    if recipe.contains_ingredient(&ingredient) {
        println!("Recipe [{}] already lists {}", recipe_id, ingredient);
        return Ok(());
    }

    info!("Adding {} to recipe {}", ingredient, recipe_id);
    recipe.add_ingredient(ingredient.clone());
    repo.save(&mut recipe)?;

    println!("Added {} to {}", ingredient, recipe.name());
    Ok(())
}

/// Remove one ingredient from a stored recipe
///
/// Fails if the recipe does not list the ingredient.
pub fn cmd_ingredient_remove(
    recipe_id: i64,
    name: &str,
    amount: f64,
    unit: &str,
    db_path: &str,
) -> Result<()> {
    let ingredient = Ingredient::new(name, amount, unit)?;

    let mut repo = SqliteRecipeRepository::open(db_path)?;
    let mut recipe = repo.find_by_id(recipe_id)?;

    info!("Removing {} from recipe {}", ingredient, recipe_id);
    let removed = recipe.remove_ingredient(&ingredient)?;
    repo.save(&mut recipe)?;

    println!("Removed {} from {}", removed, recipe.name());
    Ok(())
}
