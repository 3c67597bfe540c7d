// src/commands/recipe.rs

//! Recipe commands: init, list, show, import, export, delete

use crate::cli::CardFormat;
use anyhow::Result;
use recipebook::{RecipeCard, RecipeRepository, SqliteRecipeRepository};
use std::fs;
use std::path::Path;
use tracing::info;

/// Create the database
pub fn cmd_init(db_path: &str) -> Result<()> {
    info!("Initializing recipe database at: {}", db_path);
    recipebook::db::init(db_path)?;
    println!("Database initialized successfully at: {}", db_path);
    Ok(())
}

/// List recipes, optionally filtered by name
pub fn cmd_list(name: Option<&str>, db_path: &str) -> Result<()> {
    let repo = SqliteRecipeRepository::open(db_path)?;

    let recipes = match name {
        Some(pattern) => repo.search(pattern)?,
        None => repo.list()?,
    };

    if recipes.is_empty() {
        println!("No recipes found.");
        println!("\nAdd one with: recipebook import <card.toml>");
        return Ok(());
    }

    println!("Recipes:");
    for recipe in &recipes {
        println!(
            "  [{}] {}",
            recipe.id().map(|id| id.to_string()).unwrap_or_default(),
            recipe
        );
    }

    println!("\nTotal: {} recipe(s)", recipes.len());
    Ok(())
}

/// Show one recipe in full
pub fn cmd_show(id: i64, db_path: &str) -> Result<()> {
    let repo = SqliteRecipeRepository::open(db_path)?;
    let recipe = repo.find_by_id(id)?;

    println!("Recipe: {}", recipe.name());
    println!("Type: {}", recipe.meal_type());
    println!("Category: {}", recipe.meal_category());
    println!("Cooking time: {} min", recipe.cooking_time());
    println!("Portions: {}", recipe.num_portions());

    println!("\nIngredients ({}):", recipe.ingredients().len());
    for ingredient in recipe.ingredients() {
        println!("  - {}", ingredient);
    }

    println!("\nInstructions:");
    for (step, instruction) in recipe.instructions().iter().enumerate() {
        println!("  {}. {}", step + 1, instruction);
    }

    Ok(())
}

/// Read a card, picking the format from the file extension
fn read_card(path: &str) -> Result<RecipeCard> {
    let content = fs::read_to_string(path)?;
    let is_json = Path::new(path)
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    let card = if is_json {
        RecipeCard::from_json(&content)?
    } else {
        RecipeCard::from_toml(&content)?
    };
    Ok(card)
}

/// Import a recipe card
///
/// A card carrying an `id` updates that recipe; otherwise a new one is
/// created.
pub fn cmd_import(path: &str, db_path: &str) -> Result<()> {
    info!("Importing recipe card: {}", path);
    let mut recipe = read_card(path)?.into_recipe()?;

    let mut repo = SqliteRecipeRepository::open(db_path)?;
    let id = repo.save(&mut recipe)?;

    println!("Imported recipe [{}] {}", id, recipe.name());
    Ok(())
}

/// Export a recipe card to stdout or a file
pub fn cmd_export(id: i64, format: CardFormat, output: Option<&str>, db_path: &str) -> Result<()> {
    let repo = SqliteRecipeRepository::open(db_path)?;
    let card = repo.find_by_id(id)?.to_card();

    let rendered = match format {
        CardFormat::Toml => card.to_toml()?,
        CardFormat::Json => card.to_json()?,
    };

    match output {
        Some(path) => {
            fs::write(path, rendered)?;
            println!("Exported recipe [{}] to {}", id, path);
        }
        None => print!("{}", rendered),
    }
    Ok(())
}

/// Delete a recipe
pub fn cmd_delete(id: i64, db_path: &str) -> Result<()> {
    let mut repo = SqliteRecipeRepository::open(db_path)?;
    let recipe = repo.find_by_id(id)?;
    repo.delete(id)?;

    println!("Deleted recipe [{}] {}", id, recipe.name());
    Ok(())
}
