// tests/common/mod.rs

//! Shared test utilities and helpers for integration tests.

#![allow(dead_code)]

use recipebook::db;
use recipebook::{
    Ingredient, Instruction, MealCategory, MealType, Recipe, RecipeRepository,
    SqliteRecipeRepository,
};
use tempfile::TempDir;

pub fn ingredient(name: &str, amount: f64, unit: &str) -> Ingredient {
    Ingredient::new(name, amount, unit).unwrap()
}

pub fn instruction(text: &str) -> Instruction {
    Instruction::new(text).unwrap()
}

/// Pancakes: a complete, unsaved recipe
pub fn pancakes() -> Recipe {
    let mut recipe =
        Recipe::new("Pancakes", MealType::Dessert, MealCategory::Meatless, 25, 4).unwrap();
    recipe
        .set_ingredients([
            ingredient("Flour", 250.0, "g"),
            ingredient("Milk", 500.0, "ml"),
            ingredient("Egg", 2.0, "pc"),
            ingredient("Sugar", 1.0, "tbsp"),
        ])
        .unwrap();
    recipe
        .set_instructions([
            instruction("Whisk flour, milk and eggs"),
            instruction("Rest the batter for 10 minutes"),
            instruction("Fry in a hot pan"),
        ])
        .unwrap();
    recipe
}

/// Tomato soup: a complete, unsaved recipe
pub fn tomato_soup() -> Recipe {
    let mut recipe =
        Recipe::new("Tomato Soup", MealType::Soup, MealCategory::Vegan, 40, 2).unwrap();
    recipe
        .set_ingredients([
            ingredient("Tomato", 800.0, "g"),
            ingredient("Onion", 1.0, "pc"),
            ingredient("Salt", 1.0, "tsp"),
        ])
        .unwrap();
    recipe
        .set_instructions([
            instruction("Soften the onion"),
            instruction("Add tomatoes and simmer"),
            instruction("Blend and season"),
        ])
        .unwrap();
    recipe
}

/// Create a file-backed test database holding pancakes and tomato soup.
///
/// Returns (TempDir, db_path) - keep the TempDir alive to prevent cleanup.
pub fn setup_recipe_db() -> (TempDir, String) {
    let temp_dir = tempfile::tempdir().unwrap();
    let db_path = temp_dir
        .path()
        .join("recipes.db")
        .to_str()
        .unwrap()
        .to_string();

    db::init(&db_path).unwrap();
    let mut repo = SqliteRecipeRepository::open(&db_path).unwrap();
    repo.save(&mut pancakes()).unwrap();
    repo.save(&mut tomato_soup()).unwrap();

    (temp_dir, db_path)
}
