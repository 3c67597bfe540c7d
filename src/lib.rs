// src/lib.rs

//! RecipeBook
//!
//! A recipe collection built around a small, strict domain model.
//!
//! # Architecture
//!
//! - Recipes are aggregates: they own a sorted, de-duplicated ingredient set
//!   and an ordered list of instructions, and validate every change
//! - Ingredients and instructions are immutable values; equality is by
//!   content, never by storage ID
//! - Storage sits behind the `RecipeRepository` trait, with SQLite and
//!   in-memory implementations
//! - Recipe cards (TOML/JSON) are the import and export format

pub mod db;
mod error;
pub mod recipe;

pub use db::{MemoryRecipeRepository, RecipeRepository, SqliteRecipeRepository};
pub use error::{Error, Result};
pub use recipe::{
    Ingredient, IngredientCard, Instruction, InstructionCard, MealCategory, MealType, Recipe,
    RecipeCard,
};
