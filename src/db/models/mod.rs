// src/db/models/mod.rs

//! Data models for recipe database rows
//!
//! Each struct corresponds to one table and provides methods for creating,
//! reading and deleting records. Assembling rows into a [`crate::Recipe`]
//! is the job of [`super::repository`].

mod ingredient_entry;
mod instruction_entry;
mod recipe_entry;

pub use ingredient_entry::IngredientEntry;
pub use instruction_entry::InstructionEntry;
pub use recipe_entry::RecipeEntry;
