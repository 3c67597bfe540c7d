// src/recipe/mod.rs

//! Recipe domain model
//!
//! - **Recipe**: the aggregate root. Owns a de-duplicated, sorted set of
//!   ingredients and an insertion-ordered list of instructions.
//! - **Ingredient**: value type, equal by name, amount and unit.
//! - **Instruction**: value type, equal by text, ordered by storage ID.
//! - **RecipeCard**: flat serialized form used for import and export.
//!
//! Identifiers are assigned by storage, so comparisons that need them only
//! succeed once a recipe has been saved.

mod aggregate;
mod card;
mod ingredient;
mod instruction;
mod meal;

pub use aggregate::Recipe;
pub use card::{IngredientCard, InstructionCard, RecipeCard};
pub use ingredient::Ingredient;
pub use instruction::Instruction;
pub use meal::{MealCategory, MealType};
