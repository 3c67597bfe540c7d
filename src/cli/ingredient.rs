// src/cli/ingredient.rs

//! Ingredient editing commands

use super::DbArgs;
use clap::Subcommand;

#[derive(Subcommand)]
pub enum IngredientCommands {
    /// Add an ingredient to a recipe
    Add {
        /// Recipe ID
        recipe_id: i64,

        /// Ingredient name
        name: String,

        /// Amount, in `unit`
        amount: f64,

        /// Unit of the amount (g, ml, pc, ...)
        unit: String,

        #[command(flatten)]
        db: DbArgs,
    },

    /// Remove an ingredient from a recipe
    Remove {
        /// Recipe ID
        recipe_id: i64,

        /// Ingredient name
        name: String,

        /// Amount, in `unit`
        amount: f64,

        /// Unit of the amount
        unit: String,

        #[command(flatten)]
        db: DbArgs,
    },
}
