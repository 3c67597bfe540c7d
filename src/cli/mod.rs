// src/cli/mod.rs

//! CLI definitions for the recipe book
//!
//! This module contains all command-line interface definitions using clap.
//! The actual command implementations are in the `commands` module.
//!
//! Recipe commands sit at the root level:
//! - `init` - Create the database
//! - `list` / `show` - Browse recipes
//! - `import` / `export` - Recipe cards (TOML or JSON)
//! - `delete` - Remove a recipe
//!
//! Editing contexts:
//! - `ingredient` - Add or remove ingredient lines
//! - `instruction` - Append or reorder steps

use clap::{Args, Parser, Subcommand, ValueEnum};
use recipebook::db::paths;

mod ingredient;
mod instruction;

pub use ingredient::IngredientCommands;
pub use instruction::InstructionCommands;

#[derive(Parser)]
#[command(name = "recipebook")]
#[command(author = "RecipeBook Contributors")]
#[command(version)]
#[command(about = "Keep recipes with validated ingredients and ordered steps", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Database selection shared by every command
#[derive(Args, Debug, Clone)]
pub struct DbArgs {
    /// Path to the database file (default: $RECIPEBOOK_DB or the user data directory)
    #[arg(short, long)]
    pub db_path: Option<String>,
}

impl DbArgs {
    pub fn resolve(&self) -> String {
        paths::resolve_db_path(self.db_path.as_deref())
    }
}

/// Recipe card format
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardFormat {
    Toml,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the recipe database
    Init {
        #[command(flatten)]
        db: DbArgs,
    },

    /// List recipes
    List {
        /// Only show recipes whose name contains this text
        #[arg(long)]
        name: Option<String>,

        #[command(flatten)]
        db: DbArgs,
    },

    /// Show a recipe with its ingredients and steps
    Show {
        /// Recipe ID
        id: i64,

        #[command(flatten)]
        db: DbArgs,
    },

    /// Import a recipe card (.toml or .json)
    Import {
        /// Path to the recipe card
        path: String,

        #[command(flatten)]
        db: DbArgs,
    },

    /// Export a recipe as a card
    Export {
        /// Recipe ID
        id: i64,

        /// Card format
        #[arg(long, value_enum, default_value = "toml")]
        format: CardFormat,

        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<String>,

        #[command(flatten)]
        db: DbArgs,
    },

    /// Delete a recipe
    Delete {
        /// Recipe ID
        id: i64,

        #[command(flatten)]
        db: DbArgs,
    },

    /// Edit the ingredients of a recipe
    #[command(subcommand)]
    Ingredient(IngredientCommands),

    /// Edit the instructions of a recipe
    #[command(subcommand)]
    Instruction(InstructionCommands),
}
