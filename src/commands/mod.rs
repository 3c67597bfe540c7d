// src/commands/mod.rs

//! Command handlers for the recipebook CLI

mod ingredient;
mod instruction;
mod recipe;

// Re-export all command handlers
pub use ingredient::{cmd_ingredient_add, cmd_ingredient_remove};
pub use instruction::{cmd_instruction_add, cmd_instruction_sort};
pub use recipe::{cmd_delete, cmd_export, cmd_import, cmd_init, cmd_list, cmd_show};
