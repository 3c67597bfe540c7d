// src/cli/instruction.rs

//! Instruction editing commands

use super::DbArgs;
use clap::Subcommand;

#[derive(Subcommand)]
pub enum InstructionCommands {
    /// Append a step to a recipe
    Add {
        /// Recipe ID
        recipe_id: i64,

        /// Text of the step
        text: String,

        #[command(flatten)]
        db: DbArgs,
    },

    /// Reorder a recipe's steps by the order they were first stored
    Sort {
        /// Recipe ID
        recipe_id: i64,

        #[command(flatten)]
        db: DbArgs,
    },
}
