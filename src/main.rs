// src/main.rs

use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;

use cli::{Cli, Commands, IngredientCommands, InstructionCommands};

fn main() -> Result<()> {
    // Initialize tracing subscriber for logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Init { db }) => commands::cmd_init(&db.resolve()),
        Some(Commands::List { name, db }) => commands::cmd_list(name.as_deref(), &db.resolve()),
        Some(Commands::Show { id, db }) => commands::cmd_show(id, &db.resolve()),
        Some(Commands::Import { path, db }) => commands::cmd_import(&path, &db.resolve()),
        Some(Commands::Export {
            id,
            format,
            output,
            db,
        }) => commands::cmd_export(id, format, output.as_deref(), &db.resolve()),
        Some(Commands::Delete { id, db }) => commands::cmd_delete(id, &db.resolve()),

        Some(Commands::Ingredient(cmd)) => match cmd {
            IngredientCommands::Add {
                recipe_id,
                name,
                amount,
                unit,
                db,
            } => commands::cmd_ingredient_add(recipe_id, &name, amount, &unit, &db.resolve()),
            IngredientCommands::Remove {
                recipe_id,
                name,
                amount,
                unit,
                db,
            } => commands::cmd_ingredient_remove(recipe_id, &name, amount, &unit, &db.resolve()),
        },

        Some(Commands::Instruction(cmd)) => match cmd {
            InstructionCommands::Add { recipe_id, text, db } => {
                commands::cmd_instruction_add(recipe_id, &text, &db.resolve())
            }
            InstructionCommands::Sort { recipe_id, db } => {
                commands::cmd_instruction_sort(recipe_id, &db.resolve())
            }
        },

        None => {
            println!("RecipeBook");
            println!("Run 'recipebook --help' for usage information");
            Ok(())
        }
    }
}
