// src/commands/instruction.rs

//! Instruction editing commands

use anyhow::Result;
use recipebook::{Instruction, RecipeRepository, SqliteRecipeRepository};
use tracing::info;

/// Append a step to a stored recipe
pub fn cmd_instruction_add(recipe_id: i64, text: &str, db_path: &str) -> Result<()> {
    let instruction = Instruction::new(text)?;

    let mut repo = SqliteRecipeRepository::open(db_path)?;
    let mut recipe = repo.find_by_id(recipe_id)?;

    info!("Adding step to recipe {}", recipe_id);
    recipe.add_instruction(instruction);
    repo.save(&mut recipe)?;

    println!(
        "Added step {} to {}",
        recipe.instructions().len(),
        recipe.name()
    );
    Ok(())
}

/// Put a stored recipe's steps back into storage order
pub fn cmd_instruction_sort(recipe_id: i64, db_path: &str) -> Result<()> {
    let mut repo = SqliteRecipeRepository::open(db_path)?;
    let mut recipe = repo.find_by_id(recipe_id)?;

    recipe.sort_instructions_by_id()?;
    repo.save(&mut recipe)?;

    println!("Steps of {}:", recipe.name());
    for (step, instruction) in recipe.instructions().iter().enumerate() {
        println!("  {}. {}", step + 1, instruction);
    }
    Ok(())
}
