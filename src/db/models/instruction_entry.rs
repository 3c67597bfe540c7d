// src/db/models/instruction_entry.rs

//! InstructionEntry model - ordered steps owned by a recipe

use crate::error::Result;
use crate::recipe::Instruction;
use rusqlite::{Connection, Row, params};

/// A row of the instructions table
#[derive(Debug, Clone)]
pub struct InstructionEntry {
    pub id: Option<i64>,
    pub recipe_id: i64,
    /// Zero-based index of the step within its recipe
    pub position: i64,
    pub text: String,
}

impl InstructionEntry {
    pub fn new(recipe_id: i64, position: i64, instruction: &Instruction) -> Self {
        Self {
            id: instruction.id(),
            recipe_id,
            position,
            text: instruction.text().to_string(),
        }
    }

    /// Insert this instruction, keeping a preset `id`
    pub fn insert(&mut self, conn: &Connection) -> Result<i64> {
        conn.execute(
            "INSERT INTO instructions (id, recipe_id, position, text) VALUES (?1, ?2, ?3, ?4)",
            params![&self.id, &self.recipe_id, &self.position, &self.text],
        )?;

        let id = conn.last_insert_rowid();
        self.id = Some(id);
        Ok(id)
    }

    /// Find all instructions of a recipe, in step order
    pub fn find_by_recipe(conn: &Connection, recipe_id: i64) -> Result<Vec<Self>> {
        let mut stmt = conn.prepare(
            "SELECT id, recipe_id, position, text FROM instructions
             WHERE recipe_id = ?1 ORDER BY position",
        )?;

        let entries = stmt
            .query_map([recipe_id], Self::from_row)?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(entries)
    }

    /// Remove all instructions of a recipe
    pub fn delete_for_recipe(conn: &Connection, recipe_id: i64) -> Result<()> {
        conn.execute("DELETE FROM instructions WHERE recipe_id = ?1", [recipe_id])?;
        Ok(())
    }

    pub fn to_instruction(&self) -> Result<Instruction> {
        let instruction = Instruction::new(self.text.clone())?;
        match self.id {
            Some(id) => instruction.with_id(id),
            None => Ok(instruction),
        }
    }

    /// Convert a database row to an InstructionEntry
    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Self {
            id: Some(row.get(0)?),
            recipe_id: row.get(1)?,
            position: row.get(2)?,
            text: row.get(3)?,
        })
    }
}
