// src/db/mod.rs

//! SQLite storage for recipes
//!
//! All recipe state lives in one SQLite database. This module owns the
//! connection lifecycle; row mapping lives in [`models`] and the aggregate
//! level load/save logic in [`repository`].

pub mod memory;
mod migrations;
pub mod models;
pub mod paths;
pub mod repository;
pub mod schema;

pub use memory::MemoryRecipeRepository;
pub use repository::{RecipeRepository, SqliteRecipeRepository};

use crate::error::{Error, Result};
use rusqlite::{Connection, Transaction};
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Per-connection settings
fn configure(conn: &Connection) -> Result<()> {
    conn.execute_batch("PRAGMA foreign_keys = ON;")?;
    Ok(())
}

/// Create the database file (and its directory) and apply the schema
pub fn init(db_path: &str) -> Result<()> {
    if let Some(parent) = Path::new(db_path).parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }

    let conn = Connection::open(db_path)?;
    configure(&conn)?;
    schema::migrate(&conn)?;

    info!("Database initialized at {}", db_path);
    Ok(())
}

/// Open an existing database, applying any pending migrations
pub fn open(db_path: &str) -> Result<Connection> {
    if !Path::new(db_path).exists() {
        return Err(Error::NotFound(format!(
            "database {} (run `recipebook init` first)",
            db_path
        )));
    }

    debug!("Opening database at {}", db_path);
    let conn = Connection::open(db_path)?;
    configure(&conn)?;
    schema::migrate(&conn)?;
    Ok(conn)
}

/// Open a private in-memory database with the current schema
pub fn open_in_memory() -> Result<Connection> {
    let conn = Connection::open_in_memory()?;
    configure(&conn)?;
    schema::migrate(&conn)?;
    Ok(conn)
}

/// Run `f` inside a transaction, committing only if it succeeds
///
/// On error the transaction is dropped, which rolls it back.
pub fn transaction<T, F>(conn: &mut Connection, f: F) -> Result<T>
where
    F: FnOnce(&Transaction) -> Result<T>,
{
    let tx = conn.transaction()?;
    let value = f(&tx)?;
    tx.commit()?;
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_init_creates_parent_directories() {
        let temp_dir = TempDir::new().unwrap();
        let db_path = temp_dir.path().join("nested/dir/recipes.db");
        let db_path = db_path.to_str().unwrap();

        init(db_path).unwrap();
        assert!(Path::new(db_path).exists());

        let conn = open(db_path).unwrap();
        assert_eq!(schema::get_schema_version(&conn).unwrap(), schema::SCHEMA_VERSION);
    }

    #[test]
    fn test_open_missing_database() {
        let temp_dir = TempDir::new().unwrap();
        let db_path = temp_dir.path().join("missing.db");

        let err = open(db_path.to_str().unwrap()).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_transaction_rolls_back_on_error() {
        let mut conn = open_in_memory().unwrap();

        let result: Result<()> = transaction(&mut conn, |tx| {
            tx.execute(
                "INSERT INTO recipes (name, meal_type, meal_category, cooking_time, num_portions)
                 VALUES ('Soup', 'soup', 'meat', 30, 2)",
                [],
            )?;
            Err(Error::invalid("name", "forced failure"))
        });
        assert!(result.is_err());

        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM recipes", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 0);
    }
}
