// src/db/paths.rs

//! Database location
//!
//! Resolution order: explicit `--db-path`, then the `RECIPEBOOK_DB`
//! environment variable, then `<data dir>/recipebook/recipebook.db`.

use std::path::PathBuf;

/// Environment variable overriding the default database location
pub const DB_PATH_ENV: &str = "RECIPEBOOK_DB";

const DB_FILE_NAME: &str = "recipebook.db";

fn db_path_from(env_value: Option<String>, data_dir: Option<PathBuf>) -> PathBuf {
    if let Some(path) = env_value.filter(|p| !p.trim().is_empty()) {
        return PathBuf::from(path);
    }
    data_dir
        .unwrap_or_else(|| PathBuf::from("."))
        .join("recipebook")
        .join(DB_FILE_NAME)
}

/// Default database path, honoring `RECIPEBOOK_DB`
pub fn default_db_path() -> PathBuf {
    db_path_from(std::env::var(DB_PATH_ENV).ok(), dirs::data_dir())
}

/// Pick the database path for a command
pub fn resolve_db_path(explicit: Option<&str>) -> String {
    match explicit {
        Some(path) => path.to_string(),
        None => default_db_path().to_string_lossy().into_owned(),
    }
}
