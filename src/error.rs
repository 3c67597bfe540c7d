// src/error.rs

//! Error types for the recipe book
//!
//! Domain errors (`InvalidArgument`, `InvalidOperation`) are raised by the
//! recipe model at the point of violation. `NotFound` and the
//! infrastructure variants come from the repository layer.

use thiserror::Error;

/// Errors that can occur in the recipe book
#[derive(Error, Debug)]
pub enum Error {
    /// Malformed or out-of-range input to a constructor, setter or mutator
    #[error("Invalid {field}: {reason}")]
    InvalidArgument { field: &'static str, reason: String },

    /// Ordering requested on an entity that is missing its identifier
    #[error("Invalid operation: {0}")]
    InvalidOperation(String),

    /// Repository lookup miss
    #[error("Not found: {0}")]
    NotFound(String),

    /// SQLite failure
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// Filesystem failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Card could not be encoded or decoded
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl Error {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Error::InvalidArgument {
            field,
            reason: reason.into(),
        }
    }

    /// Name of the offending field for validation errors
    ///
    /// Lets a form layer attach the message to the right input.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            Error::InvalidArgument { field, .. } => Some(field),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound(_))
    }
}

impl From<toml::de::Error> for Error {
    fn from(e: toml::de::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(e: toml::ser::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}

/// Result type alias using the recipe book Error type
pub type Result<T> = std::result::Result<T, Error>;
