// src/recipe/instruction.rs

//! Instruction value type
//!
//! NOTE: the ordering of instructions is inconsistent with equality.
//! Equality looks only at the text, ordering looks only at the storage
//! identifier. Ordering is therefore a fallible [`Instruction::compare`]
//! rather than an `Ord` impl.

use crate::error::{Error, Result};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// One step of a recipe
#[derive(Debug, Clone)]
pub struct Instruction {
    id: Option<i64>,
    text: String,
}

impl Instruction {
    /// Create a new instruction without a storage identifier
    pub fn new(text: impl Into<String>) -> Result<Self> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(Error::invalid("text", "instruction text cannot be empty"));
        }
        Ok(Self { id: None, text })
    }

    /// Return a copy carrying the given storage identifier
    pub fn with_id(self, id: i64) -> Result<Self> {
        if id < 0 {
            return Err(Error::invalid("id", "id cannot be negative"));
        }
        Ok(Self {
            id: Some(id),
            ..self
        })
    }

    pub fn id(&self) -> Option<i64> {
        self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Compare two instructions by storage identifier
    ///
    /// Fails with `InvalidOperation` if either side has not been stored yet.
    pub fn compare(&self, other: &Self) -> Result<Ordering> {
        match (self.id, other.id) {
            (Some(a), Some(b)) => Ok(a.cmp(&b)),
            _ => Err(Error::InvalidOperation(
                "comparing instruction with no ID".to_string(),
            )),
        }
    }
}

impl PartialEq for Instruction {
    fn eq(&self, other: &Self) -> bool {
        self.text == other.text
    }
}

impl Eq for Instruction {}

impl Hash for Instruction {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.text.hash(state);
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_empty_text() {
        let err = Instruction::new("").unwrap_err();
        assert_eq!(err.field(), Some("text"));
        assert!(Instruction::new("   ").is_err());
    }

    #[test]
    fn test_with_id_rejects_negative() {
        let mix = Instruction::new("Mix").unwrap();
        assert!(mix.clone().with_id(-3).is_err());
        assert_eq!(mix.with_id(0).unwrap().id(), Some(0));
    }

    #[test]
    fn test_equality_by_text_only() {
        let a = Instruction::new("Mix").unwrap().with_id(1).unwrap();
        let b = Instruction::new("Mix").unwrap().with_id(9).unwrap();
        let c = Instruction::new("Bake").unwrap().with_id(1).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_compare_requires_ids() {
        let mix = Instruction::new("Mix").unwrap();
        let bake = Instruction::new("Bake").unwrap().with_id(5).unwrap();

        let err = mix.compare(&bake).unwrap_err();
        assert!(matches!(err, Error::InvalidOperation(_)));
        assert!(bake.compare(&mix).is_err());
    }

    #[test]
    fn test_compare_by_id_ignores_text() {
        let mix = Instruction::new("Mix").unwrap().with_id(2).unwrap();
        let bake = Instruction::new("Bake").unwrap().with_id(5).unwrap();
        assert_eq!(mix.compare(&bake).unwrap(), Ordering::Less);
        assert_eq!(bake.compare(&mix).unwrap(), Ordering::Greater);

        // Same position, different steps: equal order yet not equal
        let other = Instruction::new("Rest").unwrap().with_id(2).unwrap();
        assert_eq!(mix.compare(&other).unwrap(), Ordering::Equal);
        assert_ne!(mix, other);
    }
}
