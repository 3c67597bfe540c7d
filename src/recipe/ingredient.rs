// src/recipe/ingredient.rs

//! Ingredient value type
//!
//! Two ingredients are equal when name, amount and unit match; the storage
//! identifier never takes part in equality, hashing or ordering. The same
//! ingredient listed in two recipes is still two separate entities.

use crate::error::{Error, Result};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// One ingredient line of a recipe, e.g. `200 g flour`
#[derive(Debug, Clone)]
pub struct Ingredient {
    id: Option<i64>,
    name: String,
    amount: f64,
    unit: String,
}

impl Ingredient {
    /// Create a new ingredient without a storage identifier
    pub fn new(name: impl Into<String>, amount: f64, unit: impl Into<String>) -> Result<Self> {
        let name = name.into();
        let unit = unit.into();

        if name.trim().is_empty() {
            return Err(Error::invalid("name", "ingredient name cannot be empty"));
        }
        if unit.trim().is_empty() {
            return Err(Error::invalid("unit", "unit cannot be empty"));
        }
        if !amount.is_finite() {
            return Err(Error::invalid("amount", "amount must be a finite number"));
        }
        if amount < 0.0 {
            return Err(Error::invalid("amount", "amount cannot be negative"));
        }

        Ok(Self {
            id: None,
            name,
            // -0.0 passes the sign check; fold it into +0.0 so bit equality
            // and numeric ordering agree
            amount: if amount == 0.0 { 0.0 } else { amount },
            unit,
        })
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

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }

    pub fn unit(&self) -> &str {
        &self.unit
    }
}

impl PartialEq for Ingredient {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.amount.to_bits() == other.amount.to_bits()
            && self.unit == other.unit
    }
}

impl Eq for Ingredient {}

impl Hash for Ingredient {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
        self.amount.to_bits().hash(state);
        self.unit.hash(state);
    }
}

impl Ord for Ingredient {
    /// Orders by name, then unit, then amount
    fn cmp(&self, other: &Self) -> Ordering {
        self.name
            .cmp(&other.name)
            .then_with(|| self.unit.cmp(&other.unit))
            // Amounts are finite and never -0.0, so this is the natural order
            .then_with(|| self.amount.total_cmp(&other.amount))
    }
}

impl PartialOrd for Ingredient {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Ingredient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.amount, self.unit, self.name)
    }
}
