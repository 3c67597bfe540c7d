// src/recipe/aggregate.rs

//! Recipe aggregate root
//!
//! A recipe owns its ingredients and instructions and is the consistency
//! boundary for them. Every mutator validates its whole input before
//! touching any state, so a rejected call leaves the recipe as it was.
//!
//! NOTE: recipe ordering (by ID) is inconsistent with equality (structural).

use super::{Ingredient, Instruction, MealCategory, MealType};
use crate::error::{Error, Result};
use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::fmt;

/// A recipe with its ingredient set and ordered instructions
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Recipe {
    id: Option<i64>,
    name: String,
    meal_type: MealType,
    meal_category: MealCategory,
    /// Cooking time in minutes
    cooking_time: i32,
    num_portions: i32,
    ingredients: BTreeSet<Ingredient>,
    instructions: Vec<Instruction>,
}

fn check_id(id: i64) -> Result<()> {
    if id < 0 {
        return Err(Error::invalid("id", "id cannot be negative"));
    }
    Ok(())
}

fn check_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(Error::invalid("name", "recipe name cannot be empty"));
    }
    Ok(())
}

fn check_cooking_time(minutes: i32) -> Result<()> {
    if minutes < 0 {
        return Err(Error::invalid("cooking_time", "cooking time cannot be negative"));
    }
    Ok(())
}

fn check_num_portions(portions: i32) -> Result<()> {
    if portions < 1 {
        return Err(Error::invalid(
            "num_portions",
            "number of portions has to be at least 1",
        ));
    }
    Ok(())
}

fn non_empty_set<I>(ingredients: I) -> Result<BTreeSet<Ingredient>>
where
    I: IntoIterator<Item = Ingredient>,
{
    let set: BTreeSet<Ingredient> = ingredients.into_iter().collect();
    if set.is_empty() {
        return Err(Error::invalid("ingredients", "ingredients cannot be empty"));
    }
    Ok(set)
}

impl Recipe {
    /// Create a new recipe with no ingredients and no instructions yet
    pub fn new(
        name: impl Into<String>,
        meal_type: MealType,
        meal_category: MealCategory,
        cooking_time: i32,
        num_portions: i32,
    ) -> Result<Self> {
        let name = name.into();
        check_name(&name)?;
        check_cooking_time(cooking_time)?;
        check_num_portions(num_portions)?;

        Ok(Self {
            id: None,
            name,
            meal_type,
            meal_category,
            cooking_time,
            num_portions,
            ingredients: BTreeSet::new(),
            instructions: Vec::new(),
        })
    }

    pub fn id(&self) -> Option<i64> {
        self.id
    }

    pub fn set_id(&mut self, id: i64) -> Result<()> {
        check_id(id)?;
        self.id = Some(id);
        Ok(())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) -> Result<()> {
        let name = name.into();
        check_name(&name)?;
        self.name = name;
        Ok(())
    }

    pub fn meal_type(&self) -> MealType {
        self.meal_type
    }

    pub fn set_meal_type(&mut self, meal_type: MealType) {
        self.meal_type = meal_type;
    }

    pub fn meal_category(&self) -> MealCategory {
        self.meal_category
    }

    pub fn set_meal_category(&mut self, meal_category: MealCategory) {
        self.meal_category = meal_category;
    }

    /// Cooking time in minutes
    pub fn cooking_time(&self) -> i32 {
        self.cooking_time
    }

    pub fn set_cooking_time(&mut self, minutes: i32) -> Result<()> {
        check_cooking_time(minutes)?;
        self.cooking_time = minutes;
        Ok(())
    }

    pub fn num_portions(&self) -> i32 {
        self.num_portions
    }

    pub fn set_num_portions(&mut self, portions: i32) -> Result<()> {
        check_num_portions(portions)?;
        self.num_portions = portions;
        Ok(())
    }

    /// Ingredients, sorted by name, unit and amount
    pub fn ingredients(&self) -> &BTreeSet<Ingredient> {
        &self.ingredients
    }

    pub fn contains_ingredient(&self, ingredient: &Ingredient) -> bool {
        self.ingredients.contains(ingredient)
    }

    /// Replace all ingredients
    ///
    /// Duplicates in the input collapse into one entry.
    pub fn set_ingredients<I>(&mut self, ingredients: I) -> Result<()>
    where
        I: IntoIterator<Item = Ingredient>,
    {
        self.ingredients = non_empty_set(ingredients)?;
        Ok(())
    }

    /// Add ingredients (set union)
    ///
    /// An ingredient equal to one already in the recipe is absorbed and the
    /// stored entry, with its ID, is kept.
    pub fn add_ingredients<I>(&mut self, ingredients: I) -> Result<()>
    where
        I: IntoIterator<Item = Ingredient>,
    {
        let added = non_empty_set(ingredients)?;
        for ingredient in added {
            self.ingredients.insert(ingredient);
        }
        Ok(())
    }

    /// Remove ingredients (set difference)
    ///
    /// Ingredients that are not in the recipe are ignored. Fails if the
    /// removal would leave the recipe without ingredients.
    pub fn remove_ingredients<I>(&mut self, ingredients: I) -> Result<()>
    where
        I: IntoIterator<Item = Ingredient>,
    {
        let removed = non_empty_set(ingredients)?;
        let hits = self.ingredients.intersection(&removed).count();
        if hits > 0 && hits == self.ingredients.len() {
            return Err(Error::invalid(
                "ingredients",
                "recipe cannot be left without ingredients",
            ));
        }
        self.ingredients.retain(|i| !removed.contains(i));
        Ok(())
    }

    /// Add a single ingredient; an equal ingredient already present wins
    pub fn add_ingredient(&mut self, ingredient: Ingredient) {
        self.ingredients.insert(ingredient);
    }

    /// Remove a single ingredient, returning the stored entry
    ///
    /// Unlike [`Recipe::remove_ingredients`], this fails if the ingredient is
    /// not in the recipe.
    pub fn remove_ingredient(&mut self, ingredient: &Ingredient) -> Result<Ingredient> {
        if !self.ingredients.contains(ingredient) {
            return Err(Error::invalid(
                "ingredients",
                format!("ingredient '{}' is not in this recipe", ingredient),
            ));
        }
        if self.ingredients.len() == 1 {
            return Err(Error::invalid(
                "ingredients",
                "recipe cannot be left without ingredients",
            ));
        }
        self.ingredients
            .take(ingredient)
            .ok_or_else(|| Error::invalid("ingredients", "ingredient is not in this recipe"))
    }

    /// Instructions in the order they were given
    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    /// Replace all instructions, keeping their order
    pub fn set_instructions<I>(&mut self, instructions: I) -> Result<()>
    where
        I: IntoIterator<Item = Instruction>,
    {
        let instructions: Vec<Instruction> = instructions.into_iter().collect();
        if instructions.is_empty() {
            return Err(Error::invalid("instructions", "instructions cannot be empty"));
        }
        self.instructions = instructions;
        Ok(())
    }

    /// Append one instruction as the last step
    pub fn add_instruction(&mut self, instruction: Instruction) {
        self.instructions.push(instruction);
    }

    /// Reorder instructions by their storage IDs
    ///
    /// Fails without reordering anything if any instruction has no ID.
    pub fn sort_instructions_by_id(&mut self) -> Result<()> {
        let mut keyed = Vec::with_capacity(self.instructions.len());
        for (pos, instruction) in self.instructions.iter().enumerate() {
            let id = instruction.id().ok_or_else(|| {
                Error::InvalidOperation(format!(
                    "cannot sort instructions: step {} has no ID",
                    pos + 1
                ))
            })?;
            keyed.push((id, instruction.clone()));
        }

        keyed.sort_by_key(|(id, _)| *id);
        self.instructions = keyed.into_iter().map(|(_, instruction)| instruction).collect();
        Ok(())
    }

    /// Compare two recipes by ID
    pub fn compare(&self, other: &Self) -> Result<Ordering> {
        match (self.id, other.id) {
            (Some(a), Some(b)) => Ok(a.cmp(&b)),
            _ => Err(Error::InvalidOperation(
                "comparing recipe with no ID".to_string(),
            )),
        }
    }

    /// Check that the recipe is complete enough to be stored
    pub fn validate(&self) -> Result<()> {
        check_name(&self.name)?;
        check_cooking_time(self.cooking_time)?;
        check_num_portions(self.num_portions)?;
        if self.ingredients.is_empty() {
            return Err(Error::invalid("ingredients", "recipe has no ingredients"));
        }
        if self.instructions.is_empty() {
            return Err(Error::invalid("instructions", "recipe has no instructions"));
        }
        Ok(())
    }
}

impl fmt::Display for Recipe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}, {}, {} min, serves {})",
            self.name, self.meal_type, self.meal_category, self.cooking_time, self.num_portions
        )
    }
}
