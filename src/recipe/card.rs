// src/recipe/card.rs

//! Recipe cards - the flat serialized form of a recipe
//!
//! A card carries every attribute of a [`Recipe`] and can be written as
//! TOML or JSON. Turning a card back into a recipe goes through the domain
//! constructors, so a card is validated exactly like hand-built input.
//!
//! # Example recipe card
//!
//! ```toml
//! name = "Pancakes"
//! meal_type = "dessert"
//! meal_category = "meatless"
//! cooking_time = 20
//! num_portions = 4
//!
//! [[ingredients]]
//! name = "Flour"
//! amount = 200.0
//! unit = "g"
//!
//! [[instructions]]
//! text = "Whisk everything into a smooth batter"
//! ```

use super::{Ingredient, Instruction, MealCategory, MealType, Recipe};
use crate::error::Result;
use serde::{Deserialize, Serialize};

/// Serialized form of a recipe
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeCard {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    pub meal_type: MealType,
    pub meal_category: MealCategory,
    /// Cooking time in minutes
    pub cooking_time: i32,
    pub num_portions: i32,
    #[serde(default)]
    pub ingredients: Vec<IngredientCard>,
    #[serde(default)]
    pub instructions: Vec<InstructionCard>,
}

/// Serialized form of an ingredient
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IngredientCard {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    pub amount: f64,
    pub unit: String,
}

/// Serialized form of an instruction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InstructionCard {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub text: String,
}

impl From<&Ingredient> for IngredientCard {
    fn from(ingredient: &Ingredient) -> Self {
        Self {
            id: ingredient.id(),
            name: ingredient.name().to_string(),
            amount: ingredient.amount(),
            unit: ingredient.unit().to_string(),
        }
    }
}

impl From<&Instruction> for InstructionCard {
    fn from(instruction: &Instruction) -> Self {
        Self {
            id: instruction.id(),
            text: instruction.text().to_string(),
        }
    }
}

impl IngredientCard {
    pub fn into_ingredient(self) -> Result<Ingredient> {
        let ingredient = Ingredient::new(self.name, self.amount, self.unit)?;
        match self.id {
            Some(id) => ingredient.with_id(id),
            None => Ok(ingredient),
        }
    }
}

impl InstructionCard {
    pub fn into_instruction(self) -> Result<Instruction> {
        let instruction = Instruction::new(self.text)?;
        match self.id {
            Some(id) => instruction.with_id(id),
            None => Ok(instruction),
        }
    }
}

impl RecipeCard {
    /// Rebuild a recipe, validating every field
    ///
    /// A card without ingredients or instructions is rejected.
    pub fn into_recipe(self) -> Result<Recipe> {
        let mut recipe = Recipe::new(
            self.name,
            self.meal_type,
            self.meal_category,
            self.cooking_time,
            self.num_portions,
        )?;
        if let Some(id) = self.id {
            recipe.set_id(id)?;
        }

        let ingredients = self
            .ingredients
            .into_iter()
            .map(IngredientCard::into_ingredient)
            .collect::<Result<Vec<_>>>()?;
        recipe.set_ingredients(ingredients)?;

        let instructions = self
            .instructions
            .into_iter()
            .map(InstructionCard::into_instruction)
            .collect::<Result<Vec<_>>>()?;
        recipe.set_instructions(instructions)?;

        Ok(recipe)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn from_json(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl Recipe {
    /// Flatten this recipe into a card
    pub fn to_card(&self) -> RecipeCard {
        RecipeCard {
            id: self.id(),
            name: self.name().to_string(),
            meal_type: self.meal_type(),
            meal_category: self.meal_category(),
            cooking_time: self.cooking_time(),
            num_portions: self.num_portions(),
            ingredients: self.ingredients().iter().map(IngredientCard::from).collect(),
            instructions: self.instructions().iter().map(InstructionCard::from).collect(),
        }
    }
}
