// src/recipe/meal.rs

//! Meal type and category vocabularies

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

/// Kind of dish (soup, dessert, salad...)
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    IntoStaticStr,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum MealType {
    Appetizer,
    Soup,
    Salad,
    MainCourse,
    SideDish,
    Dessert,
    Beverage,
}

impl MealType {
    pub fn as_str(&self) -> &'static str {
        self.into()
    }
}

/// Dietary category (meat, meatless, fish...)
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    IntoStaticStr,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum MealCategory {
    Meat,
    Meatless,
    Fish,
    Vegan,
}

impl MealCategory {
    pub fn as_str(&self) -> &'static str {
        self.into()
    }
}
