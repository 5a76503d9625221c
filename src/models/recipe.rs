use serde::{Deserialize, Serialize};

use crate::models::ingredient::Ingredient;

/// One ingredient line as it appears in the cookbook file, with the raw
/// unit token still unparsed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IngredientRecord {
    pub quantity: f64,
    pub unit: String,
    pub name: String,
}

/// A recipe as stored in the cookbook file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeRecord {
    pub name: String,
    pub cooking_time: u32,
    pub total_calories: u32,
    pub grams_carbs: f64,
    pub grams_fat: f64,
    pub grams_protein: f64,
    pub ingredients: Vec<IngredientRecord>,
}

/// A recipe with every ingredient quantity converted to standard units.
///
/// Produced by `planner::standardize_recipe`; the engine only ever works
/// with this form.
#[derive(Debug, Clone, Serialize)]
pub struct Recipe {
    pub name: String,
    pub cooking_time: u32,
    pub total_calories: u32,
    pub grams_carbs: f64,
    pub grams_fat: f64,
    pub grams_protein: f64,
    pub ingredients: Vec<Ingredient>,
}

impl Recipe {
    /// Lowercase name, used as the case-insensitive lookup key.
    pub fn key(&self) -> String {
        self.name.to_lowercase()
    }
}
