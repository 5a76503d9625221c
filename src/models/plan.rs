use std::collections::HashMap;

use serde::Serialize;

use crate::models::knowledge::Increment;
use crate::models::pantry::Pantry;
use crate::models::recipe::Recipe;

/// How many purchase increments of one ingredient to buy.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShoppingItem {
    pub count: u32,
    pub increment: Increment,
}

/// Shopping list keyed by ingredient name.
pub type ShoppingList = HashMap<String, ShoppingItem>;

/// One candidate meal plan: the chosen recipes, the cost the search settled
/// on, and the shopping list plus projected pantry that cost was computed
/// from.
#[derive(Debug, Clone)]
pub struct PlanProposal {
    pub recipes: Vec<Recipe>,
    pub cost: f64,
    pub shopping_list: ShoppingList,
    pub pantry: Pantry,
}

impl PlanProposal {
    pub fn recipe_names(&self) -> Vec<String> {
        self.recipes.iter().map(|r| r.name.clone()).collect()
    }
}
