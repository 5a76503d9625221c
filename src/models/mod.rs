mod ingredient;
mod knowledge;
mod pantry;
mod plan;
mod recipe;

pub use ingredient::{Ingredient, Unit};
pub use knowledge::{Increment, KbEntry, KnowledgeBank};
pub use pantry::{Pantry, PantryItem, StockEntry, far_future};
pub use plan::{PlanProposal, ShoppingItem, ShoppingList};
pub use recipe::{IngredientRecord, Recipe, RecipeRecord};
