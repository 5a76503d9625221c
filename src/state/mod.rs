mod persistence;
mod staged;
mod store;

pub use persistence::{load_knowledge_bank, load_pantry_items, load_recipes, save_pantry_items};
pub use staged::{StagedPlan, load_staged_plan, save_staged_plan};
pub use store::PantryStore;
