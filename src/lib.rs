pub mod cli;
pub mod error;
pub mod interface;
pub mod models;
pub mod planner;
pub mod state;

pub use error::{PantryError, Result};
pub use models::{Ingredient, Pantry, PlanProposal, Recipe, Unit};
