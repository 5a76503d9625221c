pub mod constants;
pub mod cost;
pub mod projection;
pub mod search;
pub mod units;

pub use constants::*;
pub use cost::{CostWeights, pantry_change, plan_cost, wastage};
pub use projection::{aggregate_demand, generate_shopping_list, prune_pantry, round_to};
pub use search::{SearchParams, generate_meal_plan};
pub use units::{from_standard, standardize_pantry, standardize_recipe, to_standard};
