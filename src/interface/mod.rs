pub mod prompts;
pub mod render;

pub use prompts::{prompt_yes_no, resolve_recipe_name, select_proposal};
pub use render::{
    display_pantry_items, display_projected_pantry, display_proposals, display_shopping_list,
    display_staged_recipes,
};
