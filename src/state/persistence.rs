use std::fs;
use std::path::Path;

use crate::error::{PantryError, Result};
use crate::models::{KnowledgeBank, PantryItem, Recipe, RecipeRecord};
use crate::planner::standardize_recipe;

/// Load the cookbook from a JSON file, converting every ingredient to
/// standard units.
pub fn load_recipes<P: AsRef<Path>>(path: P) -> Result<Vec<Recipe>> {
    let content = fs::read_to_string(path)?;
    let records: Vec<RecipeRecord> = serde_json::from_str(&content)?;

    records.into_iter().map(standardize_recipe).collect()
}

/// Load the knowledge bank from a JSON file.
///
/// Every purchase increment must be a positive quantity; shopping math
/// divides by it.
pub fn load_knowledge_bank<P: AsRef<Path>>(path: P) -> Result<KnowledgeBank> {
    let content = fs::read_to_string(path)?;
    let bank: KnowledgeBank = serde_json::from_str(&content)?;

    for (name, entry) in &bank {
        if entry.increment.quantity <= 0.0 {
            return Err(PantryError::InvalidInput(format!(
                "increment for '{}' must be positive, got {}",
                name, entry.increment.quantity
            )));
        }
    }

    Ok(bank)
}

/// Load pantry items from a JSON file. A missing file is an empty pantry.
pub fn load_pantry_items<P: AsRef<Path>>(path: P) -> Result<Vec<PantryItem>> {
    if !path.as_ref().exists() {
        return Ok(Vec::new());
    }

    let content = fs::read_to_string(path)?;
    let items: Vec<PantryItem> = serde_json::from_str(&content)?;
    Ok(items)
}

/// Save pantry items to a JSON file.
pub fn save_pantry_items<P: AsRef<Path>>(path: P, items: &[PantryItem]) -> Result<()> {
    let json = serde_json::to_string_pretty(items)?;
    fs::write(path, json)?;
    Ok(())
}
