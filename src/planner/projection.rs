use std::collections::HashMap;

use chrono::{DateTime, Duration, Utc};

use crate::error::{PantryError, Result};
use crate::models::{Ingredient, KnowledgeBank, Pantry, Recipe, ShoppingItem, ShoppingList, StockEntry};
use crate::planner::constants::DAYS_PER_SHELF_WEEK;
use crate::planner::units::{from_standard, to_standard};

/// Round a value to the given number of decimal places.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10_f64.powi(decimals as i32);
    (value * factor).round() / factor
}

/// Total standard-unit demand per ingredient name across a set of recipes.
pub fn aggregate_demand(recipes: &[&Recipe]) -> Result<HashMap<String, Ingredient>> {
    let mut demand: HashMap<String, Ingredient> = HashMap::new();

    for recipe in recipes {
        for ingredient in &recipe.ingredients {
            let merged = match demand.remove(&ingredient.name) {
                Some(existing) => existing.add(ingredient)?,
                None => ingredient.clone(),
            };
            demand.insert(merged.name.clone(), merged);
        }
    }

    Ok(demand)
}

/// Work out what to buy for a set of recipes and what the pantry will hold
/// afterwards.
///
/// Demand is netted against stock first; only the shortfall is bought, in
/// whole purchase increments from the knowledge bank. The projected pantry
/// keeps zero-quantity entries so cost deltas see them; prune at the output
/// boundary with [`prune_pantry`].
pub fn generate_shopping_list(
    recipes: &[&Recipe],
    pantry: &Pantry,
    knowledge_bank: &KnowledgeBank,
    now: DateTime<Utc>,
) -> Result<(ShoppingList, Pantry)> {
    let demand = aggregate_demand(recipes)?;
    let mut projected = pantry.clone();
    let mut shopping_list = ShoppingList::new();

    for (name, needed) in &demand {
        // Net the demand against current stock. Entries not purchased keep
        // their original expiry date.
        let purchase_amount = match projected.get_mut(name) {
            Some(stock) => {
                let on_hand = stock.quantity;
                stock.quantity = f64::max(0.0, on_hand - needed.quantity);
                f64::max(0.0, needed.quantity - on_hand)
            }
            None => needed.quantity,
        };

        if purchase_amount <= 0.0 {
            continue;
        }

        let entry = knowledge_bank
            .get(name)
            .ok_or_else(|| PantryError::UnknownIngredient(name.clone()))?;

        let required = from_standard(name, purchase_amount, &entry.increment.unit)?;
        // The pre-ceil rounding absorbs float noise from the unit conversions.
        let count = round_to(required / entry.increment.quantity, 3).ceil() as u32;
        shopping_list.insert(
            name.clone(),
            ShoppingItem {
                count,
                increment: entry.increment.clone(),
            },
        );

        // Whatever the purchased increments leave over goes back on the shelf
        // with a fresh expiry, replacing any prior balance.
        let surplus = f64::max(0.0, count as f64 * entry.increment.quantity - required);
        let leftover = to_standard(name, surplus, &entry.increment.unit)?;
        let expiry = now + Duration::days(DAYS_PER_SHELF_WEEK * i64::from(entry.shelf_life));
        projected.insert(name.clone(), StockEntry::new(leftover.quantity, expiry));
    }

    Ok((shopping_list, projected))
}

/// Copy of the pantry without zero-quantity entries.
pub fn prune_pantry(pantry: &Pantry) -> Pantry {
    let mut pruned = Pantry::new();
    for (name, entry) in pantry.iter() {
        if entry.quantity > 0.0 {
            pruned.insert(name.clone(), *entry);
        }
    }
    pruned
}
