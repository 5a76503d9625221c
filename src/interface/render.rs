use chrono::{DateTime, Utc};

use crate::models::{Pantry, PantryItem, PlanProposal, ShoppingList};
use crate::planner::constants::WASTAGE_WINDOW_DAYS;

/// Display every generated proposal with its cost and recipes.
pub fn display_proposals(proposals: &[PlanProposal]) {
    if proposals.is_empty() {
        println!("No plans generated.");
        return;
    }

    println!();
    println!("=== Meal Plan Proposals ===");
    println!();

    for (i, proposal) in proposals.iter().enumerate() {
        println!(
            "Plan {} - cost {:.1}, {} items to buy",
            i + 1,
            proposal.cost,
            proposal.shopping_list.len()
        );

        let max_name_len = proposal
            .recipes
            .iter()
            .map(|r| r.name.len())
            .max()
            .unwrap_or(10);

        for recipe in &proposal.recipes {
            println!(
                "  {:<width$} {:>3} min, {:>4} kcal",
                recipe.name,
                recipe.cooking_time,
                recipe.total_calories,
                width = max_name_len
            );
        }
        println!();
    }
}

/// Display a shopping list sorted by ingredient name.
pub fn display_shopping_list(list: &ShoppingList) {
    if list.is_empty() {
        println!("Nothing to buy; the pantry covers every ingredient.");
        return;
    }

    println!();
    println!("=== Shopping List ({} items) ===", list.len());
    println!();

    let mut entries: Vec<_> = list.iter().collect();
    entries.sort_by(|a, b| a.0.cmp(b.0));

    let max_name_len = entries
        .iter()
        .map(|(name, _)| name.len())
        .max()
        .unwrap_or(10);

    for (name, item) in entries {
        println!(
            "  {:<width$}  {} x {}",
            name,
            item.count,
            item.increment,
            width = max_name_len
        );
    }
    println!();
}

/// Display stored pantry rows with their expiry dates.
pub fn display_pantry_items(items: &[&PantryItem], now: DateTime<Utc>) {
    if items.is_empty() {
        println!("The pantry is empty.");
        return;
    }

    println!();
    println!("=== Pantry ({} items) ===", items.len());
    println!();

    let max_name_len = items.iter().map(|item| item.name.len()).max().unwrap_or(10);

    for item in items {
        let expiry = if item.is_perishable() {
            let days_left = (item.expiry_date - now).num_days();
            if days_left < WASTAGE_WINDOW_DAYS {
                format!(
                    "{} [expiring in {} days]",
                    item.expiry_date.format("%Y-%m-%d"),
                    days_left
                )
            } else {
                item.expiry_date.format("%Y-%m-%d").to_string()
            }
        } else {
            "non-perishable".to_string()
        };

        println!(
            "  {:<width$}  {:>7.2} {:<5}  {}",
            item.name,
            item.quantity,
            item.unit,
            expiry,
            width = max_name_len
        );
    }
    println!();
}

/// Display a projected pantry snapshot in standard units, sorted by name.
pub fn display_projected_pantry(pantry: &Pantry, now: DateTime<Utc>) {
    if pantry.is_empty() {
        println!("Projected pantry: empty.");
        return;
    }

    println!();
    println!("=== Projected Pantry ({} items) ===", pantry.len());
    println!();

    let mut entries: Vec<_> = pantry.iter().collect();
    entries.sort_by(|a, b| a.0.cmp(b.0));

    let max_name_len = entries
        .iter()
        .map(|(name, _)| name.len())
        .max()
        .unwrap_or(10);

    for (name, entry) in entries {
        let tag = if (entry.expiry_date - now).num_days() < WASTAGE_WINDOW_DAYS {
            "  [expiring soon]"
        } else {
            ""
        };

        println!(
            "  {:<width$}  {:>7.2} standard units{}",
            name,
            entry.quantity,
            tag,
            width = max_name_len
        );
    }
    println!();
}

/// Display the staged plan's recipe names.
pub fn display_staged_recipes(recipes: &[String], executed: bool) {
    println!();
    if executed {
        println!("=== Staged Plan (executed) ===");
    } else {
        println!("=== Staged Plan ===");
    }
    println!();

    for (i, name) in recipes.iter().enumerate() {
        println!("{:>3}. {}", i + 1, name);
    }
    println!();
}
