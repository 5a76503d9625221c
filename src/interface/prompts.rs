use dialoguer::{Confirm, Select};
use strsim::jaro_winkler;

use crate::error::Result;
use crate::models::{PlanProposal, Recipe};

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

/// Let the user pick one of the generated proposals, or none.
pub fn select_proposal(proposals: &[PlanProposal]) -> Result<Option<usize>> {
    let mut options: Vec<String> = proposals
        .iter()
        .enumerate()
        .map(|(i, proposal)| {
            format!(
                "Plan {} (cost {:.1}): {}",
                i + 1,
                proposal.cost,
                proposal.recipe_names().join(", ")
            )
        })
        .collect();
    options.push("None of these".to_string());

    let selection = Select::new()
        .with_prompt("Stage which plan?")
        .items(&options)
        .default(0)
        .interact()?;

    if selection < proposals.len() {
        Ok(Some(selection))
    } else {
        Ok(None)
    }
}

/// Resolve a typed recipe name against the catalog with fuzzy matching.
///
/// Returns the catalog's canonical name, or None when nothing matched or
/// the user declined every suggestion.
pub fn resolve_recipe_name(input: &str, catalog: &[Recipe]) -> Result<Option<String>> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(None);
    }

    // Try exact match first (case-insensitive)
    let exact_match = catalog.iter().find(|r| r.key() == input.to_lowercase());
    if let Some(recipe) = exact_match {
        return Ok(Some(recipe.name.clone()));
    }

    // Try fuzzy matching
    let mut candidates: Vec<(&Recipe, f64)> = catalog
        .iter()
        .map(|r| (r, jaro_winkler(&r.key(), &input.to_lowercase())))
        .filter(|(_, score)| *score > 0.7)
        .collect();

    candidates.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

    if candidates.is_empty() {
        println!("No matching recipe found for '{}'", input);
        return Ok(None);
    }

    if candidates.len() == 1 {
        let recipe = candidates[0].0;
        let confirm = Confirm::new()
            .with_prompt(format!("Did you mean '{}'?", recipe.name))
            .default(true)
            .interact()?;

        if confirm {
            return Ok(Some(recipe.name.clone()));
        }
        return Ok(None);
    }

    // Multiple matches - let user select
    let options: Vec<String> = candidates
        .iter()
        .take(5)
        .map(|(r, _)| r.name.clone())
        .collect();

    let mut selection_options = options.clone();
    selection_options.push("None of these".to_string());

    let selection = Select::new()
        .with_prompt("Which did you mean?")
        .items(&selection_options)
        .default(0)
        .interact()?;

    if selection < options.len() {
        Ok(Some(options[selection].clone()))
    } else {
        Ok(None)
    }
}
