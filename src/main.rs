use std::cmp::Ordering;
use std::path::Path;

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use clap::Parser;

use pantry_planner_rs::cli::{Cli, Command, PantryAction, Paths};
use pantry_planner_rs::error::{PantryError, Result};
use pantry_planner_rs::interface::{
    display_pantry_items, display_projected_pantry, display_proposals, display_shopping_list,
    display_staged_recipes, prompt_yes_no, resolve_recipe_name, select_proposal,
};
use pantry_planner_rs::models::{PantryItem, PlanProposal, Recipe, Unit, far_future};
use pantry_planner_rs::planner::{
    CostWeights, SearchParams, generate_meal_plan, generate_shopping_list, prune_pantry,
    standardize_pantry,
};
use pantry_planner_rs::state::{
    PantryStore, StagedPlan, load_knowledge_bank, load_pantry_items, load_recipes,
    load_staged_plan, save_pantry_items, save_staged_plan,
};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let paths = cli.paths();
    let command = cli.command.unwrap_or_default();

    match command {
        Command::Plan {
            iterations,
            proposals,
            meals,
            csv,
        } => cmd_plan(&paths, iterations, proposals, meals, csv.as_deref()),
        Command::Stage { names } => cmd_stage(&paths, &names),
        Command::Current => cmd_current(&paths),
        Command::Execute => cmd_execute(&paths),
        Command::Pantry { action } => cmd_pantry(&paths, action),
    }
}

fn require_file(path: &str, description: &str) -> bool {
    if Path::new(path).exists() {
        return true;
    }
    eprintln!("{} not found: {}", description, path);
    false
}

/// Generate meal plan proposals and optionally stage one.
fn cmd_plan(
    paths: &Paths,
    iterations: usize,
    proposals: usize,
    meals: usize,
    csv: Option<&str>,
) -> Result<()> {
    if !require_file(&paths.cookbook, "Cookbook file") {
        return Ok(());
    }
    if !require_file(&paths.knowledge_bank, "Knowledge bank file") {
        return Ok(());
    }

    let catalog = load_recipes(&paths.cookbook)?;
    let knowledge_bank = load_knowledge_bank(&paths.knowledge_bank)?;
    let items = load_pantry_items(&paths.pantry)?;
    let pantry = standardize_pantry(&items)?;

    println!(
        "Loaded {} recipes, pantry has {} items",
        catalog.len(),
        pantry.len()
    );

    let now = Utc::now();
    let params = SearchParams {
        iterations,
        num_meals: meals,
        weights: CostWeights::for_pantry(&pantry),
    };

    let mut rng = rand::thread_rng();
    let mut generated = Vec::with_capacity(proposals);
    for _ in 0..proposals {
        generated.push(generate_meal_plan(
            &mut rng,
            &catalog,
            &pantry,
            &knowledge_bank,
            &params,
            now,
        )?);
    }

    generated.sort_by(|a, b| a.cost.partial_cmp(&b.cost).unwrap_or(Ordering::Equal));

    display_proposals(&generated);

    if let Some(csv_path) = csv {
        write_proposals_csv(&generated, csv_path)?;
        println!("Proposals written to {}", csv_path);
    }

    if generated.is_empty() {
        return Ok(());
    }

    if prompt_yes_no("Stage one of these plans?", false)? {
        if let Some(idx) = select_proposal(&generated)? {
            let chosen = &generated[idx];
            let staged = StagedPlan::new(chosen.recipe_names());
            save_staged_plan(&paths.staged, &staged)?;

            display_shopping_list(&chosen.shopping_list);
            println!("Plan staged. Run 'execute' after shopping to update the pantry.");
        }
    }

    Ok(())
}

/// Write the shopping list of every proposal to a CSV file.
fn write_proposals_csv(proposals: &[PlanProposal], path: &str) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record([
        "plan",
        "cost",
        "ingredient",
        "count",
        "increment_quantity",
        "increment_unit",
    ])?;

    for (i, proposal) in proposals.iter().enumerate() {
        let mut entries: Vec<_> = proposal.shopping_list.iter().collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));

        for (name, item) in entries {
            wtr.write_record([
                (i + 1).to_string(),
                format!("{:.1}", proposal.cost),
                name.clone(),
                item.count.to_string(),
                item.increment.quantity.to_string(),
                item.increment.unit.clone(),
            ])?;
        }
    }

    wtr.flush()?;
    Ok(())
}

/// Stage a plan directly from recipe names.
fn cmd_stage(paths: &Paths, names: &[String]) -> Result<()> {
    if !require_file(&paths.cookbook, "Cookbook file") {
        return Ok(());
    }

    let catalog = load_recipes(&paths.cookbook)?;

    let mut resolved: Vec<String> = Vec::new();
    for raw in names {
        match resolve_recipe_name(raw, &catalog)? {
            Some(name) => {
                if resolved.contains(&name) {
                    println!("Skipping duplicate: {}", name);
                } else {
                    resolved.push(name);
                }
            }
            None => println!("Skipping '{}'", raw),
        }
    }

    if resolved.is_empty() {
        println!("Nothing to stage.");
        return Ok(());
    }

    let staged = StagedPlan::new(resolved);
    display_staged_recipes(&staged.recipes, staged.executed);
    save_staged_plan(&paths.staged, &staged)?;
    println!("Plan staged. Run 'current' to see its shopping list.");

    Ok(())
}

/// Match staged recipe names back to catalog entries (case-insensitive).
fn select_staged_recipes<'a>(catalog: &'a [Recipe], names: &[String]) -> Vec<&'a Recipe> {
    names
        .iter()
        .filter_map(|name| {
            let key = name.trim().to_lowercase();
            catalog.iter().find(|recipe| recipe.key() == key)
        })
        .collect()
}

/// Show the staged plan with its shopping list and pantry projection.
fn cmd_current(paths: &Paths) -> Result<()> {
    let Some(staged) = load_staged_plan(&paths.staged) else {
        println!("No meal plan staged.");
        return Ok(());
    };

    display_staged_recipes(&staged.recipes, staged.executed);

    if staged.executed {
        println!("This plan has already been executed.");
        return Ok(());
    }

    if !require_file(&paths.cookbook, "Cookbook file") {
        return Ok(());
    }
    if !require_file(&paths.knowledge_bank, "Knowledge bank file") {
        return Ok(());
    }

    let catalog = load_recipes(&paths.cookbook)?;
    let knowledge_bank = load_knowledge_bank(&paths.knowledge_bank)?;
    let items = load_pantry_items(&paths.pantry)?;
    let pantry = standardize_pantry(&items)?;

    let selected = select_staged_recipes(&catalog, &staged.recipes);
    if selected.len() < staged.recipes.len() {
        println!(
            "{} staged recipe(s) are no longer in the cookbook.",
            staged.recipes.len() - selected.len()
        );
    }

    let now = Utc::now();
    let (shopping_list, projected) =
        generate_shopping_list(&selected, &pantry, &knowledge_bank, now)?;

    display_shopping_list(&shopping_list);
    display_projected_pantry(&prune_pantry(&projected), now);

    Ok(())
}

/// Mark the staged plan as cooked and rewrite the pantry.
fn cmd_execute(paths: &Paths) -> Result<()> {
    let Some(mut staged) = load_staged_plan(&paths.staged) else {
        println!("No meal plan staged.");
        return Ok(());
    };

    if staged.executed {
        println!("The staged plan has already been executed.");
        return Ok(());
    }

    if !require_file(&paths.cookbook, "Cookbook file") {
        return Ok(());
    }
    if !require_file(&paths.knowledge_bank, "Knowledge bank file") {
        return Ok(());
    }

    let catalog = load_recipes(&paths.cookbook)?;
    let knowledge_bank = load_knowledge_bank(&paths.knowledge_bank)?;
    let items = load_pantry_items(&paths.pantry)?;
    let pantry = standardize_pantry(&items)?;

    let selected = select_staged_recipes(&catalog, &staged.recipes);
    if selected.is_empty() {
        println!("None of the staged recipes are in the cookbook; nothing to execute.");
        return Ok(());
    }

    let now = Utc::now();
    let (shopping_list, projected) =
        generate_shopping_list(&selected, &pantry, &knowledge_bank, now)?;
    let pruned = prune_pantry(&projected);

    display_staged_recipes(&staged.recipes, staged.executed);
    display_shopping_list(&shopping_list);
    display_projected_pantry(&pruned, now);

    if !prompt_yes_no(
        "Shop this list and cook the plan? The pantry will be rewritten.",
        true,
    )? {
        println!("Aborted; pantry unchanged.");
        return Ok(());
    }

    let mut store = PantryStore::new(items);
    store.apply_projection(&pruned, &knowledge_bank)?;
    save_pantry_items(&paths.pantry, store.items())?;

    staged.executed = true;
    save_staged_plan(&paths.staged, &staged)?;

    println!("Pantry updated with {} items.", store.len());
    Ok(())
}

/// Inspect or edit the stored pantry.
fn cmd_pantry(paths: &Paths, action: PantryAction) -> Result<()> {
    let items = load_pantry_items(&paths.pantry)?;
    let mut store = PantryStore::new(items);

    match action {
        PantryAction::List => {
            display_pantry_items(&store.sorted_by_expiry(), Utc::now());
        }
        PantryAction::Add {
            name,
            quantity,
            unit,
            expiry,
        } => {
            if quantity <= 0.0 {
                return Err(PantryError::InvalidInput(
                    "quantity must be positive".to_string(),
                ));
            }
            if Unit::parse(&unit).is_none() {
                return Err(PantryError::UnsupportedUnit {
                    ingredient: name,
                    unit,
                });
            }

            let expiry_date = match expiry.as_deref() {
                Some(raw) => parse_expiry(raw)?,
                None => far_future(),
            };

            store.add(PantryItem::new(name, quantity, unit, expiry_date))?;
            save_pantry_items(&paths.pantry, store.items())?;
            println!("Added. Pantry now has {} items.", store.len());
        }
        PantryAction::Update { name, quantity } => {
            let removed = store.update_quantity(&name, quantity)?;
            save_pantry_items(&paths.pantry, store.items())?;
            if removed {
                println!("Removed '{}' (quantity reached zero).", name);
            } else {
                println!("Updated '{}' to {}.", name, quantity);
            }
        }
        PantryAction::Remove { name } => {
            let removed = store.remove(&name)?;
            save_pantry_items(&paths.pantry, store.items())?;
            println!("Removed '{}'.", removed.name);
        }
    }

    Ok(())
}

/// Parse a YYYY-MM-DD expiry into a UTC timestamp at midnight.
fn parse_expiry(raw: &str) -> Result<DateTime<Utc>> {
    let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| {
        PantryError::InvalidInput(format!(
            "invalid expiry date '{}', expected YYYY-MM-DD",
            raw
        ))
    })?;
    Ok(date.and_time(NaiveTime::MIN).and_utc())
}
