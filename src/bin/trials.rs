use std::path::{Path, PathBuf};

use chrono::Utc;
use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;

use pantry_planner_rs::error::{PantryError, Result};
use pantry_planner_rs::models::PlanProposal;
use pantry_planner_rs::planner::{
    CostWeights, SearchParams, generate_meal_plan, standardize_pantry,
};
use pantry_planner_rs::state::{load_knowledge_bank, load_pantry_items, load_recipes};

#[derive(Parser, Debug)]
#[command(name = "trials")]
#[command(about = "Search budget trials for the pantry meal planner")]
struct Args {
    /// Seeded search runs per budget
    #[arg(long, default_value = "20")]
    runs: usize,

    /// Base random seed; run i uses seed + i
    #[arg(long, default_value = "123")]
    seed: u64,

    /// Iteration budgets to evaluate (comma-separated)
    #[arg(long, default_value = "0,25,100,400")]
    budgets: String,

    /// Number of recipes per plan
    #[arg(long, default_value = "6")]
    meals: usize,

    /// Path to the cookbook JSON file
    #[arg(long, default_value = "cookbook.json")]
    cookbook: PathBuf,

    /// Path to the knowledge bank JSON file
    #[arg(long, default_value = "knowledge_bank.json")]
    knowledge_bank: PathBuf,

    /// Path to the pantry JSON file
    #[arg(long, default_value = "pantry.json")]
    pantry: PathBuf,

    /// Output CSV file for per-run costs
    #[arg(long)]
    csv: Option<PathBuf>,
}

/// One seeded search run at one iteration budget.
struct TrialRow {
    budget: usize,
    run: usize,
    seed: u64,
    cost: f64,
}

fn parse_budgets(s: &str) -> Vec<usize> {
    s.split(',')
        .filter_map(|part| part.trim().parse().ok())
        .collect()
}

fn main() {
    let args = Args::parse();

    if let Err(e) = run(&args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<()> {
    let budgets = parse_budgets(&args.budgets);
    if budgets.is_empty() {
        return Err(PantryError::InvalidInput(
            "no valid budgets provided".to_string(),
        ));
    }
    if args.runs == 0 {
        return Err(PantryError::InvalidInput("runs must be positive".to_string()));
    }

    let catalog = load_recipes(&args.cookbook)?;
    let knowledge_bank = load_knowledge_bank(&args.knowledge_bank)?;
    let items = load_pantry_items(&args.pantry)?;
    let pantry = standardize_pantry(&items)?;

    println!(
        "Loaded {} recipes, pantry has {} items",
        catalog.len(),
        pantry.len()
    );
    println!("Testing iteration budgets: {:?}", budgets);
    println!();

    let now = Utc::now();
    let weights = CostWeights::for_pantry(&pantry);

    let mut rows = Vec::with_capacity(budgets.len() * args.runs);
    let mut best: Option<PlanProposal> = None;

    for &budget in &budgets {
        let params = SearchParams {
            iterations: budget,
            num_meals: args.meals,
            weights,
        };

        let mut costs = Vec::with_capacity(args.runs);
        for run_idx in 0..args.runs {
            let seed = args.seed.wrapping_add(run_idx as u64);
            let mut rng = StdRng::seed_from_u64(seed);
            let proposal = generate_meal_plan(
                &mut rng,
                &catalog,
                &pantry,
                &knowledge_bank,
                &params,
                now,
            )?;

            if best.as_ref().map_or(true, |b| proposal.cost < b.cost) {
                best = Some(proposal.clone());
            }

            rows.push(TrialRow {
                budget,
                run: run_idx,
                seed,
                cost: proposal.cost,
            });
            costs.push(proposal.cost);
        }

        let best_cost = costs.iter().cloned().fold(f64::INFINITY, f64::min);
        let worst_cost = costs.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        let mean_cost = costs.iter().sum::<f64>() / costs.len() as f64;

        println!(
            "Budget {:>5}: best={:>8.1} mean={:>8.1} worst={:>8.1} ({} runs)",
            budget,
            best_cost,
            mean_cost,
            worst_cost,
            costs.len()
        );
    }

    if let Some(best) = &best {
        println!();
        println!("=== Best Plan Overall (cost {:.1}) ===", best.cost);
        for name in best.recipe_names() {
            println!("  {}", name);
        }
        println!("Shopping list: {} items", best.shopping_list.len());
    }

    if let Some(csv_path) = &args.csv {
        write_rows_csv(&rows, csv_path)?;
        println!();
        println!("Wrote {} rows to {:?}", rows.len(), csv_path);
    }

    Ok(())
}

/// Write one row per seeded run to a CSV file.
fn write_rows_csv(rows: &[TrialRow], path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record(["budget", "run", "seed", "cost"])?;

    for row in rows {
        wtr.write_record([
            row.budget.to_string(),
            row.run.to_string(),
            row.seed.to_string(),
            format!("{:.1}", row.cost),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
