use clap::{Parser, Subcommand};

use crate::planner::constants::{DEFAULT_ITERATIONS, DEFAULT_NUM_MEALS, DEFAULT_PROPOSALS};

/// PantryPlanner — A meal planning CLI that minimizes grocery waste and pantry churn.
#[derive(Parser, Debug)]
#[command(name = "pantry_planner")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the cookbook JSON file.
    #[arg(long, default_value = "cookbook.json")]
    pub cookbook: String,

    /// Path to the ingredient knowledge bank JSON file.
    #[arg(long, default_value = "knowledge_bank.json")]
    pub knowledge_bank: String,

    /// Path to the pantry JSON file.
    #[arg(long, default_value = "pantry.json")]
    pub pantry: String,

    /// Path to the staged plan JSON file.
    #[arg(long, default_value = "staged_plan.json")]
    pub staged: String,
}

/// The four data file paths, detached from the parsed arguments.
#[derive(Debug, Clone)]
pub struct Paths {
    pub cookbook: String,
    pub knowledge_bank: String,
    pub pantry: String,
    pub staged: String,
}

impl Cli {
    pub fn paths(&self) -> Paths {
        Paths {
            cookbook: self.cookbook.clone(),
            knowledge_bank: self.knowledge_bank.clone(),
            pantry: self.pantry.clone(),
            staged: self.staged.clone(),
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate meal plan proposals and optionally stage one.
    Plan {
        /// Swap iterations per search run.
        #[arg(long, default_value_t = DEFAULT_ITERATIONS)]
        iterations: usize,

        /// Number of independent proposals to generate.
        #[arg(long, default_value_t = DEFAULT_PROPOSALS)]
        proposals: usize,

        /// Number of recipes per plan.
        #[arg(long, default_value_t = DEFAULT_NUM_MEALS)]
        meals: usize,

        /// Write the proposals to a CSV file.
        #[arg(long)]
        csv: Option<String>,
    },

    /// Stage a plan directly from recipe names.
    Stage {
        /// Recipe names; fuzzy-matched against the cookbook.
        #[arg(required = true)]
        names: Vec<String>,
    },

    /// Show the staged plan with its shopping list and pantry projection.
    Current,

    /// Mark the staged plan as cooked and rewrite the pantry.
    Execute,

    /// Inspect or edit the stored pantry.
    Pantry {
        #[command(subcommand)]
        action: PantryAction,
    },
}

#[derive(Subcommand, Debug)]
pub enum PantryAction {
    /// List pantry items, soonest expiry first.
    List,

    /// Add a new item.
    Add {
        /// Ingredient name.
        name: String,

        /// Amount on hand, in the given unit.
        #[arg(long)]
        quantity: f64,

        /// Purchase unit (unit, oz, lb, cup, tbsp, tsp, ml, clove).
        #[arg(long)]
        unit: String,

        /// Expiry date as YYYY-MM-DD; omit for non-perishables.
        #[arg(long)]
        expiry: Option<String>,
    },

    /// Change an item's quantity. Zero removes it.
    Update {
        /// Ingredient name.
        name: String,

        /// New amount, in the item's stored unit.
        #[arg(long)]
        quantity: f64,
    },

    /// Remove an item.
    Remove {
        /// Ingredient name.
        name: String,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Plan {
            iterations: DEFAULT_ITERATIONS,
            proposals: DEFAULT_PROPOSALS,
            meals: DEFAULT_NUM_MEALS,
            csv: None,
        }
    }
}
