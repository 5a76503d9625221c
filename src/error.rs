use thiserror::Error;

#[derive(Debug, Error)]
pub enum PantryError {
    #[error("Unsupported unit '{unit}' for ingredient '{ingredient}'")]
    UnsupportedUnit { ingredient: String, unit: String },

    #[error("Cannot combine quantities of '{ingredient}': unit mismatch ({left} vs {right})")]
    UnitMismatch {
        ingredient: String,
        left: String,
        right: String,
    },

    #[error("Ingredient not in knowledge bank: {0}")]
    UnknownIngredient(String),

    #[error("Not enough recipes: need {needed}, catalog has {available}")]
    InsufficientRecipes { needed: usize, available: usize },

    #[error("Pantry item not found: {0}")]
    ItemNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, PantryError>;
