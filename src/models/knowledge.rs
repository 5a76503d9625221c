use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// The smallest purchasable amount of an ingredient, in its store unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Increment {
    pub quantity: f64,
    pub unit: String,
}

impl fmt::Display for Increment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.quantity, self.unit)
    }
}

/// Purchasing metadata for one ingredient: shelf life in weeks plus the
/// store's purchase increment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KbEntry {
    pub shelf_life: u32,
    pub increment: Increment,
}

/// Knowledge bank keyed by ingredient name.
pub type KnowledgeBank = HashMap<String, KbEntry>;
