use std::collections::{HashMap, hash_map};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Expiry sentinel for items that never go bad.
///
/// Far enough out that the wastage window can never reach it.
pub fn far_future() -> DateTime<Utc> {
    DateTime::<Utc>::MAX_UTC
}

fn is_far_future(ts: &DateTime<Utc>) -> bool {
    *ts == far_future()
}

/// One pantry row as stored on disk, quantity still in its purchase unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PantryItem {
    pub name: String,
    pub quantity: f64,
    pub unit: String,
    #[serde(default = "far_future", skip_serializing_if = "is_far_future")]
    pub expiry_date: DateTime<Utc>,
}

impl PantryItem {
    pub fn new(
        name: impl Into<String>,
        quantity: f64,
        unit: impl Into<String>,
        expiry_date: DateTime<Utc>,
    ) -> Self {
        Self {
            name: name.into(),
            quantity,
            unit: unit.into(),
            expiry_date,
        }
    }

    pub fn is_perishable(&self) -> bool {
        !is_far_future(&self.expiry_date)
    }

    /// Lowercase trimmed name, used as the case-insensitive lookup key.
    pub fn key(&self) -> String {
        self.name.trim().to_lowercase()
    }
}

/// Standardized stock for one ingredient name: quantity in standard units
/// plus the expiry of that balance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StockEntry {
    pub quantity: f64,
    pub expiry_date: DateTime<Utc>,
}

impl StockEntry {
    pub fn new(quantity: f64, expiry_date: DateTime<Utc>) -> Self {
        Self {
            quantity,
            expiry_date,
        }
    }
}

/// In-memory pantry keyed by ingredient name, all quantities in standard
/// units. One entry per name; a restock replaces the previous balance.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Pantry {
    entries: HashMap<String, StockEntry>,
}

impl Pantry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, entry: StockEntry) {
        self.entries.insert(name.into(), entry);
    }

    pub fn get(&self, name: &str) -> Option<&StockEntry> {
        self.entries.get(name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut StockEntry> {
        self.entries.get_mut(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn iter(&self) -> hash_map::Iter<'_, String, StockEntry> {
        self.entries.iter()
    }

    /// Total stock across all entries, in standard units.
    pub fn total_quantity(&self) -> f64 {
        self.entries.values().map(|entry| entry.quantity).sum()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
