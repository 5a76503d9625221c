use crate::error::{PantryError, Result};
use crate::models::{KnowledgeBank, Pantry, PantryItem};
use crate::planner::from_standard;

/// Manages the stored pantry rows behind the `pantry` subcommands and plan
/// execution. Quantities stay in their purchase units; conversion to
/// standard units happens in the planner.
pub struct PantryStore {
    items: Vec<PantryItem>,
}

impl PantryStore {
    pub fn new(items: Vec<PantryItem>) -> Self {
        Self { items }
    }

    /// Look up an item by name (case-insensitive, ignoring surrounding
    /// whitespace).
    pub fn find(&self, name: &str) -> Option<&PantryItem> {
        let key = name.trim().to_lowercase();
        self.items.iter().find(|item| item.key() == key)
    }

    fn position(&self, key: &str) -> Option<usize> {
        self.items.iter().position(|item| item.key() == key)
    }

    /// Add a new item. Names are stored trimmed and lowercased; adding a
    /// name already present is an error.
    pub fn add(&mut self, item: PantryItem) -> Result<()> {
        let name = item.key();
        if name.is_empty() {
            return Err(PantryError::InvalidInput(
                "ingredient name cannot be empty".to_string(),
            ));
        }
        if self.position(&name).is_some() {
            return Err(PantryError::InvalidInput(format!(
                "'{}' is already in the pantry; use update",
                name
            )));
        }

        self.items.push(PantryItem { name, ..item });
        Ok(())
    }

    /// Set the stored quantity for an item, in its own unit.
    ///
    /// A quantity at or below zero removes the item instead; returns true
    /// when that happens.
    pub fn update_quantity(&mut self, name: &str, quantity: f64) -> Result<bool> {
        let key = name.trim().to_lowercase();
        let idx = self
            .position(&key)
            .ok_or_else(|| PantryError::ItemNotFound(name.to_string()))?;

        if quantity <= 0.0 {
            self.items.remove(idx);
            return Ok(true);
        }

        self.items[idx].quantity = quantity;
        Ok(false)
    }

    pub fn remove(&mut self, name: &str) -> Result<PantryItem> {
        let key = name.trim().to_lowercase();
        let idx = self
            .position(&key)
            .ok_or_else(|| PantryError::ItemNotFound(name.to_string()))?;
        Ok(self.items.remove(idx))
    }

    /// Items ordered soonest-expiring first; non-perishables sort last.
    pub fn sorted_by_expiry(&self) -> Vec<&PantryItem> {
        let mut sorted: Vec<&PantryItem> = self.items.iter().collect();
        sorted.sort_by_key(|item| item.expiry_date);
        sorted
    }

    /// Replace the stored rows with a projected pantry snapshot.
    ///
    /// Each standard-unit balance converts back to a purchase unit: the
    /// knowledge bank increment unit when the ingredient is known, else the
    /// unit the row already carried. Rows come out sorted by name.
    pub fn apply_projection(
        &mut self,
        projected: &Pantry,
        knowledge_bank: &KnowledgeBank,
    ) -> Result<()> {
        let mut items = Vec::with_capacity(projected.len());

        for (name, entry) in projected.iter() {
            let unit = match knowledge_bank.get(name) {
                Some(kb) => kb.increment.unit.clone(),
                None => match self.find(name) {
                    Some(existing) => existing.unit.clone(),
                    None => return Err(PantryError::UnknownIngredient(name.clone())),
                },
            };

            let quantity = from_standard(name, entry.quantity, &unit)?;
            items.push(PantryItem::new(name.clone(), quantity, unit, entry.expiry_date));
        }

        items.sort_by(|a, b| a.name.cmp(&b.name));
        self.items = items;
        Ok(())
    }

    pub fn items(&self) -> &[PantryItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
