use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{PantryError, Result};

/// Measurement unit for an ingredient quantity.
///
/// `Standard` is the engine's internal dimensionless unit: one standard unit
/// is 4 oz of mass or volume, or one discrete "unit" item (one lime, one
/// zucchini). The other variants are the purchase units accepted in catalog
/// and pantry data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    Standard,
    Unit,
    Oz,
    Lb,
    Cup,
    Tbsp,
    Tsp,
    Ml,
    Clove,
}

impl Unit {
    /// Parse a raw unit token from catalog or pantry data.
    ///
    /// Only purchase units parse; `standard` is internal and never appears
    /// in input files.
    pub fn parse(token: &str) -> Option<Unit> {
        match token {
            "unit" => Some(Unit::Unit),
            "oz" => Some(Unit::Oz),
            "lb" => Some(Unit::Lb),
            "cup" => Some(Unit::Cup),
            "tbsp" => Some(Unit::Tbsp),
            "tsp" => Some(Unit::Tsp),
            "ml" => Some(Unit::Ml),
            "clove" => Some(Unit::Clove),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Unit::Standard => "standard",
            Unit::Unit => "unit",
            Unit::Oz => "oz",
            Unit::Lb => "lb",
            Unit::Cup => "cup",
            Unit::Tbsp => "tbsp",
            Unit::Tsp => "tsp",
            Unit::Ml => "ml",
            Unit::Clove => "clove",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A named quantity of one ingredient.
///
/// Immutable value type: arithmetic produces new values and never mutates
/// in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    pub name: String,
    pub quantity: f64,
    pub unit: Unit,
}

impl Ingredient {
    pub fn new(name: impl Into<String>, quantity: f64, unit: Unit) -> Self {
        Self {
            name: name.into(),
            quantity,
            unit,
        }
    }

    /// Combine two quantities of the same ingredient.
    ///
    /// Both sides must carry the same unit; mixed-unit addition fails with
    /// `UnitMismatch`.
    pub fn add(&self, other: &Ingredient) -> Result<Ingredient> {
        if self.unit != other.unit {
            return Err(PantryError::UnitMismatch {
                ingredient: self.name.clone(),
                left: self.unit.to_string(),
                right: other.unit.to_string(),
            });
        }

        Ok(Ingredient::new(
            self.name.clone(),
            self.quantity + other.quantity,
            self.unit,
        ))
    }
}
