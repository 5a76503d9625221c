use crate::error::{PantryError, Result};
use crate::models::{Ingredient, Pantry, PantryItem, Recipe, RecipeRecord, StockEntry, Unit};
use crate::planner::constants::STANDARD_UNIT_OZ;

/// Standard units per one input unit.
fn standard_factor(unit: Unit) -> f64 {
    match unit {
        Unit::Standard => 1.0,
        // One discrete item is one standard unit.
        Unit::Unit => 1.0,
        Unit::Oz => 1.0 / STANDARD_UNIT_OZ,
        Unit::Lb => 16.0 / STANDARD_UNIT_OZ,
        Unit::Cup => 8.0 / STANDARD_UNIT_OZ,
        Unit::Tbsp => 0.5 / STANDARD_UNIT_OZ,
        Unit::Tsp => (1.0 / 6.0) / STANDARD_UNIT_OZ,
        Unit::Ml => (1.0 / 30.0) / STANDARD_UNIT_OZ,
        // Heads of garlic are bought whole; ten cloves to a head.
        Unit::Clove => 1.0 / 10.0,
    }
}

/// Convert a raw quantity into standard units.
///
/// The unit arrives as the raw token from catalog or pantry data; an
/// unrecognized token fails with `UnsupportedUnit` naming the ingredient.
pub fn to_standard(name: &str, quantity: f64, unit: &str) -> Result<Ingredient> {
    let unit = Unit::parse(unit).ok_or_else(|| PantryError::UnsupportedUnit {
        ingredient: name.to_string(),
        unit: unit.to_string(),
    })?;

    Ok(Ingredient::new(
        name,
        quantity * standard_factor(unit),
        Unit::Standard,
    ))
}

/// Convert a standard-unit quantity back into the given purchase unit.
///
/// Exact inverse of `to_standard` for every supported unit.
pub fn from_standard(name: &str, quantity: f64, unit: &str) -> Result<f64> {
    let unit = Unit::parse(unit).ok_or_else(|| PantryError::UnsupportedUnit {
        ingredient: name.to_string(),
        unit: unit.to_string(),
    })?;

    Ok(quantity / standard_factor(unit))
}

/// Convert every ingredient line of a cookbook record to standard units.
pub fn standardize_recipe(record: RecipeRecord) -> Result<Recipe> {
    let ingredients = record
        .ingredients
        .iter()
        .map(|line| to_standard(&line.name, line.quantity, &line.unit))
        .collect::<Result<Vec<_>>>()?;

    Ok(Recipe {
        name: record.name,
        cooking_time: record.cooking_time,
        total_calories: record.total_calories,
        grams_carbs: record.grams_carbs,
        grams_fat: record.grams_fat,
        grams_protein: record.grams_protein,
        ingredients,
    })
}

/// Build an in-memory pantry from stored items, converting each quantity to
/// standard units and keeping its expiry date.
pub fn standardize_pantry(items: &[PantryItem]) -> Result<Pantry> {
    let mut pantry = Pantry::new();
    for item in items {
        let standardized = to_standard(&item.name, item.quantity, &item.unit)?;
        pantry.insert(
            standardized.name,
            StockEntry::new(standardized.quantity, item.expiry_date),
        );
    }
    Ok(pantry)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::far_future;
    use assert_float_eq::assert_float_absolute_eq;

    #[test]
    fn test_to_standard_conversions() {
        let cases = [
            ("rice", 8.0, "oz", 2.0),
            ("beef", 1.0, "lb", 4.0),
            ("flour", 1.0, "cup", 2.0),
            ("olive oil", 4.0, "tbsp", 0.5),
            ("cumin", 6.0, "tsp", 0.25),
            ("milk", 120.0, "ml", 1.0),
            ("garlic", 5.0, "clove", 0.5),
            ("lime", 3.0, "unit", 3.0),
        ];

        for (name, quantity, unit, expected) in cases {
            let converted = to_standard(name, quantity, unit).unwrap();
            assert_eq!(converted.unit, Unit::Standard);
            assert_float_absolute_eq!(converted.quantity, expected, 1e-9);
        }
    }

    #[test]
    fn test_from_standard_inverts_to_standard() {
        for unit in ["unit", "oz", "lb", "cup", "tbsp", "tsp", "ml", "clove"] {
            let standardized = to_standard("x", 3.7, unit).unwrap();
            let back = from_standard("x", standardized.quantity, unit).unwrap();
            assert_float_absolute_eq!(back, 3.7, 1e-9);
        }
    }

    #[test]
    fn test_unsupported_unit_is_fatal() {
        let err = to_standard("kale", 1.0, "bunch").unwrap_err();
        match err {
            PantryError::UnsupportedUnit { ingredient, unit } => {
                assert_eq!(ingredient, "kale");
                assert_eq!(unit, "bunch");
            }
            other => panic!("unexpected error: {other}"),
        }

        assert!(from_standard("kale", 1.0, "bunch").is_err());
    }

    #[test]
    fn test_standardize_pantry_keeps_expiry() {
        let expiry = "2026-04-01T00:00:00Z".parse().unwrap();
        let items = vec![
            PantryItem::new("milk", 2.0, "cup", expiry),
            PantryItem::new("salt", 8.0, "oz", far_future()),
        ];

        let pantry = standardize_pantry(&items).unwrap();
        let milk = pantry.get("milk").unwrap();
        assert_float_absolute_eq!(milk.quantity, 4.0, 1e-9);
        assert_eq!(milk.expiry_date, expiry);

        let salt = pantry.get("salt").unwrap();
        assert_float_absolute_eq!(salt.quantity, 2.0, 1e-9);
        assert_eq!(salt.expiry_date, far_future());
    }
}
