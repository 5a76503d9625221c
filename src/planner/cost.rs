use chrono::{DateTime, Utc};

use crate::models::Pantry;
use crate::planner::constants::{
    EMPTY_PANTRY_CHANGE_WEIGHT, EMPTY_PANTRY_WASTAGE_WEIGHT, STOCKED_PANTRY_CHANGE_WEIGHT,
    STOCKED_PANTRY_WASTAGE_WEIGHT, WASTAGE_WINDOW_DAYS,
};

/// Relative weights for the two cost terms.
#[derive(Debug, Clone, Copy)]
pub struct CostWeights {
    pub wastage: f64,
    pub pantry_change: f64,
}

impl CostWeights {
    /// Weight policy keyed off the starting pantry: an empty pantry scores
    /// on wastage alone, a stocked one splits 75/25 between wastage and
    /// churn.
    pub fn for_pantry(pantry: &Pantry) -> Self {
        if pantry.is_empty() {
            Self {
                wastage: EMPTY_PANTRY_WASTAGE_WEIGHT,
                pantry_change: EMPTY_PANTRY_CHANGE_WEIGHT,
            }
        } else {
            Self {
                wastage: STOCKED_PANTRY_WASTAGE_WEIGHT,
                pantry_change: STOCKED_PANTRY_CHANGE_WEIGHT,
            }
        }
    }
}

impl Default for CostWeights {
    fn default() -> Self {
        Self {
            wastage: EMPTY_PANTRY_WASTAGE_WEIGHT,
            pantry_change: EMPTY_PANTRY_CHANGE_WEIGHT,
        }
    }
}

/// Standard units of stock expiring strictly inside the wastage window.
///
/// Whole days only: a balance expiring 14 days and 23 hours out still sits
/// at day 14 and counts.
pub fn wastage(pantry: &Pantry, now: DateTime<Utc>) -> f64 {
    pantry
        .iter()
        .filter(|(_, entry)| {
            entry.quantity > 0.0 && (entry.expiry_date - now).num_days() < WASTAGE_WINDOW_DAYS
        })
        .map(|(_, entry)| entry.quantity)
        .sum()
}

/// Net change in total stock between two pantry snapshots. Positive when
/// the plan grows the pantry, negative when it draws it down.
pub fn pantry_change(old: &Pantry, new: &Pantry) -> f64 {
    new.total_quantity() - old.total_quantity()
}

/// Weighted cost of moving the pantry from `old` to `new`. Lower is better.
pub fn plan_cost(old: &Pantry, new: &Pantry, weights: &CostWeights, now: DateTime<Utc>) -> f64 {
    weights.wastage * wastage(new, now) + weights.pantry_change * pantry_change(old, new)
}
