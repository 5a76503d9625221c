/// Ounces in one standard unit. One standard unit also equals one
/// discrete "unit" item (one lime, one egg).
pub const STANDARD_UNIT_OZ: f64 = 4.0;

/// Stock expiring strictly sooner than this many days from now counts
/// as wastage.
pub const WASTAGE_WINDOW_DAYS: i64 = 15;

/// Knowledge bank shelf lives are in weeks; expiry dates are in days.
pub const DAYS_PER_SHELF_WEEK: i64 = 7;

// ─────────────────────────────────────────────────────────────────────────────
// Search defaults
// ─────────────────────────────────────────────────────────────────────────────

/// Recipes per meal plan.
pub const DEFAULT_NUM_MEALS: usize = 6;

/// Swap iterations per search run.
pub const DEFAULT_ITERATIONS: usize = 100;

/// Independent proposals generated per planning session.
pub const DEFAULT_PROPOSALS: usize = 5;

// ─────────────────────────────────────────────────────────────────────────────
// Cost weight policy
// ─────────────────────────────────────────────────────────────────────────────

/// Wastage weight when the pantry starts empty. With nothing on hand there
/// is no churn to balance against, so wastage carries the whole cost.
pub const EMPTY_PANTRY_WASTAGE_WEIGHT: f64 = 1.0;

/// Pantry change weight when the pantry starts empty.
pub const EMPTY_PANTRY_CHANGE_WEIGHT: f64 = 0.0;

/// Wastage weight when the pantry already holds stock.
pub const STOCKED_PANTRY_WASTAGE_WEIGHT: f64 = 0.75;

/// Pantry change weight when the pantry already holds stock.
pub const STOCKED_PANTRY_CHANGE_WEIGHT: f64 = 0.25;
