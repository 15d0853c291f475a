use crate::models::MealSlot;

/// Candidates drawn from after sorting by score.
pub const TOP_K: usize = 5;

/// Fraction of the daily energy target per meal. Sums to 1.0.
pub const MEAL_SPLIT: [(MealSlot, f64); 4] = [
    (MealSlot::Breakfast, 0.30),
    (MealSlot::Lunch, 0.35),
    (MealSlot::Snack, 0.15),
    (MealSlot::Dinner, 0.20),
];

/// Nutrient values in the catalogue are stated per this many grams.
pub const PORTION_BASIS_G: f64 = 100.0;

// ─────────────────────────────────────────────────────────────────────────────
// Rice-based meals: a staple plus a side dish
// ─────────────────────────────────────────────────────────────────────────────

/// Share of the meal's calories given to the staple.
pub const RICE_CALORIE_SHARE: f64 = 0.6;

/// Share of the meal's calories given to the side dish.
pub const SIDE_CALORIE_SHARE: f64 = 0.4;

/// Fraction of the meal carb target the staple is scored against.
pub const RICE_CARB_WEIGHT: f64 = 0.6;
pub const RICE_PROTEIN_WEIGHT: f64 = 0.4;

/// Fraction of the meal protein target the side dish is scored against.
pub const SIDE_PROTEIN_WEIGHT: f64 = 0.6;
pub const SIDE_FAT_WEIGHT: f64 = 0.4;

// ─────────────────────────────────────────────────────────────────────────────
// Sentinels
// ─────────────────────────────────────────────────────────────────────────────

pub const NO_SNACK_MESSAGE: &str = "No suitable snack found";

/// Message for a rice-based meal with an empty staple or side pool.
pub fn no_food_message(slot: MealSlot) -> String {
    format!("No suitable food found for {}", slot)
}
