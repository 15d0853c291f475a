use rand::Rng;

use crate::models::{FoodItem, PortionBreakdown};
use crate::nutrition::{round2, NutrientTargets};
use crate::planner::constants::*;

/// Candidate food with its computed score.
#[derive(Debug)]
struct Candidate<'a> {
    food: &'a FoodItem,
    score: f64,
}

/// Absolute error against all three macro targets.
pub fn snack_score(food: &FoodItem, targets: &NutrientTargets) -> f64 {
    (food.carb_g - targets.carb_g).abs()
        + (food.protein_g - targets.protein_g).abs()
        + (food.fat_g - targets.fat_g).abs()
}

/// Staples are judged mainly on carbohydrate, then protein.
pub fn rice_score(food: &FoodItem, targets: &NutrientTargets) -> f64 {
    (food.carb_g - RICE_CARB_WEIGHT * targets.carb_g).abs()
        + (food.protein_g - RICE_PROTEIN_WEIGHT * targets.protein_g).abs()
}

/// Side dishes are judged on protein and fat.
pub fn side_dish_score(food: &FoodItem, targets: &NutrientTargets) -> f64 {
    (food.protein_g - SIDE_PROTEIN_WEIGHT * targets.protein_g).abs()
        + (food.fat_g - SIDE_FAT_WEIGHT * targets.fat_g).abs()
}

/// Rank `pool` by ascending score and draw uniformly from the best `k`.
///
/// Items with non-positive energy never reach scoring. Returns `None` when
/// nothing selectable is left.
pub fn pick_top_k<'a, R, F>(
    pool: &[&'a FoodItem],
    score: F,
    k: usize,
    rng: &mut R,
) -> Option<&'a FoodItem>
where
    R: Rng + ?Sized,
    F: Fn(&FoodItem) -> f64,
{
    let mut ranked: Vec<Candidate<'a>> = pool
        .iter()
        .filter(|food| food.is_selectable())
        .map(|&food| Candidate {
            food,
            score: score(food),
        })
        .collect();

    if ranked.is_empty() {
        return None;
    }

    ranked.sort_by(|a, b| a.score.total_cmp(&b.score));
    ranked.truncate(k.max(1));

    let idx = rng.gen_range(0..ranked.len());
    Some(ranked[idx].food)
}

/// Portion of `food` that supplies `calories`, with the nutrients it carries.
///
/// `food` must have positive energy.
pub fn portion_for(food: &FoodItem, calories: f64) -> PortionBreakdown {
    let grams = calories / food.energy_kcal * PORTION_BASIS_G;
    let factor = grams / PORTION_BASIS_G;

    PortionBreakdown {
        food_name: food.name.clone(),
        portion: round2(grams),
        carb: round2(food.carb_g * factor),
        protein: round2(food.protein_g * factor),
        fat: round2(food.fat_g * factor),
        calories: round2(food.energy_kcal * factor),
    }
}
