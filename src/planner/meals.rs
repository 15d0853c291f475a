use std::collections::HashSet;

use rand::Rng;
use tracing::debug;

use crate::catalog::FoodCatalog;
use crate::models::{DietPlan, MealEntry, MealRole, MealSlot};
use crate::nutrition::NutrientTargets;
use crate::planner::constants::*;
use crate::planner::selection::{pick_top_k, portion_for, rice_score, side_dish_score, snack_score};

/// Tunables for plan generation.
#[derive(Debug, Clone)]
pub struct PlannerConfig {
    /// How many best-scoring candidates the random draw chooses among.
    pub top_k: usize,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self { top_k: TOP_K }
    }
}

/// Energy and macro sub-targets for one meal.
#[derive(Debug, Clone, Copy)]
struct MealTargets {
    calories: f64,
    macros: NutrientTargets,
}

/// Generate a four-meal plan.
///
/// The daily energy and macro targets are split across meals by
/// `MEAL_SPLIT`. Every chosen item joins the day's used set, and the rice
/// and side-dish pools of later meals exclude it. The snack pool is not
/// filtered. A meal whose pools are empty gets a sentinel entry instead of
/// failing the plan.
pub fn generate_plan<R>(
    catalog: &FoodCatalog,
    daily_calories: f64,
    daily: &NutrientTargets,
    config: &PlannerConfig,
    rng: &mut R,
) -> DietPlan
where
    R: Rng + ?Sized,
{
    let mut plan = DietPlan::new();
    let mut used: HashSet<&str> = HashSet::new();

    for (slot, ratio) in MEAL_SPLIT {
        let targets = MealTargets {
            calories: daily_calories * ratio,
            macros: daily.scaled(ratio),
        };

        let entry = if slot.is_snack() {
            plan_snack(catalog, &targets, config, &mut used, rng)
        } else {
            plan_rice_meal(catalog, slot, &targets, config, &mut used, rng)
        };

        plan.push(slot, entry);
    }

    plan
}

fn plan_snack<'a, R>(
    catalog: &'a FoodCatalog,
    targets: &MealTargets,
    config: &PlannerConfig,
    used: &mut HashSet<&'a str>,
    rng: &mut R,
) -> MealEntry
where
    R: Rng + ?Sized,
{
    let pool = catalog.candidates(|role| role.is_snack());
    let Some(food) = pick_top_k(&pool, |f| snack_score(f, &targets.macros), config.top_k, rng)
    else {
        debug!(pool = pool.len(), "no snack candidates");
        return MealEntry::unavailable(NO_SNACK_MESSAGE);
    };

    debug!(food = %food.debug_string(), "snack selected");
    used.insert(food.name.as_str());
    MealEntry::Single(portion_for(food, targets.calories))
}

fn plan_rice_meal<'a, R>(
    catalog: &'a FoodCatalog,
    slot: MealSlot,
    targets: &MealTargets,
    config: &PlannerConfig,
    used: &mut HashSet<&'a str>,
    rng: &mut R,
) -> MealEntry
where
    R: Rng + ?Sized,
{
    let rice_pool = catalog.unused_candidates(MealRole::Rice, used);
    let side_pool = catalog.unused_candidates(MealRole::SideDish, used);

    let rice = pick_top_k(&rice_pool, |f| rice_score(f, &targets.macros), config.top_k, rng);
    let side = pick_top_k(
        &side_pool,
        |f| side_dish_score(f, &targets.macros),
        config.top_k,
        rng,
    );

    let (Some(rice), Some(side)) = (rice, side) else {
        debug!(
            meal = %slot,
            rice_pool = rice_pool.len(),
            side_pool = side_pool.len(),
            "no rice/side combination available"
        );
        return MealEntry::unavailable(no_food_message(slot));
    };

    debug!(meal = %slot, rice = %rice.name, side = %side.name, "meal selected");

    used.insert(rice.name.as_str());
    used.insert(side.name.as_str());

    MealEntry::Combo {
        rice: portion_for(rice, targets.calories * RICE_CALORIE_SHARE),
        side_dish: portion_for(side, targets.calories * SIDE_CALORIE_SHARE),
    }
}
