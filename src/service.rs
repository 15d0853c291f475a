use rand::Rng;
use serde::Serialize;
use tracing::{debug, info};

use crate::catalog::FoodCatalog;
use crate::error::{DietError, Result};
use crate::models::{DietPlan, Gender, GoalType, MealEntry, MealSlot, RawProfile, UserProfile};
use crate::nutrition::{adjust_tdee_for_bmi, bmi, bmr, round2, tdee, BmiStatus, NutrientTargets};
use crate::planner::{generate_plan, PlannerConfig};

/// Echoed profile plus the derived figures, rounded for presentation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfileSummary {
    pub current_weight: f64,
    pub target_weight: f64,
    pub height: f64,
    pub age: u32,
    pub gender: Gender,
    pub activity_level: i64,
    pub goal_type: GoalType,
    pub current_bmi: f64,
    pub target_bmi: f64,
    pub bmi_status: BmiStatus,
    pub current_bmr: f64,
    pub target_bmr: f64,
    pub current_tdee: f64,
    pub target_tdee: f64,
    pub carb_target: f64,
    pub protein_target: f64,
    pub fat_target: f64,
}

impl ProfileSummary {
    /// Daily macro targets as handed to the planner.
    pub fn targets(&self) -> NutrientTargets {
        NutrientTargets {
            carb_g: self.carb_target,
            protein_g: self.protein_target,
            fat_g: self.fat_target,
        }
    }
}

/// Full response for one request.
#[derive(Debug, Clone, Serialize)]
pub struct Recommendation {
    pub user_info: ProfileSummary,
    pub recommended_diet: DietPlan,
}

/// Response for a single-meal lookup.
#[derive(Debug, Clone, Serialize)]
pub struct MealRecommendation {
    pub meal: MealSlot,
    pub recommended_diet: MealEntry,
}

/// Derive BMI, BMR and TDEE for the current and target weights.
///
/// Both TDEEs are scaled by the *current* BMI band. Macro targets come from
/// the adjusted target TDEE and are rounded before use.
pub fn summarize(profile: &UserProfile) -> Result<ProfileSummary> {
    assess(profile).map(|(summary, _)| summary)
}

/// Summary plus the unrounded target TDEE the planner works from.
fn assess(profile: &UserProfile) -> Result<(ProfileSummary, f64)> {
    let (status, current_bmi) = bmi(profile.current_weight, profile.height);
    let (_, target_bmi) = bmi(profile.target_weight, profile.height);

    let current_bmr = bmr(profile.current_weight, profile.height, profile.age, profile.gender);
    let target_bmr = bmr(profile.target_weight, profile.height, profile.age, profile.gender);

    let current_tdee = adjust_tdee_for_bmi(tdee(current_bmr, profile.activity_level)?, status);
    let target_tdee = adjust_tdee_for_bmi(tdee(target_bmr, profile.activity_level)?, status);

    let targets = NutrientTargets::resolve(target_tdee, profile.goal_type).rounded();

    let summary = ProfileSummary {
        current_weight: profile.current_weight,
        target_weight: profile.target_weight,
        height: profile.height,
        age: profile.age,
        gender: profile.gender,
        activity_level: profile.activity_level,
        goal_type: profile.goal_type,
        current_bmi: round2(current_bmi),
        target_bmi: round2(target_bmi),
        bmi_status: status,
        current_bmr: round2(current_bmr),
        target_bmr: round2(target_bmr),
        current_tdee: round2(current_tdee),
        target_tdee: round2(target_tdee),
        carb_target: targets.carb_g,
        protein_target: targets.protein_g,
        fat_target: targets.fat_g,
    };
    Ok((summary, target_tdee))
}

/// Orchestrates one recommendation per request over a shared catalogue.
pub struct DietRecommendationService<'a> {
    catalog: &'a FoodCatalog,
    config: PlannerConfig,
}

impl<'a> DietRecommendationService<'a> {
    pub fn new(catalog: &'a FoodCatalog, config: PlannerConfig) -> Self {
        Self { catalog, config }
    }

    /// Validate `raw` and build the full day plan.
    ///
    /// Every failure is reported as `DietError::DietComputation`.
    pub fn recommend<R>(&self, raw: &RawProfile, rng: &mut R) -> Result<Recommendation>
    where
        R: Rng + ?Sized,
    {
        UserProfile::try_from(raw)
            .and_then(|profile| self.recommend_profile(&profile, rng))
            .map_err(|e| DietError::DietComputation(detail(e)))
    }

    /// Build the plan for an already validated profile.
    pub fn recommend_profile<R>(
        &self,
        profile: &UserProfile,
        rng: &mut R,
    ) -> Result<Recommendation>
    where
        R: Rng + ?Sized,
    {
        let (summary, target_tdee) = assess(profile)?;
        debug!(
            bmi = summary.current_bmi,
            status = %summary.bmi_status,
            target_tdee = summary.target_tdee,
            "profile summarized"
        );

        let plan = generate_plan(
            self.catalog,
            target_tdee,
            &summary.targets(),
            &self.config,
            rng,
        );
        info!(
            meals = plan.iter().filter(|(_, e)| e.is_available()).count(),
            calories = round2(plan.total_calories()),
            "diet plan generated"
        );

        Ok(Recommendation {
            user_info: summary,
            recommended_diet: plan,
        })
    }

    /// Build the plan and return only `meal_name`'s entry.
    pub fn recommend_meal<R>(
        &self,
        raw: &RawProfile,
        meal_name: &str,
        rng: &mut R,
    ) -> Result<MealRecommendation>
    where
        R: Rng + ?Sized,
    {
        let meal: MealSlot = meal_name.parse()?;
        let recommendation = self.recommend(raw, rng)?;

        let entry = recommendation
            .recommended_diet
            .get(meal)
            .cloned()
            .ok_or_else(|| DietError::UnknownMeal(format!("'{}'", meal_name)))?;

        Ok(MealRecommendation {
            meal,
            recommended_diet: entry,
        })
    }
}

/// Inner message without the variant prefix for input errors, so the
/// boundary error reads "diet computation failed: missing field 'age'".
fn detail(err: DietError) -> String {
    match err {
        DietError::InvalidInput(msg) => msg,
        other => other.to_string(),
    }
}
