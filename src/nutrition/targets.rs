use serde::Serialize;

use crate::error::Result;
use crate::models::GoalType;

/// kcal per gram of carbohydrate and protein.
pub const KCAL_PER_GRAM_CARB: f64 = 4.0;
pub const KCAL_PER_GRAM_PROTEIN: f64 = 4.0;
/// kcal per gram of fat.
pub const KCAL_PER_GRAM_FAT: f64 = 9.0;

/// Fraction of energy assigned to each macronutrient.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MacroRatios {
    pub carb: f64,
    pub protein: f64,
    pub fat: f64,
}

impl MacroRatios {
    pub fn sum(&self) -> f64 {
        self.carb + self.protein + self.fat
    }
}

/// Fixed macro split per goal.
pub fn ratios_for(goal: GoalType) -> MacroRatios {
    match goal {
        GoalType::LowFatHighProtein => MacroRatios {
            carb: 0.4,
            protein: 0.4,
            fat: 0.2,
        },
        GoalType::Balanced => MacroRatios {
            carb: 0.5,
            protein: 0.3,
            fat: 0.2,
        },
        GoalType::BulkUp => MacroRatios {
            carb: 0.6,
            protein: 0.3,
            fat: 0.1,
        },
    }
}

/// Gram-level macro targets over some horizon (a day or one meal).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct NutrientTargets {
    pub carb_g: f64,
    pub protein_g: f64,
    pub fat_g: f64,
}

impl NutrientTargets {
    /// Convert an energy target into gram targets for `goal`.
    pub fn resolve(tdee: f64, goal: GoalType) -> Self {
        let ratios = ratios_for(goal);
        Self {
            carb_g: tdee * ratios.carb / KCAL_PER_GRAM_CARB,
            protein_g: tdee * ratios.protein / KCAL_PER_GRAM_PROTEIN,
            fat_g: tdee * ratios.fat / KCAL_PER_GRAM_FAT,
        }
    }

    /// Targets scaled by a fraction of the day.
    pub fn scaled(&self, ratio: f64) -> Self {
        Self {
            carb_g: self.carb_g * ratio,
            protein_g: self.protein_g * ratio,
            fat_g: self.fat_g * ratio,
        }
    }

    /// Each target rounded to 2 decimals.
    pub fn rounded(&self) -> Self {
        Self {
            carb_g: round2(self.carb_g),
            protein_g: round2(self.protein_g),
            fat_g: round2(self.fat_g),
        }
    }
}

/// Resolve targets from a goal label. Fails on labels outside the table.
pub fn resolve(tdee: f64, goal_label: &str) -> Result<NutrientTargets> {
    let goal: GoalType = goal_label.parse()?;
    Ok(NutrientTargets::resolve(tdee, goal))
}

/// Round to 2 decimals, ties to even.
#[inline]
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DietError;

    #[test]
    fn test_resolve_bulk_up() {
        let t = NutrientTargets::resolve(2000.0, GoalType::BulkUp);
        assert!((t.carb_g - 300.0).abs() < 1e-9);
        assert!((t.protein_g - 150.0).abs() < 1e-9);
        assert!((t.fat_g - 2000.0 * 0.1 / 9.0).abs() < 1e-9);
    }

    #[test]
    fn test_ratios_sum_to_one() {
        for goal in GoalType::ALL {
            assert!((ratios_for(goal).sum() - 1.0).abs() < 1e-9, "{goal}");
        }
    }

    #[test]
    fn test_resolve_by_label() {
        let t = resolve(1800.0, "균형 식단").unwrap();
        assert!((t.carb_g - 225.0).abs() < 1e-9);
        assert!(matches!(resolve(1800.0, "Unknown"), Err(DietError::InvalidGoalType(_))));
    }

    #[test]
    fn test_scaled_and_rounded() {
        let t = NutrientTargets {
            carb_g: 100.0,
            protein_g: 50.0,
            fat_g: 33.333,
        };
        let meal = t.scaled(0.35).rounded();
        assert_eq!(meal.carb_g, 35.0);
        assert_eq!(meal.protein_g, 17.5);
        assert_eq!(meal.fat_g, 11.67);
    }

    #[test]
    fn test_round2_ties_to_even() {
        assert_eq!(round2(0.125), 0.12);
        assert_eq!(round2(1.625), 1.62);
        assert_eq!(round2(0.375), 0.38);
        assert_eq!(round2(-0.125), -0.12);
        assert_eq!(round2(11.666), 11.67);
    }
}
