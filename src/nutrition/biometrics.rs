use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

use serde::Serialize;

use crate::error::{DietError, Result};
use crate::models::Gender;

/// BMI band, using the Asian-population cut-offs (23 / 25) rather than the
/// WHO 25 / 30 split.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BmiStatus {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl BmiStatus {
    /// TDEE multiplier applied for this band.
    pub fn tdee_factor(&self) -> f64 {
        match self {
            BmiStatus::Underweight => 1.10,
            BmiStatus::Normal => 1.00,
            BmiStatus::Overweight => 0.90,
            BmiStatus::Obese => 0.80,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BmiStatus::Underweight => "Underweight",
            BmiStatus::Normal => "Normal",
            BmiStatus::Overweight => "Overweight",
            BmiStatus::Obese => "Obese",
        }
    }
}

impl fmt::Display for BmiStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub const BMI_UNDERWEIGHT_BELOW: f64 = 18.5;
pub const BMI_OVERWEIGHT_FROM: f64 = 23.0;
pub const BMI_OBESE_FROM: f64 = 25.0;

/// Activity level (1-4) to TDEE coefficient.
pub static ACTIVITY_FACTORS: LazyLock<HashMap<i64, f64>> = LazyLock::new(|| {
    let mut m = HashMap::new();
    m.insert(1, 1.2); // sedentary
    m.insert(2, 1.375); // light
    m.insert(3, 1.55); // moderate
    m.insert(4, 1.725); // very active
    m
});

/// Classify a BMI value. Boundaries belong to the higher band.
pub fn bmi_status(value: f64) -> BmiStatus {
    if value < BMI_UNDERWEIGHT_BELOW {
        BmiStatus::Underweight
    } else if value < BMI_OVERWEIGHT_FROM {
        BmiStatus::Normal
    } else if value < BMI_OBESE_FROM {
        BmiStatus::Overweight
    } else {
        BmiStatus::Obese
    }
}

/// Body mass index from weight (kg) and height (cm).
///
/// Returns the band together with the raw value.
pub fn bmi(weight_kg: f64, height_cm: f64) -> (BmiStatus, f64) {
    let height_m = height_cm / 100.0;
    let value = weight_kg / (height_m * height_m);
    (bmi_status(value), value)
}

/// Basal metabolic rate, revised Harris-Benedict equation.
pub fn bmr(weight_kg: f64, height_cm: f64, age: u32, gender: Gender) -> f64 {
    let age = age as f64;
    match gender {
        Gender::Male => 88.362 + 13.397 * weight_kg + 4.799 * height_cm - 5.677 * age,
        Gender::Female => 447.593 + 9.247 * weight_kg + 3.098 * height_cm - 4.330 * age,
    }
}

/// Coefficient for an activity level.
pub fn activity_factor(activity_level: i64) -> Result<f64> {
    ACTIVITY_FACTORS.get(&activity_level).copied().ok_or_else(|| {
        DietError::invalid(format!(
            "activity level must be an integer between 1 and 4, got {}",
            activity_level
        ))
    })
}

/// Total daily energy expenditure.
pub fn tdee(bmr: f64, activity_level: i64) -> Result<f64> {
    Ok(bmr * activity_factor(activity_level)?)
}

/// Scale a TDEE by the BMI band.
pub fn adjust_tdee_for_bmi(tdee: f64, status: BmiStatus) -> f64 {
    tdee * status.tdee_factor()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bmi_value() {
        let (status, value) = bmi(76.0, 182.0);
        assert!((value - 22.944).abs() < 0.001);
        assert_eq!(status, BmiStatus::Normal);
    }

    #[test]
    fn test_bmi_boundaries() {
        assert_eq!(bmi_status(18.49), BmiStatus::Underweight);
        assert_eq!(bmi_status(18.5), BmiStatus::Normal);
        assert_eq!(bmi_status(22.99), BmiStatus::Normal);
        assert_eq!(bmi_status(23.0), BmiStatus::Overweight);
        assert_eq!(bmi_status(25.0), BmiStatus::Obese);
    }

    #[test]
    fn test_bmr_known_values() {
        // 88.362 + 13.397*76 + 4.799*182 - 5.677*23
        let male = bmr(76.0, 182.0, 23, Gender::Male);
        assert!((male - 1849.381).abs() < 0.001);

        // 447.593 + 9.247*60 + 3.098*165 - 4.330*30
        let female = bmr(60.0, 165.0, 30, Gender::Female);
        assert!((female - 1383.683).abs() < 0.001);
    }

    #[test]
    fn test_tdee_rejects_out_of_range() {
        assert!(tdee(1500.0, 0).is_err());
        assert!(matches!(tdee(1500.0, 5), Err(DietError::InvalidInput(_))));
    }

    #[test]
    fn test_adjust_tdee() {
        assert!((adjust_tdee_for_bmi(2000.0, BmiStatus::Underweight) - 2200.0).abs() < 1e-9);
        assert_eq!(adjust_tdee_for_bmi(2000.0, BmiStatus::Normal), 2000.0);
        assert!((adjust_tdee_for_bmi(2000.0, BmiStatus::Overweight) - 1800.0).abs() < 1e-9);
        assert!((adjust_tdee_for_bmi(2000.0, BmiStatus::Obese) - 1600.0).abs() < 1e-9);
    }
}
