use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{DietError, Result};
use crate::nutrition::round2;
use crate::service::ProfileSummary;

/// Fixed daily calorie deficit assumed by the model.
pub const CALORIE_DEFICIT: f64 = 500.0;
/// Total exercise minutes the model was trained with.
pub const EXERCISE_MINUTES: f64 = 120.0;
/// Calories burned by exercise per day.
pub const EXERCISE_CALORIES: f64 = 400.0;
/// Daily intake placeholder.
pub const MEAL_INTAKE_CALORIES: f64 = 2000.0;

/// Body part used when the caller does not name one.
pub const DEFAULT_BODY_PART: &str = "full_body";

/// Input row for the days-to-goal model, keyed by column name, with
/// categorical fields one-hot encoded.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PredictionFeatures {
    values: HashMap<String, f64>,
}

impl PredictionFeatures {
    /// Build the feature row from a computed profile summary.
    pub fn from_summary(summary: &ProfileSummary, preferred_body_part: Option<&str>) -> Self {
        let mut values = HashMap::new();
        let mut set = |k: &str, v: f64| {
            values.insert(k.to_string(), v);
        };

        set("Age", summary.age as f64);
        set("Height", summary.height / 100.0);
        set("Weight", summary.current_weight);
        set("TargetWeight", summary.target_weight);
        set("BMR", summary.current_bmr);
        set("TDEE", summary.current_tdee);
        set("BMI", summary.current_bmi);
        set("TargetBMI", summary.target_bmi);
        set("Calorie_Target", summary.current_tdee - CALORIE_DEFICIT);
        set("Calorie_Deficit", CALORIE_DEFICIT);
        set("총 운동시간", EXERCISE_MINUTES);
        set("하루소모칼로리", EXERCISE_CALORIES);
        set("총 식사섭취 칼로리", MEAL_INTAKE_CALORIES);
        set("ActivityLevel", summary.activity_level as f64);

        set(&format!("Gender_{}", summary.gender), 1.0);
        set(&format!("GoalType_{}", summary.goal_type.korean_label()), 1.0);
        set(
            &format!(
                "preferred_body_part_{}",
                preferred_body_part.unwrap_or(DEFAULT_BODY_PART)
            ),
            1.0,
        );

        Self { values }
    }

    pub fn get(&self, column: &str) -> Option<f64> {
        self.values.get(column).copied()
    }

    /// Reindex to the model's column order. Unknown columns become 0.
    pub fn to_vector(&self, columns: &[String]) -> Vec<f64> {
        columns
            .iter()
            .map(|c| self.values.get(c).copied().unwrap_or(0.0))
            .collect()
    }
}

/// Per-column standardization fitted alongside the model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StandardScaler {
    pub mean: Vec<f64>,
    pub scale: Vec<f64>,
}

impl StandardScaler {
    pub fn transform(&self, row: &[f64]) -> Result<Vec<f64>> {
        if row.len() != self.mean.len() || row.len() != self.scale.len() {
            return Err(DietError::Model(format!(
                "scaler expects {} features, got {}",
                self.mean.len(),
                row.len()
            )));
        }

        Ok(row
            .iter()
            .zip(self.mean.iter().zip(&self.scale))
            .map(|(x, (m, s))| if *s == 0.0 { x - m } else { (x - m) / s })
            .collect())
    }
}

/// A model predicting `ln(1 + days)` from a scaled feature row.
pub trait DurationPredictor {
    /// Columns the model expects, in order.
    fn columns(&self) -> &[String];

    fn predict_log_days(&self, scaled: &[f64]) -> Result<f64>;
}

/// Linear stand-in for the external network, loaded from JSON.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinearDurationModel {
    pub columns: Vec<String>,
    pub scaler: StandardScaler,
    pub weights: Vec<f64>,
    pub bias: f64,
}

impl LinearDurationModel {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let model: LinearDurationModel = serde_json::from_str(&content)?;
        if model.weights.len() != model.columns.len() {
            return Err(DietError::Model(format!(
                "{} weights for {} columns",
                model.weights.len(),
                model.columns.len()
            )));
        }
        Ok(model)
    }
}

impl DurationPredictor for LinearDurationModel {
    fn columns(&self) -> &[String] {
        &self.columns
    }

    fn predict_log_days(&self, scaled: &[f64]) -> Result<f64> {
        if scaled.len() != self.weights.len() {
            return Err(DietError::Model(format!(
                "model expects {} features, got {}",
                self.weights.len(),
                scaled.len()
            )));
        }
        let dot: f64 = scaled.iter().zip(&self.weights).map(|(x, w)| x * w).sum();
        Ok(dot + self.bias)
    }
}

/// Estimated days to reach the target weight.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DurationEstimate {
    pub days_to_goal: f64,
    pub message: String,
}

/// Run `model` on `features`; the log transform is undone and the result
/// rounded to 2 decimals.
pub fn estimate_days(
    model: &dyn DurationPredictor,
    scaler: &StandardScaler,
    features: &PredictionFeatures,
) -> Result<DurationEstimate> {
    let row = features.to_vector(model.columns());
    let scaled = scaler.transform(&row)?;
    let days = round2(model.predict_log_days(&scaled)?.exp_m1());

    Ok(DurationEstimate {
        days_to_goal: days,
        message: format!(
            "The estimated time to achieve the goal is approximately {} days.",
            days
        ),
    })
}
