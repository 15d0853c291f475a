use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{DietError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
        }
    }
}

impl FromStr for Gender {
    type Err = DietError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "male" => Ok(Gender::Male),
            "female" => Ok(Gender::Female),
            _ => Err(DietError::invalid(format!(
                "gender must be 'Male' or 'Female', got '{}'",
                s
            ))),
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Dietary goal selecting the macro split.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GoalType {
    LowFatHighProtein,
    Balanced,
    BulkUp,
}

impl GoalType {
    pub const ALL: [GoalType; 3] = [
        GoalType::LowFatHighProtein,
        GoalType::Balanced,
        GoalType::BulkUp,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            GoalType::LowFatHighProtein => "LowFatHighProtein",
            GoalType::Balanced => "Balanced",
            GoalType::BulkUp => "BulkUp",
        }
    }

    /// Label used by the original Korean dataset and front end.
    pub fn korean_label(&self) -> &'static str {
        match self {
            GoalType::LowFatHighProtein => "저지방 고단백",
            GoalType::Balanced => "균형 식단",
            GoalType::BulkUp => "벌크업",
        }
    }
}

impl FromStr for GoalType {
    type Err = DietError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        GoalType::ALL
            .into_iter()
            .find(|g| g.as_str().eq_ignore_ascii_case(trimmed) || g.korean_label() == trimmed)
            .ok_or_else(|| DietError::InvalidGoalType(s.to_string()))
    }
}

impl fmt::Display for GoalType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Profile exactly as received at the process boundary.
///
/// Every field is kept as a loose JSON value so numeric strings can be
/// coerced and missing fields reported by name.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawProfile {
    #[serde(default)]
    pub current_weight: Option<Value>,
    #[serde(default)]
    pub target_weight: Option<Value>,
    #[serde(default)]
    pub height: Option<Value>,
    #[serde(default)]
    pub age: Option<Value>,
    #[serde(default)]
    pub gender: Option<Value>,
    #[serde(default)]
    pub activity_level: Option<Value>,
    #[serde(default)]
    pub goal_type: Option<Value>,
    #[serde(default)]
    pub preferred_body_part: Option<Value>,
}

/// Validated biometric profile.
#[derive(Debug, Clone, PartialEq)]
pub struct UserProfile {
    pub current_weight: f64,
    pub target_weight: f64,
    pub height: f64,
    pub age: u32,
    pub gender: Gender,
    /// Range-checked by the TDEE step, not here.
    pub activity_level: i64,
    pub goal_type: GoalType,
    pub preferred_body_part: Option<String>,
}

impl TryFrom<&RawProfile> for UserProfile {
    type Error = DietError;

    fn try_from(raw: &RawProfile) -> Result<Self> {
        let current_weight = positive_field(&raw.current_weight, "current_weight")?;
        let target_weight = positive_field(&raw.target_weight, "target_weight")?;
        let height = positive_field(&raw.height, "height")?;

        let age = integer_field(&raw.age, "age")?;
        let age = u32::try_from(age).map_err(|_| {
            DietError::invalid(format!("age must be a non-negative integer, got {}", age))
        })?;

        let gender: Gender = string_field(&raw.gender, "gender")?.parse()?;
        let activity_level = integer_field(&raw.activity_level, "activity_level")?;
        let goal_type: GoalType = string_field(&raw.goal_type, "goal_type")?.parse()?;

        let preferred_body_part = match &raw.preferred_body_part {
            None | Some(Value::Null) => None,
            Some(_) => Some(string_field(&raw.preferred_body_part, "preferred_body_part")?),
        };

        Ok(UserProfile {
            current_weight,
            target_weight,
            height,
            age,
            gender,
            activity_level,
            goal_type,
            preferred_body_part,
        })
    }
}

impl TryFrom<RawProfile> for UserProfile {
    type Error = DietError;

    fn try_from(raw: RawProfile) -> Result<Self> {
        UserProfile::try_from(&raw)
    }
}

fn present<'a>(value: &'a Option<Value>, name: &str) -> Result<&'a Value> {
    match value {
        None | Some(Value::Null) => Err(DietError::invalid(format!("missing field '{}'", name))),
        Some(v) => Ok(v),
    }
}

fn number_field(value: &Option<Value>, name: &str) -> Result<f64> {
    let parsed = match present(value, name)? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };

    parsed
        .filter(|v| v.is_finite())
        .ok_or_else(|| DietError::invalid(format!("field '{}' must be a number", name)))
}

fn integer_field(value: &Option<Value>, name: &str) -> Result<i64> {
    let parsed = match present(value, name)? {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.fract() == 0.0).map(|f| f as i64)),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    };

    parsed.ok_or_else(|| DietError::invalid(format!("field '{}' must be an integer", name)))
}

fn string_field(value: &Option<Value>, name: &str) -> Result<String> {
    match present(value, name)? {
        Value::String(s) => Ok(s.clone()),
        _ => Err(DietError::invalid(format!("field '{}' must be a string", name))),
    }
}

fn positive_field(value: &Option<Value>, name: &str) -> Result<f64> {
    let value = number_field(value, name)?;
    if value > 0.0 {
        Ok(value)
    } else {
        Err(DietError::invalid(format!("field '{}' must be positive", name)))
    }
}
