use dialoguer::{Confirm, Input, Select};
use serde_json::Value;

use crate::error::{DietError, Result};
use crate::models::{Gender, GoalType, RawProfile, UserProfile};
use crate::nutrition::ACTIVITY_FACTORS;

/// Prompt for a positive number.
pub fn prompt_positive(prompt: &str, default: &str) -> Result<f64> {
    let input: String = Input::new()
        .with_prompt(prompt)
        .default(default.to_string())
        .interact_text()?;

    let value: f64 = input
        .trim()
        .parse()
        .map_err(|_| DietError::invalid(format!("Invalid number: '{}'", input)))?;

    if value <= 0.0 {
        return Err(DietError::invalid("Value must be positive"));
    }

    Ok(value)
}

/// Prompt for age in whole years.
pub fn prompt_age() -> Result<u32> {
    let input: String = Input::new()
        .with_prompt("Age")
        .default("30".to_string())
        .interact_text()?;

    input
        .trim()
        .parse()
        .map_err(|_| DietError::invalid(format!("Invalid age: '{}'", input)))
}

pub fn prompt_gender() -> Result<Gender> {
    let options = [Gender::Male, Gender::Female];
    let labels: Vec<&str> = options.iter().map(|g| g.as_str()).collect();

    let selection = Select::new()
        .with_prompt("Gender")
        .items(&labels)
        .default(0)
        .interact()?;

    Ok(options[selection])
}

/// Prompt for activity level 1-4.
pub fn prompt_activity_level() -> Result<i64> {
    let mut levels: Vec<(i64, f64)> = ACTIVITY_FACTORS.iter().map(|(l, f)| (*l, *f)).collect();
    levels.sort_by_key(|(level, _)| *level);

    let labels = [
        "sedentary",
        "lightly active",
        "moderately active",
        "very active",
    ];
    let options: Vec<String> = levels
        .iter()
        .zip(labels)
        .map(|((level, factor), label)| format!("{} - {} (x{})", level, label, factor))
        .collect();

    let selection = Select::new()
        .with_prompt("Activity level")
        .items(&options)
        .default(1)
        .interact()?;

    Ok(levels[selection].0)
}

pub fn prompt_goal_type() -> Result<GoalType> {
    let options: Vec<String> = GoalType::ALL
        .iter()
        .map(|g| format!("{} ({})", g.as_str(), g.korean_label()))
        .collect();

    let selection = Select::new()
        .with_prompt("Goal")
        .items(&options)
        .default(1)
        .interact()?;

    Ok(GoalType::ALL[selection])
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

/// Collect every profile field and validate the result.
pub fn collect_profile() -> Result<UserProfile> {
    let current_weight = prompt_positive("Current weight (kg)", "70")?;
    let target_weight = prompt_positive("Target weight (kg)", "65")?;
    let height = prompt_positive("Height (cm)", "170")?;
    let age = prompt_age()?;
    let gender = prompt_gender()?;
    let activity_level = prompt_activity_level()?;
    let goal_type = prompt_goal_type()?;

    // Same validation path as JSON input.
    let raw = RawProfile {
        current_weight: Some(Value::from(current_weight)),
        target_weight: Some(Value::from(target_weight)),
        height: Some(Value::from(height)),
        age: Some(Value::from(age)),
        gender: Some(Value::from(gender.as_str())),
        activity_level: Some(Value::from(activity_level)),
        goal_type: Some(Value::from(goal_type.as_str())),
        preferred_body_part: None,
    };

    UserProfile::try_from(raw)
}
