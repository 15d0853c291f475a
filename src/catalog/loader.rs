use std::fs;
use std::path::Path;

use tracing::{debug, info, warn};

use crate::catalog::classify::classify;
use crate::error::Result;
use crate::models::{FoodItem, RawFoodRecord, ServingSize};

/// Parse a serving weight into grams.
///
/// Unit suffixes are stripped the way the source table needs: "ml" is
/// treated as grams, then any remaining "m"/"g" characters are removed.
/// Returns `None` when what is left is not a finite number.
pub fn parse_serving_weight(size: &ServingSize) -> Option<f64> {
    match size {
        ServingSize::Number(n) => Some(*n).filter(|v| v.is_finite()),
        ServingSize::Text(s) => {
            let cleaned = s.replace("ml", "g").replace(['m', 'g'], "");
            cleaned
                .trim()
                .parse::<f64>()
                .ok()
                .filter(|v| v.is_finite())
        }
    }
}

/// Normalize and classify one raw row.
///
/// Rows with an unparsable serving weight, a missing nutrient value, or a
/// negative nutrient value are dropped.
pub fn normalize_record(record: RawFoodRecord) -> Option<FoodItem> {
    let Some(serving_weight_g) = record.serving_size.as_ref().and_then(parse_serving_weight)
    else {
        debug!(name = %record.name, "dropping row: unparsable serving weight");
        return None;
    };

    let (Some(energy), Some(carb), Some(protein), Some(fat)) =
        (record.calories, record.carbs, record.protein, record.fat)
    else {
        debug!(name = %record.name, "dropping row: missing nutrient value");
        return None;
    };

    if [energy, carb, protein, fat]
        .into_iter()
        .any(|v| !v.is_finite() || v < 0.0)
    {
        debug!(name = %record.name, "dropping row: negative nutrient value");
        return None;
    }

    let role = classify(&record.category);
    Some(FoodItem {
        name: record.name,
        raw_category: record.category,
        energy_kcal: energy,
        carb_g: carb,
        protein_g: protein,
        fat_g: fat,
        serving_weight_g,
        role,
    })
}

/// Turn raw rows into the categorized item sequence.
pub fn load<I>(records: I) -> Vec<FoodItem>
where
    I: IntoIterator<Item = RawFoodRecord>,
{
    let mut seen = 0usize;
    let items: Vec<FoodItem> = records
        .into_iter()
        .inspect(|_| seen += 1)
        .filter_map(normalize_record)
        .collect();

    let dropped = seen - items.len();
    if dropped > 0 {
        warn!(dropped, kept = items.len(), "dropped malformed catalog rows");
    }
    items
}

/// Read raw rows from a CSV or JSON file (chosen by extension).
///
/// Rows that fail to deserialize are skipped individually.
pub fn read_records<P: AsRef<Path>>(path: P) -> Result<Vec<RawFoodRecord>> {
    let path = path.as_ref();
    let is_json = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("json"));

    if is_json {
        read_json_records(path)
    } else {
        read_csv_records(path)
    }
}

fn read_csv_records(path: &Path) -> Result<Vec<RawFoodRecord>> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut records = Vec::new();

    for (line, row) in reader.deserialize::<RawFoodRecord>().enumerate() {
        match row {
            Ok(record) => records.push(record),
            Err(e) => debug!(row = line + 1, error = %e, "skipping undecodable csv row"),
        }
    }
    Ok(records)
}

fn read_json_records(path: &Path) -> Result<Vec<RawFoodRecord>> {
    let content = fs::read_to_string(path)?;
    let values: Vec<serde_json::Value> = serde_json::from_str(&content)?;

    let records = values
        .into_iter()
        .enumerate()
        .filter_map(|(i, value)| match serde_json::from_value(value) {
            Ok(record) => Some(record),
            Err(e) => {
                debug!(row = i, error = %e, "skipping undecodable json row");
                None
            }
        })
        .collect();
    Ok(records)
}

/// Load and classify foods from a file.
pub fn load_foods<P: AsRef<Path>>(path: P) -> Result<Vec<FoodItem>> {
    let path = path.as_ref();
    let records = read_records(path)?;
    let items = load(records);
    info!(path = %path.display(), items = items.len(), "loaded food catalog");
    Ok(items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MealRole;

    fn record(name: &str, category: &str, size: Option<ServingSize>) -> RawFoodRecord {
        RawFoodRecord {
            name: name.to_string(),
            category: category.to_string(),
            calories: Some(150.0),
            carbs: Some(30.0),
            protein: Some(5.0),
            fat: Some(2.0),
            serving_size: size,
        }
    }

    fn text(s: &str) -> Option<ServingSize> {
        Some(ServingSize::Text(s.to_string()))
    }

    #[test]
    fn test_parse_serving_weight() {
        let parse = |s: &str| parse_serving_weight(&ServingSize::Text(s.to_string()));
        assert_eq!(parse("200g"), Some(200.0));
        assert_eq!(parse("250ml"), Some(250.0));
        assert_eq!(parse(" 1.5 g "), Some(1.5));
        assert_eq!(parse_serving_weight(&ServingSize::Number(90.0)), Some(90.0));
        assert_eq!(parse("1인분"), None);
        assert_eq!(parse(""), None);
    }

    #[test]
    fn test_load_classifies_and_drops() {
        let mut negative = record("Bad", "밥류", text("100g"));
        negative.fat = Some(-1.0);
        let mut missing = record("Missing", "밥류", text("100g"));
        missing.protein = None;

        let items = load(vec![
            record("Rice", "밥류", text("210g")),
            record("Kimchi", "김치류", text("50g")),
            record("Juice", "음료 및 차류", text("250ml")),
            record("Unknown size", "밥류", text("한 그릇")),
            record("No size", "밥류", None),
            negative,
            missing,
        ]);

        assert_eq!(items.len(), 3);
        assert_eq!(items[0].role, MealRole::Rice);
        assert_eq!(items[1].role, MealRole::SideDish);
        assert_eq!(items[2].role, MealRole::Dessert);
        assert_eq!(items[2].serving_weight_g, 250.0);
    }

    #[test]
    fn test_zero_energy_rows_are_kept() {
        let mut water = record("Water", "음료 및 차류", text("500ml"));
        water.calories = Some(0.0);
        let items = load(vec![water]);
        assert_eq!(items.len(), 1);
        assert!(!items[0].is_selectable());
    }
}
