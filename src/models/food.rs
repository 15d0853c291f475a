use std::fmt;

use serde::{Deserialize, Serialize};

/// Role a food plays in a meal, derived from its raw catalogue category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MealRole {
    /// Grain and noodle dishes; the staple of a rice-based meal.
    Rice,
    Soup,
    SideDish,
    /// Desserts, beverages and breads.
    Dessert,
    Brunch,
    Other,
}

impl MealRole {
    pub const ALL: [MealRole; 6] = [
        MealRole::Rice,
        MealRole::Soup,
        MealRole::SideDish,
        MealRole::Dessert,
        MealRole::Brunch,
        MealRole::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MealRole::Rice => "rice",
            MealRole::Soup => "soup",
            MealRole::SideDish => "side_dish",
            MealRole::Dessert => "dessert",
            MealRole::Brunch => "brunch",
            MealRole::Other => "other",
        }
    }

    /// Roles eligible for the snack slot.
    pub fn is_snack(&self) -> bool {
        matches!(self, MealRole::Dessert | MealRole::Brunch)
    }
}

impl fmt::Display for MealRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Serving size as it appears in the source table: a bare number or a
/// string with a unit suffix such as "200g" or "250ml".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ServingSize {
    Number(f64),
    Text(String),
}

/// One row of the raw food table.
///
/// Accepts both the relational column names and the headers of the
/// original Korean nutrition dataset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawFoodRecord {
    #[serde(alias = "식품명")]
    pub name: String,

    #[serde(alias = "식품대분류명")]
    pub category: String,

    #[serde(alias = "에너지(kcal)", default)]
    pub calories: Option<f64>,

    #[serde(alias = "탄수화물(g)", default)]
    pub carbs: Option<f64>,

    #[serde(alias = "단백질(g)", default)]
    pub protein: Option<f64>,

    #[serde(alias = "지방(g)", default)]
    pub fat: Option<f64>,

    #[serde(alias = "식품중량", default)]
    pub serving_size: Option<ServingSize>,
}

/// A normalized, classified food item.
///
/// Nutrient values are stated per 100 g. Items are never mutated after the
/// catalogue is built.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FoodItem {
    pub name: String,
    pub raw_category: String,
    pub energy_kcal: f64,
    pub carb_g: f64,
    pub protein_g: f64,
    pub fat_g: f64,
    pub serving_weight_g: f64,
    pub role: MealRole,
}

impl FoodItem {
    /// Whether the item can be scored and portioned. Portions divide by
    /// energy, so zero-energy items are unusable.
    #[inline]
    pub fn is_selectable(&self) -> bool {
        self.energy_kcal > 0.0
    }

    /// Debug string for logging.
    pub fn debug_string(&self) -> String {
        format!(
            "{} [{}]: {} kcal, C:{} P:{} F:{}",
            self.name, self.role, self.energy_kcal, self.carb_g, self.protein_g, self.fat_g
        )
    }
}
