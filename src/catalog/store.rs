use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};
use std::path::Path;
use std::str::FromStr;

use strsim::jaro_winkler;

use crate::catalog::loader;
use crate::error::{DietError, Result};
use crate::models::{FoodItem, MealRole, RawFoodRecord};

/// Nutrient a category listing is ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Protein,
    Fat,
    Calories,
}

impl SortField {
    pub fn value(&self, food: &FoodItem) -> f64 {
        match self {
            SortField::Protein => food.protein_g,
            SortField::Fat => food.fat_g,
            SortField::Calories => food.energy_kcal,
        }
    }
}

impl FromStr for SortField {
    type Err = DietError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "protein" => Ok(SortField::Protein),
            "fat" => Ok(SortField::Fat),
            "calories" => Ok(SortField::Calories),
            _ => Err(DietError::invalid(format!(
                "sort field must be 'protein', 'fat' or 'calories', got '{}'",
                s
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    /// "asc" or "desc" in any case. Anything else is descending.
    pub fn from_label(label: &str) -> Self {
        if label.trim().eq_ignore_ascii_case("asc") {
            SortOrder::Asc
        } else {
            SortOrder::Desc
        }
    }
}

/// The loaded, read-only food catalogue.
///
/// Built once at startup and shared by reference with every request.
#[derive(Debug, Clone, Default)]
pub struct FoodCatalog {
    items: Vec<FoodItem>,
}

impl FoodCatalog {
    /// Wrap already-classified items.
    pub fn new(items: Vec<FoodItem>) -> Self {
        Self { items }
    }

    /// Normalize and classify raw rows.
    pub fn from_records<I>(records: I) -> Self
    where
        I: IntoIterator<Item = RawFoodRecord>,
    {
        Self::new(loader::load(records))
    }

    /// Load from a CSV or JSON file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        Ok(Self::new(loader::load_foods(path)?))
    }

    pub fn items(&self) -> &[FoodItem] {
        &self.items
    }

    /// Get an item by exact name.
    pub fn get(&self, name: &str) -> Option<&FoodItem> {
        self.items.iter().find(|f| f.name == name)
    }

    /// Get an item by exact name, with a close-name hint when missing.
    pub fn lookup(&self, name: &str) -> Result<&FoodItem> {
        if let Some(food) = self.get(name) {
            return Ok(food);
        }

        let suggestion = self
            .items
            .iter()
            .map(|f| (f, jaro_winkler(&f.name.to_lowercase(), &name.to_lowercase())))
            .filter(|(_, score)| *score > 0.7)
            .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(Ordering::Equal));

        Err(DietError::UnknownFood(match suggestion {
            Some((food, _)) => format!("'{}' (did you mean '{}'?)", name, food.name),
            None => format!("'{}'", name),
        }))
    }

    /// One page of the items whose raw category equals `category`, ordered
    /// by `field`. Ties keep catalogue order.
    pub fn by_category(
        &self,
        category: &str,
        field: SortField,
        order: SortOrder,
        limit: usize,
        offset: usize,
    ) -> Vec<&FoodItem> {
        let mut matched: Vec<&FoodItem> = self
            .items
            .iter()
            .filter(|f| f.raw_category == category)
            .collect();

        matched.sort_by(|a, b| {
            let ord = field.value(a).total_cmp(&field.value(b));
            match order {
                SortOrder::Asc => ord,
                SortOrder::Desc => ord.reverse(),
            }
        });

        matched.into_iter().skip(offset).take(limit).collect()
    }

    /// Selectable items (positive energy) whose role satisfies `accept`.
    pub fn candidates<F>(&self, accept: F) -> Vec<&FoodItem>
    where
        F: Fn(MealRole) -> bool,
    {
        self.items
            .iter()
            .filter(|f| f.is_selectable() && accept(f.role))
            .collect()
    }

    /// Selectable items with `role`, minus anything already used today.
    pub fn unused_candidates(&self, role: MealRole, used: &HashSet<&str>) -> Vec<&FoodItem> {
        self.items
            .iter()
            .filter(|f| f.is_selectable() && f.role == role && !used.contains(f.name.as_str()))
            .collect()
    }

    /// Item count per meal role.
    pub fn role_counts(&self) -> HashMap<MealRole, usize> {
        let mut counts = HashMap::new();
        for item in &self.items {
            *counts.entry(item.role).or_insert(0) += 1;
        }
        counts
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
