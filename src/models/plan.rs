use std::fmt;
use std::str::FromStr;

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use strsim::jaro_winkler;

use crate::error::{DietError, Result};

/// A meal of the day, in plan order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MealSlot {
    Breakfast,
    Lunch,
    Snack,
    Dinner,
}

impl MealSlot {
    pub const ALL: [MealSlot; 4] = [
        MealSlot::Breakfast,
        MealSlot::Lunch,
        MealSlot::Snack,
        MealSlot::Dinner,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MealSlot::Breakfast => "breakfast",
            MealSlot::Lunch => "lunch",
            MealSlot::Snack => "snack",
            MealSlot::Dinner => "dinner",
        }
    }

    pub fn is_snack(&self) -> bool {
        matches!(self, MealSlot::Snack)
    }

    /// Closest slot name for a misspelled input, if any is reasonably close.
    pub fn suggest(input: &str) -> Option<MealSlot> {
        let needle = input.trim().to_lowercase();
        MealSlot::ALL
            .into_iter()
            .map(|slot| (slot, jaro_winkler(slot.as_str(), &needle)))
            .filter(|(_, score)| *score > 0.7)
            .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
            .map(|(slot, _)| slot)
    }
}

impl FromStr for MealSlot {
    type Err = DietError;

    fn from_str(s: &str) -> Result<Self> {
        let needle = s.trim().to_lowercase();
        if let Some(slot) = MealSlot::ALL.into_iter().find(|m| m.as_str() == needle) {
            return Ok(slot);
        }

        let msg = match MealSlot::suggest(s) {
            Some(slot) => format!("'{}' (did you mean '{}'?)", s, slot),
            None => format!("'{}'", s),
        };
        Err(DietError::UnknownMeal(msg))
    }
}

impl Serialize for MealSlot {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl fmt::Display for MealSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One chosen food scaled to its portion.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PortionBreakdown {
    pub food_name: String,
    /// Grams.
    pub portion: f64,
    pub carb: f64,
    pub protein: f64,
    pub fat: f64,
    pub calories: f64,
}

/// Result for one meal slot.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum MealEntry {
    Single(PortionBreakdown),
    Combo {
        rice: PortionBreakdown,
        side_dish: PortionBreakdown,
    },
    Unavailable {
        message: String,
    },
}

impl MealEntry {
    pub fn unavailable(message: impl Into<String>) -> Self {
        MealEntry::Unavailable {
            message: message.into(),
        }
    }

    pub fn is_available(&self) -> bool {
        !matches!(self, MealEntry::Unavailable { .. })
    }

    /// Portions making up this entry.
    pub fn portions(&self) -> Vec<&PortionBreakdown> {
        match self {
            MealEntry::Single(p) => vec![p],
            MealEntry::Combo { rice, side_dish } => vec![rice, side_dish],
            MealEntry::Unavailable { .. } => Vec::new(),
        }
    }
}

/// A full day's plan. Serializes as a JSON object keyed by meal name in
/// slot order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DietPlan {
    entries: Vec<(MealSlot, MealEntry)>,
}

impl DietPlan {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, slot: MealSlot, entry: MealEntry) {
        self.entries.push((slot, entry));
    }

    pub fn get(&self, slot: MealSlot) -> Option<&MealEntry> {
        self.entries
            .iter()
            .find(|(s, _)| *s == slot)
            .map(|(_, entry)| entry)
    }

    pub fn iter(&self) -> impl Iterator<Item = (MealSlot, &MealEntry)> {
        self.entries.iter().map(|(slot, entry)| (*slot, entry))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Calories across every selected portion.
    pub fn total_calories(&self) -> f64 {
        self.entries
            .iter()
            .flat_map(|(_, entry)| entry.portions())
            .map(|p| p.calories)
            .sum()
    }
}

impl Serialize for DietPlan {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (slot, entry) in &self.entries {
            map.serialize_entry(slot.as_str(), entry)?;
        }
        map.end()
    }
}
