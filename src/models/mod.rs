pub mod food;
pub mod plan;
pub mod profile;

pub use food::{FoodItem, MealRole, RawFoodRecord, ServingSize};
pub use plan::{DietPlan, MealEntry, MealSlot, PortionBreakdown};
pub use profile::{Gender, GoalType, RawProfile, UserProfile};
