pub mod catalog;
pub mod cli;
pub mod error;
pub mod interface;
pub mod logging;
pub mod models;
pub mod nutrition;
pub mod planner;
pub mod predict;
pub mod service;

pub use catalog::FoodCatalog;
pub use error::{DietError, Result};
pub use models::{DietPlan, FoodItem, MealEntry, MealSlot, RawProfile, UserProfile};
pub use service::{DietRecommendationService, Recommendation};
