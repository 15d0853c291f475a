pub mod constants;
pub mod meals;
pub mod selection;

pub use constants::*;
pub use meals::{generate_plan, PlannerConfig};
pub use selection::{pick_top_k, portion_for, rice_score, side_dish_score, snack_score};
