pub mod classify;
pub mod loader;
mod store;

pub use classify::{classify, ClassificationRule, CLASSIFICATION_RULES};
pub use loader::{load, load_foods, parse_serving_weight, read_records};
pub use store::{FoodCatalog, SortField, SortOrder};
