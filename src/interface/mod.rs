pub mod prompts;
pub mod render;

pub use prompts::{
    collect_profile, prompt_activity_level, prompt_age, prompt_gender, prompt_goal_type,
    prompt_positive, prompt_yes_no,
};
pub use render::{
    display_catalog_summary, display_food_detail, display_food_list, display_recommendation,
    display_summary,
};
