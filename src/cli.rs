use clap::{Parser, Subcommand};

use crate::planner::TOP_K;

/// Diet recommender: builds a one-day meal plan from body metrics and a goal.
#[derive(Parser, Debug)]
#[command(name = "diet_recommender")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the food catalogue (CSV, or JSON by extension).
    #[arg(short, long, global = true, default_value = "food_catalog.csv")]
    pub catalog: String,

    /// Seed for the random draw among top candidates.
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Number of best-scoring candidates to draw from.
    #[arg(long, global = true, default_value_t = TOP_K)]
    pub top_k: usize,

    /// Enable debug logging on stderr.
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug, Default)]
pub enum Command {
    /// Recommend a diet for a JSON profile and print the response as JSON.
    Recommend {
        /// Profile JSON, or @path to read it from a file.
        #[arg(short, long)]
        profile: String,

        /// Only return this meal (breakfast, lunch, snack, dinner).
        #[arg(short, long)]
        meal: Option<String>,
    },

    /// Enter a profile interactively and print the plan as a table.
    #[default]
    Interactive,

    /// Show catalogue counts, browse one category, or look up a food.
    Catalog {
        /// Raw category to list, e.g. "밥류".
        #[arg(long)]
        category: Option<String>,

        /// Nutrient to order the listing by: protein, fat or calories.
        #[arg(long, default_value = "protein")]
        sort_by: String,

        /// asc or desc.
        #[arg(long, default_value = "desc")]
        order: String,

        /// Items per page.
        #[arg(long, default_value_t = 100)]
        limit: usize,

        /// 1-based page number.
        #[arg(long, default_value_t = 1)]
        page: usize,

        /// Show every field of one food by exact name.
        #[arg(long, conflicts_with = "category")]
        name: Option<String>,
    },

    /// Estimate days to reach the target weight with a fitted model.
    Predict {
        /// Profile JSON, or @path to read it from a file.
        #[arg(short, long)]
        profile: String,

        /// Path to the model JSON.
        #[arg(long)]
        model: String,

        /// Preferred body part for the one-hot feature.
        #[arg(long)]
        body_part: Option<String>,
    },
}
