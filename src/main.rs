use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use std::fs;
use std::path::Path;
use tracing::warn;

use diet_recommender::catalog::{FoodCatalog, SortField, SortOrder};
use diet_recommender::cli::{Cli, Command};
use diet_recommender::error::Result;
use diet_recommender::interface::{
    collect_profile, display_catalog_summary, display_food_detail, display_food_list,
    display_recommendation, prompt_yes_no,
};
use diet_recommender::logging;
use diet_recommender::models::{RawProfile, UserProfile};
use diet_recommender::planner::PlannerConfig;
use diet_recommender::predict::{estimate_days, LinearDurationModel, PredictionFeatures};
use diet_recommender::service::{summarize, DietRecommendationService};

fn main() {
    let mut cli = Cli::parse();
    logging::init(cli.verbose);

    let command = cli.command.take().unwrap_or_default();
    // Machine-facing commands report errors as JSON on stdout.
    let json_mode = matches!(command, Command::Recommend { .. } | Command::Predict { .. });

    if let Err(e) = run(&cli, command) {
        if json_mode {
            println!("{}", serde_json::json!({ "error": e.to_string() }));
        } else {
            eprintln!("Error: {}", e);
        }
        std::process::exit(1);
    }
}

fn run(cli: &Cli, command: Command) -> Result<()> {
    match command {
        Command::Recommend { profile, meal } => cmd_recommend(cli, &profile, meal.as_deref()),
        Command::Interactive => cmd_interactive(cli),
        Command::Catalog {
            category,
            sort_by,
            order,
            limit,
            page,
            name,
        } => match (name, category) {
            (Some(name), _) => cmd_food_detail(&cli.catalog, &name),
            (None, Some(category)) => {
                cmd_browse(&cli.catalog, &category, &sort_by, &order, limit, page)
            }
            (None, None) => cmd_catalog(&cli.catalog),
        },
        Command::Predict {
            profile,
            model,
            body_part,
        } => cmd_predict(&profile, &model, body_part.as_deref()),
    }
}

fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// Read a profile argument: inline JSON, or `@path` to a JSON file.
fn read_profile(arg: &str) -> Result<RawProfile> {
    let content = match arg.strip_prefix('@') {
        Some(path) => fs::read_to_string(path)?,
        None => arg.to_string(),
    };
    Ok(serde_json::from_str(&content)?)
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn load_catalog(path: &str) -> Result<FoodCatalog> {
    let catalog = FoodCatalog::from_path(path)?;
    if catalog.is_empty() {
        warn!(path, "catalog is empty; every meal will be unavailable");
    }
    Ok(catalog)
}

/// Produce the JSON recommendation for one profile.
fn cmd_recommend(cli: &Cli, profile_arg: &str, meal: Option<&str>) -> Result<()> {
    let raw = read_profile(profile_arg)?;
    let catalog = load_catalog(&cli.catalog)?;
    let service = DietRecommendationService::new(&catalog, PlannerConfig { top_k: cli.top_k });
    let mut rng = make_rng(cli.seed);

    match meal {
        Some(meal) => print_json(&service.recommend_meal(&raw, meal, &mut rng)?),
        None => print_json(&service.recommend(&raw, &mut rng)?),
    }
}

/// Prompt for a profile and show the plan as a table.
fn cmd_interactive(cli: &Cli) -> Result<()> {
    let path = Path::new(&cli.catalog);
    if !path.exists() {
        eprintln!("Food catalog not found: {}", cli.catalog);
        eprintln!("Pass --catalog <path> to a CSV or JSON catalog.");
        return Ok(());
    }

    let catalog = load_catalog(&cli.catalog)?;
    println!("Loaded {} foods", catalog.len());
    println!();

    let profile = collect_profile()?;
    let service = DietRecommendationService::new(&catalog, PlannerConfig { top_k: cli.top_k });
    let mut rng = make_rng(cli.seed);

    loop {
        let rec = service.recommend_profile(&profile, &mut rng)?;
        display_recommendation(&rec);

        if !prompt_yes_no("Draw another plan?", false)? {
            break;
        }
    }

    Ok(())
}

fn cmd_catalog(path: &str) -> Result<()> {
    let catalog = load_catalog(path)?;
    display_catalog_summary(&catalog);
    Ok(())
}

/// List one raw category, ordered by a nutrient, one page at a time.
fn cmd_browse(
    path: &str,
    category: &str,
    sort_by: &str,
    order: &str,
    limit: usize,
    page: usize,
) -> Result<()> {
    let field: SortField = sort_by.parse()?;
    let order = SortOrder::from_label(order);
    let offset = page.saturating_sub(1) * limit;

    let catalog = load_catalog(path)?;
    let foods = catalog.by_category(category, field, order, limit, offset);
    if foods.is_empty() {
        println!("No foods found for category '{}' on page {}", category, page.max(1));
        return Ok(());
    }

    display_food_list(&foods, category);
    Ok(())
}

fn cmd_food_detail(path: &str, name: &str) -> Result<()> {
    let catalog = load_catalog(path)?;
    display_food_detail(catalog.lookup(name)?);
    Ok(())
}

/// Estimate days to reach the target weight.
fn cmd_predict(profile_arg: &str, model_path: &str, body_part: Option<&str>) -> Result<()> {
    let raw = read_profile(profile_arg)?;
    let profile = UserProfile::try_from(&raw)?;
    let summary = summarize(&profile)?;

    let body_part = body_part.or(profile.preferred_body_part.as_deref());
    let features = PredictionFeatures::from_summary(&summary, body_part);

    let model = LinearDurationModel::from_path(model_path)?;
    let estimate = estimate_days(&model, &model.scaler, &features)?;
    print_json(&estimate)
}
