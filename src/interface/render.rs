use crate::catalog::FoodCatalog;
use crate::models::{FoodItem, MealEntry, MealRole, PortionBreakdown};
use crate::service::{ProfileSummary, Recommendation};

/// Display the derived figures for a profile.
pub fn display_summary(summary: &ProfileSummary) {
    println!();
    println!("=== Profile ===");
    println!();
    println!(
        "BMI: {:.2} -> {:.2} ({})",
        summary.current_bmi, summary.target_bmi, summary.bmi_status
    );
    println!("BMR: {:.2} -> {:.2} kcal", summary.current_bmr, summary.target_bmr);
    println!("TDEE: {:.2} -> {:.2} kcal", summary.current_tdee, summary.target_tdee);
    println!(
        "Daily targets ({}): C {:.2} g | P {:.2} g | F {:.2} g",
        summary.goal_type, summary.carb_target, summary.protein_target, summary.fat_target
    );
}

fn portion_line(label: &str, p: &PortionBreakdown, width: usize) {
    println!(
        "  {:<7} {:<width$} {:>7.2} g - {:>7.2} kcal | C:{:.2} P:{:.2} F:{:.2}",
        label,
        p.food_name,
        p.portion,
        p.calories,
        p.carb,
        p.protein,
        p.fat,
        width = width
    );
}

/// Display a full recommendation as a table.
pub fn display_recommendation(rec: &Recommendation) {
    display_summary(&rec.user_info);

    println!();
    println!("=== Diet Plan ===");
    println!();

    let width = rec
        .recommended_diet
        .iter()
        .flat_map(|(_, e)| e.portions())
        .map(|p| p.food_name.chars().count())
        .max()
        .unwrap_or(10);

    for (slot, entry) in rec.recommended_diet.iter() {
        println!("[{}]", slot);
        match entry {
            MealEntry::Single(p) => portion_line("", p, width),
            MealEntry::Combo { rice, side_dish } => {
                portion_line("rice", rice, width);
                portion_line("side", side_dish, width);
            }
            MealEntry::Unavailable { message } => println!("  {}", message),
        }
    }

    println!();
    println!("--- Summary ---");
    println!("Total calories: {:.0}", rec.recommended_diet.total_calories());
    println!();
}

/// Display catalogue size and per-role counts.
pub fn display_catalog_summary(catalog: &FoodCatalog) {
    if catalog.is_empty() {
        println!("Catalog: (empty)");
        return;
    }

    let counts = catalog.role_counts();
    let selectable = catalog.candidates(|_| true).len();

    println!();
    println!("=== Catalog ({} items, {} selectable) ===", catalog.len(), selectable);
    println!();
    for role in MealRole::ALL {
        println!("  {:<10} {}", role.as_str(), counts.get(&role).copied().unwrap_or(0));
    }
    println!();
}

/// Display a simple list of foods with their details.
pub fn display_food_list(foods: &[&FoodItem], title: &str) {
    if foods.is_empty() {
        println!("{}: (none)", title);
        return;
    }

    println!();
    println!("=== {} ({} items) ===", title, foods.len());
    println!();

    for food in foods {
        println!(
            "  {} - {} kcal, C:{} P:{} F:{}, {} g",
            food.name,
            food.energy_kcal,
            food.carb_g,
            food.protein_g,
            food.fat_g,
            food.serving_weight_g
        );
    }

    println!();
}

/// Display every field of one food.
pub fn display_food_detail(food: &FoodItem) {
    println!();
    println!("=== {} ===", food.name);
    println!("Category: {} ({})", food.raw_category, food.role);
    println!("Energy: {} kcal", food.energy_kcal);
    println!("Carbohydrate: {} g", food.carb_g);
    println!("Protein: {} g", food.protein_g);
    println!("Fat: {} g", food.fat_g);
    println!("Serving: {} g", food.serving_weight_g);
    println!();
}
