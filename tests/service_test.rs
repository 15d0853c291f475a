use rand::rngs::StdRng;
use rand::SeedableRng;
use serde_json::json;

use diet_recommender::catalog::FoodCatalog;
use diet_recommender::error::DietError;
use diet_recommender::models::{FoodItem, MealRole, MealSlot, RawProfile};
use diet_recommender::planner::PlannerConfig;
use diet_recommender::service::DietRecommendationService;

fn food(name: &str, role: MealRole, energy: f64) -> FoodItem {
    FoodItem {
        name: name.to_string(),
        raw_category: String::new(),
        energy_kcal: energy,
        carb_g: 20.0,
        protein_g: 8.0,
        fat_g: 4.0,
        serving_weight_g: 150.0,
        role,
    }
}

fn catalog() -> FoodCatalog {
    let mut items = Vec::new();
    for i in 0..4 {
        items.push(food(&format!("Rice {}", i), MealRole::Rice, 120.0 + i as f64 * 10.0));
        items.push(food(&format!("Side {}", i), MealRole::SideDish, 80.0 + i as f64 * 20.0));
    }
    items.push(food("Cookie", MealRole::Dessert, 450.0));
    items.push(food("Sandwich", MealRole::Brunch, 250.0));
    FoodCatalog::new(items)
}

fn raw(value: serde_json::Value) -> RawProfile {
    serde_json::from_value(value).unwrap()
}

fn reference_profile() -> RawProfile {
    raw(json!({
        "current_weight": 76, "target_weight": 71, "height": 182, "age": 23,
        "gender": "Male", "activity_level": 3, "goal_type": "BulkUp"
    }))
}

#[test]
fn test_reference_profile_full_plan() {
    let catalog = catalog();
    let service = DietRecommendationService::new(&catalog, PlannerConfig::default());
    let mut rng = StdRng::seed_from_u64(42);

    let rec = service.recommend(&reference_profile(), &mut rng).unwrap();
    assert_eq!(rec.user_info.bmi_status.as_str(), "Normal");
    assert_eq!(rec.recommended_diet.len(), 4);

    for (slot, entry) in rec.recommended_diet.iter() {
        assert!(entry.is_available(), "{} unavailable", slot);
        for p in entry.portions() {
            assert!(p.portion > 0.0);
            assert!(p.calories > 0.0);
        }
    }

    let value = serde_json::to_value(&rec).unwrap();
    assert_eq!(value["user_info"]["goal_type"], "BulkUp");
    assert!(value["recommended_diet"]["lunch"]["rice"]["food_name"].is_string());
    assert!(value["recommended_diet"]["snack"]["food_name"].is_string());
}

#[test]
fn test_numeric_strings_accepted() {
    let catalog = catalog();
    let service = DietRecommendationService::new(&catalog, PlannerConfig::default());
    let profile = raw(json!({
        "current_weight": "76", "target_weight": "71.0", "height": "182", "age": "23",
        "gender": "male", "activity_level": "3", "goal_type": "벌크업"
    }));

    let rec = service.recommend(&profile, &mut StdRng::seed_from_u64(1)).unwrap();
    assert_eq!(rec.user_info.age, 23);
}

#[test]
fn test_errors_are_wrapped() {
    let catalog = catalog();
    let service = DietRecommendationService::new(&catalog, PlannerConfig::default());
    let mut rng = StdRng::seed_from_u64(0);

    let missing = raw(json!({
        "current_weight": 76, "target_weight": 71, "height": 182,
        "gender": "Male", "activity_level": 3, "goal_type": "BulkUp"
    }));
    let err = service.recommend(&missing, &mut rng).unwrap_err();
    assert!(matches!(err, DietError::DietComputation(_)));
    assert!(err.to_string().starts_with("diet computation failed"));
    assert!(err.to_string().contains("age"));

    let mut bad_level = reference_profile();
    bad_level.activity_level = Some(json!(5));
    let err = service.recommend(&bad_level, &mut rng).unwrap_err();
    assert!(err.to_string().starts_with("diet computation failed"));

    let mut bad_goal = reference_profile();
    bad_goal.goal_type = Some(json!("Keto"));
    let err = service.recommend(&bad_goal, &mut rng).unwrap_err();
    assert!(err.to_string().contains("Keto"));
}

#[test]
fn test_single_meal_lookup() {
    let catalog = catalog();
    let service = DietRecommendationService::new(&catalog, PlannerConfig::default());
    let mut rng = StdRng::seed_from_u64(5);

    let meal = service
        .recommend_meal(&reference_profile(), "Dinner", &mut rng)
        .unwrap();
    assert_eq!(meal.meal, MealSlot::Dinner);
    assert_eq!(meal.recommended_diet.portions().len(), 2);

    let err = service
        .recommend_meal(&reference_profile(), "dinnr", &mut rng)
        .unwrap_err();
    assert!(matches!(err, DietError::UnknownMeal(_)));
    assert!(err.to_string().contains("did you mean 'dinner'"));
}

#[test]
fn test_empty_catalog_is_not_fatal() {
    let catalog = FoodCatalog::default();
    let service = DietRecommendationService::new(&catalog, PlannerConfig::default());

    let rec = service
        .recommend(&reference_profile(), &mut StdRng::seed_from_u64(0))
        .unwrap();
    assert!(rec.recommended_diet.iter().all(|(_, e)| !e.is_available()));
}
