use std::io::Write;

use tempfile::Builder;

use diet_recommender::catalog::{FoodCatalog, SortField, SortOrder};
use diet_recommender::error::DietError;
use diet_recommender::models::{FoodItem, MealRole};

fn food(name: &str, category: &str, energy: f64, protein: f64, fat: f64) -> FoodItem {
    FoodItem {
        name: name.to_string(),
        raw_category: category.to_string(),
        energy_kcal: energy,
        carb_g: 20.0,
        protein_g: protein,
        fat_g: fat,
        serving_weight_g: 100.0,
        role: MealRole::SideDish,
    }
}

fn browse_catalog() -> FoodCatalog {
    FoodCatalog::new(vec![
        food("두부조림", "조림류", 120.0, 9.0, 7.0),
        food("장조림", "조림류", 180.0, 20.0, 6.0),
        food("감자조림", "조림류", 95.0, 2.0, 3.0),
        food("연근조림", "조림류", 140.0, 2.5, 1.0),
        food("제육볶음", "볶음류", 250.0, 18.0, 15.0),
    ])
}

fn names(foods: &[&FoodItem]) -> Vec<String> {
    foods.iter().map(|f| f.name.clone()).collect()
}

#[test]
fn test_load_csv_with_dataset_headers() {
    let mut file = Builder::new().suffix(".csv").tempfile().unwrap();
    writeln!(
        file,
        "식품명,식품대분류명,에너지(kcal),탄수화물(g),단백질(g),지방(g),식품중량"
    )
    .unwrap();
    writeln!(file, "쌀밥,밥류,143,31.7,2.6,0.3,210g").unwrap();
    writeln!(file, "배추김치,김치류,18,3.2,1.6,0.5,50").unwrap();
    writeln!(file, "식혜,음료 및 차류,90,21,0.8,0.1,250ml").unwrap();
    writeln!(file, "물,음료 및 차류,0,0,0,0,200ml").unwrap();
    writeln!(file, "불량,밥류,-10,1,1,1,100g").unwrap();
    writeln!(file, "분량없음,밥류,100,1,1,1,1인분").unwrap();
    file.flush().unwrap();

    let catalog = FoodCatalog::from_path(file.path()).unwrap();
    assert_eq!(catalog.len(), 4);

    let rice = catalog.get("쌀밥").unwrap();
    assert_eq!(rice.role, MealRole::Rice);
    assert_eq!(rice.serving_weight_g, 210.0);

    assert_eq!(catalog.get("배추김치").unwrap().role, MealRole::SideDish);
    assert_eq!(catalog.get("식혜").unwrap().serving_weight_g, 250.0);

    // Kept in the catalogue, never offered as a candidate.
    assert!(catalog.get("물").is_some());
    assert!(catalog.candidates(|_| true).iter().all(|f| f.name != "물"));
}

#[test]
fn test_load_json_with_plain_headers() {
    let mut file = Builder::new().suffix(".json").tempfile().unwrap();
    write!(
        file,
        r#"[
            {{"name": "Toast", "category": "샌드위치", "calories": 250,
              "carbs": 30, "protein": 8, "fat": 10, "serving_size": 120}},
            {{"name": "Brunch Plate", "category": "브런치", "calories": 500,
              "carbs": 40, "protein": 20, "fat": 25, "serving_size": "300g"}},
            {{"name": "No Macros", "category": "밥류", "calories": 100}},
            "not a record"
        ]"#
    )
    .unwrap();
    file.flush().unwrap();

    let catalog = FoodCatalog::from_path(file.path()).unwrap();
    assert_eq!(catalog.len(), 2);
    assert_eq!(catalog.get("Toast").unwrap().role, MealRole::Dessert);
    assert_eq!(catalog.get("Brunch Plate").unwrap().role, MealRole::Brunch);

    let counts = catalog.role_counts();
    assert_eq!(counts.get(&MealRole::Dessert), Some(&1));
    assert_eq!(counts.get(&MealRole::Rice), None);
}

#[test]
fn test_missing_file_is_an_error() {
    assert!(FoodCatalog::from_path("/nonexistent/catalog.csv").is_err());
}

#[test]
fn test_browse_category_by_protein_desc() {
    let catalog = browse_catalog();
    let foods = catalog.by_category("조림류", SortField::Protein, SortOrder::Desc, 100, 0);
    assert_eq!(names(&foods), vec!["장조림", "두부조림", "연근조림", "감자조림"]);
}

#[test]
fn test_browse_category_by_calories_asc_paged() {
    let catalog = browse_catalog();
    let page = |n: usize| {
        let offset = (n - 1) * 2;
        names(&catalog.by_category("조림류", SortField::Calories, SortOrder::Asc, 2, offset))
    };
    assert_eq!(page(1), vec!["감자조림", "두부조림"]);
    assert_eq!(page(2), vec!["연근조림", "장조림"]);
    assert!(page(3).is_empty());
}

#[test]
fn test_browse_unknown_category_or_sort_field() {
    let catalog = browse_catalog();
    assert!(catalog
        .by_category("국 및 탕류", SortField::Fat, SortOrder::Desc, 100, 0)
        .is_empty());

    let err = "sugar".parse::<SortField>().unwrap_err();
    assert!(matches!(err, DietError::InvalidInput(_)));
    assert!(err.to_string().contains("sugar"));
}

#[test]
fn test_lookup_by_name() {
    let catalog = browse_catalog();
    assert_eq!(catalog.lookup("제육볶음").unwrap().energy_kcal, 250.0);

    let err = catalog.lookup("Pizza").unwrap_err();
    assert!(matches!(err, DietError::UnknownFood(_)));
}
