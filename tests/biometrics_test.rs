use assert_float_eq::assert_f64_near;

use diet_recommender::error::DietError;
use diet_recommender::models::{Gender, GoalType};
use diet_recommender::nutrition::{
    adjust_tdee_for_bmi, bmi, bmi_status, bmr, resolve, round2, tdee, BmiStatus,
    NutrientTargets,
};

#[test]
fn test_bmr_increases_with_weight() {
    for gender in [Gender::Male, Gender::Female] {
        let light = bmr(60.0, 170.0, 30, gender);
        let heavy = bmr(61.0, 170.0, 30, gender);
        assert!(heavy > light);
    }
}

#[test]
fn test_bmr_increases_with_height_and_falls_with_age() {
    for gender in [Gender::Male, Gender::Female] {
        for (w, h, a) in [(50.0, 150.0, 18), (76.0, 182.0, 23), (110.0, 195.0, 70)] {
            let base = bmr(w, h, a, gender);
            assert!(bmr(w, h + 1.0, a, gender) > base, "{gender} height");
            assert!(bmr(w, h, a + 1, gender) < base, "{gender} age");
        }
    }
}

#[test]
fn test_tdee_factors() {
    assert_f64_near!(tdee(1000.0, 1).unwrap(), 1200.0);
    assert_f64_near!(tdee(1000.0, 2).unwrap(), 1375.0);
    assert_f64_near!(tdee(1000.0, 3).unwrap(), 1550.0);
    assert_f64_near!(tdee(1000.0, 4).unwrap(), 1725.0);
}

#[test]
fn test_activity_level_out_of_range() {
    for level in [0, 5, -1] {
        assert!(matches!(tdee(1500.0, level), Err(DietError::InvalidInput(_))));
    }
}

#[test]
fn test_bmi_band_boundaries() {
    assert_eq!(bmi_status(18.49), BmiStatus::Underweight);
    assert_eq!(bmi_status(18.5), BmiStatus::Normal);
    assert_eq!(bmi_status(22.99), BmiStatus::Normal);
    assert_eq!(bmi_status(23.0), BmiStatus::Overweight);
    assert_eq!(bmi_status(25.0), BmiStatus::Obese);

    let (status, value) = bmi(76.0, 182.0);
    assert_eq!(status, BmiStatus::Normal);
    assert_eq!(round2(value), 22.94);
}

#[test]
fn test_bmi_band_adjusts_tdee() {
    assert_f64_near!(adjust_tdee_for_bmi(2000.0, BmiStatus::Underweight), 2200.0);
    assert_f64_near!(adjust_tdee_for_bmi(2000.0, BmiStatus::Normal), 2000.0);
    assert_f64_near!(adjust_tdee_for_bmi(2000.0, BmiStatus::Overweight), 1800.0);
    assert_f64_near!(adjust_tdee_for_bmi(2000.0, BmiStatus::Obese), 1600.0);
}

#[test]
fn test_macro_targets_per_goal() {
    let t = NutrientTargets::resolve(2000.0, GoalType::LowFatHighProtein);
    assert_f64_near!(t.carb_g, 200.0);
    assert_f64_near!(t.protein_g, 200.0);
    assert_f64_near!(t.fat_g, 2000.0 * 0.2 / 9.0);

    let t = resolve(2000.0, "균형 식단").unwrap();
    assert_f64_near!(t.carb_g, 250.0);
    assert_f64_near!(t.protein_g, 150.0);
}

#[test]
fn test_unknown_goal_label() {
    let err = resolve(2000.0, "Keto").unwrap_err();
    assert!(matches!(err, DietError::InvalidGoalType(ref g) if g == "Keto"));
}
