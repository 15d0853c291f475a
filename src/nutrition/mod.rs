pub mod biometrics;
pub mod targets;

pub use biometrics::{
    activity_factor, adjust_tdee_for_bmi, bmi, bmi_status, bmr, tdee, BmiStatus,
    ACTIVITY_FACTORS,
};
pub use targets::{ratios_for, resolve, round2, MacroRatios, NutrientTargets};
