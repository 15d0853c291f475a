use crate::models::MealRole;

/// A classification rule: any of `needles` appearing in the raw category
/// label assigns `role`.
#[derive(Debug, Clone, Copy)]
pub struct ClassificationRule {
    pub role: MealRole,
    pub needles: &'static [&'static str],
}

impl ClassificationRule {
    pub fn matches(&self, raw_category: &str) -> bool {
        self.needles.iter().any(|n| raw_category.contains(n))
    }
}

/// Ordered rule list. First match wins, so "샌드위치" resolves to Dessert
/// even though the Brunch rule also names it.
pub const CLASSIFICATION_RULES: &[ClassificationRule] = &[
    ClassificationRule {
        role: MealRole::Rice,
        needles: &["밥류", "면 및 만두류"],
    },
    ClassificationRule {
        role: MealRole::Soup,
        needles: &["국 및 탕류", "찌개 및 전골류"],
    },
    ClassificationRule {
        role: MealRole::SideDish,
        needles: &[
            "전·적 및 부침류",
            "조림류",
            "나물·숙채류",
            "튀김류",
            "구이류",
            "장류",
            "양념류",
            "찜류",
            "볶음류",
            "생채·무침류",
            "젓갈류",
            "김치류",
            "장아찌·절임류",
        ],
    },
    ClassificationRule {
        role: MealRole::Dessert,
        needles: &[
            "빵 및 과자류",
            "음료 및 차류",
            "유제품류 및 빙과류",
            "샌드위치",
            "곡류, 서류 제품",
        ],
    },
    ClassificationRule {
        role: MealRole::Brunch,
        needles: &["브런치", "샌드위치"],
    },
];

/// Classify a raw category label into its meal role.
pub fn classify(raw_category: &str) -> MealRole {
    CLASSIFICATION_RULES
        .iter()
        .find(|rule| rule.matches(raw_category))
        .map(|rule| rule.role)
        .unwrap_or(MealRole::Other)
}
