use crate::catalog::get_by_id;

use super::repo_types::{Energy, FoodItem};

pub static FOODS: &[FoodItem] = &[
    FoodItem {
        id: "watermelon",
        name: "Watermelon",
        energy: Energy::Cold,
        benefits: &[
            "Clears heat and relieves thirst",
            "Promotes urination",
            "Relieves summer heat",
        ],
        cautions: &["Avoid in excess during winter", "Not suitable for weak digestion"],
        best_seasons: &["summer"],
        description: "A cooling fruit perfect for hot summer days. Helps balance body heat.",
        recipes: &["Watermelon Juice", "Watermelon Salad", "Watermelon Smoothie"],
    },
    FoodItem {
        id: "ginger",
        name: "Ginger",
        energy: Energy::Warm,
        benefits: &[
            "Warms the stomach",
            "Dispels cold",
            "Improves circulation",
            "Aids digestion",
        ],
        cautions: &["Avoid with heat symptoms", "Use moderately in summer"],
        best_seasons: &["winter", "autumn"],
        description: "A warming root that strengthens digestive fire and circulation.",
        recipes: &["Ginger Tea", "Ginger Chicken Soup", "Ginger Stir-fry"],
    },
    FoodItem {
        id: "rice",
        name: "Rice",
        energy: Energy::Neutral,
        benefits: &["Provides stable energy", "Strengthens spleen", "Easy to digest"],
        cautions: &["None - suitable for all constitutions"],
        best_seasons: &["spring", "summer", "autumn", "winter"],
        description: "A balanced grain suitable for daily consumption by all body types.",
        recipes: &["Congee", "Fried Rice", "Rice Porridge"],
    },
    FoodItem {
        id: "cucumber",
        name: "Cucumber",
        energy: Energy::Cold,
        benefits: &["Clears heat", "Promotes hydration", "Detoxifies"],
        cautions: &["Limit in cold weather", "Not for weak digestion"],
        best_seasons: &["summer"],
        description: "A refreshing vegetable that cools the body and hydrates.",
        recipes: &["Cucumber Salad", "Pickled Cucumber", "Cucumber Soup"],
    },
    FoodItem {
        id: "apple",
        name: "Apple",
        energy: Energy::Neutral,
        benefits: &["Moistens lungs", "Aids digestion", "Reduces cholesterol"],
        cautions: &["Best eaten cooked in winter"],
        best_seasons: &["autumn", "winter"],
        description: "A versatile fruit that nourishes and moistens the body.",
        recipes: &["Baked Apples", "Apple Cider", "Apple Pie"],
    },
    FoodItem {
        id: "spinach",
        name: "Spinach",
        energy: Energy::Cold,
        benefits: &["Nourishes blood", "Moistens dryness", "Promotes bowel movement"],
        cautions: &["Avoid with kidney stones or weak digestion"],
        best_seasons: &["spring"],
        description: "A tender spring green that builds blood and eases dryness.",
        recipes: &["Garlic Spinach", "Spinach Soup"],
    },
    FoodItem {
        id: "green_tea",
        name: "Green Tea",
        energy: Energy::Cold,
        benefits: &["Clears heat", "Aids digestion", "Antioxidant properties"],
        cautions: &["Avoid on empty stomach or with anemia"],
        best_seasons: &["spring"],
        description: "A light, clearing brew for the warming days of spring.",
        recipes: &["Matcha Latte", "Green Tea Rice"],
    },
    FoodItem {
        id: "mint",
        name: "Mint",
        energy: Energy::Cold,
        benefits: &["Disperses wind-heat", "Soothes throat", "Aids digestion"],
        cautions: &["Avoid with cold constitution"],
        best_seasons: &["spring", "summer"],
        description: "An aromatic herb that vents heat and freshens the palate.",
        recipes: &["Mint Tea", "Mint Sauce"],
    },
    FoodItem {
        id: "sweet_potato",
        name: "Sweet Potato",
        energy: Energy::Neutral,
        benefits: &["Tonifies spleen and stomach", "Provides energy"],
        cautions: &["May cause bloating if eaten in excess"],
        best_seasons: &["autumn"],
        description: "A sweet, grounding root that steadies digestion through autumn.",
        recipes: &["Roasted Sweet Potato", "Sweet Potato Soup"],
    },
    FoodItem {
        id: "cinnamon",
        name: "Cinnamon",
        energy: Energy::Warm,
        benefits: &["Warms kidneys", "Improves circulation", "Regulates blood sugar"],
        cautions: &["Avoid with heat symptoms"],
        best_seasons: &["autumn", "winter"],
        description: "A warming bark spice that kindles circulation in the cold months.",
        recipes: &["Cinnamon Tea", "Spiced Apples"],
    },
    FoodItem {
        id: "walnut",
        name: "Walnut",
        energy: Energy::Warm,
        benefits: &["Tonifies kidneys", "Strengthens brain", "Relieves cough"],
        cautions: &["High in calories, eat in moderation"],
        best_seasons: &["winter"],
        description: "A rich winter nut that supports the kidneys and the mind.",
        recipes: &["Walnut Congee", "Honey Walnuts"],
    },
];

pub fn list_foods() -> &'static [FoodItem] {
    FOODS
}

pub fn get_food(id: &str) -> Option<&'static FoodItem> {
    get_by_id(FOODS, id)
}

/// Case-insensitive exact name lookup.
pub fn find_food_by_name(name: &str) -> Option<&'static FoodItem> {
    FOODS.iter().find(|f| f.name.eq_ignore_ascii_case(name))
}

/// Case-insensitive substring match on the name; an empty query matches all.
pub fn search_foods(name: &str) -> Vec<&'static FoodItem> {
    let needle = name.to_lowercase();
    FOODS
        .iter()
        .filter(|f| f.name.to_lowercase().contains(&needle))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn ids_are_unique() {
        let ids: HashSet<_> = FOODS.iter().map(|f| f.id).collect();
        assert_eq!(ids.len(), FOODS.len());
    }

    #[test]
    fn search_is_case_insensitive() {
        let hits: Vec<_> = search_foods("GIN").iter().map(|f| f.id).collect();
        assert_eq!(hits, ["ginger"]);
    }

    #[test]
    fn empty_search_returns_catalog_in_order() {
        let hits: Vec<_> = search_foods("").iter().map(|f| f.id).collect();
        let all: Vec<_> = list_foods().iter().map(|f| f.id).collect();
        assert_eq!(hits, all);
    }

    #[test]
    fn name_lookup_ignores_case() {
        assert_eq!(find_food_by_name("green tea").map(|f| f.id), Some("green_tea"));
        assert!(find_food_by_name("Green").is_none());
    }

    #[test]
    fn get_food_by_id() {
        assert_eq!(get_food("rice").map(|f| f.energy), Some(Energy::Neutral));
        assert!(get_food("Rice").is_none());
    }
}
