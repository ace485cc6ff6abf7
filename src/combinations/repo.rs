use crate::catalog::get_by_id;

use super::repo_types::{Combination, Rating, Recipe, RecipeType, Scenario, Severity};

/// Id of the all-cooling scenario; its health tip is replaced when the notes
/// describe a cold constitution.
pub const COOLING_DISASTER_ID: &str = "scenario_2";

const fn good(ingredients: &'static [&'static str], reason: &'static str) -> Combination {
    Combination {
        ingredients,
        reason,
        alternative: None,
        severity: Some(Severity::Mild),
    }
}

const fn bad(
    ingredients: &'static [&'static str],
    reason: &'static str,
    alternative: &'static str,
    severity: Severity,
) -> Combination {
    Combination {
        ingredients,
        reason,
        alternative: Some(alternative),
        severity: Some(severity),
    }
}

const fn neutral(ingredients: &'static [&'static str], reason: &'static str) -> Combination {
    Combination {
        ingredients,
        reason,
        alternative: None,
        severity: None,
    }
}

pub static SCENARIOS: &[Scenario] = &[
    Scenario {
        id: "scenario_1",
        name: "Warming Winter Combo",
        ingredients: &["Lamb", "Ginger", "Black Pepper", "Carrots", "Onions", "Garlic", "Rice Wine"],
        good: &[
            good(
                &["Lamb", "Ginger"],
                "Lamb is warming and ginger enhances its therapeutic properties while aiding digestion",
            ),
            good(
                &["Black Pepper", "Lamb"],
                "Black pepper helps reduce the gamey smell and adds warming properties",
            ),
            good(&["Carrots", "Lamb"], "Carrots balance the heavy nature of lamb and add sweetness"),
            good(
                &["Garlic", "Ginger", "Onions"],
                "Trinity of aromatics that boost immunity and circulation",
            ),
        ],
        bad: &[],
        neutral: &[neutral(
            &["Rice Wine", "Lamb"],
            "Can be used in moderation for flavor, but avoid excess as both are very warming",
        )],
        toxic: false,
        rating: Rating::Excellent,
        health_tip: "Perfect combination for winter! These warming ingredients strengthen yang energy and boost circulation.",
    },
    Scenario {
        id: COOLING_DISASTER_ID,
        name: "Summer Cooling Disaster",
        ingredients: &["Watermelon", "Ice Cream", "Cucumber", "Green Tea", "Raw Salad", "Cold Beer"],
        good: &[good(
            &["Cucumber", "Watermelon"],
            "Both cooling foods that help with summer heat relief",
        )],
        bad: &[
            bad(
                &["Ice Cream", "Watermelon"],
                "Too much cold can damage spleen and stomach qi, causing diarrhea",
                "Have ice cream at least 2 hours apart from watermelon",
                Severity::Moderate,
            ),
            bad(
                &["Cold Beer", "Raw Salad"],
                "Excessive cold and raw foods weaken digestive fire",
                "Try room temperature drinks or add cooked vegetables",
                Severity::Moderate,
            ),
            bad(
                &["Green Tea", "Ice Cream"],
                "Cold dairy with tea can cause indigestion and bloating",
                "Drink tea 1 hour before or after dairy",
                Severity::Mild,
            ),
        ],
        neutral: &[],
        toxic: false,
        rating: Rating::Caution,
        health_tip: "Warning: Too many cooling foods! This can weaken your digestive system. Add some warm ingredients like ginger or eat cooked foods.",
    },
    Scenario {
        id: "scenario_3",
        name: "Dangerous Seafood Combo",
        ingredients: &["Crab", "Persimmon", "Beer", "Ice", "Lemon"],
        good: &[],
        bad: &[
            bad(
                &["Crab", "Persimmon"],
                "DANGEROUS: Can cause severe food poisoning, stomach pain, and diarrhea",
                "Never eat these together! Wait at least 4 hours between consumption",
                Severity::Severe,
            ),
            bad(
                &["Crab", "Beer", "Ice"],
                "Triple cold combination can cause severe stomach cramps and gout",
                "Eat crab with warm ginger tea instead",
                Severity::Moderate,
            ),
            bad(
                &["Crab", "High-dose Lemon"],
                "Excessive vitamin C with shellfish may form arsenic compounds",
                "Use small amounts of lemon for flavor only",
                Severity::Moderate,
            ),
        ],
        neutral: &[],
        toxic: true,
        rating: Rating::Avoid,
        health_tip: "TOXIC ALERT! This combination contains dangerous pairings that can cause food poisoning. Separate these ingredients!",
    },
    Scenario {
        id: "scenario_4",
        name: "Balanced Nutritious Meal",
        ingredients: &["Chicken", "Broccoli", "Brown Rice", "Mushrooms", "Goji Berries", "Sesame Oil"],
        good: &[
            good(&["Chicken", "Mushrooms"], "Excellent protein combination that boosts immunity"),
            good(&["Broccoli", "Sesame Oil"], "Oil helps absorption of fat-soluble vitamins in broccoli"),
            good(&["Brown Rice", "Chicken"], "Complete protein with sustained energy from whole grains"),
            good(&["Goji Berries", "Chicken"], "Traditional pairing that nourishes blood and improves vision"),
        ],
        bad: &[],
        neutral: &[neutral(
            &["Mushrooms", "Brown Rice"],
            "No special interaction, both are nutritious and complementary",
        )],
        toxic: false,
        rating: Rating::Excellent,
        health_tip: "Excellent balance! This combination provides complete nutrition and follows TCM principles perfectly.",
    },
    Scenario {
        id: "scenario_5",
        name: "Pregnancy Special Care",
        ingredients: &["Papaya", "Pineapple", "Crab", "Aloe Vera", "Raw Fish"],
        good: &[],
        bad: &[
            bad(
                &["Papaya", "Pregnancy"],
                "Unripe papaya contains latex that can trigger contractions",
                "Choose fully ripe papaya in small amounts or avoid entirely",
                Severity::Severe,
            ),
            bad(
                &["Crab", "Pregnancy"],
                "Very cooling nature can affect fetal development in TCM theory",
                "Replace with warming proteins like chicken or beef",
                Severity::Moderate,
            ),
            bad(
                &["Raw Fish", "Pregnancy"],
                "Risk of parasites and mercury exposure",
                "Choose cooked fish low in mercury like salmon",
                Severity::Severe,
            ),
            bad(
                &["Aloe Vera", "Pregnancy"],
                "Can stimulate uterine contractions",
                "Use topically only, avoid internal consumption",
                Severity::Severe,
            ),
        ],
        neutral: &[],
        toxic: true,
        rating: Rating::Avoid,
        health_tip: "PREGNANCY WARNING: These ingredients should be avoided during pregnancy. Consult your healthcare provider.",
    },
    Scenario {
        id: "scenario_6",
        name: "Digestive Harmony",
        ingredients: &["Pumpkin", "Millet", "Chinese Yam", "Red Dates", "Honey", "Cinnamon"],
        good: &[
            good(
                &["Pumpkin", "Millet"],
                "Both strengthen spleen and stomach, excellent for digestive health",
            ),
            good(&["Chinese Yam", "Red Dates"], "Classic combination that nourishes qi and blood"),
            good(&["Honey", "Cinnamon"], "Warming combo that aids digestion and metabolism"),
            good(&["Pumpkin", "Chinese Yam"], "Both are sweet and neutral, perfect for weak digestion"),
        ],
        bad: &[],
        neutral: &[],
        toxic: false,
        rating: Rating::Excellent,
        health_tip: "Perfect for digestive health! This combination strengthens the spleen and stomach qi.",
    },
    Scenario {
        id: "scenario_7",
        name: "Iron Absorption Conflict",
        ingredients: &["Spinach", "Tofu", "Black Tea", "Beef", "Tomatoes", "Dairy Milk"],
        good: &[
            good(&["Spinach", "Tomatoes"], "Vitamin C in tomatoes enhances iron absorption from spinach"),
            good(&["Beef", "Tomatoes"], "Classic combination that aids iron absorption and adds flavor"),
        ],
        bad: &[
            bad(
                &["Spinach", "Tofu"],
                "Oxalates in spinach can bind with calcium in tofu, reducing absorption",
                "Blanch spinach first to reduce oxalates",
                Severity::Mild,
            ),
            bad(
                &["Black Tea", "Spinach"],
                "Tannins in tea significantly reduce iron absorption",
                "Drink tea 1-2 hours after eating iron-rich foods",
                Severity::Moderate,
            ),
            bad(
                &["Dairy Milk", "Spinach"],
                "Calcium competes with iron absorption",
                "Separate dairy and iron-rich meals by 2 hours",
                Severity::Mild,
            ),
        ],
        neutral: &[],
        toxic: false,
        rating: Rating::Caution,
        health_tip: "Mixed results: Some good combinations but watch out for iron absorption blockers.",
    },
    Scenario {
        id: "scenario_8",
        name: "Sweet Potato Mistakes",
        ingredients: &["Sweet Potato", "Eggs", "Persimmon", "Banana", "Sugar"],
        good: &[good(
            &["Sweet Potato", "Eggs"],
            "Balanced protein and complex carbs for sustained energy",
        )],
        bad: &[
            bad(
                &["Sweet Potato", "Persimmon"],
                "Can cause stomach stones due to chemical reaction",
                "Eat these at least 4 hours apart",
                Severity::Severe,
            ),
            bad(
                &["Sweet Potato", "Sugar"],
                "Too much sweetness can cause acid reflux and bloating",
                "Sweet potato is naturally sweet, skip added sugar",
                Severity::Mild,
            ),
            bad(
                &["Sweet Potato", "Banana"],
                "Both are heavy and can cause bloating when combined",
                "Eat separately as snacks",
                Severity::Mild,
            ),
        ],
        neutral: &[],
        toxic: false,
        rating: Rating::Caution,
        health_tip: "Be careful with sweet potato combinations - some can cause digestive issues.",
    },
];

pub static RECIPES: &[Recipe] = &[
    Recipe {
        id: "lamb-stew",
        name: "Winter Warming Lamb Stew",
        emoji: "🍲",
        kind: RecipeType::NonToxic,
        category: "Warming",
        description: "A deeply nourishing stew perfect for cold weather and strengthening yang energy",
        prep_time: "20 mins",
        cook_time: "2 hours",
        servings: 6,
        ingredients: &[
            "1kg lamb shoulder, cubed",
            "3 inches fresh ginger, sliced",
            "6 cloves garlic, minced",
            "2 onions, chunked",
            "4 carrots, chunked",
            "2 tbsp black pepper",
            "4 cups bone broth",
            "Fresh rosemary",
            "Salt to taste",
        ],
        steps: &[
            "Brown lamb pieces in a heavy pot until well-seared on all sides",
            "Remove lamb and sauté ginger, garlic, and onions until fragrant",
            "Return lamb to pot with black pepper and stir for 2 minutes",
            "Add bone broth, bring to boil then reduce to simmer",
            "Add carrots and rosemary, simmer for 1.5 hours until lamb is tender",
            "Season with salt and serve hot with crusty bread",
            "Best enjoyed on cold evenings to warm the body",
        ],
        nutrition_tips: &[
            "Lamb strengthens kidney yang and warms the body",
            "Ginger aids digestion of the rich meat",
            "Black pepper enhances circulation",
        ],
    },
    Recipe {
        id: "cooling-soup",
        name: "Summer Heat Relief Soup",
        emoji: "🥣",
        kind: RecipeType::NonToxic,
        category: "Cooling",
        description: "A refreshing soup to clear summer heat and hydrate the body",
        prep_time: "15 mins",
        cook_time: "30 mins",
        servings: 4,
        ingredients: &[
            "1 winter melon (500g), cubed",
            "200g mung beans, soaked",
            "100g lotus seeds",
            "50g lily bulbs",
            "8 cups water",
            "Rock sugar to taste",
            "Fresh mint for garnish",
        ],
        steps: &[
            "Soak mung beans for 2 hours, lotus seeds for 30 minutes",
            "Bring water to boil, add mung beans and cook for 15 minutes",
            "Add winter melon, lotus seeds, and lily bulbs",
            "Simmer for 20 minutes until everything is tender",
            "Add rock sugar to taste",
            "Serve chilled or at room temperature with fresh mint",
            "Perfect for hot summer days",
        ],
        nutrition_tips: &[
            "Winter melon clears heat and promotes urination",
            "Mung beans detoxify and cool the body",
            "Lotus seeds calm the mind",
        ],
    },
    Recipe {
        id: "balanced-bowl",
        name: "Five Element Balance Bowl",
        emoji: "🍱",
        kind: RecipeType::NonToxic,
        category: "Balanced",
        description: "A perfectly balanced meal following TCM five element theory",
        prep_time: "25 mins",
        cook_time: "35 mins",
        servings: 2,
        ingredients: &[
            "300g organic chicken breast",
            "1 cup quinoa",
            "2 cups mixed vegetables (broccoli, carrots, purple cabbage)",
            "1/4 cup goji berries",
            "2 tbsp sesame seeds",
            "Tamari sauce",
            "Ginger-garlic paste",
            "Sesame oil",
        ],
        steps: &[
            "Cook quinoa according to package directions",
            "Marinate chicken with ginger-garlic paste and tamari",
            "Steam vegetables until tender-crisp (5-7 minutes)",
            "Pan-sear chicken until golden and cooked through",
            "Slice chicken and arrange over quinoa",
            "Top with steamed vegetables and goji berries",
            "Drizzle with sesame oil and sprinkle sesame seeds",
            "Serve warm for optimal digestion",
        ],
        nutrition_tips: &[
            "Contains all five elements for balance",
            "Complete protein from chicken and quinoa",
            "Goji berries nourish liver and kidneys",
        ],
    },
    Recipe {
        id: "digestive-congee",
        name: "Healing Digestive Congee",
        emoji: "🍚",
        kind: RecipeType::NonToxic,
        category: "Digestive",
        description: "Easy-to-digest rice porridge that strengthens spleen and stomach",
        prep_time: "10 mins",
        cook_time: "1.5 hours",
        servings: 4,
        ingredients: &[
            "1 cup white rice",
            "8 cups water or chicken broth",
            "200g pumpkin, diced",
            "50g Chinese yam, diced",
            "6 red dates, pitted",
            "1 tbsp goji berries",
            "Fresh ginger, 2 slices",
            "Salt to taste",
        ],
        steps: &[
            "Rinse rice and add to pot with water/broth",
            "Bring to boil, then reduce to lowest simmer",
            "Cook for 1 hour, stirring occasionally",
            "Add pumpkin, Chinese yam, and ginger",
            "Continue cooking for 20 minutes",
            "Add red dates and goji berries in last 10 minutes",
            "Season with salt and serve warm",
            "Eat for breakfast to strengthen digestion all day",
        ],
        nutrition_tips: &[
            "Rice congee is the easiest food to digest",
            "Pumpkin and yam strengthen spleen qi",
            "Red dates nourish blood",
        ],
    },
    Recipe {
        id: "safe-seafood",
        name: "Ginger-Scallion Safe Seafood",
        emoji: "🦐",
        kind: RecipeType::Toxic,
        category: "Seafood Safety",
        description: "Safe way to enjoy seafood without harmful combinations",
        prep_time: "15 mins",
        cook_time: "15 mins",
        servings: 4,
        ingredients: &[
            "500g fresh shrimp or white fish",
            "4 inches ginger, julienned",
            "6 scallions, cut into segments",
            "NO persimmons, NO excess vitamin C",
            "2 tbsp rice wine",
            "Light soy sauce",
            "1 tbsp cornstarch",
            "Neutral oil for cooking",
        ],
        steps: &[
            "Clean seafood thoroughly and pat dry",
            "Toss with cornstarch and a pinch of salt",
            "Heat wok until smoking, add oil",
            "Stir-fry ginger and scallions until fragrant",
            "Add seafood and stir-fry quickly (2-3 minutes)",
            "Splash with rice wine and soy sauce",
            "Serve immediately with steamed rice",
            "Always pair seafood with warming ginger",
        ],
        nutrition_tips: &[
            "Ginger neutralizes the cold nature of seafood",
            "Scallions prevent seafood allergies",
            "Rice wine aids digestion",
        ],
    },
    Recipe {
        id: "pregnancy-safe",
        name: "Pregnancy Nourishing Soup",
        emoji: "🤰",
        kind: RecipeType::Toxic,
        category: "Pregnancy Safe",
        description: "Specially designed for pregnant women avoiding harmful foods",
        prep_time: "20 mins",
        cook_time: "1 hour",
        servings: 4,
        ingredients: &[
            "300g lean pork or chicken",
            "1 cup black beans, soaked",
            "2 corn cobs, cut into rounds",
            "10 red dates",
            "2 slices ginger",
            "NO papaya, NO crab, NO raw foods",
            "6 cups water",
            "Salt to taste",
        ],
        steps: &[
            "Blanch meat to remove impurities",
            "Add all ingredients to pot with water",
            "Bring to boil then simmer for 45 minutes",
            "Remove foam regularly for clear soup",
            "Season lightly with salt",
            "Serve warm, not hot or cold",
            "Excellent for morning sickness and energy",
        ],
        nutrition_tips: &[
            "Black beans strengthen kidneys for fetal development",
            "Red dates nourish blood",
            "Corn provides gentle energy",
        ],
    },
    Recipe {
        id: "iron-boost",
        name: "Iron Absorption Maximizer",
        emoji: "💪",
        kind: RecipeType::Toxic,
        category: "Iron Rich",
        description: "Optimized for maximum iron absorption avoiding blockers",
        prep_time: "15 mins",
        cook_time: "20 mins",
        servings: 2,
        ingredients: &[
            "200g grass-fed beef, sliced",
            "2 cups spinach, blanched",
            "1 bell pepper (vitamin C)",
            "2 tomatoes",
            "NO tea, NO dairy during meal",
            "Garlic and onions",
            "Olive oil",
            "Lemon juice",
        ],
        steps: &[
            "Blanch spinach quickly to reduce oxalates",
            "Sauté garlic and onions in olive oil",
            "Add beef and sear until browned",
            "Add bell peppers and tomatoes",
            "Add blanched spinach at the end",
            "Finish with fresh lemon juice",
            "Serve immediately",
            "Wait 2 hours before having tea or dairy",
        ],
        nutrition_tips: &[
            "Vitamin C enhances iron absorption by 300%",
            "Blanching reduces anti-nutrients",
            "Timing matters for iron absorption",
        ],
    },
    Recipe {
        id: "anti-toxic",
        name: "Detox Green Smoothie Bowl",
        emoji: "🥤",
        kind: RecipeType::Toxic,
        category: "Detox",
        description: "Gentle detox avoiding harsh combinations",
        prep_time: "10 mins",
        cook_time: "0 mins",
        servings: 1,
        ingredients: &[
            "1 cup spinach (blanched and cooled)",
            "1/2 avocado",
            "1 green apple",
            "1 cup coconut water",
            "1 tbsp chia seeds",
            "Fresh mint",
            "NO raw spinach with dairy",
            "1 tsp spirulina (optional)",
        ],
        steps: &[
            "Blanch spinach for 30 seconds, cool immediately",
            "Blend spinach, avocado, apple with coconut water",
            "Pour into bowl",
            "Top with chia seeds and mint",
            "Add spirulina if desired",
            "Consume immediately for best nutrition",
            "Best enjoyed mid-morning",
        ],
        nutrition_tips: &[
            "Blanched spinach is easier to digest",
            "Avocado provides healthy fats for absorption",
            "Chia seeds add fiber and omega-3",
        ],
    },
];

pub static HEALTH_CONDITIONS: &[&str] = &[
    "Cold constitution",
    "Heat constitution",
    "Digestive issues",
    "Poor circulation",
    "Insomnia",
    "Fatigue",
    "Allergies",
    "High blood pressure",
];

pub fn list_recipes() -> &'static [Recipe] {
    RECIPES
}

pub fn get_recipe(id: &str) -> Option<&'static Recipe> {
    get_by_id(RECIPES, id)
}

pub fn list_scenarios() -> &'static [Scenario] {
    SCENARIOS
}

pub fn get_scenario(id: &str) -> Option<&'static Scenario> {
    get_by_id(SCENARIOS, id)
}

pub fn health_conditions() -> &'static [&'static str] {
    HEALTH_CONDITIONS
}
