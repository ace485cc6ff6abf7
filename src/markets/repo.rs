use crate::catalog::get_by_id;

use super::repo_types::{
    Coordinates, Ingredient, IngredientCategory, MarketLocation, MarketType, PriceTier,
};

pub static MARKETS: &[MarketLocation] = &[
    MarketLocation {
        id: "asia_food_market",
        name: "Asia Food Market",
        kind: MarketType::AsianMarket,
        address: "2752 Brewerton Rd, Syracuse, NY 13211",
        distance: 2.3,
        rating: 4.7,
        coordinates: Coordinates { latitude: 43.0962, longitude: -76.12 },
        hours: "Mon-Sun: 10AM - 8PM",
        phone: "(315) 555-0123",
        has_in_stock: &["chinese_yam", "ginger", "bok_choy", "shiitake", "rice_noodles", "tofu"],
        price_range: PriceTier::Moderate,
        specialties: &["Asian vegetables", "Fresh herbs", "Rice varieties"],
    },
    MarketLocation {
        id: "wegmans_dewitt",
        name: "Wegmans DeWitt",
        kind: MarketType::GroceryStore,
        address: "3325 W Genesee St, Syracuse, NY 13219",
        distance: 3.1,
        rating: 4.8,
        coordinates: Coordinates { latitude: 43.0481, longitude: -76.2058 },
        hours: "Mon-Sun: 6AM - 12AM",
        phone: "(315) 555-0456",
        has_in_stock: &["ginger", "watermelon", "cucumber", "apple", "rice", "organic_vegetables"],
        price_range: PriceTier::Moderate,
        specialties: &["Organic produce", "International foods", "Fresh bakery"],
    },
    MarketLocation {
        id: "regional_market",
        name: "Syracuse Regional Market",
        kind: MarketType::FarmersMarket,
        address: "2100 Park St, Syracuse, NY 13208",
        distance: 1.8,
        rating: 4.6,
        coordinates: Coordinates { latitude: 43.0723, longitude: -76.1644 },
        hours: "Sat-Sun: 7AM - 2PM",
        phone: "(315) 555-0789",
        has_in_stock: &["watermelon", "cucumber", "apple", "tomato", "seasonal_vegetables"],
        price_range: PriceTier::Budget,
        specialties: &["Local produce", "Seasonal fruits", "Farm-fresh items"],
    },
    MarketLocation {
        id: "price_rite",
        name: "Price Rite Marketplace",
        kind: MarketType::GroceryStore,
        address: "3955 Route 31, Liverpool, NY 13090",
        distance: 4.5,
        rating: 4.2,
        coordinates: Coordinates { latitude: 43.1156, longitude: -76.2167 },
        hours: "Mon-Sun: 8AM - 9PM",
        phone: "(315) 555-1234",
        has_in_stock: &["rice", "ginger", "apple", "cucumber", "basic_vegetables"],
        price_range: PriceTier::Budget,
        specialties: &["Budget-friendly", "Bulk items", "International aisle"],
    },
    MarketLocation {
        id: "aldi_salina",
        name: "ALDI",
        kind: MarketType::GroceryStore,
        address: "103 W Seneca Turnpike, Syracuse, NY 13205",
        distance: 2.7,
        rating: 4.5,
        coordinates: Coordinates { latitude: 43.0265, longitude: -76.1472 },
        hours: "Mon-Sun: 9AM - 8PM",
        phone: "(315) 555-5678",
        has_in_stock: &["rice", "ginger", "apple", "seasonal_produce"],
        price_range: PriceTier::Budget,
        specialties: &["Organic options", "Weekly deals", "Fresh produce"],
    },
    MarketLocation {
        id: "su_corner_market",
        name: "SU Corner Market",
        kind: MarketType::SpecialtyStore,
        address: "700 S Crouse Ave, Syracuse, NY 13210",
        distance: 0.5,
        rating: 4.3,
        coordinates: Coordinates { latitude: 43.0395, longitude: -76.1347 },
        hours: "Mon-Fri: 7AM - 10PM, Sat-Sun: 9AM - 8PM",
        phone: "(315) 555-9012",
        has_in_stock: &["ginger", "apple", "cucumber", "snacks"],
        price_range: PriceTier::Moderate,
        specialties: &["Campus convenience", "Quick essentials", "Grab & go"],
    },
];

pub static INGREDIENTS: &[Ingredient] = &[
    Ingredient {
        id: "chinese_yam",
        name: "Chinese Yam",
        localized_name: "山药 (Shān Yào)",
        category: IngredientCategory::Vegetable,
        icon: "🥔",
        common_markets: &["asia_food_market"],
    },
    Ingredient {
        id: "ginger",
        name: "Ginger",
        localized_name: "姜 (Jiāng)",
        category: IngredientCategory::Spice,
        icon: "🫚",
        common_markets: &[
            "asia_food_market",
            "wegmans_dewitt",
            "price_rite",
            "aldi_salina",
            "su_corner_market",
        ],
    },
    Ingredient {
        id: "bok_choy",
        name: "Bok Choy",
        localized_name: "白菜 (Bái Cài)",
        category: IngredientCategory::Vegetable,
        icon: "🥬",
        common_markets: &["asia_food_market"],
    },
    Ingredient {
        id: "shiitake",
        name: "Shiitake Mushroom",
        localized_name: "香菇 (Xiāng Gū)",
        category: IngredientCategory::Vegetable,
        icon: "🍄",
        common_markets: &["asia_food_market", "wegmans_dewitt"],
    },
    Ingredient {
        id: "rice",
        name: "Rice",
        localized_name: "米 (Mǐ)",
        category: IngredientCategory::Grain,
        icon: "🍚",
        common_markets: &["asia_food_market", "wegmans_dewitt", "price_rite", "aldi_salina"],
    },
    Ingredient {
        id: "watermelon",
        name: "Watermelon",
        localized_name: "西瓜 (Xī Guā)",
        category: IngredientCategory::Fruit,
        icon: "🍉",
        common_markets: &["wegmans_dewitt", "regional_market"],
    },
    Ingredient {
        id: "cucumber",
        name: "Cucumber",
        localized_name: "黄瓜 (Huáng Guā)",
        category: IngredientCategory::Vegetable,
        icon: "🥒",
        common_markets: &["wegmans_dewitt", "regional_market", "price_rite", "su_corner_market"],
    },
    Ingredient {
        id: "apple",
        name: "Apple",
        localized_name: "苹果 (Píng Guǒ)",
        category: IngredientCategory::Fruit,
        icon: "🍎",
        common_markets: &[
            "wegmans_dewitt",
            "regional_market",
            "price_rite",
            "aldi_salina",
            "su_corner_market",
        ],
    },
    Ingredient {
        id: "tofu",
        name: "Tofu",
        localized_name: "豆腐 (Dòu Fu)",
        category: IngredientCategory::Protein,
        icon: "🧈",
        common_markets: &["asia_food_market", "wegmans_dewitt"],
    },
    Ingredient {
        id: "rice_noodles",
        name: "Rice Noodles",
        localized_name: "米粉 (Mǐ Fěn)",
        category: IngredientCategory::Grain,
        icon: "🍜",
        common_markets: &["asia_food_market"],
    },
];

pub fn list_ingredients() -> &'static [Ingredient] {
    INGREDIENTS
}

pub fn list_markets() -> &'static [MarketLocation] {
    MARKETS
}

pub fn get_ingredient(id: &str) -> Option<&'static Ingredient> {
    get_by_id(INGREDIENTS, id)
}

pub fn get_market(id: &str) -> Option<&'static MarketLocation> {
    get_by_id(MARKETS, id)
}
