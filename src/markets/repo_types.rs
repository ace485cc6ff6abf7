use serde::Serialize;

use crate::catalog::CatalogEntry;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum IngredientCategory {
    Vegetable,
    Fruit,
    Grain,
    Protein,
    #[allow(dead_code)]
    Herb,
    Spice,
}

#[derive(Debug, Clone, Serialize)]
pub struct Ingredient {
    pub id: &'static str,
    pub name: &'static str,
    /// Chinese name with pinyin, e.g. `姜 (Jiāng)`.
    pub localized_name: &'static str,
    pub category: IngredientCategory,
    pub icon: &'static str,
    pub common_markets: &'static [&'static str],
}

impl CatalogEntry for Ingredient {
    fn id(&self) -> &str {
        self.id
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MarketType {
    AsianMarket,
    GroceryStore,
    FarmersMarket,
    SpecialtyStore,
}

impl MarketType {
    pub fn label(self) -> &'static str {
        match self {
            MarketType::AsianMarket => "Asian Market",
            MarketType::GroceryStore => "Grocery Store",
            MarketType::FarmersMarket => "Farmer's Market",
            MarketType::SpecialtyStore => "Specialty Store",
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            MarketType::AsianMarket => "#fa709a",
            MarketType::GroceryStore => "#4facfe",
            MarketType::FarmersMarket => "#43e97b",
            MarketType::SpecialtyStore => "#fee140",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PriceTier {
    #[serde(rename = "$")]
    Budget,
    #[serde(rename = "$$")]
    Moderate,
    #[serde(rename = "$$$")]
    #[allow(dead_code)]
    Premium,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct MarketLocation {
    pub id: &'static str,
    pub name: &'static str,
    #[serde(rename = "type")]
    pub kind: MarketType,
    pub address: &'static str,
    /// Miles, precomputed. Not derived from `coordinates`.
    pub distance: f64,
    pub rating: f64,
    pub coordinates: Coordinates,
    pub hours: &'static str,
    pub phone: &'static str,
    /// Ingredient ids; weak references, unknown ids are allowed.
    pub has_in_stock: &'static [&'static str],
    pub price_range: PriceTier,
    pub specialties: &'static [&'static str],
}

impl CatalogEntry for MarketLocation {
    fn id(&self) -> &str {
        self.id
    }
}
