use serde::{Deserialize, Serialize};

use super::repo_types::{Ingredient, MarketLocation};

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: String,
}

#[derive(Debug, Deserialize)]
pub struct ZipQuery {
    #[serde(default)]
    pub zip: String,
}

/// A market plus its display hints.
#[derive(Debug, Serialize)]
pub struct MarketView {
    #[serde(flatten)]
    pub market: &'static MarketLocation,
    pub type_label: &'static str,
    pub type_color: &'static str,
}

impl From<&'static MarketLocation> for MarketView {
    fn from(market: &'static MarketLocation) -> Self {
        Self {
            market,
            type_label: market.kind.label(),
            type_color: market.kind.color(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct IngredientDetails {
    pub ingredient: &'static Ingredient,
    pub markets: Vec<MarketView>,
}
