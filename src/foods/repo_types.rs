use serde::Serialize;

use crate::catalog::CatalogEntry;

/// Thermal nature of a food in the five-element tradition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Energy {
    Cold,
    Warm,
    Neutral,
}

impl Energy {
    pub fn emoji(self) -> &'static str {
        match self {
            Energy::Cold => "❄️",
            Energy::Warm => "🔥",
            Energy::Neutral => "☯️",
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            Energy::Cold => "#4facfe",
            Energy::Warm => "#fa709a",
            Energy::Neutral => "#43e97b",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct FoodItem {
    pub id: &'static str,
    pub name: &'static str,
    pub energy: Energy,
    pub benefits: &'static [&'static str],
    pub cautions: &'static [&'static str],
    pub best_seasons: &'static [&'static str],
    pub description: &'static str,
    pub recipes: &'static [&'static str],
}

impl CatalogEntry for FoodItem {
    fn id(&self) -> &str {
        self.id
    }
}
