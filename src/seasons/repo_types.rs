use serde::Serialize;

use crate::catalog::CatalogEntry;

#[derive(Debug, Clone, Copy, Serialize)]
pub struct SeasonColors {
    pub primary: &'static str,
    pub secondary: &'static str,
    pub accent: &'static str,
}

/// A food as a season lists it. `food_id` links display names that differ
/// from the catalog name ("Apples" -> `apple`).
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SeasonFood {
    pub name: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub food_id: Option<&'static str>,
}

impl SeasonFood {
    pub const fn named(name: &'static str) -> Self {
        Self { name, food_id: None }
    }

    pub const fn linked(name: &'static str, food_id: &'static str) -> Self {
        Self {
            name,
            food_id: Some(food_id),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Season {
    pub id: &'static str,
    pub name: &'static str,
    pub subtitle: &'static str,
    pub description: &'static str,
    pub colors: SeasonColors,
    pub emoji: &'static str,
    pub months: &'static str,
    pub image: &'static str,
    pub foods: &'static [SeasonFood],
}

impl CatalogEntry for Season {
    fn id(&self) -> &str {
        self.id
    }
}
