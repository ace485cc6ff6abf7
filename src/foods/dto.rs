use serde::{Deserialize, Serialize};

use super::repo_types::FoodItem;
use crate::combinations::repo_types::Recipe;

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct IdentifyRequest {
    pub image_ref: String,
}

#[derive(Debug, Serialize)]
pub struct IdentifiedFood {
    pub food: &'static FoodItem,
    pub energy_emoji: &'static str,
    pub energy_color: &'static str,
    pub recipes: Vec<&'static Recipe>,
}

impl IdentifiedFood {
    const RECIPE_LIMIT: usize = 3;

    pub fn new(food: &'static FoodItem, mut recipes: Vec<&'static Recipe>) -> Self {
        recipes.truncate(Self::RECIPE_LIMIT);
        Self {
            food,
            energy_emoji: food.energy.emoji(),
            energy_color: food.energy.color(),
            recipes,
        }
    }
}
