use serde::Serialize;

use super::repo_types::Season;
use crate::foods::repo_types::FoodItem;

#[derive(Debug, Serialize)]
pub struct SeasonalFood {
    pub name: &'static str,
    /// `None` when the name has no catalogued food record.
    pub food: Option<&'static FoodItem>,
}

#[derive(Debug, Serialize)]
pub struct SeasonalFoods {
    pub season: &'static Season,
    pub foods: Vec<SeasonalFood>,
}
