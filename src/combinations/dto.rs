use serde::{Deserialize, Serialize};

use super::repo_types::{Combination, Rating, Recipe};
use super::services::HealthConcern;

#[derive(Debug, Clone, Serialize)]
pub struct CombinationAnalysis {
    pub scenario_id: &'static str,
    pub scenario_name: &'static str,
    /// Copied from the scenario; nothing is derived from the image.
    pub detected_ingredients: &'static [&'static str],
    pub good_combinations: &'static [Combination],
    pub bad_combinations: &'static [Combination],
    pub neutral_combinations: &'static [Combination],
    pub is_toxic: bool,
    pub overall_rating: Rating,
    pub health_tip: String,
    pub matched_concern: Option<HealthConcern>,
    pub suggested_recipes: Vec<&'static Recipe>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PairVerdict {
    pub safe: bool,
    pub reason: &'static str,
}

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    #[serde(default)]
    pub image_ref: String,
    #[serde(default)]
    pub health_notes: String,
}

#[derive(Debug, Deserialize)]
pub struct PairQuery {
    pub a: String,
    pub b: String,
}

#[derive(Debug, Deserialize)]
pub struct NotesQuery {
    #[serde(default)]
    pub notes: String,
}

#[derive(Debug, Serialize)]
pub struct HealthConditions {
    pub conditions: &'static [&'static str],
}
