use serde::Serialize;

use crate::catalog::CatalogEntry;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Mild,
    Moderate,
    Severe,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Rating {
    Excellent,
    #[allow(dead_code)]
    Good,
    Caution,
    Avoid,
}

/// Two or more ingredients and what happens when they meet.
#[derive(Debug, Clone, Serialize)]
pub struct Combination {
    pub ingredients: &'static [&'static str],
    pub reason: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alternative: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub severity: Option<Severity>,
}

/// A scripted analysis outcome. The table is fixed; the scanner picks one.
#[derive(Debug, Clone, Serialize)]
pub struct Scenario {
    pub id: &'static str,
    pub name: &'static str,
    pub ingredients: &'static [&'static str],
    pub good: &'static [Combination],
    pub bad: &'static [Combination],
    pub neutral: &'static [Combination],
    pub toxic: bool,
    pub rating: Rating,
    pub health_tip: &'static str,
}

impl CatalogEntry for Scenario {
    fn id(&self) -> &str {
        self.id
    }
}

/// `Toxic` marks recipes written to steer around a harmful pairing, not
/// recipes that are themselves harmful.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum RecipeType {
    Toxic,
    NonToxic,
}

#[derive(Debug, Clone, Serialize)]
pub struct Recipe {
    pub id: &'static str,
    pub name: &'static str,
    pub emoji: &'static str,
    #[serde(rename = "type")]
    pub kind: RecipeType,
    pub category: &'static str,
    pub description: &'static str,
    pub prep_time: &'static str,
    pub cook_time: &'static str,
    pub servings: u32,
    pub ingredients: &'static [&'static str],
    pub steps: &'static [&'static str],
    pub nutrition_tips: &'static [&'static str],
}

impl CatalogEntry for Recipe {
    fn id(&self) -> &str {
        self.id
    }
}
