use rand::Rng;
use serde::Serialize;
use tracing::debug;

use super::dto::{CombinationAnalysis, PairVerdict};
use super::repo::{COOLING_DISASTER_ID, RECIPES, SCENARIOS};
use super::repo_types::{Rating, Recipe, RecipeType, Scenario};

const FALLBACK_LIMIT: usize = 3;

const PREGNANCY_PREFIX: &str = "⚠️ PREGNANCY DETECTED: ";
const COLD_CONSTITUTION_WARNING: &str =
    "❄️ WARNING: These cooling foods are not suitable for your cold constitution!";
const GENERALLY_SAFE: &str = "This combination is generally safe";

/// Advisory group recognised in free-text health notes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HealthConcern {
    Pregnancy,
    ColdWeak,
    Heat,
    Digestive,
    Anemia,
}

impl HealthConcern {
    /// Test order. "tired" sits in both `ColdWeak` and `Anemia`, so it always
    /// resolves to `ColdWeak`.
    pub const PRIORITY: [HealthConcern; 5] = [
        HealthConcern::Pregnancy,
        HealthConcern::ColdWeak,
        HealthConcern::Heat,
        HealthConcern::Digestive,
        HealthConcern::Anemia,
    ];

    pub fn keywords(self) -> &'static [&'static str] {
        match self {
            HealthConcern::Pregnancy => &["pregnant", "pregnancy"],
            HealthConcern::ColdWeak => &["cold", "weak", "tired"],
            HealthConcern::Heat => &["hot", "heat", "inflammation"],
            HealthConcern::Digestive => &["digest", "stomach", "bloat"],
            HealthConcern::Anemia => &["anemia", "iron", "tired"],
        }
    }

    /// First group, in priority order, with a keyword inside `notes`.
    pub fn detect(notes: &str) -> Option<Self> {
        let notes = notes.to_lowercase();
        Self::PRIORITY
            .into_iter()
            .find(|c| c.keywords().iter().any(|k| notes.contains(k)))
    }

    fn admits(self, recipe: &Recipe) -> bool {
        match self {
            HealthConcern::Pregnancy => recipe.id == "pregnancy-safe",
            HealthConcern::ColdWeak => recipe.category == "Warming" || recipe.id == "digestive-congee",
            HealthConcern::Heat => matches!(recipe.category, "Cooling" | "Balanced"),
            HealthConcern::Digestive => {
                recipe.category == "Digestive" || recipe.id == "digestive-congee"
            }
            HealthConcern::Anemia => recipe.id == "iron-boost" || recipe.category == "Balanced",
        }
    }
}

/// Draws one scenario uniformly from the fixed table.
pub fn pick_scenario<R: Rng + ?Sized>(rng: &mut R) -> &'static Scenario {
    &SCENARIOS[rng.gen_range(0..SCENARIOS.len())]
}

/// Simulated multi-ingredient analysis: a random scenario, then notes applied.
/// `image_ref` is opaque and never inspected.
pub fn analyze<R: Rng + ?Sized>(
    rng: &mut R,
    image_ref: &str,
    health_notes: &str,
) -> CombinationAnalysis {
    let scenario = pick_scenario(rng);
    debug!(scenario = scenario.id, image_ref, "scenario drawn");
    compose_analysis(scenario, health_notes)
}

/// Deterministic part of the analysis for an already chosen scenario.
pub fn compose_analysis(scenario: &'static Scenario, health_notes: &str) -> CombinationAnalysis {
    let concern = HealthConcern::detect(health_notes);

    let mut health_tip = scenario.health_tip.to_string();
    match concern {
        Some(HealthConcern::Pregnancy) => health_tip.insert_str(0, PREGNANCY_PREFIX),
        Some(HealthConcern::ColdWeak) if scenario.id == COOLING_DISASTER_ID => {
            health_tip = COLD_CONSTITUTION_WARNING.to_string();
        }
        _ => {}
    }

    let mut suggested_recipes: Vec<&'static Recipe> = match concern {
        Some(c) => RECIPES.iter().filter(|r| c.admits(r)).collect(),
        None => Vec::new(),
    };
    if suggested_recipes.is_empty() {
        suggested_recipes = fallback_recipes(scenario);
    }

    debug!(
        scenario = scenario.id,
        concern = ?concern,
        recipes = suggested_recipes.len(),
        "analysis composed"
    );

    CombinationAnalysis {
        scenario_id: scenario.id,
        scenario_name: scenario.name,
        detected_ingredients: scenario.ingredients,
        good_combinations: scenario.good,
        bad_combinations: scenario.bad,
        neutral_combinations: scenario.neutral,
        is_toxic: scenario.toxic,
        overall_rating: scenario.rating,
        health_tip,
        matched_concern: concern,
        suggested_recipes,
    }
}

fn fallback_recipes(scenario: &Scenario) -> Vec<&'static Recipe> {
    let keep: fn(&Recipe) -> bool = if scenario.toxic {
        |r: &Recipe| r.kind == RecipeType::Toxic
    } else if scenario.rating == Rating::Excellent {
        |r: &Recipe| r.kind == RecipeType::NonToxic && r.category != "Cooling"
    } else {
        |r: &Recipe| matches!(r.category, "Balanced" | "Digestive")
    };
    RECIPES.iter().filter(|r| keep(r)).take(FALLBACK_LIMIT).collect()
}

static DANGEROUS_PAIRS: &[(&str, &str, &str)] = &[
    ("crab", "persimmon", "Can cause severe food poisoning"),
    ("shrimp", "vitamin c", "May form toxic compounds"),
    ("sweet potato", "persimmon", "Can form stomach stones"),
    ("honey", "onion", "Can damage eyesight according to TCM"),
    ("rabbit", "celery", "Can cause hair loss according to TCM"),
    ("beef", "chestnut", "Can cause vomiting"),
    ("goose", "pear", "Can damage kidneys"),
];

/// Exact, case-insensitive match against the known dangerous pairs, in either order.
pub fn check_pair(a: &str, b: &str) -> PairVerdict {
    let a = a.to_lowercase();
    let b = b.to_lowercase();
    DANGEROUS_PAIRS
        .iter()
        .find(|(x, y, _)| (a == *x && b == *y) || (a == *y && b == *x))
        .map(|(_, _, reason)| PairVerdict {
            safe: false,
            reason: *reason,
        })
        .unwrap_or(PairVerdict {
            safe: true,
            reason: GENERALLY_SAFE,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combinations::repo::{get_scenario, list_scenarios};
    use rand::{rngs::StdRng, SeedableRng};
    use std::collections::HashMap;

    fn recipe_ids(a: &CombinationAnalysis) -> Vec<&'static str> {
        a.suggested_recipes.iter().map(|r| r.id).collect()
    }

    fn scenario(id: &str) -> &'static Scenario {
        get_scenario(id).expect("scenario present")
    }

    #[test]
    fn tired_resolves_to_cold_group_never_anemia() {
        assert_eq!(HealthConcern::detect("tired"), Some(HealthConcern::ColdWeak));
        for s in list_scenarios() {
            let a = compose_analysis(s, "feeling cold and tired");
            assert_eq!(a.matched_concern, Some(HealthConcern::ColdWeak));
            assert_eq!(recipe_ids(&a), ["lamb-stew", "digestive-congee"]);
        }
    }

    #[test]
    fn keyword_priority_order() {
        assert_eq!(
            HealthConcern::detect("Pregnant and cold"),
            Some(HealthConcern::Pregnancy)
        );
        assert_eq!(HealthConcern::detect("HOT flushes, bloating"), Some(HealthConcern::Heat));
        assert_eq!(HealthConcern::detect("stomach ache"), Some(HealthConcern::Digestive));
        assert_eq!(HealthConcern::detect("low iron"), Some(HealthConcern::Anemia));
        assert_eq!(HealthConcern::detect("all good"), None);
        assert_eq!(HealthConcern::detect(""), None);
    }

    #[test]
    fn keyword_paths_pick_matching_recipes() {
        let s = scenario("scenario_1");
        assert_eq!(recipe_ids(&compose_analysis(s, "pregnancy")), ["pregnancy-safe"]);
        assert_eq!(
            recipe_ids(&compose_analysis(s, "inflammation")),
            ["cooling-soup", "balanced-bowl"]
        );
        assert_eq!(recipe_ids(&compose_analysis(s, "bloated")), ["digestive-congee"]);
        assert_eq!(
            recipe_ids(&compose_analysis(s, "anemia")),
            ["balanced-bowl", "iron-boost"]
        );
    }

    #[test]
    fn empty_notes_fall_back_to_at_most_three() {
        for s in list_scenarios() {
            let a = compose_analysis(s, "");
            assert_eq!(a.matched_concern, None);
            assert!(!a.suggested_recipes.is_empty());
            assert!(a.suggested_recipes.len() <= FALLBACK_LIMIT);
            assert_eq!(a.health_tip, s.health_tip);
        }
    }

    #[test]
    fn fallback_follows_scenario_outcome() {
        assert_eq!(
            recipe_ids(&compose_analysis(scenario("scenario_3"), "")),
            ["safe-seafood", "pregnancy-safe", "iron-boost"]
        );
        assert_eq!(
            recipe_ids(&compose_analysis(scenario("scenario_1"), "")),
            ["lamb-stew", "balanced-bowl", "digestive-congee"]
        );
        assert_eq!(
            recipe_ids(&compose_analysis(scenario("scenario_7"), "no keywords here")),
            ["balanced-bowl", "digestive-congee"]
        );
    }

    #[test]
    fn cooling_disaster_warns_cold_constitution() {
        let a = compose_analysis(scenario(COOLING_DISASTER_ID), "I am always weak");
        assert_eq!(a.health_tip, COLD_CONSTITUTION_WARNING);
        assert_eq!(recipe_ids(&a), ["lamb-stew", "digestive-congee"]);

        let other = compose_analysis(scenario("scenario_4"), "I am always weak");
        assert_eq!(other.health_tip, scenario("scenario_4").health_tip);
    }

    #[test]
    fn pregnancy_prefixes_health_tip() {
        let s = scenario("scenario_6");
        let a = compose_analysis(s, "I'm pregnant");
        assert!(a.health_tip.starts_with(PREGNANCY_PREFIX));
        assert!(a.health_tip.ends_with(s.health_tip));
    }

    #[test]
    fn analysis_copies_scenario_verbatim() {
        let s = scenario("scenario_8");
        let a = compose_analysis(s, "");
        assert_eq!(a.scenario_id, "scenario_8");
        assert_eq!(a.detected_ingredients, s.ingredients);
        assert_eq!(a.bad_combinations.len(), 3);
        assert_eq!(a.overall_rating, Rating::Caution);
        assert!(!a.is_toxic);
    }

    #[test]
    fn scenario_draw_is_uniform() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        let draws = 10_000;
        let mut counts: HashMap<&str, u32> = HashMap::new();
        for _ in 0..draws {
            let a = analyze(&mut rng, "img", "");
            *counts.entry(a.scenario_id).or_default() += 1;
        }
        assert_eq!(counts.len(), 8);

        let expected = draws as f64 / 8.0;
        let chi_square: f64 = counts
            .values()
            .map(|&n| (n as f64 - expected).powi(2) / expected)
            .sum();
        // 7 degrees of freedom, p = 0.001
        assert!(chi_square < 24.32, "chi-square {chi_square}");
    }

    #[test]
    fn dangerous_pair_any_order_any_case() {
        let forward = check_pair("Crab", "Persimmon");
        let reverse = check_pair("persimmon", "crab");
        assert!(!forward.safe);
        assert_eq!(forward, reverse);
        assert_eq!(forward.reason, "Can cause severe food poisoning");
        assert!(!check_pair("VITAMIN C", "shrimp").safe);
    }

    #[test]
    fn pair_match_is_exact_not_substring() {
        assert!(check_pair("king crab", "persimmon").safe);
        assert!(check_pair("crab", "crab").safe);
        assert!(check_pair("", "").safe);
        assert_eq!(check_pair("rice", "ginger").reason, GENERALLY_SAFE);
    }
}
