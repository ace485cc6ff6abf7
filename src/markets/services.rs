use tracing::debug;

use super::repo::{get_market, INGREDIENTS, MARKETS};
use super::repo_types::{Ingredient, MarketLocation};

/// Ingredients whose English name contains `query` (case-insensitive) or whose
/// localized name contains it verbatim. Catalog order; `""` matches everything.
pub fn search_ingredients(query: &str) -> Vec<&'static Ingredient> {
    let lower = query.to_lowercase();
    INGREDIENTS
        .iter()
        .filter(|i| i.name.to_lowercase().contains(&lower) || i.localized_name.contains(query))
        .collect()
}

/// Markets stocking `ingredient_id`, nearest first. Ties keep catalog order.
///
/// `zip_code` is accepted for API compatibility only: distances are static
/// catalog values, so it never affects filtering or ordering.
pub fn find_markets_by_ingredient(
    ingredient_id: &str,
    zip_code: &str,
) -> Vec<&'static MarketLocation> {
    let mut markets: Vec<_> = MARKETS
        .iter()
        .filter(|m| m.has_in_stock.iter().any(|id| *id == ingredient_id))
        .collect();
    markets.sort_by(|a, b| a.distance.total_cmp(&b.distance));
    debug!(ingredient_id, zip_code, found = markets.len(), "market lookup");
    markets
}

/// Resolves the ingredient's own market list to records, skipping dangling ids.
pub fn markets_for_ingredient(ingredient: &Ingredient) -> Vec<&'static MarketLocation> {
    ingredient
        .common_markets
        .iter()
        .filter_map(|id| get_market(id))
        .collect()
}
