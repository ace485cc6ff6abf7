use axum::{
    extract::{Path, Query},
    routing::get,
    Json, Router,
};
use tracing::instrument;

use super::dto::{IngredientDetails, MarketView, SearchQuery, ZipQuery};
use super::repo::{get_ingredient, get_market, list_ingredients, list_markets};
use super::repo_types::Ingredient;
use super::services::{find_markets_by_ingredient, markets_for_ingredient, search_ingredients};
use crate::{error::AppError, state::AppState};

pub fn ingredient_routes() -> Router<AppState> {
    Router::new()
        .route("/ingredients", get(ingredients))
        .route("/ingredients/search", get(search))
        .route("/ingredients/:id", get(ingredient))
        .route("/ingredients/:id/markets", get(markets_stocking))
}

pub fn market_routes() -> Router<AppState> {
    Router::new()
        .route("/markets", get(markets))
        .route("/markets/:id", get(market))
}

pub async fn ingredients() -> Json<&'static [Ingredient]> {
    Json(list_ingredients())
}

#[instrument]
pub async fn search(Query(q): Query<SearchQuery>) -> Json<Vec<&'static Ingredient>> {
    Json(search_ingredients(&q.q))
}

#[instrument]
pub async fn ingredient(Path(id): Path<String>) -> Result<Json<IngredientDetails>, AppError> {
    let ingredient = get_ingredient(&id).ok_or_else(|| AppError::not_found("ingredient", id))?;
    let markets = markets_for_ingredient(ingredient)
        .into_iter()
        .map(MarketView::from)
        .collect();
    Ok(Json(IngredientDetails {
        ingredient,
        markets,
    }))
}

/// Total over any id: an ingredient nobody stocks is an empty list, not a 404.
#[instrument]
pub async fn markets_stocking(
    Path(id): Path<String>,
    Query(zip): Query<ZipQuery>,
) -> Json<Vec<MarketView>> {
    let found = find_markets_by_ingredient(&id, &zip.zip);
    Json(found.into_iter().map(MarketView::from).collect())
}

pub async fn markets() -> Json<Vec<MarketView>> {
    Json(list_markets().iter().map(MarketView::from).collect())
}

#[instrument]
pub async fn market(Path(id): Path<String>) -> Result<Json<MarketView>, AppError> {
    get_market(&id)
        .map(|m| Json(MarketView::from(m)))
        .ok_or_else(|| AppError::not_found("market", id))
}
