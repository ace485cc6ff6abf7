use axum::{
    extract::{Path, Query, State},
    routing::{get, post},
    Json, Router,
};
use tracing::{info, instrument};

use super::dto::{IdentifiedFood, IdentifyRequest, SearchQuery};
use super::repo::{get_food, list_foods, search_foods};
use super::repo_types::FoodItem;
use super::services::recipes_for_food;
use crate::{combinations::repo_types::Recipe, error::AppError, state::AppState};

pub fn read_routes() -> Router<AppState> {
    Router::new()
        .route("/foods", get(list))
        .route("/foods/search", get(search))
        .route("/foods/:id", get(get_one))
        .route("/foods/:id/recipes", get(recipes))
}

pub fn scan_routes() -> Router<AppState> {
    Router::new().route("/foods/identify", post(identify))
}

pub async fn list() -> Json<&'static [FoodItem]> {
    Json(list_foods())
}

#[instrument]
pub async fn search(Query(q): Query<SearchQuery>) -> Json<Vec<&'static FoodItem>> {
    Json(search_foods(&q.name))
}

#[instrument]
pub async fn get_one(Path(id): Path<String>) -> Result<Json<&'static FoodItem>, AppError> {
    get_food(&id)
        .map(Json)
        .ok_or_else(|| AppError::not_found("food", id))
}

#[instrument]
pub async fn recipes(Path(id): Path<String>) -> Result<Json<Vec<&'static Recipe>>, AppError> {
    let food = get_food(&id).ok_or_else(|| AppError::not_found("food", id))?;
    Ok(Json(recipes_for_food(food)))
}

#[instrument(skip(state, body))]
pub async fn identify(
    State(state): State<AppState>,
    Json(body): Json<IdentifyRequest>,
) -> Json<IdentifiedFood> {
    let food = state.recognizer.detect_food(&body.image_ref).await;
    info!(food = food.id, "food identified");
    Json(IdentifiedFood::new(food, recipes_for_food(food)))
}
