use axum::{extract::Path, routing::get, Json, Router};
use tracing::instrument;

use super::dto::SeasonalFoods;
use super::repo::{get_season, list_seasons};
use super::repo_types::Season;
use super::services::seasonal_foods;
use crate::{error::AppError, state::AppState};

pub fn read_routes() -> Router<AppState> {
    Router::new()
        .route("/seasons", get(list))
        .route("/seasons/:id", get(get_one))
        .route("/seasons/:id/foods", get(foods))
}

pub async fn list() -> Json<&'static [Season]> {
    Json(list_seasons())
}

#[instrument]
pub async fn get_one(Path(id): Path<String>) -> Result<Json<&'static Season>, AppError> {
    get_season(&id)
        .map(Json)
        .ok_or_else(|| AppError::not_found("season", id))
}

#[instrument]
pub async fn foods(Path(id): Path<String>) -> Result<Json<SeasonalFoods>, AppError> {
    let season = get_season(&id).ok_or_else(|| AppError::not_found("season", id))?;
    Ok(Json(seasonal_foods(season)))
}
