use axum::{
    extract::{Path, Query, State},
    routing::{get, post},
    Json, Router,
};
use tracing::{info, instrument};

use super::dto::{
    AnalyzeRequest, CombinationAnalysis, HealthConditions, NotesQuery, PairQuery, PairVerdict,
};
use super::repo::{get_recipe, get_scenario, health_conditions, list_recipes, list_scenarios};
use super::repo_types::{Recipe, Scenario};
use super::services::{check_pair, compose_analysis};
use crate::{error::AppError, state::AppState};

pub fn combination_routes() -> Router<AppState> {
    Router::new()
        .route("/combinations/analyze", post(analyze))
        .route("/combinations/check", get(check))
        .route("/health-conditions", get(conditions))
}

pub fn catalog_routes() -> Router<AppState> {
    Router::new()
        .route("/scenarios", get(scenarios))
        .route("/scenarios/:id", get(scenario))
        .route("/scenarios/:id/analysis", get(scenario_analysis))
        .route("/recipes", get(recipes))
        .route("/recipes/:id", get(recipe))
}

#[instrument(skip(state, body))]
pub async fn analyze(
    State(state): State<AppState>,
    Json(body): Json<AnalyzeRequest>,
) -> Json<CombinationAnalysis> {
    let analysis = state
        .recognizer
        .analyze_combinations(&body.image_ref, &body.health_notes)
        .await;
    info!(
        scenario = analysis.scenario_id,
        concern = ?analysis.matched_concern,
        "combination analysed"
    );
    Json(analysis)
}

#[instrument]
pub async fn check(Query(q): Query<PairQuery>) -> Json<PairVerdict> {
    Json(check_pair(&q.a, &q.b))
}

pub async fn conditions() -> Json<HealthConditions> {
    Json(HealthConditions {
        conditions: health_conditions(),
    })
}

pub async fn scenarios() -> Json<&'static [Scenario]> {
    Json(list_scenarios())
}

#[instrument]
pub async fn scenario(Path(id): Path<String>) -> Result<Json<&'static Scenario>, AppError> {
    get_scenario(&id)
        .map(Json)
        .ok_or_else(|| AppError::not_found("scenario", id))
}

/// Same composition as `analyze`, minus the random draw.
#[instrument]
pub async fn scenario_analysis(
    Path(id): Path<String>,
    Query(q): Query<NotesQuery>,
) -> Result<Json<CombinationAnalysis>, AppError> {
    let scenario = get_scenario(&id).ok_or_else(|| AppError::not_found("scenario", id))?;
    Ok(Json(compose_analysis(scenario, &q.notes)))
}

pub async fn recipes() -> Json<&'static [Recipe]> {
    Json(list_recipes())
}

#[instrument]
pub async fn recipe(Path(id): Path<String>) -> Result<Json<&'static Recipe>, AppError> {
    get_recipe(&id)
        .map(Json)
        .ok_or_else(|| AppError::not_found("recipe", id))
}
