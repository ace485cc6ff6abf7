use std::net::SocketAddr;

use axum::{routing::get, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::config::AppConfig;
use crate::state::AppState;
use crate::{combinations, foods, markets, seasons};

pub fn build_app(state: AppState) -> Router {
    Router::new()
        .nest(
            "/api",
            Router::new()
                .merge(seasons::router())
                .merge(foods::router())
                .merge(markets::router())
                .merge(combinations::router())
                .route("/health", get(|| async { "ok" })),
        )
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|req: &axum::http::Request<_>| {
                    let method = req.method().clone();
                    let uri = req.uri().clone();
                    tracing::info_span!(
                        "http_request",
                        %method,
                        uri = %uri,
                        status = tracing::field::Empty
                    )
                })
                .on_response(
                    |res: &axum::http::Response<_>,
                     _latency: std::time::Duration,
                     span: &tracing::Span| {
                        let status = res.status();
                        span.record("status", tracing::field::display(status));
                        if status.is_server_error() {
                            tracing::error!(%status, "response");
                        } else {
                            tracing::info!(%status, "response");
                        }
                    },
                ),
        )
}

pub async fn serve(app: Router, config: &AppConfig) -> anyhow::Result<()> {
    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;

    tracing::info!("listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{to_bytes, Body},
        http::{header, Method, Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    async fn call(method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Vec<u8>) {
        let app = build_app(AppState::fake());
        let mut req = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(v) => {
                req = req.header(header::CONTENT_TYPE, "application/json");
                Body::from(v.to_string())
            }
            None => Body::empty(),
        };
        let res = app.oneshot(req.body(body).unwrap()).await.unwrap();
        let status = res.status();
        let bytes = to_bytes(res.into_body(), usize::MAX).await.unwrap();
        (status, bytes.to_vec())
    }

    async fn get_json(uri: &str) -> (StatusCode, Value) {
        let (status, bytes) = call(Method::GET, uri, None).await;
        (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
    }

    #[tokio::test]
    async fn health_is_ok() {
        let (status, body) = call(Method::GET, "/api/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, b"ok");
    }

    #[tokio::test]
    async fn markets_for_ingredient_ignore_zip_and_sort() {
        let (status, a) = get_json("/api/ingredients/cucumber/markets?zip=13210").await;
        assert_eq!(status, StatusCode::OK);
        let (_, b) = get_json("/api/ingredients/cucumber/markets?zip=garbage").await;
        assert_eq!(a, b);

        let ids: Vec<_> = a.as_array().unwrap().iter().map(|m| m["id"].clone()).collect();
        assert_eq!(
            ids,
            [json!("su_corner_market"), json!("regional_market"), json!("wegmans_dewitt"), json!("price_rite")]
        );
        assert_eq!(a[0]["type"], "specialty_store");
        assert_eq!(a[0]["type_label"], "Specialty Store");
        assert_eq!(a[0]["price_range"], "$$");
    }

    #[tokio::test]
    async fn unknown_ingredient_has_no_markets() {
        let (status, body) = get_json("/api/ingredients/durian/markets").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!([]));
    }

    #[tokio::test]
    async fn empty_ingredient_search_lists_everything() {
        let (_, body) = get_json("/api/ingredients/search").await;
        assert_eq!(body.as_array().unwrap().len(), 10);
        let (_, body) = get_json("/api/ingredients/search?q=noodle").await;
        assert_eq!(body[0]["localized_name"], "米粉 (Mǐ Fěn)");
    }

    #[tokio::test]
    async fn unknown_ids_are_404() {
        for uri in [
            "/api/seasons/fall",
            "/api/foods/durian",
            "/api/ingredients/durian",
            "/api/markets/costco",
            "/api/recipes/pho",
            "/api/scenarios/scenario_9",
        ] {
            let (status, _) = call(Method::GET, uri, None).await;
            assert_eq!(status, StatusCode::NOT_FOUND, "{uri}");
        }
    }

    #[tokio::test]
    async fn seasonal_foods_resolve() {
        let (status, body) = get_json("/api/seasons/autumn/foods").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["season"]["name"], "Autumn");
        assert_eq!(body["foods"].as_array().unwrap().len(), 6);
        assert_eq!(body["foods"][5]["food"]["energy"], "warm");
        assert_eq!(body["foods"][0]["food"], Value::Null);
    }

    #[tokio::test]
    async fn analyze_applies_notes() {
        let (status, bytes) = call(
            Method::POST,
            "/api/combinations/analyze",
            Some(json!({ "image_ref": "file:///meal.jpg", "health_notes": "Feeling cold and tired" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["matched_concern"], "cold_weak");
        let recipes: Vec<_> = body["suggested_recipes"]
            .as_array()
            .unwrap()
            .iter()
            .map(|r| r["id"].clone())
            .collect();
        assert_eq!(recipes, [json!("lamb-stew"), json!("digestive-congee")]);
    }

    #[tokio::test]
    async fn blank_image_ref_is_accepted() {
        let (status, bytes) = call(
            Method::POST,
            "/api/combinations/analyze",
            Some(json!({ "image_ref": "  ", "health_notes": "" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert!(body["scenario_id"].is_string());

        let (status, _) = call(Method::POST, "/api/foods/identify", Some(json!({ "image_ref": "" })))
            .await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn scenario_analysis_is_deterministic() {
        let (status, body) = get_json("/api/scenarios/scenario_2/analysis?notes=cold").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body["health_tip"],
            "❄️ WARNING: These cooling foods are not suitable for your cold constitution!"
        );
        assert_eq!(body["overall_rating"], "caution");
    }

    #[tokio::test]
    async fn pair_check_is_symmetric() {
        let (_, a) = get_json("/api/combinations/check?a=Crab&b=Persimmon").await;
        let (_, b) = get_json("/api/combinations/check?a=persimmon&b=crab").await;
        assert_eq!(a, b);
        assert_eq!(a["safe"], false);
    }

    #[tokio::test]
    async fn identify_returns_catalogued_food() {
        let (status, bytes) = call(
            Method::POST,
            "/api/foods/identify",
            Some(json!({ "image_ref": "camera://1" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        let id = body["food"]["id"].as_str().unwrap();
        assert!(crate::foods::repo::get_food(id).is_some());
        assert!(body["recipes"].as_array().unwrap().len() <= 3);
    }

    #[tokio::test]
    async fn health_conditions_listed() {
        let (_, body) = get_json("/api/health-conditions").await;
        assert_eq!(body["conditions"].as_array().unwrap().len(), 8);
    }
}
