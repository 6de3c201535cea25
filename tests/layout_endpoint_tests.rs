//! Router-level tests for the grid layout endpoint. The handler is
//! stateless, so the test router needs no database.

use axum::{
    body::Body,
    http::{Request, StatusCode},
    routing::get,
    Router,
};
use serde_json::Value;
use tower::ServiceExt;

use maltcellar_backend::handlers::layout::get_grid_layout;

fn build_test_router() -> Router {
    Router::new().route("/api/layout/grid", get(get_grid_layout))
}

async fn fetch_layout(uri: &str) -> (StatusCode, Value) {
    let app = build_test_router();
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&body).unwrap_or(Value::Null);
    (status, json)
}

#[tokio::test]
async fn test_grid_layout_reference_viewport() {
    let (status, json) =
        fetch_layout("/api/layout/grid?viewport_width=1600&sidebar_width=250").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["available_width"].as_f64().unwrap(), 1290.0);

    let columns = json["columns"].as_u64().unwrap();
    assert!((1..=7).contains(&columns));

    let width = json["column_width"].as_f64().unwrap();
    assert!((280.0..=400.0).contains(&width));
}

#[tokio::test]
async fn test_grid_layout_defaults_sidebar_to_collapsed() {
    let (status, json) = fetch_layout("/api/layout/grid?viewport_width=1600").await;

    assert_eq!(status, StatusCode::OK);
    // viewport - 0 sidebar - 60 chrome
    assert_eq!(json["available_width"].as_f64().unwrap(), 1540.0);
}

#[tokio::test]
async fn test_grid_layout_is_deterministic() {
    let uri = "/api/layout/grid?viewport_width=1440&sidebar_width=250";
    let (_, first) = fetch_layout(uri).await;
    let (_, second) = fetch_layout(uri).await;

    assert_eq!(first, second);
}

#[tokio::test]
async fn test_grid_layout_requires_viewport_width() {
    let (status, _) = fetch_layout("/api/layout/grid").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}
