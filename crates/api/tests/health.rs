//! Integration tests for the health check, static pages and general HTTP
//! behaviour.

mod common;

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use common::{body_json, body_text, build_app_with, build_test_app, get, test_config, UnavailableStore};
use gamevault_db::store::MemoryGameStore;
use tower::ServiceExt;

// ---------------------------------------------------------------------------
// Health
// ---------------------------------------------------------------------------

#[tokio::test]
async fn health_check_returns_ok_with_json() {
    let app = build_test_app(Arc::new(MemoryGameStore::new()));
    let response = get(app, "/health").await;

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["status"], "ok");
    assert!(json["version"].is_string());
    assert_eq!(json["db_healthy"], true);
}

#[tokio::test]
async fn health_check_reports_degraded_store() {
    let app = build_app_with(Arc::new(UnavailableStore), test_config());
    let response = get(app, "/health").await;

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["status"], "degraded");
    assert_eq!(json["db_healthy"], false);
}

// ---------------------------------------------------------------------------
// Static pages
// ---------------------------------------------------------------------------

#[tokio::test]
async fn landing_page_is_served_at_root() {
    let app = build_test_app(Arc::new(MemoryGameStore::new()));
    let response = get(app, "/").await;

    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains("/get-games"));
}

#[tokio::test]
async fn add_game_form_is_served_at_g() {
    let app = build_test_app(Arc::new(MemoryGameStore::new()));
    let response = get(app, "/g").await;

    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains("/add-games"));
    assert!(html.contains("name=\"downloadLink\""));
}

#[tokio::test]
async fn unknown_route_returns_404() {
    let app = build_test_app(Arc::new(MemoryGameStore::new()));
    let response = get(app, "/this-route-does-not-exist").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Middleware
// ---------------------------------------------------------------------------

#[tokio::test]
async fn response_contains_x_request_id_header() {
    let app = build_test_app(Arc::new(MemoryGameStore::new()));
    let response = get(app, "/health").await;

    let request_id = response
        .headers()
        .get("x-request-id")
        .expect("Response must contain an x-request-id header");

    // The value should be a UUID string (36 chars with hyphens).
    assert_eq!(request_id.to_str().unwrap().len(), 36);
}

#[tokio::test]
async fn cors_preflight_returns_correct_headers() {
    let app = build_test_app(Arc::new(MemoryGameStore::new()));

    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/search-games")
        .header("Origin", "http://localhost:3001")
        .header("Access-Control-Request-Method", "POST")
        .header("Access-Control-Request-Headers", "content-type")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let headers = response.headers();
    assert_eq!(
        headers["access-control-allow-origin"].to_str().unwrap(),
        "http://localhost:3001"
    );
    assert!(headers["access-control-allow-methods"]
        .to_str()
        .unwrap()
        .contains("POST"));
}
