//! Home, health, docs, and cross-cutting middleware.

mod helpers;

use axum::http::StatusCode;
use helpers::{setup_test_app, setup_test_app_with_config};
use vidshelf_api::REQUEST_ID_HEADER;
use vidshelf_core::models::HomeResponse;
use vidshelf_core::Config;

#[tokio::test]
async fn test_home_shows_app_name() {
    let app = setup_test_app();

    let response = app.server.get("/").await;
    response.assert_status_ok();

    let home: HomeResponse = response.json();
    assert_eq!(home.app_name, "NFL Football Videos");
}

#[tokio::test]
async fn test_home_uses_configured_app_name() {
    let app = setup_test_app_with_config(Config {
        app_name: "College Hockey Videos".to_string(),
        ..Config::default()
    });

    let home: HomeResponse = app.server.get("/").await.json();
    assert_eq!(home.app_name, "College Hockey Videos");
}

#[tokio::test]
async fn test_health_endpoints() {
    let app = setup_test_app();

    let live = app.server.get("/live").await;
    live.assert_status_ok();
    assert_eq!(live.json::<serde_json::Value>()["status"], "alive");

    let ready = app.server.get("/ready").await;
    ready.assert_status_ok();
    assert_eq!(ready.json::<serde_json::Value>()["status"], "ready");

    let health = app.server.get("/health").await;
    health.assert_status_ok();
    let body = health.json::<serde_json::Value>();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["database"], "healthy");
    assert_eq!(body["videos"], 0);
}

#[tokio::test]
async fn test_openapi_document_is_served() {
    let app = setup_test_app();

    let response = app.server.get("/api/openapi.json").await;
    response.assert_status_ok();

    let spec = response.json::<serde_json::Value>();
    assert!(spec["paths"]["/api/v0/videos"].is_object());
    assert!(spec["paths"]["/api/v0/videos/{id}"].is_object());
}

#[tokio::test]
async fn test_request_id_is_generated_and_echoed() {
    let app = setup_test_app();

    let generated = app.server.get("/live").await;
    assert!(!generated.header(REQUEST_ID_HEADER).is_empty());

    let echoed = app
        .server
        .get("/live")
        .add_header(REQUEST_ID_HEADER, "trace-abc-123")
        .await;
    assert_eq!(echoed.header(REQUEST_ID_HEADER), "trace-abc-123");
}

#[tokio::test]
async fn test_security_headers_are_set() {
    let app = setup_test_app();

    let response = app.server.get("/api/v0/videos").await;
    assert_eq!(response.header("x-content-type-options"), "nosniff");
    assert_eq!(response.header("x-frame-options"), "DENY");
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let app = setup_test_app();

    let response = app.server.get("/api/v0/nothing-here").await;
    response.assert_status(StatusCode::NOT_FOUND);
}
