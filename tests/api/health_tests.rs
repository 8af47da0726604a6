//! Health Check API Tests

use axum::http::StatusCode;

use crate::common::{body_json, TestApp};

#[tokio::test]
async fn test_health_check_returns_ok() {
    let app = TestApp::new();

    let response = app.get("/health").await;

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_health_check_returns_status_field() {
    let app = TestApp::new();

    let response = app.get("/health").await;
    let body = body_json(response).await;

    assert_eq!(body["status"], "healthy");
    assert!(body["version"].is_string());
}

#[tokio::test]
async fn test_liveness_probe() {
    let app = TestApp::new();

    let response = app.get("/health/live").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["status"], "alive");
}
