use crate::helpers::{make_test_app, send};
use axum::http::StatusCode;

#[tokio::test]
async fn health_check_returns_ok_json() {
    let (app, _) = make_test_app().await;

    let (status, json) = send(&app, "GET", "/api/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["success"], true);
    assert_eq!(json["data"], "OK");
    assert_eq!(json["message"], "Health check passed");
}
