use crate::helpers::{make_test_app, send};
use crate::routes::attendees::register;
use axum::http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn scan_toggles_once_then_ignores_repeats() {
    let (app, _) = make_test_app().await;
    let id = register(&app, "Jane Smith", "", "South").await;

    let (status, first) = send(&app, "POST", "/api/scan", Some(json!({ "code": id.to_string() }))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(first["data"]["action"], "check_in");

    let (status, repeat) = send(&app, "POST", "/api/scan", Some(json!({ "code": id.to_string() }))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(repeat["data"]["ignored"], true);

    let (_, logs) = send(&app, "GET", &format!("/api/attendees/{id}/logs"), None).await;
    assert_eq!(logs["data"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn scan_of_unknown_code_is_not_found() {
    let (app, _) = make_test_app().await;

    let (status, json) = send(&app, "POST", "/api/scan", Some(json!({ "code": "garbage" }))).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["success"], false);
}
