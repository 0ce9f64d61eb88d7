use crate::helpers::{make_test_app, send};
use axum::http::StatusCode;

#[tokio::test]
async fn session_status_is_idle_after_warm_up() {
    let (app, _) = make_test_app().await;

    let (status, json) = send(&app, "GET", "/api/session", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["attendeesLoading"], false);
    assert_eq!(json["data"]["logsLoading"], false);
    assert!(json["data"]["lastError"].is_null());
}
