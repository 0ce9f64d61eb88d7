use super::{ids, register};
use crate::helpers::{make_test_app, send};
use axum::http::StatusCode;

#[tokio::test]
async fn delete_removes_attendee_and_its_logs() {
    let (app, _) = make_test_app().await;
    let a = register(&app, "A", "", "North").await;
    let b = register(&app, "B", "", "North").await;
    send(&app, "POST", &format!("/api/attendees/{a}/check-in"), None).await;
    send(&app, "POST", &format!("/api/attendees/{b}/check-in"), None).await;

    let (status, json) = send(&app, "DELETE", &format!("/api/attendees/{a}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["message"], "Attendee deleted");

    let (_, list) = send(&app, "GET", "/api/attendees?refresh=true", None).await;
    assert_eq!(ids(&list), vec![b]);

    let (_, logs) = send(&app, "GET", "/api/logs?refresh=true", None).await;
    let logs = logs["data"].as_array().unwrap();
    assert_eq!(logs.len(), 1);
    assert_eq!(logs[0]["attendeeId"], b);
}

#[tokio::test]
async fn delete_unknown_is_not_found() {
    let (app, _) = make_test_app().await;

    let (status, _) = send(&app, "DELETE", "/api/attendees/31337", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_all_clears_both_collections() {
    let (app, _) = make_test_app().await;
    let a = register(&app, "A", "", "North").await;
    register(&app, "B", "", "South").await;
    send(&app, "POST", &format!("/api/attendees/{a}/check-in"), None).await;

    let (status, _) = send(&app, "DELETE", "/api/attendees", None).await;
    assert_eq!(status, StatusCode::OK);

    let (_, list) = send(&app, "GET", "/api/attendees?refresh=true", None).await;
    assert!(ids(&list).is_empty());
    let (_, logs) = send(&app, "GET", "/api/logs?refresh=true", None).await;
    assert!(logs["data"].as_array().unwrap().is_empty());
}
