use super::{ids, register};
use crate::helpers::{make_test_app, send};
use axum::http::StatusCode;

#[tokio::test]
async fn list_returns_registration_order_and_filters() {
    let (app, _) = make_test_app().await;
    let john = register(&app, "John Doe", "+1234567890", "North").await;
    let jane = register(&app, "Jane Smith", "+1987654321", "South").await;
    let alex = register(&app, "Alex Johnson", "+1122334455", "East").await;

    let (status, json) = send(&app, "GET", "/api/attendees", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&json), vec![john, jane, alex]);

    let (_, json) = send(&app, "GET", "/api/attendees?query=john", None).await;
    assert_eq!(ids(&json), vec![john, alex]);

    let (_, json) = send(&app, "GET", "/api/attendees?query=SOUTH", None).await;
    assert_eq!(ids(&json), vec![jane]);
}

#[tokio::test]
async fn refresh_reloads_from_the_store() {
    let (app, _) = make_test_app().await;
    let id = register(&app, "Jane Smith", "", "South").await;

    let (status, json) = send(&app, "GET", "/api/attendees?refresh=true", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&json), vec![id]);
}

#[tokio::test]
async fn get_one_and_unknown() {
    let (app, _) = make_test_app().await;
    let id = register(&app, "Jane Smith", "", "South").await;

    let (status, json) = send(&app, "GET", &format!("/api/attendees/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["email"], "jane.smith@x.com");

    let (status, json) = send(&app, "GET", "/api/attendees/4242", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["success"], false);
}

#[tokio::test]
async fn stats_count_derived_statuses() {
    let (app, _) = make_test_app().await;
    let a = register(&app, "A", "", "North").await;
    let b = register(&app, "B", "", "North").await;
    register(&app, "C", "", "North").await;

    send(&app, "POST", &format!("/api/attendees/{a}/check-in"), None).await;
    send(&app, "POST", &format!("/api/attendees/{b}/check-in"), None).await;
    send(&app, "POST", &format!("/api/attendees/{b}/check-out"), None).await;

    let (status, json) = send(&app, "GET", "/api/attendees/stats", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["total"], 3);
    assert_eq!(json["data"]["checkedIn"], 1);
    assert_eq!(json["data"]["checkedOut"], 1);
    assert_eq!(json["data"]["notCheckedIn"], 1);
}

#[tokio::test]
async fn logs_and_history_newest_first() {
    let (app, _) = make_test_app().await;
    let id = register(&app, "Jane Smith", "", "South").await;
    send(&app, "POST", &format!("/api/attendees/{id}/check-in"), None).await;
    send(&app, "POST", &format!("/api/attendees/{id}/check-out"), None).await;

    let (status, logs) = send(&app, "GET", &format!("/api/attendees/{id}/logs"), None).await;
    assert_eq!(status, StatusCode::OK);
    let actions: Vec<_> = logs["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|l| l["action"].as_str().unwrap().to_owned())
        .collect();
    assert_eq!(actions, vec!["check_out", "check_in"]);

    let (status, history) = send(&app, "GET", &format!("/api/attendees/{id}/history"), None).await;
    assert_eq!(status, StatusCode::OK);
    let entries = history["data"].as_array().unwrap();
    assert_eq!(entries.len(), 2);
    assert!(entries.iter().all(|e| e["synthetic"] == false));
    assert!(entries[0]["displayTime"].as_str().unwrap().contains("M"));
}

#[tokio::test]
async fn history_of_unknown_attendee_is_not_found() {
    let (app, _) = make_test_app().await;

    let (status, _) = send(&app, "GET", "/api/attendees/77/history", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}
