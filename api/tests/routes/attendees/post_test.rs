use super::register;
use crate::helpers::{make_test_app, send};
use axum::http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn register_returns_created_attendee_with_qr_code() {
    let (app, _) = make_test_app().await;

    let (status, json) = send(
        &app,
        "POST",
        "/api/attendees",
        Some(json!({
            "name": "Jane Smith",
            "email": "jane@x.com",
            "phone": "",
            "gender": "female",
            "region": "South"
        })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(json["success"], true);
    assert_eq!(json["data"]["name"], "Jane Smith");
    assert_eq!(json["data"]["gender"], "female");
    assert_eq!(json["data"]["isCheckedIn"], false);
    assert_eq!(json["data"]["isCheckedOut"], false);
    assert_eq!(json["data"]["status"], "not_checked_in");
    assert!(json["data"]["checkInTime"].is_null());
    assert!(
        json["data"]["qrCode"]
            .as_str()
            .unwrap()
            .starts_with("data:image/svg+xml;base64,")
    );
}

#[tokio::test]
async fn register_without_required_fields_is_rejected() {
    let (app, state) = make_test_app().await;

    let (status, json) = send(
        &app,
        "POST",
        "/api/attendees",
        Some(json!({ "name": "Jane Smith", "email": "  " })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["success"], false);
    assert_eq!(json["message"], "Email is required; Region is required");
    assert!(state.session().read().await.attendees().is_empty());
}

#[tokio::test]
async fn check_in_then_check_out() {
    let (app, _) = make_test_app().await;
    let id = register(&app, "Jane Smith", "", "South").await;

    let (status, json) = send(&app, "POST", &format!("/api/attendees/{id}/check-in"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["message"], "Attendee checked in");
    assert_eq!(json["data"]["action"], "check_in");
    assert_eq!(json["data"]["attendee"]["status"], "checked_in");
    assert_eq!(json["data"]["log"]["attendeeId"], id);
    assert_eq!(json["data"]["log"]["attendeeName"], "Jane Smith");

    let (status, json) = send(&app, "POST", &format!("/api/attendees/{id}/check-out"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["action"], "check_out");
    assert_eq!(json["data"]["attendee"]["status"], "checked_out");
    assert_eq!(json["data"]["attendee"]["isCheckedIn"], true);
    assert_eq!(json["data"]["attendee"]["isCheckedOut"], true);
}

#[tokio::test]
async fn check_out_before_check_in_conflicts() {
    let (app, _) = make_test_app().await;
    let id = register(&app, "Jane Smith", "", "South").await;

    let (status, json) = send(&app, "POST", &format!("/api/attendees/{id}/check-out"), None).await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(json["success"], false);

    let (_, logs) = send(&app, "GET", &format!("/api/attendees/{id}/logs"), None).await;
    assert!(logs["data"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn repeated_check_out_conflicts() {
    let (app, _) = make_test_app().await;
    let id = register(&app, "Jane Smith", "", "South").await;
    send(&app, "POST", &format!("/api/attendees/{id}/check-in"), None).await;
    let (_, first) = send(&app, "POST", &format!("/api/attendees/{id}/check-out"), None).await;

    let (status, json) = send(&app, "POST", &format!("/api/attendees/{id}/check-out"), None).await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(json["success"], false);

    let (_, attendee) = send(&app, "GET", &format!("/api/attendees/{id}"), None).await;
    assert_eq!(
        attendee["data"]["checkOutTime"],
        first["data"]["attendee"]["checkOutTime"]
    );
    let (_, logs) = send(&app, "GET", &format!("/api/attendees/{id}/logs"), None).await;
    assert_eq!(logs["data"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn toggle_cycles_through_statuses() {
    let (app, _) = make_test_app().await;
    let id = register(&app, "Jane Smith", "", "South").await;
    let uri = format!("/api/attendees/{id}/toggle");

    let (_, first) = send(&app, "POST", &uri, None).await;
    let (_, second) = send(&app, "POST", &uri, None).await;
    let (_, third) = send(&app, "POST", &uri, None).await;

    assert_eq!(first["data"]["action"], "check_in");
    assert_eq!(second["data"]["action"], "check_out");
    assert_eq!(third["data"]["action"], "check_in");
    assert_eq!(third["data"]["attendee"]["status"], "checked_in");
}

#[tokio::test]
async fn transitions_on_unknown_attendee_are_not_found() {
    let (app, _) = make_test_app().await;

    for action in ["check-in", "check-out", "toggle"] {
        let (status, json) = send(&app, "POST", &format!("/api/attendees/999/{action}"), None).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{action}");
        assert_eq!(json["message"], "Attendee not found");
    }
}
