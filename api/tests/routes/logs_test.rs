use crate::helpers::{make_test_app, send};
use crate::routes::attendees::register;
use axum::http::StatusCode;

#[tokio::test]
async fn logs_list_every_transition_newest_first() {
    let (app, _) = make_test_app().await;
    let a = register(&app, "A", "", "North").await;
    let b = register(&app, "B", "", "South").await;
    send(&app, "POST", &format!("/api/attendees/{a}/check-in"), None).await;
    send(&app, "POST", &format!("/api/attendees/{b}/check-in"), None).await;

    let (status, json) = send(&app, "GET", "/api/logs", None).await;

    assert_eq!(status, StatusCode::OK);
    let logs = json["data"].as_array().unwrap();
    assert_eq!(logs.len(), 2);
    assert_eq!(logs[0]["attendeeId"], b);
    assert_eq!(logs[1]["attendeeId"], a);

    let (_, refreshed) = send(&app, "GET", "/api/logs?refresh=true", None).await;
    assert_eq!(refreshed["data"].as_array().unwrap().len(), 2);
}
