use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use services::types::NewAttendee;

use crate::response::ApiResponse;
use crate::routes::common::{AttendeeResponse, service_error, transition_response};
use crate::state::AppState;

/// POST /api/attendees
///
/// **Body**:
/// ```json
/// { "name": "Jane Smith", "email": "jane@x.com", "phone": "", "gender": "female", "region": "South" }
/// ```
/// `phone` defaults to empty and `gender` to `male`.
///
/// ### Responses
/// - `201 Created` with the new attendee, not checked in, with its QR code
/// - `400 Bad Request` if `name`, `email` or `region` is blank
/// - `500 Internal Server Error` on store failure
pub async fn create_attendee(State(state): State<AppState>, Json(body): Json<NewAttendee>) -> Response {
    let mut session = state.session().write().await;
    match session.add_attendee(body).await {
        Ok(attendee) => (
            StatusCode::CREATED,
            Json(ApiResponse::success(
                AttendeeResponse::from(attendee),
                "Attendee registered",
            )),
        )
            .into_response(),
        Err(err) => service_error(err),
    }
}

/// POST /api/attendees/{id}/check-in
///
/// Always permitted. Repeating it refreshes the check-in time.
pub async fn check_in(State(state): State<AppState>, Path(id): Path<i64>) -> Response {
    let result = state.session().write().await.check_in(id).await;
    match result {
        Ok(outcome) => transition_response(outcome),
        Err(err) => service_error(err),
    }
}

/// POST /api/attendees/{id}/check-out
///
/// ### Responses
/// - `200 OK` with the updated attendee and the new log entry
/// - `404 Not Found`
/// - `409 Conflict` if the attendee has never checked in
pub async fn check_out(State(state): State<AppState>, Path(id): Path<i64>) -> Response {
    let result = state.session().write().await.check_out(id).await;
    match result {
        Ok(outcome) => transition_response(outcome),
        Err(err) => service_error(err),
    }
}

/// POST /api/attendees/{id}/toggle
pub async fn toggle_status(State(state): State<AppState>, Path(id): Path<i64>) -> Response {
    let result = state.session().write().await.toggle_status(id).await;
    match result {
        Ok(outcome) => transition_response(outcome),
        Err(err) => service_error(err),
    }
}
