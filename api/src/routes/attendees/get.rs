use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;

use crate::response::ApiResponse;
use crate::routes::common::{AttendeeResponse, not_found, service_error};
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    /// Case-insensitive filter over name, phone and region.
    pub query: Option<String>,
    #[serde(default)]
    pub refresh: bool,
}

/// GET /api/attendees
///
/// **Query**:
/// - `query` (optional): search term; blank or absent returns everyone
/// - `refresh` (optional, default `false`): reload the cache from the store first
///
/// ### Responses
/// - `200 OK` with the attendees in registration order, each with its derived `status`
/// - `500 Internal Server Error` if a requested refresh fails
pub async fn list_attendees(State(state): State<AppState>, Query(q): Query<ListQuery>) -> Response {
    if q.refresh {
        let mut session = state.session().write().await;
        if let Err(err) = session.refresh_attendees().await {
            return service_error(err);
        }
    }

    let session = state.session().read().await;
    let matches = match q.query.as_deref() {
        Some(term) => session.search(term),
        None => session.attendees(),
    };
    let attendees: Vec<AttendeeResponse> = matches
        .into_iter()
        .map(AttendeeResponse::from)
        .collect();

    (
        StatusCode::OK,
        Json(ApiResponse::success(attendees, "Attendees retrieved")),
    )
        .into_response()
}

/// GET /api/attendees/stats
///
/// ```json
/// { "total": 3, "checkedIn": 1, "checkedOut": 1, "notCheckedIn": 1 }
/// ```
pub async fn get_stats(State(state): State<AppState>) -> Response {
    let stats = state.session().read().await.stats();
    (
        StatusCode::OK,
        Json(ApiResponse::success(stats, "Attendance statistics retrieved")),
    )
        .into_response()
}

/// GET /api/attendees/{id}
///
/// ### Responses
/// - `200 OK` with the cached attendee
/// - `404 Not Found` if the id is not in the cache
pub async fn get_attendee(State(state): State<AppState>, Path(id): Path<i64>) -> Response {
    let session = state.session().read().await;
    match session.attendee(id) {
        Some(attendee) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                AttendeeResponse::from(attendee),
                "Attendee retrieved",
            )),
        )
            .into_response(),
        None => not_found(),
    }
}

/// GET /api/attendees/{id}/logs
///
/// Reads straight from the store, newest first. A store failure yields an
/// empty list rather than an error.
pub async fn get_attendee_logs(State(state): State<AppState>, Path(id): Path<i64>) -> Response {
    let logs = state.session().write().await.get_logs_for_attendee(id).await;
    (
        StatusCode::OK,
        Json(ApiResponse::success(logs, "Attendance logs retrieved")),
    )
        .into_response()
}

/// GET /api/attendees/{id}/history
///
/// Real log entries when there are any; otherwise entries synthesized from the
/// attendee's check-in and check-out times, marked `"synthetic": true`.
///
/// ### Responses
/// - `200 OK`
/// - `404 Not Found` if the id is not in the cache
pub async fn get_attendee_history(State(state): State<AppState>, Path(id): Path<i64>) -> Response {
    let history = state.session().write().await.history(id).await;
    match history {
        Some(entries) => (
            StatusCode::OK,
            Json(ApiResponse::success(entries, "Attendance history retrieved")),
        )
            .into_response(),
        None => not_found(),
    }
}
