use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::response::ApiResponse;
use crate::routes::common::{not_found, service_error};
use crate::state::AppState;

/// DELETE /api/attendees/{id}
///
/// Removes the attendee and every log entry that references it.
///
/// ### Responses
/// - `200 OK`
/// - `404 Not Found`
pub async fn delete_attendee(State(state): State<AppState>, Path(id): Path<i64>) -> Response {
    let result = state.session().write().await.delete_attendee(id).await;
    match result {
        Ok(true) => (
            StatusCode::OK,
            Json(ApiResponse::<()>::success((), "Attendee deleted")),
        )
            .into_response(),
        Ok(false) => not_found(),
        Err(err) => service_error(err),
    }
}

/// DELETE /api/attendees
pub async fn delete_all_attendees(State(state): State<AppState>) -> Response {
    let result = state.session().write().await.delete_all_attendees().await;
    match result {
        Ok(()) => (
            StatusCode::OK,
            Json(ApiResponse::<()>::success((), "All attendees deleted")),
        )
            .into_response(),
        Err(err) => service_error(err),
    }
}
