use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};

use crate::response::ApiResponse;
use crate::state::AppState;

pub fn session_routes() -> Router<AppState> {
    Router::new().route("/", get(get_session_status))
}

/// GET /api/session
///
/// Loading flags and the last store failure recorded by the session.
///
/// ```json
/// { "attendeesLoading": false, "logsLoading": false, "lastError": null }
/// ```
pub async fn get_session_status(State(state): State<AppState>) -> Response {
    let status = state.session().read().await.status();
    (
        StatusCode::OK,
        Json(ApiResponse::success(status, "Session status retrieved")),
    )
        .into_response()
}
