use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};

use crate::response::ApiResponse;
use crate::routes::common::{RefreshQuery, service_error};
use crate::state::AppState;

pub fn logs_routes() -> Router<AppState> {
    Router::new().route("/", get(list_logs))
}

/// GET /api/logs
///
/// Every log entry, newest first. Pass `?refresh=true` to reload from the
/// store first.
pub async fn list_logs(State(state): State<AppState>, Query(q): Query<RefreshQuery>) -> Response {
    if q.refresh {
        let mut session = state.session().write().await;
        if let Err(err) = session.refresh_logs().await {
            return service_error(err);
        }
    }

    let logs = state.session().read().await.logs().to_vec();
    (
        StatusCode::OK,
        Json(ApiResponse::success(logs, "Attendance logs retrieved")),
    )
        .into_response()
}
