use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
};
use serde::{Deserialize, Serialize};
use services::session::ScanOutcome;
use std::time::Instant;

use crate::response::ApiResponse;
use crate::routes::common::{service_error, transition_response};
use crate::state::AppState;

pub fn scan_routes() -> Router<AppState> {
    Router::new().route("/", post(scan_code))
}

#[derive(Debug, Deserialize)]
pub struct ScanReq {
    /// Decoded QR payload, i.e. the attendee id as text.
    pub code: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct IgnoredScan {
    ignored: bool,
}

/// POST /api/scan
///
/// Toggles the attendee whose id is encoded in `code`. After an accepted scan
/// the scanner ignores further scans until it re-arms (`SCAN_REARM_MS`).
///
/// ### Responses
/// - `200 OK` with the transition, as for `/attendees/{id}/toggle`
/// - `200 OK` with `{ "ignored": true }` while the scanner is re-arming
/// - `404 Not Found` if the code does not match a known attendee
pub async fn scan_code(State(state): State<AppState>, Json(body): Json<ScanReq>) -> Response {
    let result = state
        .session()
        .write()
        .await
        .scan(&body.code, Instant::now())
        .await;

    match result {
        Ok(ScanOutcome::Ignored) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                IgnoredScan { ignored: true },
                "Scan ignored while the scanner re-arms",
            )),
        )
            .into_response(),
        Ok(ScanOutcome::UnknownCode(code)) => {
            tracing::info!(code = %code, "Scanned code does not match an attendee");
            (
                StatusCode::NOT_FOUND,
                Json(ApiResponse::<()>::error(format!(
                    "No attendee matches code '{code}'"
                ))),
            )
                .into_response()
        }
        Ok(ScanOutcome::Transition(outcome)) => transition_response(outcome),
        Err(err) => service_error(err),
    }
}
