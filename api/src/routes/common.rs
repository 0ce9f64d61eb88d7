//! Response shapes and outcome-to-status mapping shared by the route groups.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use services::attendance_service::{Transition, TransitionOutcome};
use services::error::ServiceError;
use services::status::AttendeeStatus;
use services::types::{AttendanceLog, Attendee, LogAction};

use crate::response::ApiResponse;

/// An attendee as returned over HTTP: the stored fields plus the derived status.
#[derive(Debug, Serialize)]
pub struct AttendeeResponse {
    #[serde(flatten)]
    pub attendee: Attendee,
    pub status: AttendeeStatus,
}

impl From<Attendee> for AttendeeResponse {
    fn from(attendee: Attendee) -> Self {
        let status = attendee.status();
        Self { attendee, status }
    }
}

impl From<&Attendee> for AttendeeResponse {
    fn from(attendee: &Attendee) -> Self {
        attendee.clone().into()
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransitionResponse {
    pub action: LogAction,
    pub attendee: AttendeeResponse,
    /// `null` when the attendee was updated but the log append failed.
    pub log: Option<AttendanceLog>,
}

impl From<Transition> for TransitionResponse {
    fn from(t: Transition) -> Self {
        Self {
            action: t.action,
            attendee: t.attendee.into(),
            log: t.log,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct RefreshQuery {
    /// Reload from the store before answering.
    #[serde(default)]
    pub refresh: bool,
}

pub fn not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(ApiResponse::<()>::error("Attendee not found")),
    )
        .into_response()
}

/// 400 for validation failures, 500 for store failures.
pub fn service_error(err: ServiceError) -> Response {
    let status = if err.is_validation() {
        StatusCode::BAD_REQUEST
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    };
    (status, Json(ApiResponse::<()>::error(err.to_string()))).into_response()
}

pub fn transition_response(outcome: TransitionOutcome) -> Response {
    match outcome {
        TransitionOutcome::Applied(transition) => {
            let message = match transition.action {
                LogAction::CheckIn => "Attendee checked in",
                LogAction::CheckOut => "Attendee checked out",
            };
            (
                StatusCode::OK,
                Json(ApiResponse::success(
                    TransitionResponse::from(transition),
                    message,
                )),
            )
                .into_response()
        }
        TransitionOutcome::NotFound => not_found(),
        TransitionOutcome::CheckInRequired => (
            StatusCode::CONFLICT,
            Json(ApiResponse::<()>::error(
                "Attendee must check in before checking out",
            )),
        )
            .into_response(),
    }
}
