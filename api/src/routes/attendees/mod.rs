//! `/attendees` route group.
//!
//! - `GET    /attendees`                 → list (optionally filtered and refreshed)
//! - `POST   /attendees`                 → register
//! - `DELETE /attendees`                 → delete everyone and every log
//! - `GET    /attendees/stats`           → status totals
//! - `GET    /attendees/{id}`            → one attendee
//! - `DELETE /attendees/{id}`            → delete one attendee and its logs
//! - `POST   /attendees/{id}/check-in`   → check in
//! - `POST   /attendees/{id}/check-out`  → check out (requires a prior check-in)
//! - `POST   /attendees/{id}/toggle`     → check in or out depending on status
//! - `GET    /attendees/{id}/logs`       → log entries for one attendee
//! - `GET    /attendees/{id}/history`    → reconciled attendance history

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

mod delete;
mod get;
mod post;

pub use delete::{delete_all_attendees, delete_attendee};
pub use get::{get_attendee, get_attendee_history, get_attendee_logs, get_stats, list_attendees};
pub use post::{check_in, check_out, create_attendee, toggle_status};

pub fn attendees_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(list_attendees)
                .post(create_attendee)
                .delete(delete_all_attendees),
        )
        .route("/stats", get(get_stats))
        .route("/{id}", get(get_attendee).delete(delete_attendee))
        .route("/{id}/check-in", post(check_in))
        .route("/{id}/check-out", post(check_out))
        .route("/{id}/toggle", post(toggle_status))
        .route("/{id}/logs", get(get_attendee_logs))
        .route("/{id}/history", get(get_attendee_history))
}
