//! HTTP route entry point for `/api/...`.
//!
//! Route groups:
//! - `/health` → liveness probe
//! - `/attendees` → registration, lookup, transitions, deletion, per-attendee logs and history
//! - `/logs` → the full attendance log
//! - `/scan` → QR scanner entry point
//! - `/session` → session loading flags and last error

use crate::routes::{
    attendees::attendees_routes, health::health_routes, logs::logs_routes, scan::scan_routes,
    session::session_routes,
};
use crate::state::AppState;
use axum::Router;

pub mod attendees;
pub mod common;
pub mod health;
pub mod logs;
pub mod scan;
pub mod session;

/// Builds the `/api` router with its state already applied.
pub fn routes(app_state: AppState) -> Router {
    Router::new()
        .nest("/health", health_routes())
        .nest("/attendees", attendees_routes())
        .nest("/logs", logs_routes())
        .nest("/scan", scan_routes())
        .nest("/session", session_routes())
        .with_state(app_state)
}
