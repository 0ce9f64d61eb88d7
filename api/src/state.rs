//! Application state shared across Axum route handlers.
//!
//! Handlers reach the attendee session through `State<AppState>`. The session
//! sits behind a `tokio` `RwLock`: reads of the cache share the lock, while every
//! mutation holds the write lock until the store has answered.

use std::sync::Arc;

use sea_orm::DatabaseConnection;
use services::attendance_service::AttendanceService;
use services::session::AttendeeSession;
use tokio::sync::RwLock;
use util::config;

#[derive(Clone)]
pub struct AppState {
    session: Arc<RwLock<AttendeeSession>>,
}

impl AppState {
    /// Builds a session over `db` with the configured scanner re-arm window.
    /// The cache starts empty; call [`AppState::warm_up`] to load it.
    pub fn new(db: DatabaseConnection) -> Self {
        let service = AttendanceService::from_connection(db);
        let session = AttendeeSession::new(service, config::scan_rearm());

        Self {
            session: Arc::new(RwLock::new(session)),
        }
    }

    pub fn session(&self) -> &Arc<RwLock<AttendeeSession>> {
        &self.session
    }

    /// Loads both collections into the session cache. Failures are logged and
    /// left in the session's `last_error`; the server still starts.
    pub async fn warm_up(&self) {
        let mut session = self.session.write().await;
        if let Err(err) = session.refresh_attendees().await {
            tracing::warn!(error = %err, "Initial attendee load failed");
        }
        if let Err(err) = session.refresh_logs().await {
            tracing::warn!(error = %err, "Initial log load failed");
        }
    }
}
