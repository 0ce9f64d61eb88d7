use chrono::{DateTime, Utc};
use db::models::attendance_log;
use sea_orm::DatabaseConnection;

use crate::attendee_repository::logged;
use crate::error::ServiceResult;
use crate::types::{AttendanceLog, LogAction};

/// Append-only access to the `attendance_logs` table.
#[derive(Clone)]
pub struct AttendanceLogRepository {
    db: DatabaseConnection,
}

impl AttendanceLogRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Every entry, newest first.
    pub async fn find_all(&self) -> ServiceResult<Vec<AttendanceLog>> {
        let rows = attendance_log::Model::find_all(&self.db)
            .await
            .map_err(logged("fetching attendance logs"))?;
        Ok(rows.into_iter().map(AttendanceLog::from).collect())
    }

    /// Entries for one attendee, newest first.
    pub async fn find_by_attendee(&self, attendee_id: i64) -> ServiceResult<Vec<AttendanceLog>> {
        let rows = attendance_log::Model::find_by_attendee(&self.db, attendee_id)
            .await
            .map_err(logged("fetching attendance logs for attendee"))?;
        Ok(rows.into_iter().map(AttendanceLog::from).collect())
    }

    pub async fn create(
        &self,
        attendee_id: i64,
        attendee_name: &str,
        action: LogAction,
        timestamp: DateTime<Utc>,
    ) -> ServiceResult<AttendanceLog> {
        let row = attendance_log::Model::create(&self.db, attendee_id, attendee_name, action, timestamp)
            .await
            .map_err(logged("creating attendance log"))?;
        Ok(row.into())
    }
}
