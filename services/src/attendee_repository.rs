use chrono::{DateTime, Utc};
use db::models::attendee;
use sea_orm::{DatabaseConnection, DbErr};
use std::sync::Arc;
use tracing::{error, warn};
use validator::Validate;

use crate::error::{ServiceError, ServiceResult};
use crate::qr_code::{CodeGenerator, QrCodeGenerator};
use crate::types::{Attendee, NewAttendee};
use util::validation::format_validation_errors;

/// Maps `attendees` rows to [`Attendee`] and attaches a fresh QR code to each.
#[derive(Clone)]
pub struct AttendeeRepository {
    db: DatabaseConnection,
    codes: Arc<dyn CodeGenerator>,
}

impl AttendeeRepository {
    pub fn new(db: DatabaseConnection, codes: Arc<dyn CodeGenerator>) -> Self {
        Self { db, codes }
    }

    pub fn with_qr_codes(db: DatabaseConnection) -> Self {
        Self::new(db, Arc::new(QrCodeGenerator::default()))
    }

    fn to_attendee(&self, row: attendee::Model) -> Attendee {
        let qr_code = match self.codes.generate(&row.id.to_string()) {
            Ok(code) => Some(code),
            Err(err) => {
                warn!(attendee_id = row.id, error = %err, "QR code generation failed");
                None
            }
        };

        Attendee {
            id: row.id,
            name: row.name,
            email: row.email,
            phone: row.phone,
            gender: row.gender,
            region: row.region,
            is_checked_in: row.is_checked_in,
            is_checked_out: row.is_checked_out,
            check_in_time: row.check_in_time,
            check_out_time: row.check_out_time,
            created_at: row.created_at,
            qr_code,
        }
    }

    pub async fn find_all(&self) -> ServiceResult<Vec<Attendee>> {
        let rows = attendee::Model::find_all(&self.db)
            .await
            .map_err(logged("fetching attendees"))?;
        Ok(rows.into_iter().map(|row| self.to_attendee(row)).collect())
    }

    pub async fn find_by_id(&self, id: i64) -> ServiceResult<Option<Attendee>> {
        let row = attendee::Model::find_by_id(&self.db, id)
            .await
            .map_err(logged("fetching attendee"))?;
        Ok(row.map(|row| self.to_attendee(row)))
    }

    /// Validates required fields, then inserts with both flags cleared.
    pub async fn create(&self, new: NewAttendee) -> ServiceResult<Attendee> {
        let new = new.normalized();
        new.validate()
            .map_err(|e| ServiceError::Validation(format_validation_errors(&e)))?;

        let row = attendee::Model::create(
            &self.db,
            &new.name,
            &new.email,
            &new.phone,
            new.gender,
            &new.region,
        )
        .await
        .map_err(logged("creating attendee"))?;

        Ok(self.to_attendee(row))
    }

    pub async fn mark_checked_in(
        &self,
        id: i64,
        at: DateTime<Utc>,
    ) -> ServiceResult<Option<Attendee>> {
        let row = attendee::Model::mark_checked_in(&self.db, id, at)
            .await
            .map_err(logged("checking in attendee"))?;
        Ok(row.map(|row| self.to_attendee(row)))
    }

    pub async fn mark_checked_out(
        &self,
        id: i64,
        at: DateTime<Utc>,
    ) -> ServiceResult<Option<Attendee>> {
        let row = attendee::Model::mark_checked_out(&self.db, id, at)
            .await
            .map_err(logged("checking out attendee"))?;
        Ok(row.map(|row| self.to_attendee(row)))
    }

    /// Removes the attendee together with its log entries.
    pub async fn delete(&self, id: i64) -> ServiceResult<bool> {
        attendee::Model::delete_with_logs(&self.db, id)
            .await
            .map_err(logged("deleting attendee"))
    }

    pub async fn delete_all(&self) -> ServiceResult<u64> {
        attendee::Model::delete_all(&self.db)
            .await
            .map_err(logged("deleting all attendees"))
    }
}

/// Logs a store failure at the repository boundary before handing it on.
pub(crate) fn logged(context: &'static str) -> impl FnOnce(DbErr) -> ServiceError {
    move |err| {
        error!(error = %err, "Store failure while {context}");
        ServiceError::Database(err)
    }
}
