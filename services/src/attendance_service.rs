//! Check-in / check-out transitions.
//!
//! Every applied transition updates exactly one attendee row and then appends
//! one log entry. The attendee row is the source of truth: if the log append
//! fails, the failure is logged and the transition still counts as applied.

use chrono::Utc;
use sea_orm::DatabaseConnection;
use tracing::{info, warn};

use crate::attendance_log_repository::AttendanceLogRepository;
use crate::attendee_repository::AttendeeRepository;
use crate::error::ServiceResult;
use crate::status::{AttendeeStatus, HistoryEntry, reconcile_history};
use crate::types::{AttendanceLog, Attendee, LogAction};

/// A transition that reached the store.
#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    pub action: LogAction,
    /// The attendee row exactly as the store returned it.
    pub attendee: Attendee,
    /// `None` when the log append failed.
    pub log: Option<AttendanceLog>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum TransitionOutcome {
    Applied(Transition),
    NotFound,
    /// Check-out refused because the attendee never checked in.
    CheckInRequired,
}

impl TransitionOutcome {
    pub fn applied(&self) -> Option<&Transition> {
        match self {
            TransitionOutcome::Applied(transition) => Some(transition),
            _ => None,
        }
    }
}

#[derive(Clone)]
pub struct AttendanceService {
    attendees: AttendeeRepository,
    logs: AttendanceLogRepository,
}

impl AttendanceService {
    pub fn new(attendees: AttendeeRepository, logs: AttendanceLogRepository) -> Self {
        Self { attendees, logs }
    }

    pub fn from_connection(db: DatabaseConnection) -> Self {
        Self::new(
            AttendeeRepository::with_qr_codes(db.clone()),
            AttendanceLogRepository::new(db),
        )
    }

    pub fn attendees(&self) -> &AttendeeRepository {
        &self.attendees
    }

    pub fn logs(&self) -> &AttendanceLogRepository {
        &self.logs
    }

    /// Always permitted. Repeating it refreshes `check_in_time` and appends
    /// another log entry.
    pub async fn check_in(&self, id: i64) -> ServiceResult<TransitionOutcome> {
        let now = Utc::now();
        let Some(attendee) = self.attendees.mark_checked_in(id, now).await? else {
            return Ok(TransitionOutcome::NotFound);
        };

        info!(attendee_id = id, "Attendee checked in");
        Ok(TransitionOutcome::Applied(
            self.record(attendee, LogAction::CheckIn).await,
        ))
    }

    /// Requires the attendee to be currently checked in; otherwise nothing is
    /// written and `CheckInRequired` is returned. This also refuses a second
    /// check-out without a check-in in between.
    pub async fn check_out(&self, id: i64) -> ServiceResult<TransitionOutcome> {
        let Some(current) = self.attendees.find_by_id(id).await? else {
            return Ok(TransitionOutcome::NotFound);
        };
        if !is_present(&current) {
            info!(attendee_id = id, "Check-out refused: attendee is not checked in");
            return Ok(TransitionOutcome::CheckInRequired);
        }

        let now = Utc::now();
        let Some(attendee) = self.attendees.mark_checked_out(id, now).await? else {
            return Ok(TransitionOutcome::NotFound);
        };

        info!(attendee_id = id, "Attendee checked out");
        Ok(TransitionOutcome::Applied(
            self.record(attendee, LogAction::CheckOut).await,
        ))
    }

    /// Checks out an attendee who is currently in, and checks in anyone
    /// else, including an attendee whose last action was a check-out.
    pub async fn toggle_status(&self, id: i64) -> ServiceResult<TransitionOutcome> {
        let Some(current) = self.attendees.find_by_id(id).await? else {
            return Ok(TransitionOutcome::NotFound);
        };

        if is_present(&current) {
            self.check_out(id).await
        } else {
            self.check_in(id).await
        }
    }

    /// Attendance history for one attendee; `None` if the id is unknown.
    pub async fn history(&self, id: i64) -> ServiceResult<Option<Vec<HistoryEntry>>> {
        let Some(attendee) = self.attendees.find_by_id(id).await? else {
            return Ok(None);
        };
        let logs = self.logs.find_by_attendee(id).await?;
        Ok(Some(reconcile_history(&attendee, &logs)))
    }

    async fn record(&self, attendee: Attendee, action: LogAction) -> Transition {
        let timestamp = match action {
            LogAction::CheckIn => attendee.check_in_time,
            LogAction::CheckOut => attendee.check_out_time,
        }
        .unwrap_or_else(Utc::now);

        let log = match self
            .logs
            .create(attendee.id, &attendee.name, action, timestamp)
            .await
        {
            Ok(log) => Some(log),
            Err(err) => {
                warn!(attendee_id = attendee.id, %action, error = %err, "Attendance log append failed");
                None
            }
        };

        Transition {
            action,
            attendee,
            log,
        }
    }
}

/// Checked in and not checked out since.
fn is_present(attendee: &Attendee) -> bool {
    attendee.is_checked_in && attendee.status() == AttendeeStatus::CheckedIn
}
