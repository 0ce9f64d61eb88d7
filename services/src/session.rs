//! In-memory mirror of the attendee and log collections for one session.
//!
//! The cache is keyed by attendee id. A refresh replaces it wholesale; a
//! mutation patches it only with rows the store returned, never with caller
//! input. Failed reads record an error and keep the previous data.

use std::collections::BTreeMap;
use std::time::{Duration, Instant};

use serde::Serialize;
use tracing::{debug, warn};

use crate::attendance_service::{AttendanceService, TransitionOutcome};
use crate::error::{ServiceError, ServiceResult};
use crate::scan::ScanDebouncer;
use crate::status::{AttendeeStatus, HistoryEntry, reconcile_history};
use crate::types::{AttendanceLog, Attendee, NewAttendee};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionStats {
    pub total: usize,
    pub checked_in: usize,
    pub checked_out: usize,
    pub not_checked_in: usize,
}

/// Snapshot of the session's loading flags and last recorded failure.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionStatus {
    pub attendees_loading: bool,
    pub logs_loading: bool,
    pub last_error: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ScanOutcome {
    /// Scanner was still disarmed from the previous scan.
    Ignored,
    /// The payload does not name a known attendee.
    UnknownCode(String),
    Transition(TransitionOutcome),
}

pub struct AttendeeSession {
    service: AttendanceService,
    attendees: BTreeMap<i64, Attendee>,
    logs: Vec<AttendanceLog>,
    attendees_loading: bool,
    logs_loading: bool,
    last_error: Option<String>,
    scanner: ScanDebouncer,
}

impl AttendeeSession {
    pub fn new(service: AttendanceService, scan_rearm: Duration) -> Self {
        Self {
            service,
            attendees: BTreeMap::new(),
            logs: Vec::new(),
            attendees_loading: false,
            logs_loading: false,
            last_error: None,
            scanner: ScanDebouncer::new(scan_rearm),
        }
    }

    // --- Read-side accessors ---

    /// Cached attendees in id (registration) order.
    pub fn attendees(&self) -> Vec<&Attendee> {
        self.attendees.values().collect()
    }

    pub fn attendee(&self, id: i64) -> Option<&Attendee> {
        self.attendees.get(&id)
    }

    /// Cached log entries, newest first.
    pub fn logs(&self) -> &[AttendanceLog] {
        &self.logs
    }

    pub fn status(&self) -> SessionStatus {
        SessionStatus {
            attendees_loading: self.attendees_loading,
            logs_loading: self.logs_loading,
            last_error: self.last_error.clone(),
        }
    }

    fn record_error(&mut self, err: &ServiceError) {
        self.last_error = Some(err.to_string());
    }

    // --- Refresh ---

    pub async fn refresh_attendees(&mut self) -> ServiceResult<()> {
        self.attendees_loading = true;
        let result = self.service.attendees().find_all().await;
        self.attendees_loading = false;

        match result {
            Ok(rows) => {
                self.attendees = rows.into_iter().map(|a| (a.id, a)).collect();
                self.last_error = None;
                debug!(count = self.attendees.len(), "Attendee cache refreshed");
                Ok(())
            }
            Err(err) => {
                self.record_error(&err);
                Err(err)
            }
        }
    }

    pub async fn refresh_logs(&mut self) -> ServiceResult<()> {
        self.logs_loading = true;
        let result = self.service.logs().find_all().await;
        self.logs_loading = false;

        match result {
            Ok(logs) => {
                self.logs = logs;
                self.last_error = None;
                debug!(count = self.logs.len(), "Log cache refreshed");
                Ok(())
            }
            Err(err) => {
                self.record_error(&err);
                Err(err)
            }
        }
    }

    // --- Mutations ---

    pub async fn add_attendee(&mut self, new: NewAttendee) -> ServiceResult<Attendee> {
        match self.service.attendees().create(new).await {
            Ok(created) => {
                self.attendees.insert(created.id, created.clone());
                Ok(created)
            }
            Err(err) => {
                self.record_error(&err);
                Err(err)
            }
        }
    }

    pub async fn check_in(&mut self, id: i64) -> ServiceResult<TransitionOutcome> {
        let result = self.service.check_in(id).await;
        self.absorb(id, result)
    }

    /// Refused with `CheckInRequired` unless the attendee is currently checked in.
    pub async fn check_out(&mut self, id: i64) -> ServiceResult<TransitionOutcome> {
        let result = self.service.check_out(id).await;
        self.absorb(id, result)
    }

    pub async fn toggle_status(&mut self, id: i64) -> ServiceResult<TransitionOutcome> {
        let result = self.service.toggle_status(id).await;
        self.absorb(id, result)
    }

    fn absorb(
        &mut self,
        id: i64,
        result: ServiceResult<TransitionOutcome>,
    ) -> ServiceResult<TransitionOutcome> {
        match result {
            Ok(outcome) => {
                match &outcome {
                    TransitionOutcome::Applied(transition) => {
                        self.attendees
                            .insert(transition.attendee.id, transition.attendee.clone());
                        if let Some(log) = &transition.log {
                            self.logs.insert(0, log.clone());
                        }
                    }
                    TransitionOutcome::NotFound => self.evict(id),
                    TransitionOutcome::CheckInRequired => {}
                }
                Ok(outcome)
            }
            Err(err) => {
                self.record_error(&err);
                Err(err)
            }
        }
    }

    /// Drops an attendee and its cached logs.
    fn evict(&mut self, id: i64) {
        if self.attendees.remove(&id).is_some() {
            debug!(attendee_id = id, "Attendee evicted from cache");
        }
        self.logs.retain(|log| log.attendee_id != id);
    }

    /// Returns `false` if the store had no such attendee; any stale cache
    /// entry is evicted either way.
    pub async fn delete_attendee(&mut self, id: i64) -> ServiceResult<bool> {
        match self.service.attendees().delete(id).await {
            Ok(found) => {
                self.evict(id);
                Ok(found)
            }
            Err(err) => {
                self.record_error(&err);
                Err(err)
            }
        }
    }

    pub async fn delete_all_attendees(&mut self) -> ServiceResult<()> {
        match self.service.attendees().delete_all().await {
            Ok(removed) => {
                debug!(removed, "All attendees deleted");
                self.attendees.clear();
                self.logs.clear();
                Ok(())
            }
            Err(err) => {
                self.record_error(&err);
                Err(err)
            }
        }
    }

    /// Reads straight from the store. Failures degrade to an empty list.
    pub async fn get_logs_for_attendee(&mut self, id: i64) -> Vec<AttendanceLog> {
        match self.service.logs().find_by_attendee(id).await {
            Ok(logs) => logs,
            Err(err) => {
                warn!(attendee_id = id, error = %err, "Falling back to empty log list");
                self.record_error(&err);
                Vec::new()
            }
        }
    }

    /// Reconciled history for a cached attendee; `None` if the id is unknown.
    pub async fn history(&mut self, id: i64) -> Option<Vec<HistoryEntry>> {
        let attendee = self.attendees.get(&id)?.clone();
        let logs = self.get_logs_for_attendee(id).await;
        Some(reconcile_history(&attendee, &logs))
    }

    // --- Dashboard helpers ---

    /// Case-insensitive match on name, phone or region. Blank terms match everything.
    pub fn search(&self, term: &str) -> Vec<&Attendee> {
        let needle = term.trim().to_lowercase();
        self.attendees
            .values()
            .filter(|a| needle.is_empty() || a.matches(&needle))
            .collect()
    }

    pub fn stats(&self) -> SessionStats {
        self.attendees
            .values()
            .fold(SessionStats::default(), |mut stats, attendee| {
                stats.total += 1;
                match attendee.status() {
                    AttendeeStatus::CheckedIn => stats.checked_in += 1,
                    AttendeeStatus::CheckedOut => stats.checked_out += 1,
                    AttendeeStatus::NotCheckedIn => stats.not_checked_in += 1,
                }
                stats
            })
    }

    // --- Scanner ---

    /// Toggles the attendee named by a scanned QR payload.
    pub async fn scan(&mut self, code: &str, now: Instant) -> ServiceResult<ScanOutcome> {
        let code = code.trim();
        if !self.scanner.accept(now) {
            return Ok(ScanOutcome::Ignored);
        }

        let id = match code.parse::<i64>() {
            Ok(id) if self.attendees.contains_key(&id) => id,
            _ => return Ok(ScanOutcome::UnknownCode(code.to_owned())),
        };

        self.toggle_status(id).await.map(ScanOutcome::Transition)
    }
}
