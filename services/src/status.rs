//! Status derivation and attendance-history reconciliation.
//!
//! The stored `is_checked_in` / `is_checked_out` flags are never cleared, so
//! both can be true at once. The lifecycle status is therefore computed from
//! the relative order of the two timestamps: the most recent action wins.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::Serialize;
use strum::Display;

use crate::types::{AttendanceLog, Attendee, LogAction};

/// Shown in place of a timestamp that cannot be parsed.
pub const INVALID_DATE: &str = "invalid date";

/// Id prefix of history entries that were synthesized from attendee timestamps.
pub const SYNTHETIC_ID_PREFIX: &str = "synthetic-";

const DISPLAY_FORMAT: &str = "%b %-d, %Y %-I:%M %p";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum AttendeeStatus {
    NotCheckedIn,
    CheckedIn,
    CheckedOut,
}

impl AttendeeStatus {
    /// Absent timestamps count as the Unix epoch. Equal timestamps resolve to
    /// `CheckedIn`; only a strictly later check-out yields `CheckedOut`.
    pub fn derive(check_in: Option<DateTime<Utc>>, check_out: Option<DateTime<Utc>>) -> Self {
        let zero = DateTime::<Utc>::default();
        let in_time = check_in.unwrap_or(zero);
        let out_time = check_out.unwrap_or(zero);

        if in_time == zero && out_time == zero {
            AttendeeStatus::NotCheckedIn
        } else if out_time > in_time {
            AttendeeStatus::CheckedOut
        } else {
            AttendeeStatus::CheckedIn
        }
    }

    /// Same as [`derive`](Self::derive) over raw strings. Unparseable input
    /// is treated as absent.
    pub fn from_raw(check_in: Option<&str>, check_out: Option<&str>) -> Self {
        Self::derive(
            check_in.and_then(parse_timestamp),
            check_out.and_then(parse_timestamp),
        )
    }
}

/// Accepts RFC 3339, or a zone-less `YYYY-MM-DDTHH:MM:SS[.f]` read as UTC.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .ok()
        .or_else(|| {
            NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
                .ok()
                .map(|naive| naive.and_utc())
        })
}

pub fn format_time(at: DateTime<Utc>) -> String {
    at.format(DISPLAY_FORMAT).to_string()
}

/// Formats a raw timestamp for display, or returns [`INVALID_DATE`].
pub fn format_timestamp(raw: &str) -> String {
    match parse_timestamp(raw) {
        Some(at) => format_time(at),
        None => INVALID_DATE.to_owned(),
    }
}

/// One row of an attendee's displayed attendance history.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    pub id: String,
    pub attendee_id: i64,
    pub attendee_name: String,
    pub action: LogAction,
    pub timestamp: DateTime<Utc>,
    pub display_time: String,
    /// Built from attendee timestamps rather than read from the log store.
    /// Never persisted.
    pub synthetic: bool,
}

impl HistoryEntry {
    fn persisted(log: &AttendanceLog) -> Self {
        Self {
            id: log.id.to_string(),
            attendee_id: log.attendee_id,
            attendee_name: log.attendee_name.clone(),
            action: log.action,
            timestamp: log.timestamp,
            display_time: format_time(log.timestamp),
            synthetic: false,
        }
    }

    fn synthesized(attendee: &Attendee, action: LogAction, at: DateTime<Utc>) -> Self {
        Self {
            id: format!("{SYNTHETIC_ID_PREFIX}{}-{action}", attendee.id),
            attendee_id: attendee.id,
            attendee_name: attendee.name.clone(),
            action,
            timestamp: at,
            display_time: format_time(at),
            synthetic: true,
        }
    }
}

/// Builds the displayed history for `attendee`.
///
/// Real log entries are returned as given. With no entries, a history is
/// synthesized from the attendee's timestamps: both a check-in and a
/// check-out when both are known (newest first), only the check-in when the
/// check-out is missing, and nothing otherwise.
pub fn reconcile_history(attendee: &Attendee, logs: &[AttendanceLog]) -> Vec<HistoryEntry> {
    if !logs.is_empty() {
        return logs.iter().map(HistoryEntry::persisted).collect();
    }

    match (attendee.check_in_time, attendee.check_out_time) {
        (Some(checked_in), Some(checked_out)) => {
            let mut entries = vec![
                HistoryEntry::synthesized(attendee, LogAction::CheckIn, checked_in),
                HistoryEntry::synthesized(attendee, LogAction::CheckOut, checked_out),
            ];
            entries.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
            entries
        }
        (Some(checked_in), None) => {
            vec![HistoryEntry::synthesized(attendee, LogAction::CheckIn, checked_in)]
        }
        _ => Vec::new(),
    }
}
