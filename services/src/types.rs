//! Application-facing shapes for attendees and log entries.
//!
//! These mirror the store rows in `db::models` but use camelCase on the wire
//! and carry derived, non-persisted fields such as the QR code.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::status::AttendeeStatus;

pub use db::models::attendance_log::LogAction;
pub use db::models::attendee::Gender;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Attendee {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub gender: Gender,
    pub region: String,
    pub is_checked_in: bool,
    pub is_checked_out: bool,
    pub check_in_time: Option<DateTime<Utc>>,
    pub check_out_time: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    /// Data URL of the attendee's QR code. Regenerated on every read.
    pub qr_code: Option<String>,
}

impl Attendee {
    /// Lifecycle status derived from the timestamps; the flags are ignored.
    pub fn status(&self) -> AttendeeStatus {
        AttendeeStatus::derive(self.check_in_time, self.check_out_time)
    }

    /// Case-insensitive substring match on name, phone and region.
    pub fn matches(&self, needle_lower: &str) -> bool {
        self.name.to_lowercase().contains(needle_lower)
            || self.phone.to_lowercase().contains(needle_lower)
            || self.region.to_lowercase().contains(needle_lower)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceLog {
    pub id: i64,
    pub attendee_id: i64,
    pub attendee_name: String,
    pub action: LogAction,
    pub timestamp: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl From<db::models::attendance_log::Model> for AttendanceLog {
    fn from(row: db::models::attendance_log::Model) -> Self {
        Self {
            id: row.id,
            attendee_id: row.attendee_id,
            attendee_name: row.attendee_name,
            action: row.action,
            timestamp: row.timestamp,
            created_at: row.created_at,
        }
    }
}

/// Registration form payload. Missing text fields deserialize as empty so
/// they are reported by validation rather than by the JSON decoder.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewAttendee {
    #[serde(default)]
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,

    #[serde(default)]
    pub phone: String,

    #[serde(default = "default_gender")]
    pub gender: Gender,

    #[serde(default)]
    #[validate(length(min = 1, message = "Region is required"))]
    pub region: String,
}

fn default_gender() -> Gender {
    Gender::Male
}

impl NewAttendee {
    /// Trims every free-text field so whitespace-only input fails validation.
    pub fn normalized(self) -> Self {
        Self {
            name: self.name.trim().to_owned(),
            email: self.email.trim().to_owned(),
            phone: self.phone.trim().to_owned(),
            gender: self.gender,
            region: self.region.trim().to_owned(),
        }
    }
}
