pub mod m202605190001_create_attendees;
pub mod m202605190002_create_attendance_logs;
