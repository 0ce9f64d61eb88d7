pub mod attendance_log;
pub mod attendee;

pub use attendance_log::Entity as AttendanceLog;
pub use attendee::Entity as Attendee;
