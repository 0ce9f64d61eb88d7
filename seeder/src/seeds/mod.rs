pub mod attendance;
pub mod attendee;
