pub mod attendance_log_repository;
pub mod attendance_service;
pub mod attendee_repository;
pub mod error;
pub mod qr_code;
pub mod scan;
pub mod session;
pub mod status;
pub mod types;
