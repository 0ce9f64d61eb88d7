mod attendees;
mod health_test;
mod logs_test;
mod scan_test;
mod session_test;
