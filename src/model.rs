pub mod attendance;
pub mod employee;

pub use attendance::{AttendanceRecord, AttendanceStatus};
pub use employee::{Employee, NewEmployee};
