pub mod announcement;
pub mod attendance;
pub mod employee;
pub mod leave;
pub mod message;
pub mod payroll;
pub mod performance;
pub mod role;
