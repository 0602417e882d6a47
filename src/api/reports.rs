use serde_json::json;

use crate::boundary::{Backend, Reply, Request};
use crate::error::ServiceError;
use crate::model::employee::EmployeeStatus;
use crate::model::leave::LeaveStatus;

/// Dashboard counters derived live from the collections.
pub fn dashboard(backend: &mut Backend, _req: Request) -> Result<Reply, ServiceError> {
    let store = &backend.store;
    let active_employees = store
        .employees
        .all()
        .iter()
        .filter(|e| e.status == EmployeeStatus::Active)
        .count();
    let pending_leaves = store
        .leaves
        .all()
        .iter()
        .filter(|l| l.status == LeaveStatus::Pending)
        .count();

    Ok(Reply::ok(json!({
        "totalEmployees": store.employees.len(),
        "activeEmployees": active_employees,
        "departments": store.departments.len(),
        "avgAttendance": store.attendance_summary.attendance_percentage,
        "pendingLeaves": pending_leaves,
        "monthlyPayroll": store.payroll_summary.total_net_salary,
    })))
}
