use crate::boundary::{Backend, Reply, Request};
use crate::error::ServiceError;
use crate::model::attendance::AttendanceRecord;
use crate::query;

pub fn list(backend: &mut Backend, req: Request) -> Result<Reply, ServiceError> {
    let employee_id = req.query.get("employeeId");
    let date = req.query.get("date");

    let matches: Vec<&AttendanceRecord> = backend
        .store
        .attendance
        .all()
        .iter()
        .filter(|record| {
            query::fk_filter(employee_id, &record.employee_id)
                && query::fk_filter(date, &record.date.to_string())
        })
        .collect();

    Ok(Reply::ok(&matches))
}

/// Marks attendance. The record is stored exactly as supplied, id and
/// work hours included.
pub fn create(backend: &mut Backend, req: Request) -> Result<Reply, ServiceError> {
    let record: AttendanceRecord = req.payload()?;
    let stored = backend.store.attendance.push_raw(record);
    Ok(Reply::created(stored, "Attendance marked successfully"))
}

pub fn summary(backend: &mut Backend, _req: Request) -> Result<Reply, ServiceError> {
    Ok(Reply::ok(&backend.store.attendance_summary))
}
