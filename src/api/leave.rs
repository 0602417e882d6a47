use chrono::{Local, NaiveDate};
use serde::Deserialize;
use tracing::info;

use crate::boundary::{Backend, Reply, Request};
use crate::error::ServiceError;
use crate::model::leave::{LEAVE_TYPES, LeaveBalance, LeaveRequest, LeaveStatus};
use crate::query;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateLeave {
    pub employee_id: String,
    #[serde(default)]
    pub employee_name: String,
    pub leave_type: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub days: f64,
    #[serde(default)]
    pub reason: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeavePatch {
    pub leave_type: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub days: Option<f64>,
    pub reason: Option<String>,
    pub status: Option<LeaveStatus>,
}

impl LeavePatch {
    fn apply(self, leave: &mut LeaveRequest) {
        if let Some(v) = self.leave_type {
            leave.leave_type = v;
        }
        if let Some(v) = self.start_date {
            leave.start_date = v;
        }
        if let Some(v) = self.end_date {
            leave.end_date = v;
        }
        if let Some(v) = self.days {
            leave.days = v;
        }
        if let Some(v) = self.reason {
            leave.reason = v;
        }
        if let Some(v) = self.status {
            leave.status = v;
        }
    }
}

/* =========================
List leave requests
========================= */
pub fn list(backend: &mut Backend, req: Request) -> Result<Reply, ServiceError> {
    let employee_id = req.query.get("employeeId");
    let status = req.query.get("status");

    let matches: Vec<&LeaveRequest> = backend
        .store
        .leaves
        .all()
        .iter()
        .filter(|leave| {
            query::fk_filter(employee_id, &leave.employee_id)
                && query::eq_filter(status, leave.status.as_str())
        })
        .collect();

    Ok(Reply::ok(&matches))
}

/* =========================
Create leave request
========================= */
/// Status is forced to Pending and `appliedOn` stamped server-side.
/// The employee's leave balance is deliberately left untouched.
pub fn create(backend: &mut Backend, req: Request) -> Result<Reply, ServiceError> {
    let payload: CreateLeave = req.payload()?;

    let leave = LeaveRequest {
        id: String::new(),
        employee_id: payload.employee_id,
        employee_name: payload.employee_name,
        leave_type: payload.leave_type,
        start_date: payload.start_date,
        end_date: payload.end_date,
        days: payload.days,
        reason: payload.reason,
        status: LeaveStatus::Pending,
        applied_on: Local::now().date_naive(),
    };

    let created = backend.store.leaves.insert(leave);
    info!(id = %created.id, employee_id = %created.employee_id, "leave request submitted");
    Ok(Reply::created(created, "Leave request submitted successfully"))
}

/* =========================
Update leave request
========================= */
/// Shallow merge. Status only ever moves Pending -> Approved/Rejected;
/// a processed request cannot change status again.
pub fn update(backend: &mut Backend, req: Request) -> Result<Reply, ServiceError> {
    let patch: LeavePatch = req.payload()?;

    if patch.status.is_some() {
        let existing = backend
            .store
            .leaves
            .get(req.param())
            .ok_or(ServiceError::NotFound("Leave request"))?;
        if existing.status != LeaveStatus::Pending {
            return Err(ServiceError::validation(
                "Leave request already processed",
            ));
        }
    }

    let updated = backend
        .store
        .leaves
        .update_with(req.param(), |leave| patch.apply(leave))?;
    Ok(Reply::ok(updated).with_message("Leave request updated successfully"))
}

pub fn types(_backend: &mut Backend, _req: Request) -> Result<Reply, ServiceError> {
    Ok(Reply::ok(&*LEAVE_TYPES))
}

/// Stored balance for the employee, or the default grant when none exists.
pub fn balance(backend: &mut Backend, req: Request) -> Result<Reply, ServiceError> {
    let balance = backend
        .store
        .leave_balances
        .get(req.param())
        .cloned()
        .unwrap_or_else(LeaveBalance::default_grant);
    Ok(Reply::ok(&balance))
}
