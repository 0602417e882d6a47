use chrono::NaiveDate;
use serde::Deserialize;
use tracing::info;

use crate::boundary::{Backend, Reply, Request};
use crate::error::ServiceError;
use crate::model::employee::{Document, EmergencyContact, Employee, EmployeeStatus};
use crate::model::role::Role;
use crate::query;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEmployee {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
    pub department: String,
    pub designation: String,
    pub role: Role,
    #[serde(default)]
    pub salary: f64,
    pub joining_date: NaiveDate,
    #[serde(default)]
    pub emergency_contact: Option<EmergencyContact>,
    #[serde(default)]
    pub documents: Vec<Document>,
    #[serde(default)]
    pub profile_image: Option<String>,
}

/// Optional-field patch; anything absent keeps its stored value, and a
/// field the type does not name can never reach the record.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeePatch {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub department: Option<String>,
    pub designation: Option<String>,
    pub role: Option<Role>,
    pub status: Option<EmployeeStatus>,
    pub salary: Option<f64>,
    pub joining_date: Option<NaiveDate>,
    pub emergency_contact: Option<EmergencyContact>,
    pub documents: Option<Vec<Document>>,
    pub profile_image: Option<String>,
}

impl EmployeePatch {
    fn apply(self, emp: &mut Employee) {
        if let Some(v) = self.first_name {
            emp.first_name = v;
        }
        if let Some(v) = self.last_name {
            emp.last_name = v;
        }
        if let Some(v) = self.email {
            emp.email = v;
        }
        if let Some(v) = self.phone {
            emp.phone = v;
        }
        if let Some(v) = self.department {
            emp.department = v;
        }
        if let Some(v) = self.designation {
            emp.designation = v;
        }
        if let Some(v) = self.role {
            emp.role = v;
        }
        if let Some(v) = self.status {
            emp.status = v;
        }
        if let Some(v) = self.salary {
            emp.salary = v;
        }
        if let Some(v) = self.joining_date {
            emp.joining_date = v;
        }
        if let Some(v) = self.emergency_contact {
            emp.emergency_contact = Some(v);
        }
        if let Some(v) = self.documents {
            emp.documents = v;
        }
        if let Some(v) = self.profile_image {
            emp.profile_image = Some(v);
        }
    }
}

/// List employees, narrowed by search/department/status.
pub fn list(backend: &mut Backend, req: Request) -> Result<Reply, ServiceError> {
    let search = req.query.get("search");
    let department = req.query.get("department");
    let status = req.query.get("status");

    let matches: Vec<&Employee> = backend
        .store
        .employees
        .all()
        .iter()
        .filter(|emp| {
            query::matches_search(
                search,
                &[
                    emp.first_name.as_str(),
                    emp.last_name.as_str(),
                    emp.email.as_str(),
                    emp.id.as_str(),
                ],
            ) && query::eq_filter(department, &emp.department)
                && query::eq_filter(status, emp.status.as_str())
        })
        .collect();

    let total = matches.len();
    Ok(Reply::ok(&matches).with_total(total))
}

pub fn get(backend: &mut Backend, req: Request) -> Result<Reply, ServiceError> {
    let employee = backend
        .store
        .employees
        .get(req.param())
        .ok_or(ServiceError::NotFound("Employee"))?;
    Ok(Reply::ok(employee))
}

/// Create an employee. Status is always Active at creation.
pub fn create(backend: &mut Backend, req: Request) -> Result<Reply, ServiceError> {
    let payload: CreateEmployee = req.payload()?;

    let employee = Employee {
        id: String::new(),
        first_name: payload.first_name,
        last_name: payload.last_name,
        email: payload.email,
        phone: payload.phone,
        department: payload.department,
        designation: payload.designation,
        role: payload.role,
        status: EmployeeStatus::Active,
        salary: payload.salary,
        joining_date: payload.joining_date,
        emergency_contact: payload.emergency_contact,
        documents: payload.documents,
        profile_image: payload.profile_image,
    };

    let created = backend.store.employees.insert(employee);
    info!(id = %created.id, "employee created");
    Ok(Reply::created(created, "Employee created successfully"))
}

/// Shallow-merge update; unspecified fields are retained.
pub fn update(backend: &mut Backend, req: Request) -> Result<Reply, ServiceError> {
    let patch: EmployeePatch = req.payload()?;
    let updated = backend
        .store
        .employees
        .update_with(req.param(), |emp| patch.apply(emp))?;
    Ok(Reply::ok(updated).with_message("Employee updated successfully"))
}

pub fn delete(backend: &mut Backend, req: Request) -> Result<Reply, ServiceError> {
    backend.store.employees.remove(req.param())?;
    info!(id = %req.param(), "employee deleted");
    Ok(Reply::message("Employee deleted successfully"))
}
