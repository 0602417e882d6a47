use crate::boundary::{Backend, Reply, Request};
use crate::error::ServiceError;
use crate::model::payroll::Payslip;
use crate::query;

pub fn payslips(backend: &mut Backend, req: Request) -> Result<Reply, ServiceError> {
    let employee_id = req.query.get("employeeId");

    let matches: Vec<&Payslip> = backend
        .store
        .payslips
        .all()
        .iter()
        .filter(|slip| query::fk_filter(employee_id, &slip.employee_id))
        .collect();

    Ok(Reply::ok(&matches))
}

pub fn structure(backend: &mut Backend, req: Request) -> Result<Reply, ServiceError> {
    let structure = backend
        .store
        .salary_structures
        .get(req.param())
        .ok_or(ServiceError::NotFound("Salary structure"))?;
    Ok(Reply::ok(structure))
}

pub fn summary(backend: &mut Backend, _req: Request) -> Result<Reply, ServiceError> {
    Ok(Reply::ok(&backend.store.payroll_summary))
}
