use crate::boundary::{Backend, Reply, Request};
use crate::error::ServiceError;

pub fn departments(backend: &mut Backend, _req: Request) -> Result<Reply, ServiceError> {
    Ok(Reply::ok(&backend.store.departments))
}

pub fn designations(backend: &mut Backend, _req: Request) -> Result<Reply, ServiceError> {
    Ok(Reply::ok(&backend.store.designations))
}
