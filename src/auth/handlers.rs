use serde::Deserialize;
use serde_json::json;
use tracing::{info, instrument};

use crate::auth::session::Principal;
use crate::boundary::{Backend, Reply, Request};
use crate::error::ServiceError;

#[derive(Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Verifies credentials against the employee roster: linear scan by
/// email, one shared password for every account. An explicit mock-layer
/// simplification; there is nothing cryptographic here.
#[instrument(name = "auth_login", skip_all)]
pub fn login(backend: &mut Backend, req: Request) -> Result<Reply, ServiceError> {
    let creds: LoginRequest = req.payload()?;

    info!(email = %creds.email, "login attempt");

    let Some(employee) = backend.store.find_by_email(&creds.email) else {
        info!("invalid credentials: unknown email");
        return Err(ServiceError::AuthFailure);
    };

    if creds.password != backend.config.shared_password {
        info!("invalid credentials: password mismatch");
        return Err(ServiceError::AuthFailure);
    }

    let principal = Principal::for_employee(employee);
    let data = json!({
        "user": &principal,
        "token": &principal.token,
    });

    info!(id = %principal.id, role = principal.role.as_str(), "login successful");
    backend.session.establish(principal);

    Ok(Reply::ok(data))
}

/// Clears the session slot unconditionally and always succeeds.
pub fn logout(backend: &mut Backend, _req: Request) -> Result<Reply, ServiceError> {
    backend.session.clear();
    info!("session cleared");
    Ok(Reply::empty())
}
