use http::StatusCode;
use thiserror::Error;

/// Failure taxonomy for the service boundary. Every variant maps to an
/// HTTP-like status carried on the response envelope; nothing is thrown
/// past the boundary itself.
#[derive(Debug, Clone, Error)]
pub enum ServiceError {
    /// No record with the requested id in the target collection.
    #[error("{0} not found")]
    NotFound(&'static str),

    /// Unknown email or wrong shared password.
    #[error("Invalid credentials")]
    AuthFailure,

    /// Request payload could not be accepted.
    #[error("{0}")]
    Validation(String),
}

impl ServiceError {
    pub fn validation(message: impl Into<String>) -> Self {
        ServiceError::Validation(message.into())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ServiceError::NotFound(_) => StatusCode::NOT_FOUND,
            ServiceError::AuthFailure => StatusCode::UNAUTHORIZED,
            ServiceError::Validation(_) => StatusCode::BAD_REQUEST,
        }
    }
}
