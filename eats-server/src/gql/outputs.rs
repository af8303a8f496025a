//! Result-shaped output helpers
//!
//! Service failures reach API consumers as a structured `ErrorKind` plus a
//! human-readable message, alongside `ok: false`. `ok` is derived purely from
//! `Result` discrimination, so an output can never claim success while
//! carrying an error.

use async_graphql::Enum;

use crate::services::ServiceError;

/// Machine-readable failure cause
#[derive(Enum, Copy, Clone, Eq, PartialEq, Debug)]
pub enum ErrorKind {
    NotFound,
    Forbidden,
    Unauthorized,
    Validation,
    Conflict,
    Database,
    Internal,
}

impl From<&ServiceError> for ErrorKind {
    fn from(err: &ServiceError) -> Self {
        match err {
            ServiceError::NotFound(_) => ErrorKind::NotFound,
            ServiceError::Forbidden(_) => ErrorKind::Forbidden,
            ServiceError::Unauthorized => ErrorKind::Unauthorized,
            ServiceError::Validation(_) => ErrorKind::Validation,
            ServiceError::Conflict(_) => ErrorKind::Conflict,
            ServiceError::Database(_) => ErrorKind::Database,
            ServiceError::Internal(_) => ErrorKind::Internal,
        }
    }
}

/// The `(error, message)` pair for a failed output.
pub fn failure_fields(err: &ServiceError) -> (Option<ErrorKind>, Option<String>) {
    (Some(err.into()), Some(err.to_string()))
}
