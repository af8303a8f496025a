//! Service Layer
//!
//! Business orchestration over the repositories. Services return
//! `Result<T, ServiceError>`; the API layer converts that into its
//! result-shaped outputs. No exception-style blanket catches: every failure
//! keeps its kind.

pub mod restaurant_service;
pub mod user_service;

use crate::db::repository::RepoError;
use thiserror::Error;

/// Service failure taxonomy surfaced to the API layer
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Forbidden(&'static str),

    #[error("authentication required")]
    Unauthorized,

    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Conflict(String),

    #[error("database error: {0}")]
    Database(String),

    #[error("internal error: {0}")]
    Internal(String),
}

impl From<RepoError> for ServiceError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound(msg) => ServiceError::NotFound(msg),
            RepoError::Duplicate(msg) => ServiceError::Conflict(msg),
            RepoError::Validation(msg) => ServiceError::Validation(msg),
            RepoError::Database(msg) => ServiceError::Database(msg),
        }
    }
}

impl From<validator::ValidationErrors> for ServiceError {
    fn from(err: validator::ValidationErrors) -> Self {
        ServiceError::Validation(err.to_string())
    }
}

/// Result type for service operations
pub type ServiceResult<T> = Result<T, ServiceError>;
