//! Booking workflows composed over the repository traits.

use thiserror::Error;

use crate::repository::errors::RepositoryError;

pub mod booking;
pub mod booking_mapper;
pub mod list_screen;
pub mod query_cache;
pub mod stepper;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("entity not found")]
    NotFound,

    #[error("form error: {0}")]
    Form(String),

    #[error("type constraint violated: {0}")]
    TypeConstraint(String),

    #[error("repository error: {0}")]
    Repository(#[from] RepositoryError),

    #[error("internal error: {0}")]
    Internal(String),
}

pub type ServiceResult<T> = Result<T, ServiceError>;
