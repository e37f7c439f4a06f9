//! Form definitions backing the booking wizard and list filters.

use thiserror::Error;
use validator::ValidationErrors;

pub mod booking;
pub mod filter;

#[derive(Debug, Error)]
/// Errors that can occur when processing form data.
pub enum FormError {
    #[error("validation errors: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("step {step} is invalid: {errors}")]
    StepValidation {
        step: usize,
        errors: ValidationErrors,
    },

    #[error("invalid date: {0}")]
    InvalidDate(String),

    #[error("unknown filter field: {0}")]
    UnknownField(String),
}
