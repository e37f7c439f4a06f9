use thiserror::Error;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Entity not found")]
    NotFound,

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Request rejected with status {status}: {message}")]
    Rejected { status: u16, message: String },

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;

impl From<serde_json::Error> for RepositoryError {
    fn from(err: serde_json::Error) -> Self {
        RepositoryError::MalformedResponse(format!("Invalid JSON payload: {err}"))
    }
}

#[cfg(feature = "client")]
impl From<reqwest::Error> for RepositoryError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_connect() || err.is_timeout() {
            return RepositoryError::ConnectionError(format!("Connection error: {err}"));
        }

        if let Some(status) = err.status() {
            return RepositoryError::Rejected {
                status: status.as_u16(),
                message: err.to_string(),
            };
        }

        if err.is_decode() {
            return RepositoryError::MalformedResponse(format!("Undecodable body: {err}"));
        }

        if err.is_builder() {
            return RepositoryError::ValidationError(format!("Invalid request: {err}"));
        }

        RepositoryError::Unexpected(format!("Unexpected http error: {err}"))
    }
}
