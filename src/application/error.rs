use axum::http::StatusCode;
use thiserror::Error;

/// Error taxonomy shared by all usecases. The HTTP layer maps each variant
/// to a status via `status_code`; `Internal` details never reach clients.
#[derive(Debug, Error)]
pub enum UseCaseError {
    #[error("{0} not found")]
    NotFound(&'static str),

    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    Unauthorized(String),

    #[error("forbidden")]
    Forbidden,

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl UseCaseError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            UseCaseError::NotFound(_) => StatusCode::NOT_FOUND,
            UseCaseError::BadRequest(_) => StatusCode::BAD_REQUEST,
            UseCaseError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            UseCaseError::Forbidden => StatusCode::FORBIDDEN,
            UseCaseError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        UseCaseError::BadRequest(message.into())
    }
}

pub type UseCaseResult<T> = std::result::Result<T, UseCaseError>;
