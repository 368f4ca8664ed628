use axum::{
    Json,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use tracing::{error, warn};

use crate::application::error::UseCaseError;

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub code: u16,
    pub message: String,
}

impl IntoResponse for UseCaseError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        // Don't leak internal error detail to client
        let message = match &self {
            UseCaseError::Internal(err) => {
                error!(internal_error = ?err, "request failed with internal error");
                "Internal server error".to_string()
            }
            other => {
                warn!(status = status.as_u16(), "request rejected: {}", other);
                other.to_string()
            }
        };

        let body = Json(ErrorResponse {
            code: status.as_u16(),
            message,
        });

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn internal_error_detail_is_hidden() {
        let err = UseCaseError::Internal(anyhow::anyhow!("connection refused to db host"));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn not_found_maps_to_404() {
        let err = UseCaseError::NotFound("movie");
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
