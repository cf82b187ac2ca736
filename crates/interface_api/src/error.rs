//! API error handling

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use tracing::error;

use core_kernel::PortError;

/// API error types
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type) = match &self {
            ApiError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "internal_error"),
        };

        // Storage details stay in the log, not the response body
        error!(error = %self, "Request failed");

        let body = ErrorResponse {
            error: error_type.to_string(),
            message: "An internal error occurred".to_string(),
        };

        (status, Json(body)).into_response()
    }
}

/// Any storage failure behind the read endpoints is a generic server error
impl From<PortError> for ApiError {
    fn from(err: PortError) -> Self {
        ApiError::Internal(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_internal_error_hides_details() {
        let response = ApiError::from(PortError::internal("relation \"campaign\" does not exist"))
            .into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_every_port_error_is_internal() {
        let errors = [
            PortError::connection("pool timed out"),
            PortError::not_found("Campaign", "CMP-1"),
            PortError::validation("name must not be blank"),
        ];

        for err in errors {
            let response = ApiError::from(err).into_response();
            assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        }
    }
}
