//! # REST API Errors
//!
//! Error types for the REST API module.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::executor::{QueryError, QueryErrorCode};

/// Result type for REST operations
pub type RestResult<T> = Result<T, RestError>;

/// REST API errors
#[derive(Debug, Clone, Error)]
pub enum RestError {
    /// Path segment is not an integer id
    #[error("Invalid rental ID")]
    InvalidRentalId(String),

    /// No rental with this id
    #[error("Rental not found")]
    NotFound,
}

impl RestError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            RestError::InvalidRentalId(_) => StatusCode::BAD_REQUEST,
            RestError::NotFound => StatusCode::NOT_FOUND,
        }
    }
}

impl From<QueryError> for RestError {
    fn from(err: QueryError) -> Self {
        match err.code() {
            QueryErrorCode::NotFound => RestError::NotFound,
        }
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
}

impl From<RestError> for ErrorResponse {
    fn from(err: RestError) -> Self {
        Self {
            code: err.status_code().as_u16(),
            error: err.to_string(),
        }
    }
}

impl IntoResponse for RestError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(ErrorResponse::from(self));
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            RestError::InvalidRentalId("abc".to_string()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(RestError::NotFound.status_code(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_query_not_found_maps_to_404() {
        let err = RestError::from(QueryError::not_found(999));
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(err.to_string(), "Rental not found");
    }

    #[test]
    fn test_error_body() {
        let body = ErrorResponse::from(RestError::InvalidRentalId("x".to_string()));
        assert_eq!(body.code, 400);
        assert_eq!(body.error, "Invalid rental ID");
    }
}
