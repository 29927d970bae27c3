//! Mapping of errors onto HTTP responses

use super::call_dto::ErrorResponse;
use crate::domain::shared::error::DomainError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

const METHOD_NOT_ALLOWED: &str = "Method not allowed";

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error(transparent)]
    Domain(#[from] DomainError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::MethodNotAllowed => (
                StatusCode::METHOD_NOT_ALLOWED,
                ErrorResponse::new(METHOD_NOT_ALLOWED),
            ),
            ApiError::Domain(DomainError::Validation(message)) => {
                (StatusCode::BAD_REQUEST, ErrorResponse::new(message))
            }
            ApiError::Domain(DomainError::Configuration(message)) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorResponse {
                    needs_setup: Some(true),
                    ..ErrorResponse::new(message)
                },
            ),
            ApiError::Domain(DomainError::Provider { message, details }) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorResponse {
                    details,
                    ..ErrorResponse::new(message)
                },
            ),
        };

        (status, Json(body)).into_response()
    }
}

/// Fallback for routes hit with an unsupported verb
pub async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}
