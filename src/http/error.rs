//! Mapping of handler failures to HTTP responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::validation::{FieldError, ValidationErrors};

/// Everything a handler can fail with.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Input rejected before the handler body ran.
    #[error("validation failed: {0}")]
    Validation(ValidationErrors),

    /// File open/write failure.
    #[error("I/O failure: {0}")]
    Io(#[from] std::io::Error),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<ValidationErrors> for ApiError {
    fn from(errors: ValidationErrors) -> Self {
        ApiError::Validation(errors)
    }
}

impl From<FieldError> for ApiError {
    fn from(error: FieldError) -> Self {
        ApiError::Validation(error.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match self {
            ApiError::Validation(errors) => {
                tracing::debug!(errors = %errors, "Request rejected");
                (status, Json(json!({ "detail": errors }))).into_response()
            }
            ApiError::Io(e) => {
                tracing::error!(error = %e, kind = ?e.kind(), "I/O failure while handling request");
                (status, Json(json!({ "detail": "Internal Server Error" }))).into_response()
            }
        }
    }
}

/// Fallback for unknown routes.
pub async fn not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "detail": "Not Found" })),
    )
        .into_response()
}
