//! Maps domain `AppError` to HTTP responses.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use checkin_core::error::{AppError, ErrorKind};

/// Status of an expected domain failure (unknown participant, exhausted
/// pool, bad parameter), kept apart from 4xx/5xx infrastructure statuses.
pub const DOMAIN_FAILURE_STATUS: u16 = 450;

/// Standard API error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    /// Machine-readable error code.
    pub error: String,
    /// Human-readable message.
    pub message: String,
}

/// Handler error wrapper; `?` converts any [`AppError`] into it.
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl ApiError {
    /// Status code this error is rendered with.
    pub fn status(&self) -> StatusCode {
        match self.0.kind {
            kind if kind.is_domain() => StatusCode::from_u16(DOMAIN_FAILURE_STATUS)
                .unwrap_or(StatusCode::BAD_REQUEST),
            ErrorKind::ServiceUnavailable => StatusCode::SERVICE_UNAVAILABLE,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let err = self.0;

        if err.is_domain() {
            tracing::debug!(kind = %err.kind, message = %err.message, "Domain failure");
        } else {
            tracing::error!(error = %err, source = ?err.source, "Request failed");
        }

        let body = ApiErrorResponse {
            error: err.kind.to_string(),
            message: err.message,
        };

        (status, Json(body)).into_response()
    }
}
