// Common DTOs for public API
//
// These types are shared across multiple API endpoints.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::Json;
use evaluations_core::FormError;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Standard error response for API endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Error message describing what went wrong.
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }

    /// Convert to axum response tuple
    pub fn into_response(self, status: StatusCode) -> (StatusCode, Json<Self>) {
        (status, Json(self))
    }
}

/// Response wrapper for list endpoints.
/// All list endpoints return responses wrapped in a `data` field.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ListResponse<T> {
    /// Array of items returned by the list operation.
    pub data: Vec<T>,
}

impl<T> ListResponse<T> {
    pub fn new(data: Vec<T>) -> Self {
        Self { data }
    }
}

/// Map a core error onto its HTTP status
pub fn error_status(error: &FormError) -> StatusCode {
    match error {
        FormError::FormNotFound(_) => StatusCode::NOT_FOUND,
        FormError::StatusNotFound(_) => StatusCode::UNPROCESSABLE_ENTITY,
        FormError::PeerUnavailable { .. } => StatusCode::BAD_GATEWAY,
        FormError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Convert a core error into an API error response.
/// Server-side failures are logged and reported with a generic message.
pub fn error_response(error: FormError) -> (StatusCode, Json<ErrorResponse>) {
    let status = error_status(&error);
    let message = if status == StatusCode::INTERNAL_SERVER_ERROR {
        tracing::error!(error = %error, "Request failed");
        "Internal server error".to_string()
    } else {
        error.to_string()
    };
    ErrorResponse::new(message).into_response(status)
}

/// Report an unreadable JSON body as a 400 in the standard error shape
pub fn rejection_response(rejection: JsonRejection) -> (StatusCode, Json<ErrorResponse>) {
    ErrorResponse::new(rejection.body_text()).into_response(StatusCode::BAD_REQUEST)
}
