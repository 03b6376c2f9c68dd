// Input validation for form APIs
//
// Hard limits, not configurable. Requests that violate them are rejected
// before they reach the service.

use super::common::ErrorResponse;
use axum::http::StatusCode;
use axum::Json;
use evaluations_core::FormRequest;

// =============================================================================
// Input Size Limits
// =============================================================================

/// Maximum size for the form number.
pub const MAX_FORM_NUMBER_BYTES: usize = 64;

/// Maximum size for the evaluation text.
pub const MAX_FORM_EVALUATION_BYTES: usize = 64 * 1024; // 64 KB

/// Generic validation error message returned to clients for oversized input.
pub const VALIDATION_ERROR_MESSAGE: &str = "Input exceeds allowed limits";

// =============================================================================
// Validation Functions
// =============================================================================

#[derive(Debug, PartialEq, Eq)]
pub enum ValidationError {
    /// A field exceeded its size limit
    TooLarge,
    /// A required field was empty
    Empty(&'static str),
}

impl ValidationError {
    fn message(&self) -> String {
        match self {
            ValidationError::TooLarge => VALIDATION_ERROR_MESSAGE.to_string(),
            ValidationError::Empty(field) => format!("{} must not be empty", field),
        }
    }
}

impl From<ValidationError> for (StatusCode, Json<ErrorResponse>) {
    fn from(err: ValidationError) -> Self {
        (StatusCode::BAD_REQUEST, Json(ErrorResponse::new(err.message())))
    }
}

/// Validate the form number
pub fn validate_form_number(number: &str) -> Result<(), ValidationError> {
    if number.trim().is_empty() {
        return Err(ValidationError::Empty("number"));
    }
    if number.len() > MAX_FORM_NUMBER_BYTES {
        tracing::warn!(
            "Form number exceeds limit: {} bytes (max: {})",
            number.len(),
            MAX_FORM_NUMBER_BYTES
        );
        return Err(ValidationError::TooLarge);
    }
    Ok(())
}

/// Validate the evaluation text size
pub fn validate_form_evaluation(evaluation: &str) -> Result<(), ValidationError> {
    if evaluation.len() > MAX_FORM_EVALUATION_BYTES {
        tracing::warn!(
            "Form evaluation exceeds limit: {} bytes (max: {})",
            evaluation.len(),
            MAX_FORM_EVALUATION_BYTES
        );
        return Err(ValidationError::TooLarge);
    }
    Ok(())
}

/// Validate all fields of a create or update request
pub fn validate_form_request(req: &FormRequest) -> Result<(), ValidationError> {
    validate_form_number(&req.number)?;
    validate_form_evaluation(&req.evaluation)?;
    Ok(())
}
