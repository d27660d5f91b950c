use crate::errors::internal::{InternalError, ItemError};
use crate::types::dto::common::ErrorResponse;
use poem_openapi::{ApiResponse, payload::Json};
use std::fmt;

/// Item endpoint error types
#[derive(ApiResponse, Debug)]
pub enum ItemApiError {
    /// Submitted item failed validation
    #[oai(status = 400)]
    ValidationFailed(Json<ErrorResponse>),

    /// Internal server error
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

impl ItemApiError {
    /// Create a ValidationFailed error
    pub fn validation_failed(message: impl Into<String>) -> Self {
        ItemApiError::ValidationFailed(Json(ErrorResponse {
            error: "validation_failed".to_string(),
            message: message.into(),
            status_code: 400,
        }))
    }

    /// Create a generic internal server error
    ///
    /// Always returns a generic message without exposing internal details.
    fn internal_server_error() -> Self {
        ItemApiError::InternalError(Json(ErrorResponse {
            error: "internal_error".to_string(),
            message: "An internal error occurred".to_string(),
            status_code: 500,
        }))
    }

    /// Convert InternalError to ItemApiError
    ///
    /// This is the explicit conversion point from internal errors to API errors.
    /// Infrastructure details are logged but not exposed to clients.
    pub fn from_internal_error(err: InternalError) -> Self {
        match &err {
            InternalError::Item(ItemError::Validation { field, reason }) => {
                tracing::debug!("Item validation failed: {} {}", field, reason);
                Self::validation_failed(err.to_string())
            }
            InternalError::Database(_) => {
                tracing::error!("Database error in item operation: {}", err);
                Self::internal_server_error()
            }
        }
    }

    /// Get the error body carried by the variant
    pub fn body(&self) -> &ErrorResponse {
        match self {
            ItemApiError::ValidationFailed(json) => &json.0,
            ItemApiError::InternalError(json) => &json.0,
        }
    }

    /// Get the error message from the error variant
    pub fn message(&self) -> String {
        self.body().message.clone()
    }
}

impl From<InternalError> for ItemApiError {
    fn from(err: InternalError) -> Self {
        Self::from_internal_error(err)
    }
}

impl fmt::Display for ItemApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}
