/**
 * Backend Error Types
 *
 * This module defines error types specific to the backend server.
 * These errors are returned from HTTP handlers and converted to JSON
 * responses carrying a human-readable `message`.
 *
 * # Error Categories
 *
 * ## Handler Errors
 *
 * Handler errors occur when the request itself is unusable:
 * - Malformed JSON bodies
 * - Wrong content type
 *
 * ## Customer Errors
 *
 * Customer errors come from the record store. The status code depends on
 * the variant, and store failures are reported with the operation-level
 * message while the cause is only logged.
 */

use axum::http::StatusCode;
use thiserror::Error;

use crate::shared::CustomerError;

/// Backend-specific error types
///
/// ```rust
/// use customer_desk::backend::error::BackendError;
/// use customer_desk::shared::CustomerError;
/// use axum::http::StatusCode;
///
/// let err = BackendError::customer(CustomerError::missing("name"), "Error creating customer");
/// assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
/// ```
#[derive(Debug, Error)]
pub enum BackendError {
    /// Handler error (e.g., malformed body)
    #[error("Handler error: {message}")]
    HandlerError {
        /// HTTP status code for this error
        status: StatusCode,
        /// Human-readable error message
        message: String,
        /// Offending field, when known
        field: Option<String>,
    },

    /// Record store error for a given operation
    #[error("{failure}: {source}")]
    CustomerError {
        /// The underlying store error
        #[source]
        source: CustomerError,
        /// Message reported to the client when the store itself failed
        failure: &'static str,
    },
}

impl BackendError {
    /// Create a new handler error with a status code
    pub fn handler(status: StatusCode, message: impl Into<String>) -> Self {
        Self::HandlerError {
            status,
            message: message.into(),
            field: None,
        }
    }

    /// A request body that could not be decoded
    pub fn bad_body(message: impl Into<String>) -> Self {
        Self::HandlerError {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
            field: Some("body".to_string()),
        }
    }

    /// Wrap a store error raised while performing an operation
    ///
    /// # Arguments
    ///
    /// * `source` - The error returned by the record store
    /// * `failure` - Message reported for store and network failures, e.g. "Error creating customer"
    pub fn customer(source: CustomerError, failure: &'static str) -> Self {
        Self::CustomerError { source, failure }
    }

    /// Get the HTTP status code for this error
    ///
    /// # Status Code Mapping
    ///
    /// - `HandlerError` - Uses the status code from the error
    /// - `ValidationError` - 400 Bad Request
    /// - `NotFoundError` - 404 Not Found
    /// - `StoreError` / `NetworkError` - 500 Internal Server Error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::HandlerError { status, .. } => *status,
            Self::CustomerError { source, .. } => match source {
                CustomerError::ValidationError { .. } => StatusCode::BAD_REQUEST,
                CustomerError::NotFoundError { .. } => StatusCode::NOT_FOUND,
                CustomerError::StoreError { .. } | CustomerError::NetworkError { .. } => {
                    StatusCode::INTERNAL_SERVER_ERROR
                }
            },
        }
    }

    /// Get the message sent to the client
    pub fn message(&self) -> String {
        match self {
            Self::HandlerError { message, .. } => message.clone(),
            Self::CustomerError { source, failure } => match source {
                CustomerError::ValidationError { .. } | CustomerError::NotFoundError { .. } => {
                    source.reason()
                }
                CustomerError::StoreError { .. } | CustomerError::NetworkError { .. } => {
                    failure.to_string()
                }
            },
        }
    }

    /// Get the offending field, for validation failures
    pub fn field(&self) -> Option<String> {
        match self {
            Self::HandlerError { field, .. } => field.clone(),
            Self::CustomerError {
                source: CustomerError::ValidationError { field, .. },
                ..
            } => Some(field.clone()),
            Self::CustomerError { .. } => None,
        }
    }
}
