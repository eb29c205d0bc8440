//! Shared Error Types
//!
//! This module defines the error taxonomy shared by the record stores, the
//! HTTP server and the desktop client.
//!
//! # Error Categories
//!
//! - `ValidationError` - A required field is absent or blank
//! - `NotFoundError` - The id does not resolve to a stored record
//! - `StoreError` - Persistence failure (connectivity, query, constraint)
//! - `NetworkError` - The request never reached the server, or the response was unparsable
//!
//! # Usage
//!
//! ```rust
//! use customer_desk::shared::error::CustomerError;
//!
//! let error = CustomerError::missing("name");
//! assert_eq!(error.reason(), "name is required");
//! ```
use thiserror::Error;

/// Errors raised by record store operations
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CustomerError {
    /// A required field is absent or has an unusable value
    #[error("Validation error in field '{field}': {message}")]
    ValidationError {
        /// The field that failed validation
        field: String,
        /// Human-readable error message
        message: String,
    },

    /// The id does not resolve to an existing record
    #[error("Customer not found: {id}")]
    NotFoundError {
        /// The id that was looked up
        id: String,
    },

    /// Underlying persistence failure
    #[error("Store error: {message}")]
    StoreError {
        /// Human-readable error message
        message: String,
    },

    /// Transport failure or unparsable response
    #[error("Network error: {message}")]
    NetworkError {
        /// Human-readable error message
        message: String,
    },
}

impl CustomerError {
    /// Create a new validation error
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Validation error for an absent required field
    pub fn missing(field: &str) -> Self {
        Self::validation(field, format!("{} is required", field))
    }

    /// Create a new not-found error
    pub fn not_found(id: impl std::fmt::Display) -> Self {
        Self::NotFoundError { id: id.to_string() }
    }

    /// Create a new store error
    pub fn store(message: impl Into<String>) -> Self {
        Self::StoreError {
            message: message.into(),
        }
    }

    /// Create a new network error
    pub fn network(message: impl Into<String>) -> Self {
        Self::NetworkError {
            message: message.into(),
        }
    }

    /// The text shown to the user in a notice
    pub fn reason(&self) -> String {
        match self {
            Self::ValidationError { message, .. } => message.clone(),
            Self::NotFoundError { .. } => "Customer not found".to_string(),
            Self::StoreError { message } => message.clone(),
            Self::NetworkError { message } => message.clone(),
        }
    }
}

/// Result alias for record store operations
pub type StoreResult<T> = Result<T, CustomerError>;

#[cfg(feature = "ssr")]
impl From<sqlx::Error> for CustomerError {
    fn from(err: sqlx::Error) -> Self {
        Self::store(format!("database error: {}", err))
    }
}
