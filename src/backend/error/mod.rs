//! Backend Error Module
//!
//! This module defines error types specific to the backend server.
//! These errors are used in HTTP handlers and are converted to JSON responses.
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports and documentation
//! ├── types.rs      - Error type definitions
//! └── conversion.rs - IntoResponse and rejection conversions
//! ```
//!
//! # Error Types
//!
//! - `HandlerError` - The request could not be decoded
//! - `CustomerError` - A record store operation failed
//!
//! All backend errors implement `IntoResponse` from Axum, so handlers can
//! return them directly with `?`.

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

// Re-export commonly used types
pub use types::BackendError;
