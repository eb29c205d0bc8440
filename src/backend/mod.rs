//! Backend Module
//!
//! This module contains all server-side code: an Axum HTTP server exposing
//! the `/customer` resource over a record store.
//!
//! This module is only compiled when the `ssr` feature is enabled.
//!
//! # Architecture
//!
//! - **`server`** - Server initialization, application state, configuration
//! - **`routes`** - HTTP route configuration and router assembly
//! - **`customers`** - Customer handlers and the SQLite store
//! - **`error`** - Backend error types and their HTTP conversion
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports and documentation
//! ├── main.rs         - customer-server binary
//! ├── server/         - Server initialization and state
//! ├── routes/         - Route configuration
//! ├── customers/      - Customer handlers and SQLite store
//! └── error/          - Error types
//! ```
//!
//! # State Management
//!
//! The backend shares one `AppState` holding the record store behind an
//! `Arc<dyn RecordStore>`. Handlers never cache records; every request goes
//! to the store.

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Customer handlers and storage
pub mod customers;

/// Backend error types
pub mod error;

/// Re-export commonly used types
pub use customers::SqliteCustomerStore;
pub use error::BackendError;
pub use server::{create_app, create_app_with_store, AppState, ServerConfig};
