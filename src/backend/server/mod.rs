//! Server Module
//!
//! This module contains the server-side code for initializing and
//! configuring the Axum HTTP server.
//!
//! # Module Structure
//!
//! ```text
//! server/
//! ├── mod.rs          - Module exports and documentation
//! ├── state.rs        - AppState and FromRef implementations
//! ├── config.rs       - Environment configuration and store loading
//! └── init.rs         - Server initialization and app creation
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use customer_desk::backend::server::{create_app, ServerConfig};
//!
//! # async fn example() {
//! let config = ServerConfig::from_env();
//! let app = create_app(&config).await;
//! let listener = tokio::net::TcpListener::bind(config.socket_addr()).await.unwrap();
//! axum::serve(listener, app).await.unwrap();
//! # }
//! ```

/// Application state management
pub mod state;

/// Server configuration loading
pub mod config;

/// Server initialization
pub mod init;

// Re-export commonly used types
pub use config::ServerConfig;
pub use init::{create_app, create_app_with_store};
pub use state::{AppState, SharedStore, StoreBackend};
