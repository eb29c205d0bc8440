//! Customer Desk - Main Library
//!
//! A small customer management system: an Axum server exposing a `/customer`
//! CRUD resource over a record store, and a native egui desktop client that
//! keeps its on-screen list synchronized with that store.
//!
//! # Module Structure
//!
//! The library is organized into three main modules:
//!
//! - **`shared`** - Types shared between the server and the client
//!   - Customer record and request bodies
//!   - The `RecordStore` contract and an in-memory store
//!   - Error taxonomy and client configuration
//!
//! - **`backend`** - Server-side code (only compiled with `ssr` feature)
//!   - Axum HTTP server with the `/customer` handlers
//!   - SQLite persistence through sqlx
//!   - Error to HTTP response conversion
//!
//! - **`desk_app`** - Native desktop app (egui/eframe)
//!   - HTTP record store client
//!   - Synchronization controller
//!   - Customer list and form views
//!
//! # Feature Flags
//!
//! - **`ssr`** - Enables the backend modules and the `customer-server` binary
//!   (Axum, tower-http, sqlx, dotenv). On by default.
//!
//! # Usage
//!
//! ## Server-Side
//!
//! ```rust,no_run
//! use customer_desk::backend::server::{create_app, ServerConfig};
//!
//! # async fn example() -> std::io::Result<()> {
//! let config = ServerConfig::from_env();
//! let app = create_app(&config).await;
//! let listener = tokio::net::TcpListener::bind(config.socket_addr()).await?;
//! axum::serve(listener, app).await
//! # }
//! ```
//!
//! ## Synchronization Controller
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use customer_desk::desk_app::{Config, HttpCustomerStore, SyncAction, SyncController};
//!
//! # async fn example() {
//! let store = Arc::new(HttpCustomerStore::new(Config::new()));
//! let mut controller = SyncController::new(store);
//! controller.mount().await;
//! controller.handle(SyncAction::Refresh).await;
//! println!("{} customers", controller.state().records().len());
//! # }
//! ```
//!
//! # Thread Safety
//!
//! - **Server**: the store is shared as `Arc<dyn RecordStore>`
//! - **Native**: egui is single-threaded immediate mode GUI; store calls run
//!   on a tokio runtime and hand their results back over a channel

/// Shared types and data structures
pub mod shared;

/// Backend server-side code
#[cfg(feature = "ssr")]
pub mod backend;

/// egui native desktop app
pub mod desk_app;
