//! egui Native Desktop App Module
//!
//! This module provides the customer desk: a native egui/eframe window that
//! lists, creates, edits and deletes customers through the server's
//! `/customer` API.
//!
//! # Architecture
//!
//! - **`config`** - Server URL configuration (`CLIENT_API_URL`)
//! - **`customers`** - HTTP record store and the synchronization controller
//! - **`state`** - Frame-to-frame state, hands the controller to tokio tasks
//! - **`views`** - Header, form, list and notice bar rendering
//! - **`theme`** - Colours and frame builders
//! - **`main`** - Application entry point (binary)
//!
//! # Module Structure
//!
//! ```text
//! desk_app/
//! ├── mod.rs          - Module exports and documentation
//! ├── main.rs         - customer-desk binary
//! ├── config.rs       - Configuration management
//! ├── customers/      - Store client, controller, form, notices
//! ├── state/          - DeskState
//! ├── views/          - UI rendering
//! └── theme/          - Colours and styles
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! // Run the desk app against a local server:
//! // CLIENT_API_URL=http://127.0.0.1:3000 cargo run --bin customer-desk
//! ```

pub mod config;
pub mod customers;
pub mod state;
pub mod theme;
pub mod views;

// Re-export commonly used types
pub use config::Config;
pub use customers::{ControllerState, FormMode, HttpCustomerStore, SyncAction, SyncController};
pub use state::DeskState;
