/**
 * Server Initialization
 *
 * This module handles the initialization of the Axum HTTP server: opening
 * the record store named by the configuration and assembling the router.
 *
 * # Initialization Process
 *
 * 1. Open the SQLite store, or fall back to the memory store
 * 2. Create the application state
 * 3. Create and configure the router
 */

use axum::Router;

use crate::backend::routes::router::create_router;
use crate::backend::server::config::{load_store, ServerConfig};
use crate::backend::server::state::{AppState, SharedStore};

/// Create and configure the Axum application
///
/// # Error Handling
///
/// The function is designed to be resilient: a missing or unreachable
/// database is logged and the server continues with the memory store.
pub async fn create_app(config: &ServerConfig) -> Router<()> {
    tracing::info!("Initializing customer server");

    let (store, backend) = load_store(config).await;
    tracing::info!("Serving customers from the {} store", backend);

    create_router(AppState::new(store))
}

/// Create the application around an already opened store
///
/// Used by tests and by callers embedding the server.
pub fn create_app_with_store(store: SharedStore) -> Router<()> {
    create_router(AppState::new(store))
}
