/**
 * Application State Management
 *
 * This module defines the application state structure and implements
 * the `FromRef` trait for Axum state extraction.
 *
 * # Architecture
 *
 * `AppState` holds the record store behind `Arc<dyn RecordStore>`, so the
 * same router serves a SQLite store in production and a memory store in
 * tests or when no database is configured.
 *
 * # State Extraction
 *
 * Handlers extract `State<SharedStore>` directly instead of the whole
 * `AppState`, following Axum's recommended pattern.
 */

use std::sync::Arc;

use axum::extract::FromRef;

use crate::shared::store::RecordStore;

/// Record store shared across request handlers
pub type SharedStore = Arc<dyn RecordStore>;

/// Which store implementation is serving requests
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    Sqlite,
    Memory,
}

impl std::fmt::Display for StoreBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite => f.write_str("sqlite"),
            Self::Memory => f.write_str("memory"),
        }
    }
}

/// Central state container for the server
#[derive(Clone)]
pub struct AppState {
    /// The customer record store
    pub store: SharedStore,
}

impl AppState {
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }
}

impl FromRef<AppState> for SharedStore {
    fn from_ref(state: &AppState) -> Self {
        state.store.clone()
    }
}
