/**
 * Server Configuration
 *
 * This module handles loading of server configuration from environment
 * variables and opening the record store it points at.
 *
 * # Configuration Sources
 *
 * - `SERVER_HOST` - bind address (default `0.0.0.0`)
 * - `SERVER_PORT` - bind port (default `3000`)
 * - `DATABASE_URL` - SQLite URL; when unset the server keeps customers in memory
 *
 * # Error Handling
 *
 * Store errors are logged but do not prevent server startup. If the
 * database cannot be opened, the server continues with the memory store.
 */

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::sync::Arc;

use crate::backend::customers::SqliteCustomerStore;
use crate::backend::server::state::{SharedStore, StoreBackend};
use crate::shared::store::MemoryCustomerStore;

/// Default port when `SERVER_PORT` is unset or invalid
pub const DEFAULT_PORT: u16 = 3000;

/// Server settings read from the environment
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
    pub database_url: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            database_url: None,
        }
    }
}

impl ServerConfig {
    /// Read the configuration from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read the configuration through an arbitrary variable lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let host = match lookup("SERVER_HOST") {
            Some(raw) => raw.parse().unwrap_or_else(|_| {
                tracing::warn!("Invalid SERVER_HOST '{}', using {}", raw, defaults.host);
                defaults.host
            }),
            None => defaults.host,
        };

        let port = match lookup("SERVER_PORT") {
            Some(raw) => raw.parse().unwrap_or_else(|_| {
                tracing::warn!("Invalid SERVER_PORT '{}', using {}", raw, DEFAULT_PORT);
                DEFAULT_PORT
            }),
            None => DEFAULT_PORT,
        };

        let database_url = lookup("DATABASE_URL").filter(|url| !url.trim().is_empty());

        Self {
            host,
            port,
            database_url,
        }
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

/// Open the record store described by the configuration
///
/// # Returns
///
/// - The SQLite store if `DATABASE_URL` is set and the database opens
/// - The memory store otherwise
pub async fn load_store(config: &ServerConfig) -> (SharedStore, StoreBackend) {
    let Some(database_url) = config.database_url.as_deref() else {
        tracing::warn!("DATABASE_URL not set. Customers are kept in memory and lost on restart.");
        return (Arc::new(MemoryCustomerStore::new()), StoreBackend::Memory);
    };

    tracing::info!("Connecting to database...");

    match SqliteCustomerStore::connect(database_url).await {
        Ok(store) => {
            tracing::info!("Database connection pool created successfully");
            (Arc::new(store), StoreBackend::Sqlite)
        }
        Err(e) => {
            tracing::error!("Failed to open customer database: {:?}", e);
            tracing::warn!("Falling back to the in-memory store.");
            (Arc::new(MemoryCustomerStore::new()), StoreBackend::Memory)
        }
    }
}
