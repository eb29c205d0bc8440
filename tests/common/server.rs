//! Real HTTP server helpers
//!
//! Spawns the customer router on an ephemeral port so client code can be
//! exercised over an actual socket.

use std::sync::Arc;

use customer_desk::backend::server::{create_app_with_store, SharedStore};
use customer_desk::desk_app::{Config, HttpCustomerStore};
use customer_desk::shared::MemoryCustomerStore;
use tokio::net::TcpListener;

/// A running server and the URL it listens on
pub struct TestApp {
    pub base_url: String,
    pub store: SharedStore,
}

impl TestApp {
    /// Start a server over an empty memory store
    pub async fn spawn() -> Self {
        Self::spawn_with_store(Arc::new(MemoryCustomerStore::new())).await
    }

    pub async fn spawn_with_store(store: SharedStore) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind test listener");
        let addr = listener.local_addr().expect("Listener has no address");

        let app = create_app_with_store(store.clone());
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("Test server failed");
        });

        Self {
            base_url: format!("http://{}", addr),
            store,
        }
    }

    /// HTTP store client pointed at this server
    pub fn client(&self) -> HttpCustomerStore {
        let config = Config::for_server(&self.base_url).expect("Test server URL is valid");
        HttpCustomerStore::new(config)
    }
}
