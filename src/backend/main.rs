/**
 * Customer Server Entry Point
 *
 * Initializes logging and configuration, then serves the `/customer`
 * resource over HTTP.
 */

use customer_desk::backend::server::{create_app, ServerConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file if present
    dotenv::dotenv().ok();

    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&env_filter))
        .init();

    let config = ServerConfig::from_env();
    let app = create_app(&config).await;

    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on {}", addr);
    tracing::info!("Desktop client should use CLIENT_API_URL=http://127.0.0.1:{}", config.port);

    axum::serve(listener, app).await?;

    Ok(())
}
