/**
 * Router Configuration
 *
 * This module provides the main router creation function that combines
 * the route configuration and middleware into a single Axum router.
 *
 * # Middleware
 *
 * - `TraceLayer` logs every request and response through `tracing`
 * - `CorsLayer` answers preflight requests from browser clients
 */

use axum::{http::StatusCode, Json, Router};
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::backend::routes::api_routes::configure_api_routes;
use crate::backend::server::state::AppState;
use crate::shared::customer::ApiMessage;

/// Create the Axum router with all routes configured
///
/// # Arguments
///
/// * `app_state` - Application state holding the record store
///
/// # Returns
///
/// Configured Axum Router ready to serve requests
pub fn create_router(app_state: AppState) -> Router<()> {
    let router = configure_api_routes(Router::new());

    let middleware = ServiceBuilder::new()
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        );

    router
        .fallback(not_found)
        .layer(middleware)
        .with_state(app_state)
}

async fn not_found() -> (StatusCode, Json<ApiMessage>) {
    (StatusCode::NOT_FOUND, Json(ApiMessage::new("Not found")))
}
