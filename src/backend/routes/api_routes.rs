/**
 * API Route Handlers
 *
 * This module wires the `/customer` resource to its handlers.
 *
 * # Routes
 *
 * - `GET /customer` - List customers sorted by name
 * - `POST /customer` - Create a customer
 * - `PUT /customer/{id}` - Update a customer (partial merge)
 * - `DELETE /customer/{id}` - Delete a customer
 */

use axum::{routing::get, routing::put, Router};

use crate::backend::customers::{create_customer, delete_customer, list_customers, update_customer};
use crate::backend::server::state::AppState;

/// Configure the customer routes
pub fn configure_api_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route("/customer", get(list_customers).post(create_customer))
        .route("/customer/{id}", put(update_customer).delete(delete_customer))
}
