//! Customer HTTP Handlers
//!
//! Thin handlers that forward JSON bodies to the record store and return the
//! result. Store errors are converted to responses by `BackendError`.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};

use crate::backend::error::BackendError;
use crate::backend::server::state::SharedStore;
use crate::shared::customer::{ApiMessage, Customer, CustomerFields, CustomerId};

/// List all customers, sorted by name
pub async fn list_customers(
    State(store): State<SharedStore>,
) -> Result<Json<Vec<Customer>>, BackendError> {
    let customers = store
        .list_all()
        .await
        .map_err(|e| BackendError::customer(e, "Error fetching customers"))?;

    tracing::debug!("Listing {} customers", customers.len());
    Ok(Json(customers))
}

/// Create a customer from a complete set of fields
pub async fn create_customer(
    State(store): State<SharedStore>,
    body: Result<Json<CustomerFields>, JsonRejection>,
) -> Result<(StatusCode, Json<Customer>), BackendError> {
    let Json(fields) = body?;

    let customer = store
        .create(fields)
        .await
        .map_err(|e| BackendError::customer(e, "Error creating customer"))?;

    tracing::info!("Created customer {} ({})", customer.id, customer.name);
    Ok((StatusCode::CREATED, Json(customer)))
}

/// Merge the provided fields into an existing customer
pub async fn update_customer(
    State(store): State<SharedStore>,
    Path(id): Path<String>,
    body: Result<Json<CustomerFields>, JsonRejection>,
) -> Result<Json<Customer>, BackendError> {
    let Json(fields) = body?;
    let id = CustomerId::new(id);

    let customer = store
        .update_by_id(&id, fields)
        .await
        .map_err(|e| BackendError::customer(e, "Error updating customer"))?;

    tracing::info!("Updated customer {}", customer.id);
    Ok(Json(customer))
}

/// Delete a customer by id
pub async fn delete_customer(
    State(store): State<SharedStore>,
    Path(id): Path<String>,
) -> Result<Json<ApiMessage>, BackendError> {
    let id = CustomerId::new(id);

    let confirmation = store
        .delete_by_id(&id)
        .await
        .map_err(|e| BackendError::customer(e, "Error deleting customer"))?;

    tracing::info!("Deleted customer {}", id);
    Ok(Json(confirmation))
}
