//! Record Store Interface
//!
//! The narrow contract every customer store implements: list-all, create,
//! update-by-id and delete-by-id. The server backs it with SQLite or memory,
//! the desktop client backs it with HTTP calls to the server.
//!
//! # Ordering
//!
//! `list_all` always returns records sorted ascending by name. Callers must
//! re-read after a mutation rather than assume where a record landed.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::shared::customer::{sort_by_name, ApiMessage, Customer, CustomerFields, CustomerId};
use crate::shared::error::{CustomerError, StoreResult};

/// Operations against the customer collection
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// All records, sorted ascending by name
    async fn list_all(&self) -> StoreResult<Vec<Customer>>;

    /// Create a record from a complete set of fields
    async fn create(&self, fields: CustomerFields) -> StoreResult<Customer>;

    /// Merge the provided fields into an existing record
    async fn update_by_id(&self, id: &CustomerId, fields: CustomerFields) -> StoreResult<Customer>;

    /// Remove an existing record
    async fn delete_by_id(&self, id: &CustomerId) -> StoreResult<ApiMessage>;
}

/// In-memory customer store
///
/// Used by the server when no database is configured, and by tests.
#[derive(Debug, Default)]
pub struct MemoryCustomerStore {
    records: RwLock<HashMap<CustomerId, Customer>>,
}

impl MemoryCustomerStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with records, keeping their ids
    pub fn with_records(records: impl IntoIterator<Item = Customer>) -> Self {
        let records = records.into_iter().map(|c| (c.id.clone(), c)).collect();
        Self {
            records: RwLock::new(records),
        }
    }

    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

#[async_trait]
impl RecordStore for MemoryCustomerStore {
    async fn list_all(&self) -> StoreResult<Vec<Customer>> {
        let mut records: Vec<Customer> = self.records.read().await.values().cloned().collect();
        sort_by_name(&mut records);
        Ok(records)
    }

    async fn create(&self, fields: CustomerFields) -> StoreResult<Customer> {
        let draft = fields.require()?;
        let customer = Customer::from_draft(CustomerId::generate(), draft);

        self.records
            .write()
            .await
            .insert(customer.id.clone(), customer.clone());

        tracing::debug!("Created customer {} in memory", customer.id);
        Ok(customer)
    }

    async fn update_by_id(&self, id: &CustomerId, fields: CustomerFields) -> StoreResult<Customer> {
        fields.validate_present()?;

        let mut records = self.records.write().await;
        let customer = records.get_mut(id).ok_or_else(|| CustomerError::not_found(id))?;
        customer.apply(fields);

        Ok(customer.clone())
    }

    async fn delete_by_id(&self, id: &CustomerId) -> StoreResult<ApiMessage> {
        match self.records.write().await.remove(id) {
            Some(_) => Ok(ApiMessage::deleted()),
            None => Err(CustomerError::not_found(id)),
        }
    }
}
