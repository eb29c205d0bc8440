//! Shared Module
//!
//! This module contains types that are shared between the server and the
//! desktop client. Everything here is platform-agnostic and serializable.
//!
//! # Overview
//!
//! - **`customer`** - The customer record and the create/update body types
//! - **`error`** - The error taxonomy for store operations
//! - **`store`** - The `RecordStore` contract and the in-memory store
//! - **`config`** - Client configuration with a validating builder

/// Customer data structures
pub mod customer;

/// Shared error types
pub mod error;

/// Record store interface and in-memory implementation
pub mod store;

/// Application configuration
pub mod config;

/// Re-export commonly used types for convenience
pub use customer::{ApiMessage, Customer, CustomerDraft, CustomerFields, CustomerId};
pub use error::{CustomerError, StoreResult};
pub use store::{MemoryCustomerStore, RecordStore};
pub use config::{AppConfig, AppConfigBuilder, ConfigError};
