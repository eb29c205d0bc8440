//! Customer Backend Module
//!
//! This module contains the HTTP handlers for the `/customer` resource and
//! the SQLite-backed record store.

pub mod db;
pub mod handlers;

pub use db::SqliteCustomerStore;
pub use handlers::{create_customer, delete_customer, list_customers, update_customer};
