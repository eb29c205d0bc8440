//! Integration tests
//!
//! - `api` - the HTTP contract, driven through axum-test
//! - `client` - the reqwest store and the synchronization controller
//! - `database` - the SQLite store

pub mod api;
pub mod client;
pub mod database;
