//! Desk client integration tests

pub mod http_store_test;
pub mod sync_flow_test;
