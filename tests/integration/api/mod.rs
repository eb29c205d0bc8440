//! HTTP API integration tests

pub mod customer_api_test;
