//! Test suite for the customer desk
//!
//! This module organizes all tests

pub mod common;
#[cfg(feature = "ssr")]
pub mod integration;
