//! Common test utilities and helpers
//!
//! This module provides shared utilities for all tests including:
//! - Customer fixtures
//! - A real server bound to an ephemeral port
//! - Custom assertion macros

pub mod fixtures;
#[cfg(feature = "ssr")]
pub mod server;

// Re-export commonly used utilities
pub use fixtures::*;
#[cfg(feature = "ssr")]
pub use server::*;
