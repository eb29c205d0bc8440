//! Route Configuration Module
//!
//! This module configures all HTTP routes for the backend server.
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs          - Module exports and documentation
//! ├── router.rs       - Main router creation and middleware
//! └── api_routes.rs   - The /customer resource
//! ```
//!
//! Unknown routes fall through to a JSON 404.

/// Main router creation
pub mod router;

/// Customer API routes
pub mod api_routes;

// Re-export commonly used functions
pub use router::create_router;
