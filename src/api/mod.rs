//! API Module
//!
//! Router, shared state, and operational handlers.
//!
//! # Endpoints
//! - `GET /api/cache/stats` - Response cache statistics
//! - `GET /health` - Health check endpoint
//!
//! Proxy and admin endpoints live in [`crate::proxy`] and [`crate::admin`].

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
