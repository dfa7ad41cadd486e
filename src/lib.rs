//! Media Proxy - caching HTTP proxy for third-party media APIs
//!
//! Forwards browser requests to movie/TV, game, book and generative-AI
//! services, caching read-only responses for a short TTL, and hosts a
//! minimal password-based admin backend.

pub mod admin;
pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod proxy;
pub mod sanitize;
pub mod upstream;

pub use api::{create_router, AppState};
pub use config::Config;
