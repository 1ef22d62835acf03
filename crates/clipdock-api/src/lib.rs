//! Axum HTTP API server.
//!
//! This crate provides:
//! - Ownership-scoped media upload endpoints (thumbnail, video)
//! - JWT bearer authentication
//! - Request logging, request ids, CORS

pub mod auth;
pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod state;

pub use auth::{AuthUser, Authenticator};
pub use config::ApiConfig;
pub use error::{ApiError, ApiResult};
pub use routes::create_router;
pub use state::AppState;
