//! # General Route Handlers
//!
//! The root endpoint, which advertises the predefined query catalog, and the
//! health check.

use crate::types::RootResponse;
use axum::Json;
use druidgen::predefined_queries;

/// The greeting returned by the root endpoint.
pub const WELCOME_MESSAGE: &str = "Welcome to the Druid Query Generator API";

/// The handler for the root (`/`) endpoint.
pub async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        message: WELCOME_MESSAGE,
        queries: predefined_queries(),
    })
}

/// The handler for the health check (`/health`) endpoint.
pub async fn health_check() -> &'static str {
    "OK"
}
