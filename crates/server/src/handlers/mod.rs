//! # API Route Handlers
//!
//! This module organizes all the Axum route handlers for `druidgen-server`,
//! split by the endpoint they serve.

pub mod general;
pub mod query;
pub mod schema;

pub use general::*;
pub use query::*;
pub use schema::*;

// Shared items used by multiple handler modules.
use super::{errors::AppError, state::AppState, types::DebugParams};
