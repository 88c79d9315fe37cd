//! # Natural Language Query Handler
//!
//! `POST /nl_query/` turns a question about a table into Druid SQL. With
//! `?debug=true` the response also carries the resolved columns, the prompt
//! sent to the model and its raw answer. Malformed bodies and query strings
//! get the same `{"detail": ...}` shape as every other error.

use super::{AppError, AppState, DebugParams};
use crate::types::QueryResponse;
use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    Json,
};
use druidgen::QueryRequest;
use serde_json::json;
use tracing::info;

pub async fn nl_query_handler(
    State(app_state): State<AppState>,
    debug_params: Result<Query<DebugParams>, QueryRejection>,
    payload: Result<Json<QueryRequest>, JsonRejection>,
) -> Result<Json<QueryResponse>, AppError> {
    let Query(debug_params) = debug_params?;
    let Json(payload) = payload?;
    info!(
        "Received query request for table '{}': '{}'",
        payload.table_name, payload.user_input
    );

    let generated = app_state.generator.generate_query(&payload).await?;

    let debug = debug_params.debug.unwrap_or(false).then(|| {
        json!({
            "columns": generated.columns,
            "prompt": generated.prompt,
            "raw_response": generated.raw_response,
        })
    });

    Ok(Json(QueryResponse {
        generated_query: generated.query,
        debug,
    }))
}
