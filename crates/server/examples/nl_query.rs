//! Example: generate a Druid SQL query from the command line.
//!
//! Loads the server configuration, builds the same `AppState` the server uses
//! and calls the `/nl_query/` handler directly, printing the debug output.
//!
//! # Prerequisites
//!
//! - A Druid router reachable at `DRUID_SQL_URL` (default `http://localhost:8888`).
//! - `GOOGLE_API_KEY` set in the environment or in a `.env` file.
//!
//! # Usage
//!
//! `RUST_LOG=info cargo run -p druidgen-server --example nl_query -- wikipedia "top 10 pages by edits"`

use anyhow::{bail, Result};
use axum::{
    extract::{Query, State},
    Json,
};
use druidgen::QueryRequest;
use druidgen_server::{config, handlers, state, types::DebugParams};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .compact()
        .init();

    let mut args = std::env::args().skip(1);
    let (Some(table_name), Some(user_input)) = (args.next(), args.next()) else {
        bail!("usage: nl_query <table_name> <question>");
    };

    let app_state = state::build_app_state(config::get_config(None)?).await?;
    let payload = QueryRequest {
        table_name,
        user_input,
    };

    let result = handlers::nl_query_handler(
        State(app_state),
        Ok(Query(DebugParams { debug: Some(true) })),
        Ok(Json(payload)),
    )
    .await;

    match result {
        Ok(Json(response)) => println!("{}", serde_json::to_string_pretty(&response)?),
        Err(e) => {
            let (status, detail) = e.status_and_detail();
            bail!("{status}: {detail}");
        }
    }

    Ok(())
}
