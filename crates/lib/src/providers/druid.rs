//! # Druid Metadata Provider
//!
//! Resolves a table's column names through Druid's SQL endpoint by querying
//! `INFORMATION_SCHEMA.COLUMNS`. The table name is sent as a dynamic parameter
//! rather than spliced into the statement.

use crate::errors::QueryGenError;
use async_trait::async_trait;
use dyn_clone::DynClone;
use reqwest::Client as ReqwestClient;
use serde::Serialize;
use serde_json::Value;
use std::fmt::Debug;
use std::time::Duration;
use tracing::{debug, info};

/// The Druid SQL endpoint of a local quickstart router.
pub const DEFAULT_DRUID_SQL_URL: &str = "http://localhost:8888/druid/v2/sql";

/// The statement used to list the columns of one table.
pub const COLUMNS_QUERY: &str =
    "SELECT COLUMN_NAME FROM INFORMATION_SCHEMA.COLUMNS WHERE TABLE_NAME = ?";

const COLUMN_NAME_FIELD: &str = "COLUMN_NAME";

/// A source of table schema information.
#[async_trait]
pub trait MetadataProvider: Send + Sync + Debug + DynClone {
    /// Returns the column names of `table_name` in the order the engine reports them.
    async fn fetch_columns(&self, table_name: &str) -> Result<Vec<String>, QueryGenError>;
}

dyn_clone::clone_trait_object!(MetadataProvider);

#[derive(Serialize)]
struct SqlRequest<'a> {
    query: &'a str,
    parameters: Vec<SqlParameter<'a>>,
}

#[derive(Serialize)]
struct SqlParameter<'a> {
    #[serde(rename = "type")]
    kind: &'static str,
    value: &'a str,
}

/// A metadata provider backed by the Druid SQL HTTP API.
#[derive(Clone, Debug)]
pub struct DruidProvider {
    client: ReqwestClient,
    sql_url: String,
}

impl DruidProvider {
    /// Creates a new `DruidProvider` whose requests give up after `timeout`.
    pub fn new(sql_url: String, timeout: Duration) -> Result<Self, QueryGenError> {
        let client = ReqwestClient::builder()
            .timeout(timeout)
            .build()
            .map_err(QueryGenError::ReqwestClientBuild)?;
        Ok(Self { client, sql_url })
    }
}

#[async_trait]
impl MetadataProvider for DruidProvider {
    async fn fetch_columns(&self, table_name: &str) -> Result<Vec<String>, QueryGenError> {
        info!("Fetching columns for table '{table_name}' from Druid");
        let request_body = SqlRequest {
            query: COLUMNS_QUERY,
            parameters: vec![SqlParameter {
                kind: "VARCHAR",
                value: table_name,
            }],
        };

        let response = self
            .client
            .post(&self.sql_url)
            .json(&request_body)
            .send()
            .await
            .map_err(QueryGenError::MetadataRequest)?;

        let status = response.status();
        if !status.is_success() {
            let url = response.url().to_string();
            let body = response.text().await.unwrap_or_default();
            return Err(QueryGenError::MetadataRejected { status, url, body });
        }

        let rows: Value = response
            .json()
            .await
            .map_err(QueryGenError::MetadataDeserialization)?;

        let columns = extract_column_names(&rows)?;
        debug!(?columns, "Resolved columns for '{table_name}'");
        Ok(columns)
    }
}

/// Pulls `COLUMN_NAME` out of each row of a Druid SQL result.
///
/// Rows without the field are skipped. Anything other than a JSON array is an error.
pub fn extract_column_names(rows: &Value) -> Result<Vec<String>, QueryGenError> {
    let rows = rows.as_array().ok_or_else(|| {
        QueryGenError::MetadataFormat(format!("expected a list of rows, got {rows}"))
    })?;

    Ok(rows
        .iter()
        .filter_map(|row| row.get(COLUMN_NAME_FIELD).and_then(Value::as_str))
        .map(String::from)
        .collect())
}
