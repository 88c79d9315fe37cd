use druidgen::QueryCatalog;
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Deserialize, Default)]
pub struct DebugParams {
    pub debug: Option<bool>,
}

/// The body of `GET /`.
#[derive(Serialize)]
pub struct RootResponse {
    pub message: &'static str,
    pub queries: QueryCatalog,
}

/// The body of `GET /fetch_columns/{table_name}`.
#[derive(Serialize, Deserialize, Debug)]
pub struct ColumnsResponse {
    pub columns: Vec<String>,
}

/// The body of `POST /nl_query/`.
#[derive(Serialize, Deserialize, Debug)]
pub struct QueryResponse {
    pub generated_query: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub debug: Option<Value>,
}
