use serde::{Deserialize, Serialize};

/// A request to translate a question about one table into Druid SQL.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct QueryRequest {
    pub table_name: String,
    pub user_input: String,
}

/// The outcome of a successful generation.
///
/// `query` is the cleaned model output. The remaining fields are kept for
/// debugging; there is no guarantee the query is valid SQL.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct GeneratedQuery {
    pub query: String,
    pub columns: Vec<String>,
    pub prompt: String,
    pub raw_response: String,
}
