//! # Predefined Query Catalog
//!
//! Example Druid queries offered to clients as starting points. The
//! `{table_name}` placeholder is left for the client to fill in.

use serde::Serialize;
use std::collections::BTreeMap;

/// One example: a human description and its templated Druid SQL.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct PredefinedQuery {
    #[serde(rename = "query")]
    pub description: &'static str,
    #[serde(rename = "druid")]
    pub template: &'static str,
}

/// Examples grouped by category name.
pub type QueryCatalog = BTreeMap<&'static str, &'static [PredefinedQuery]>;

const DEFAULT_QUERIES: &[PredefinedQuery] = &[
    PredefinedQuery {
        description: "Show all records from the selected table.",
        template: "SELECT * FROM {table_name}",
    },
    PredefinedQuery {
        description: "Count the total number of records in the selected table.",
        template: "SELECT COUNT(*) FROM {table_name}",
    },
    PredefinedQuery {
        description: "Get a limited number of records from the selected table.",
        template: "SELECT * FROM {table_name} LIMIT 10",
    },
    PredefinedQuery {
        description: "Order records from the selected table.",
        template: "SELECT * FROM {table_name} ORDER BY __time DESC",
    },
];

/// Returns the read-only catalog of example queries.
pub fn predefined_queries() -> QueryCatalog {
    BTreeMap::from([("default", DEFAULT_QUERIES)])
}
