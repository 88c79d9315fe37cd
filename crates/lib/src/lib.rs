//! # Natural Language to Druid SQL
//!
//! This crate turns a table name and a natural-language question into an Apache
//! Druid SQL statement. It resolves the table's columns from Druid's
//! `INFORMATION_SCHEMA`, embeds them in a prompt, asks a text-generation provider
//! for the query and strips markdown fences from the answer.

pub mod catalog;
pub mod errors;
pub mod generator;
pub mod prompts;
pub mod providers;
pub mod sanitize;
pub mod types;

pub use catalog::{predefined_queries, PredefinedQuery, QueryCatalog};
pub use errors::QueryGenError;
pub use generator::{QueryGenerator, QueryGeneratorBuilder};
pub use sanitize::sanitize_generated_query;
pub use types::{GeneratedQuery, QueryRequest};
