//! # Query Generator
//!
//! Ties the pieces together: schema lookup, prompt construction, one
//! generation call and cleanup of the answer. Every step runs sequentially
//! and nothing is cached between requests.

use crate::{
    errors::QueryGenError,
    prompts::{build_query_prompt, DRUID_QUERY_PROMPT},
    providers::{ai::AiProvider, druid::MetadataProvider},
    sanitize::sanitize_generated_query,
    types::{GeneratedQuery, QueryRequest},
};
use std::fmt;
use tracing::{debug, info, warn};

/// Generates Druid SQL from natural-language questions.
#[derive(Clone)]
pub struct QueryGenerator {
    pub metadata_provider: Box<dyn MetadataProvider>,
    pub ai_provider: Box<dyn AiProvider>,
    prompt_template: String,
}

impl fmt::Debug for QueryGenerator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QueryGenerator")
            .field("metadata_provider", &self.metadata_provider)
            .field("ai_provider", &self.ai_provider)
            .finish_non_exhaustive()
    }
}

impl QueryGenerator {
    /// Returns the column names of `table_name`, fetched fresh from the metadata provider.
    pub async fn fetch_columns(&self, table_name: &str) -> Result<Vec<String>, QueryGenError> {
        self.metadata_provider.fetch_columns(table_name).await
    }

    /// Translates a question about one table into a cleaned Druid SQL string.
    ///
    /// A blank question is rejected before any outbound call is made.
    pub async fn generate_query(
        &self,
        request: &QueryRequest,
    ) -> Result<GeneratedQuery, QueryGenError> {
        if request.user_input.trim().is_empty() {
            warn!("Rejecting blank question for table '{}'", request.table_name);
            return Err(QueryGenError::InvalidInput);
        }

        let columns = self.fetch_columns(&request.table_name).await?;
        let prompt = build_query_prompt(
            &self.prompt_template,
            &request.table_name,
            &columns,
            &request.user_input,
        );
        debug!(%prompt, "Built query generation prompt");

        let raw_response = self.ai_provider.generate(&prompt).await?;
        let query = sanitize_generated_query(&raw_response);
        info!(
            "Generated query for table '{}': {query}",
            request.table_name
        );

        Ok(GeneratedQuery {
            query,
            columns,
            prompt,
            raw_response,
        })
    }
}

/// A builder for `QueryGenerator`.
#[derive(Default)]
pub struct QueryGeneratorBuilder {
    metadata_provider: Option<Box<dyn MetadataProvider>>,
    ai_provider: Option<Box<dyn AiProvider>>,
    prompt_template: Option<String>,
}

impl QueryGeneratorBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the source of table columns.
    pub fn metadata_provider(mut self, provider: Box<dyn MetadataProvider>) -> Self {
        self.metadata_provider = Some(provider);
        self
    }

    /// Sets the text-generation provider.
    pub fn ai_provider(mut self, provider: Box<dyn AiProvider>) -> Self {
        self.ai_provider = Some(provider);
        self
    }

    /// Overrides the default prompt template. `None` keeps the default.
    pub fn prompt_template(mut self, template: Option<String>) -> Self {
        self.prompt_template = template;
        self
    }

    /// Builds the `QueryGenerator`, failing if either provider is missing.
    pub fn build(self) -> Result<QueryGenerator, QueryGenError> {
        Ok(QueryGenerator {
            metadata_provider: self
                .metadata_provider
                .ok_or(QueryGenError::MissingMetadataProvider)?,
            ai_provider: self.ai_provider.ok_or(QueryGenError::MissingAiProvider)?,
            prompt_template: self
                .prompt_template
                .unwrap_or_else(|| DRUID_QUERY_PROMPT.to_string()),
        })
    }
}
