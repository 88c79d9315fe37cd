//! Shared test doubles for the `druidgen` workspace.

use async_trait::async_trait;
use druidgen::errors::QueryGenError;
use druidgen::providers::ai::AiProvider;
use druidgen::providers::druid::MetadataProvider;
use std::fmt::Debug;
use std::sync::{Arc, Mutex};

// --- Mock AI Provider ---

/// What the mock answers with on every call.
#[derive(Clone, Debug)]
enum MockReply {
    Text(String),
    NoCandidates,
}

/// An `AiProvider` that records every prompt and returns a programmed reply.
///
/// Clones share the same call log, so a test can keep one handle while the
/// generator owns another.
#[derive(Clone, Debug)]
pub struct MockAiProvider {
    reply: Arc<Mutex<MockReply>>,
    calls: Arc<Mutex<Vec<String>>>,
}

impl MockAiProvider {
    /// Creates a mock that answers every prompt with `response`.
    pub fn with_response(response: &str) -> Self {
        Self {
            reply: Arc::new(Mutex::new(MockReply::Text(response.to_string()))),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Creates a mock that behaves like a provider returning zero candidates.
    pub fn without_candidates() -> Self {
        Self {
            reply: Arc::new(Mutex::new(MockReply::NoCandidates)),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Retrieves the recorded prompts for assertion.
    pub fn get_calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

impl Default for MockAiProvider {
    fn default() -> Self {
        Self::with_response("SELECT 1")
    }
}

#[async_trait]
impl AiProvider for MockAiProvider {
    async fn generate(&self, prompt: &str) -> Result<String, QueryGenError> {
        self.calls.lock().unwrap().push(prompt.to_string());
        match &*self.reply.lock().unwrap() {
            MockReply::Text(text) => Ok(text.clone()),
            MockReply::NoCandidates => Err(QueryGenError::NoCandidates),
        }
    }
}

// --- Mock Metadata Provider ---

/// A `MetadataProvider` that returns a fixed column list and records the
/// tables it was asked about.
#[derive(Clone, Debug, Default)]
pub struct MockMetadataProvider {
    columns: Vec<String>,
    requested_tables: Arc<Mutex<Vec<String>>>,
}

impl MockMetadataProvider {
    pub fn with_columns(columns: &[&str]) -> Self {
        Self {
            columns: columns.iter().map(|c| c.to_string()).collect(),
            requested_tables: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Retrieves the table names looked up so far.
    pub fn get_calls(&self) -> Vec<String> {
        self.requested_tables.lock().unwrap().clone()
    }
}

#[async_trait]
impl MetadataProvider for MockMetadataProvider {
    async fn fetch_columns(&self, table_name: &str) -> Result<Vec<String>, QueryGenError> {
        self.requested_tables
            .lock()
            .unwrap()
            .push(table_name.to_string());
        Ok(self.columns.clone())
    }
}
