pub mod gemini;
pub mod local;

use crate::errors::QueryGenError;
use async_trait::async_trait;
use dyn_clone::DynClone;
use std::fmt::Debug;

/// A trait for interacting with a text-generation provider.
///
/// Implementations send one prompt and return the text of the first candidate
/// answer, or `QueryGenError::NoCandidates` when the provider produced none.
#[async_trait]
pub trait AiProvider: Send + Sync + Debug + DynClone {
    /// Generates a response for the given prompt.
    async fn generate(&self, prompt: &str) -> Result<String, QueryGenError>;
}

dyn_clone::clone_trait_object!(AiProvider);
