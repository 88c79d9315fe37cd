use reqwest::StatusCode;
use thiserror::Error;

/// Error types for schema lookup and query generation.
#[derive(Error, Debug)]
pub enum QueryGenError {
    #[error("Failed to build Reqwest client: {0}")]
    ReqwestClientBuild(reqwest::Error),
    #[error("Please enter a valid query.")]
    InvalidInput,
    #[error("{status} for url {url}: {body}")]
    MetadataRejected {
        status: StatusCode,
        url: String,
        body: String,
    },
    #[error("Failed to send request to the Druid SQL endpoint: {0}")]
    MetadataRequest(reqwest::Error),
    #[error("Failed to deserialize Druid response: {0}")]
    MetadataDeserialization(reqwest::Error),
    #[error("Unexpected response format from Druid: {0}")]
    MetadataFormat(String),
    #[error("Failed to send request to AI provider: {0}")]
    AiRequest(reqwest::Error),
    #[error("Failed to deserialize AI provider response: {0}")]
    AiDeserialization(reqwest::Error),
    #[error("AI provider returned {status}: {body}")]
    AiApi { status: StatusCode, body: String },
    #[error("Generation produced no result.")]
    NoCandidates,
    #[error("Metadata provider is not configured")]
    MissingMetadataProvider,
    #[error("AI provider is not configured")]
    MissingAiProvider,
}

impl QueryGenError {
    /// True for failures of the metadata lookup itself, as opposed to the
    /// generation step or caller input.
    pub fn is_metadata_failure(&self) -> bool {
        matches!(
            self,
            QueryGenError::MetadataRejected { .. }
                | QueryGenError::MetadataRequest(_)
                | QueryGenError::MetadataDeserialization(_)
                | QueryGenError::MetadataFormat(_)
        )
    }
}
