use axum::{
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use druidgen::QueryGenError;
use serde_json::json;
use tracing::{error, warn};

/// A custom error type for the server application.
///
/// Every variant becomes a `{"detail": ...}` JSON body with a status code that
/// tells the caller whether the problem is theirs, Druid's or the model's.
#[derive(Debug)]
pub enum AppError {
    /// Errors originating from `druidgen`.
    QueryGen(QueryGenError),
    /// The request could not be extracted (bad JSON, missing field, bad query string).
    /// Keeps the status axum chose for the rejection.
    Rejected { status: StatusCode, detail: String },
}

impl From<QueryGenError> for AppError {
    fn from(err: QueryGenError) -> Self {
        AppError::QueryGen(err)
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Rejected {
            status: rejection.status(),
            detail: rejection.body_text(),
        }
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::Rejected {
            status: rejection.status(),
            detail: rejection.body_text(),
        }
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::Rejected {
            status: rejection.status(),
            detail: rejection.body_text(),
        }
    }
}

impl AppError {
    /// The status code and `detail` message sent to the caller.
    pub fn status_and_detail(&self) -> (StatusCode, String) {
        match self {
            AppError::QueryGen(err) => match err {
                QueryGenError::InvalidInput => (StatusCode::BAD_REQUEST, err.to_string()),
                QueryGenError::MetadataRejected { .. } => (
                    StatusCode::BAD_REQUEST,
                    format!("HTTP error occurred: {err}"),
                ),
                QueryGenError::MetadataRequest(_)
                | QueryGenError::MetadataDeserialization(_)
                | QueryGenError::MetadataFormat(_) => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("An error occurred: {err}"),
                ),
                QueryGenError::AiRequest(_)
                | QueryGenError::AiDeserialization(_)
                | QueryGenError::AiApi { .. }
                | QueryGenError::NoCandidates => (StatusCode::BAD_GATEWAY, err.to_string()),
                QueryGenError::ReqwestClientBuild(_)
                | QueryGenError::MissingMetadataProvider
                | QueryGenError::MissingAiProvider => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Server is not configured correctly.".to_string(),
                ),
            },
            AppError::Rejected { status, detail } => (*status, detail.clone()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status_code, detail) = self.status_and_detail();
        match &self {
            AppError::QueryGen(QueryGenError::InvalidInput) => {}
            AppError::QueryGen(err) => error!("QueryGenError: {:?}", err),
            AppError::Rejected { detail, .. } => warn!("Rejected request: {detail}"),
        }

        (status_code, Json(json!({ "detail": detail }))).into_response()
    }
}
