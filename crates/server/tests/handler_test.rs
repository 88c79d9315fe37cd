//! # Handler Tests
//!
//! Calls the Axum handlers directly with an `AppState` built from the mock
//! providers in `druidgen-test-utils`, and checks how errors map to HTTP.

use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::{HeaderValue, StatusCode},
    Json,
};
use druidgen::{QueryGenError, QueryGeneratorBuilder, QueryRequest};
use druidgen_server::{
    errors::AppError,
    handlers::{fetch_columns_handler, nl_query_handler, root, WELCOME_MESSAGE},
    state::AppState,
    types::DebugParams,
};
use druidgen_test_utils::{MockAiProvider, MockMetadataProvider};
use reqwest::StatusCode as ReqwestStatus;
use std::sync::Arc;

fn app_state(metadata: &MockMetadataProvider, ai: &MockAiProvider) -> AppState {
    let generator = QueryGeneratorBuilder::new()
        .metadata_provider(Box::new(metadata.clone()))
        .ai_provider(Box::new(ai.clone()))
        .build()
        .expect("Failed to build QueryGenerator");
    AppState {
        generator: Arc::new(generator),
        allowed_origin: HeaderValue::from_static("http://localhost:18081"),
    }
}

fn request(table_name: &str, user_input: &str) -> Result<Json<QueryRequest>, JsonRejection> {
    Ok(Json(QueryRequest {
        table_name: table_name.to_string(),
        user_input: user_input.to_string(),
    }))
}

#[tokio::test]
async fn test_root_lists_default_queries() {
    let Json(body) = root().await;
    assert_eq!(body.message, WELCOME_MESSAGE);
    assert_eq!(body.queries["default"].len(), 4);
}

#[tokio::test]
async fn test_fetch_columns_handler_uses_metadata_provider() {
    let metadata = MockMetadataProvider::with_columns(&["__time", "amount"]);
    let state = app_state(&metadata, &MockAiProvider::default());

    let Json(body) = fetch_columns_handler(State(state), Ok(Path("sales".to_string())))
        .await
        .unwrap();

    assert_eq!(body.columns, vec!["__time", "amount"]);
    assert_eq!(metadata.get_calls(), vec!["sales".to_string()]);
}

#[tokio::test]
async fn test_columns_are_fetched_on_every_request() {
    let metadata = MockMetadataProvider::with_columns(&["a"]);
    let state = app_state(&metadata, &MockAiProvider::default());

    for _ in 0..2 {
        fetch_columns_handler(State(state.clone()), Ok(Path("t".to_string())))
            .await
            .unwrap();
    }

    assert_eq!(metadata.get_calls().len(), 2);
}

#[tokio::test]
async fn test_nl_query_handler_sanitizes_response() {
    let metadata = MockMetadataProvider::with_columns(&["__time", "amount"]);
    let ai = MockAiProvider::with_response("```druid\nSELECT SUM(amount) FROM sales\n```");
    let state = app_state(&metadata, &ai);

    let Json(body) = nl_query_handler(
        State(state),
        Ok(Query(DebugParams::default())),
        request("sales", "total amount"),
    )
    .await
    .unwrap();

    assert_eq!(body.generated_query, "SELECT SUM(amount) FROM sales");
    assert!(body.debug.is_none());
    assert_eq!(ai.get_calls().len(), 1);
}

#[tokio::test]
async fn test_nl_query_handler_blank_input() {
    let metadata = MockMetadataProvider::with_columns(&["a"]);
    let ai = MockAiProvider::default();
    let state = app_state(&metadata, &ai);

    let err = nl_query_handler(
        State(state),
        Ok(Query(DebugParams::default())),
        request("t", " \t "),
    )
    .await
    .unwrap_err();

    assert_eq!(
        err.status_and_detail(),
        (
            StatusCode::BAD_REQUEST,
            "Please enter a valid query.".to_string()
        )
    );
    assert!(metadata.get_calls().is_empty());
    assert!(ai.get_calls().is_empty());
}

#[test]
fn test_error_status_mapping() {
    let rejected = AppError::from(QueryGenError::MetadataRejected {
        status: ReqwestStatus::NOT_FOUND,
        url: "http://localhost:8888/druid/v2/sql".to_string(),
        body: "Not Found".to_string(),
    });
    let (status, detail) = rejected.status_and_detail();
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        detail,
        "HTTP error occurred: 404 Not Found for url http://localhost:8888/druid/v2/sql: Not Found"
    );

    let malformed = AppError::from(QueryGenError::MetadataFormat("got {}".to_string()));
    assert_eq!(
        malformed.status_and_detail(),
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            "An error occurred: Unexpected response format from Druid: got {}".to_string()
        )
    );

    let empty = AppError::from(QueryGenError::NoCandidates);
    assert_eq!(empty.status_and_detail().0, StatusCode::BAD_GATEWAY);

    let provider = AppError::from(QueryGenError::AiApi {
        status: ReqwestStatus::UNAUTHORIZED,
        body: "bad key".to_string(),
    });
    assert_eq!(provider.status_and_detail().0, StatusCode::BAD_GATEWAY);

    let rejected = AppError::Rejected {
        status: StatusCode::UNPROCESSABLE_ENTITY,
        detail: "missing field `user_input`".to_string(),
    };
    assert_eq!(
        rejected.status_and_detail(),
        (
            StatusCode::UNPROCESSABLE_ENTITY,
            "missing field `user_input`".to_string()
        )
    );
}
