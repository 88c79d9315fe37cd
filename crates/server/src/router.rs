use super::{handlers, state::AppState};
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::trace::TraceLayer;

/// Creates the Axum router with all the application routes.
///
/// CORS admits only the configured origin, with credentials, and mirrors
/// whatever methods and headers that origin asks for.
pub fn create_router(app_state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(app_state.allowed_origin.clone())
        .allow_credentials(true)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request());

    Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health_check))
        .route(
            "/fetch_columns/{table_name}",
            get(handlers::fetch_columns_handler),
        )
        .route("/nl_query/", post(handlers::nl_query_handler))
        .route("/nl_query", post(handlers::nl_query_handler))
        .with_state(app_state)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
