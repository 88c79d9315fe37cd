use super::{AppError, AppState};
use crate::types::ColumnsResponse;
use axum::{
    extract::{rejection::PathRejection, Path, State},
    Json,
};
use tracing::info;

/// The handler for `GET /fetch_columns/{table_name}`.
///
/// Looks the columns up in Druid on every call; nothing is cached.
pub async fn fetch_columns_handler(
    State(app_state): State<AppState>,
    table_name: Result<Path<String>, PathRejection>,
) -> Result<Json<ColumnsResponse>, AppError> {
    let Path(table_name) = table_name?;
    info!("Received column lookup for table '{table_name}'");
    let columns = app_state.generator.fetch_columns(&table_name).await?;
    Ok(Json(ColumnsResponse { columns }))
}
