use crate::{
    AppState,
    dtos::diagnostics::{DbCheckResponse, DebugInsertResponse},
    error::ApiError,
};
use axum::{Json, extract::State};
use database::services::response::ResponseService;

/// Connectivity check against the backing database
#[utoipa::path(
    get,
    path = "/debug/db",
    responses(
        (status = 200, description = "Database reachable", body = DbCheckResponse),
        (status = 500, description = "Database unreachable")
    ),
    tag = "Debug"
)]
pub async fn db_check(State(state): State<AppState>) -> Result<Json<DbCheckResponse>, ApiError> {
    let status = ResponseService::check_connection(&state.db).await?;

    Ok(Json(DbCheckResponse {
        ok: true,
        now: status.now,
        usr: status.usr,
        db: status.db,
    }))
}

/// Writes one canned row, for manual testing of the database wiring
#[utoipa::path(
    post,
    path = "/debug/insert",
    responses(
        (status = 200, description = "Probe row written", body = DebugInsertResponse),
        (status = 500, description = "Insert failed")
    ),
    tag = "Debug"
)]
pub async fn debug_insert(
    State(state): State<AppState>,
) -> Result<Json<DebugInsertResponse>, ApiError> {
    let id = ResponseService::insert_probe_row(&state.db).await?;

    Ok(Json(DebugInsertResponse {
        ok: true,
        id: id.to_string(),
    }))
}
