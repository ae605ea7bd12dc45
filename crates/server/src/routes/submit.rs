use crate::{
    AppState,
    dtos::submission::{SubmitRequest, SubmitResponse},
    error::ApiError,
};
use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::{HeaderMap, header::USER_AGENT},
};
use database::services::response::{ResponseService, SaveOutcome};
use log::debug;
use models::{submission::NewResponse, user_agent};

/// Accepts one survey submission and persists it as one row
#[utoipa::path(
    post,
    path = "/submit",
    request_body = SubmitRequest,
    responses(
        (status = 200, description = "Submission stored, or acknowledged as a duplicate", body = SubmitResponse),
        (status = 400, description = "Malformed submission payload"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Submissions"
)]
pub async fn submit(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<SubmitRequest>, JsonRejection>,
) -> Result<Json<SubmitResponse>, ApiError> {
    let Json(payload) =
        payload.map_err(|rejection| ApiError::Validation(rejection.body_text()))?;

    // The stored timestamp is server-assigned; the client clock is only logged.
    debug!(
        "incoming submission {} (client time {})",
        payload.response_id, payload.submitted_at
    );

    let user_agent = user_agent::resolve(
        payload.user_agent.as_deref(),
        headers.get(USER_AGENT).and_then(|value| value.to_str().ok()),
    );

    let submission = NewResponse {
        response_id: payload.response_id,
        perfil_2050: payload.perfil_2050,
        user_agent,
        data: payload.data,
    };

    match ResponseService::save_response(&state.db, submission).await? {
        SaveOutcome::Created { id, submitted_at } => {
            Ok(Json(SubmitResponse::created(id, submitted_at)))
        }
        SaveOutcome::Duplicate => Ok(Json(SubmitResponse::duplicate())),
    }
}
