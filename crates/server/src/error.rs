use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use log::error;
use sea_orm::DbErr;
use serde_json::json;
use thiserror::Error;

/// Errors surfaced by request handlers
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request body failed shape validation
    #[error("invalid request body: {0}")]
    Validation(String),
    /// Any database failure; detail goes to the log, never to the client
    #[error("database operation failed: {0}")]
    Persistence(#[from] DbErr),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Validation(detail) => (
                StatusCode::BAD_REQUEST,
                Json(json!({ "ok": false, "error": detail })),
            )
                .into_response(),
            ApiError::Persistence(err) => {
                // Full detail stays in the server log; the client gets a
                // fixed message.
                error!("persistence failure: {err}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "ok": false, "error": "database operation failed" })),
                )
                    .into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_maps_to_a_client_error() {
        let response = ApiError::Validation("missing field `data`".to_owned()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn persistence_maps_to_an_opaque_server_error() {
        let response =
            ApiError::Persistence(DbErr::Custom("connection refused".to_owned())).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
