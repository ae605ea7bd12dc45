use crate::dtos::diagnostics::HealthResponse;
use axum::Json;

/// Liveness check; succeeds regardless of database state
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is running", body = HealthResponse)
    ),
    tag = "Health"
)]
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { ok: true })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn health_is_a_static_ok() {
        let Json(body) = health().await;
        assert!(body.ok);
    }
}
