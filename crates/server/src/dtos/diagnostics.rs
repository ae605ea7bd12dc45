use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    pub ok: bool,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct DbCheckResponse {
    pub ok: bool,
    pub now: DateTime<Utc>,
    pub usr: String,
    pub db: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct DebugInsertResponse {
    pub ok: bool,
    pub id: String,
}
