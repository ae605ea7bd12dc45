use chrono::{DateTime, Utc};
use sea_orm::prelude::Uuid;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use utoipa::ToSchema;

/// One survey submission as sent by the frontend
#[derive(Debug, Deserialize, ToSchema)]
pub struct SubmitRequest {
    pub response_id: String,
    /// Client-side timestamp, informational only; the stored timestamp is
    /// server-assigned
    pub submitted_at: String,
    pub user_agent: Option<String>,
    pub perfil_2050: Option<String>,
    /// Open-ended answer payload; must be a JSON object
    #[schema(value_type = Object)]
    pub data: Map<String, Value>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SubmitResponse {
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub submitted_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duplicate: Option<bool>,
}

impl SubmitResponse {
    pub fn created(id: Uuid, submitted_at: DateTime<Utc>) -> Self {
        Self {
            ok: true,
            id: Some(id.to_string()),
            submitted_at: Some(submitted_at),
            duplicate: None,
        }
    }

    pub fn duplicate() -> Self {
        Self {
            ok: true,
            id: None,
            submitted_at: None,
            duplicate: Some(true),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn accepts_a_complete_payload() {
        let request: SubmitRequest = serde_json::from_value(json!({
            "response_id": "r-1",
            "submitted_at": "2024-06-01T12:00:00Z",
            "perfil_2050": "urbano",
            "data": { "q1": "sim", "nested": { "scores": [1, 2, 3] } }
        }))
        .unwrap();

        assert_eq!(request.response_id, "r-1");
        assert!(request.user_agent.is_none());
        assert_eq!(request.data["nested"]["scores"], json!([1, 2, 3]));
    }

    #[test]
    fn rejects_a_missing_data_field() {
        let result: Result<SubmitRequest, _> = serde_json::from_value(json!({
            "response_id": "r-1",
            "submitted_at": "2024-06-01T12:00:00Z"
        }));

        assert!(result.is_err());
    }

    #[test]
    fn rejects_non_object_data() {
        let result: Result<SubmitRequest, _> = serde_json::from_value(json!({
            "response_id": "r-1",
            "submitted_at": "2024-06-01T12:00:00Z",
            "data": [1, 2, 3]
        }));

        assert!(result.is_err());
    }

    #[test]
    fn created_body_carries_id_and_timestamp() {
        let body =
            serde_json::to_value(SubmitResponse::created(Uuid::new_v4(), Utc::now())).unwrap();

        assert_eq!(body["ok"], json!(true));
        assert!(body["id"].is_string());
        assert!(body["submitted_at"].is_string());
        assert!(body.get("duplicate").is_none());
    }

    #[test]
    fn duplicate_body_has_no_id() {
        let body = serde_json::to_value(SubmitResponse::duplicate()).unwrap();
        assert_eq!(body, json!({ "ok": true, "duplicate": true }));
    }
}
