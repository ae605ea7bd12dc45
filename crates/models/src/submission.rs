use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One validated survey submission, normalized and ready to persist
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewResponse {
    /// Client-chosen identifier; unique per logical submission
    pub response_id: String,
    pub perfil_2050: Option<String>,
    /// Effective user agent after header fallback and truncation
    pub user_agent: Option<String>,
    /// Open-ended answer payload, stored verbatim
    pub data: Map<String, Value>,
}
