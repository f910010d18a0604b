use serde::{Deserialize, Serialize};

use crate::models::{ChatMessage, Offer};

#[derive(Serialize, Clone, Debug)]
pub struct ChatRequest {
    pub message: String,
    pub conversation_id: Option<String>,
    /// Trailing window of prior messages, oldest first, excluding the
    /// message being sent.
    pub history: Vec<ChatMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trace_id: Option<String>,
}

#[derive(Deserialize, Debug)]
pub struct ChatResponse {
    pub message: String,
    #[serde(default)]
    pub conversation_id: Option<String>,
    #[serde(default)]
    pub offers: Option<Vec<Offer>>,
    #[serde(default)]
    pub suggested_actions: Option<Vec<String>>,
    #[serde(default)]
    pub needs_clarification: bool,
    #[serde(default)]
    pub missing_fields: Option<Vec<String>>,
}
