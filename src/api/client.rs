use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};

use crate::api::{ChatRequest, ChatResponse};
use crate::error::{Result, VoamigoError};

const CHAT_PATH: &str = "/api/v1/chat";

/// HTTP client for the travel agent backend. No timeout is configured
/// here; transport-level timeouts are the caller's responsibility.
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Send one chat turn. Non-2xx statuses and bodies that do not parse as
    /// a chat response both surface as errors.
    pub async fn chat(&self, request: &ChatRequest) -> Result<ChatResponse> {
        let url = format!("{}{}", self.base_url, CHAT_PATH);
        let response = self.client.post(&url).json(request).send().await?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "failed to read error body".to_string());
            return Err(VoamigoError::ApiError {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.text().await?;
        let parsed: ChatResponse = serde_json::from_str(&body)?;
        Ok(parsed)
    }
}
