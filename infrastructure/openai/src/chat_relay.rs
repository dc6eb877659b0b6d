use async_trait::async_trait;
use serde_json::json;

use business::domain::chat::errors::ChatError;
use business::domain::chat::model::{ChatRequest, RelayedCompletion};
use business::domain::chat::services::ChatRelayService;

use crate::client::OpenAIClient;

/// Forwards a conversation untouched and hands back whatever JSON the
/// upstream answered with.
pub struct ChatRelayOpenAI {
    client: OpenAIClient,
}

impl ChatRelayOpenAI {
    pub fn new(client: OpenAIClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ChatRelayService for ChatRelayOpenAI {
    async fn relay(&self, request: &ChatRequest) -> Result<RelayedCompletion, ChatError> {
        let body = json!({
            "model": request.model,
            "messages": request.messages,
        });

        let response = self
            .client
            .client
            .post(self.client.chat_completions_url())
            .header("Content-Type", "application/json")
            .header("Authorization", self.client.auth_header())
            .json(&body)
            .send()
            .await
            .map_err(|err| ChatError::UpstreamUnavailable {
                reason: err.to_string(),
            })?;

        let success = response.status().is_success();
        let body = response
            .json::<serde_json::Value>()
            .await
            .map_err(|err| ChatError::UpstreamUnavailable {
                reason: err.to_string(),
            })?;

        Ok(RelayedCompletion { success, body })
    }
}
