use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::chat::errors::ChatError;
use crate::domain::chat::model::{ChatRequest, DEFAULT_CHAT_MODEL, RelayedCompletion};
use crate::domain::chat::services::ChatRelayService;
use crate::domain::chat::use_cases::relay::{RelayChatParams, RelayChatUseCase};
use crate::domain::logger::Logger;

pub struct RelayChatUseCaseImpl {
    pub relay: Arc<dyn ChatRelayService>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl RelayChatUseCase for RelayChatUseCaseImpl {
    async fn execute(&self, params: RelayChatParams) -> Result<RelayedCompletion, ChatError> {
        let request = ChatRequest {
            model: params
                .model
                .unwrap_or_else(|| DEFAULT_CHAT_MODEL.to_string()),
            messages: params
                .messages
                .unwrap_or_else(|| serde_json::Value::Array(vec![])),
        };

        self.logger
            .info(&format!("Relaying chat completion to model {}", request.model));

        match self.relay.relay(&request).await {
            Ok(completion) => {
                if !completion.success {
                    self.logger.warn("Chat completion upstream returned an error");
                }
                Ok(completion)
            }
            Err(err) => {
                let ChatError::UpstreamUnavailable { reason } = &err;
                self.logger
                    .error(&format!("Chat completion upstream unavailable: {}", reason));
                Err(err)
            }
        }
    }
}
