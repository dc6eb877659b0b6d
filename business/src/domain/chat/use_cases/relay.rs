use async_trait::async_trait;

use crate::domain::chat::errors::ChatError;
use crate::domain::chat::model::RelayedCompletion;

pub struct RelayChatParams {
    pub model: Option<String>,
    pub messages: Option<serde_json::Value>,
}

#[async_trait]
pub trait RelayChatUseCase: Send + Sync {
    async fn execute(&self, params: RelayChatParams) -> Result<RelayedCompletion, ChatError>;
}
