use async_trait::async_trait;

use super::errors::ChatError;
use super::model::{ChatRequest, RelayedCompletion};

/// Service port for relaying a chat conversation to the completion API.
#[async_trait]
pub trait ChatRelayService: Send + Sync {
    async fn relay(&self, request: &ChatRequest) -> Result<RelayedCompletion, ChatError>;
}
