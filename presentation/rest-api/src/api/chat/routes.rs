use std::sync::Arc;

use poem::Body;
use poem_openapi::{OpenApi, payload::Json};
use serde_json::json;

use business::domain::chat::use_cases::relay::{RelayChatParams, RelayChatUseCase};

use crate::api::chat::dto::ChatRequestDto;
use crate::api::error::IntoErrorResponse;
use crate::api::tags::ApiTags;

pub struct ChatApi {
    relay_use_case: Arc<dyn RelayChatUseCase>,
}

impl ChatApi {
    pub fn new(relay_use_case: Arc<dyn RelayChatUseCase>) -> Self {
        Self { relay_use_case }
    }
}

/// Chat API
///
/// Thin relay in front of the chat-completion endpoint.
#[OpenApi]
impl ChatApi {
    /// Relay a chat completion
    ///
    /// Expects an optional JSON body `{"messages"?: [...], "model"?: string}`.
    /// Forwards `{model, messages}` upstream and returns the upstream JSON
    /// unchanged, with 200 when the upstream succeeded and 500 otherwise.
    #[oai(path = "/api/chat", method = "post", tag = "ApiTags::Chat")]
    async fn relay(&self, body: Body) -> ChatResponse {
        let request = match body.into_bytes().await {
            Ok(bytes) => ChatRequestDto::from_bytes(&bytes),
            Err(_) => ChatRequestDto::default(),
        };
        let params = RelayChatParams {
            model: request.model,
            messages: request.messages,
        };

        match self.relay_use_case.execute(params).await {
            Ok(completion) if completion.success => ChatResponse::Ok(Json(completion.body)),
            Ok(completion) => ChatResponse::InternalError(Json(completion.body)),
            Err(err) => {
                let (_, Json(error)) = err.into_error_response();
                ChatResponse::InternalError(Json(json!({ "error": error.error })))
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum ChatResponse {
    /// Upstream completion, verbatim
    #[oai(status = 200)]
    Ok(Json<serde_json::Value>),
    /// Upstream error body, or `{"error": ...}` when it could not be reached
    #[oai(status = 500)]
    InternalError(Json<serde_json::Value>),
}
