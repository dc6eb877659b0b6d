/// Model used when the caller does not name one.
pub const DEFAULT_CHAT_MODEL: &str = "gpt-4o-mini";

/// A chat completion request forwarded as-is to the upstream service.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatRequest {
    pub model: String,
    pub messages: serde_json::Value,
}

/// Upstream answer relayed verbatim, together with whether it succeeded.
#[derive(Debug, Clone, PartialEq)]
pub struct RelayedCompletion {
    pub success: bool,
    pub body: serde_json::Value,
}
