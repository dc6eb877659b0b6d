use serde::Deserialize;

/// Chat completion request relayed to the model. Both fields are optional
/// and a missing or unreadable body means "all defaults".
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChatRequestDto {
    /// Conversation in the upstream message format (default: empty)
    pub messages: Option<serde_json::Value>,
    /// Model name (default: "gpt-4o-mini")
    pub model: Option<String>,
}

impl ChatRequestDto {
    pub fn from_bytes(bytes: &[u8]) -> Self {
        serde_json::from_slice(bytes).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn should_default_empty_body() {
        let dto = ChatRequestDto::from_bytes(b"");

        assert_eq!(dto.model, None);
        assert_eq!(dto.messages, None);
    }

    #[test]
    fn should_default_unparseable_body() {
        let dto = ChatRequestDto::from_bytes(b"messages=hi");

        assert_eq!(dto.model, None);
        assert_eq!(dto.messages, None);
    }

    #[test]
    fn should_read_model_and_messages() {
        let dto = ChatRequestDto::from_bytes(br#"{"model":"gpt-4o","messages":[{"role":"user"}]}"#);

        assert_eq!(dto.model.as_deref(), Some("gpt-4o"));
        assert_eq!(dto.messages, Some(json!([{"role": "user"}])));
    }
}
