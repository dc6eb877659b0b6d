use std::time::Duration;

use reqwest::Client;

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Where the bearer credential comes from.
#[derive(Debug, Clone)]
pub enum ApiKey {
    /// Fixed key, mostly for tests.
    Static(String),
    /// Environment variable read on every call. A missing variable sends an
    /// empty credential and the upstream rejects it.
    FromEnv(String),
}

impl ApiKey {
    fn resolve(&self) -> String {
        match self {
            ApiKey::Static(key) => key.clone(),
            ApiKey::FromEnv(var) => std::env::var(var).unwrap_or_default(),
        }
    }
}

/// Shared OpenAI HTTP client configuration.
#[derive(Debug, Clone)]
pub struct OpenAIClient {
    pub client: Client,
    pub api_key: ApiKey,
    pub base_url: String,
}

impl OpenAIClient {
    pub fn new(api_key: ApiKey, base_url: impl Into<String>, timeout: Option<Duration>) -> Self {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().unwrap_or_default();

        Self {
            client,
            api_key,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Builds the authorization header value.
    pub fn auth_header(&self) -> String {
        format!("Bearer {}", self.api_key.resolve())
    }

    /// Returns the chat completions endpoint URL.
    pub fn chat_completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }
}
