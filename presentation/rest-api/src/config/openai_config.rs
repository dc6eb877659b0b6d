use std::time::Duration;

use openai::client::{ApiKey, DEFAULT_BASE_URL};
use openai::receipt_extractor::{DEFAULT_MAX_TOKENS, DEFAULT_MODEL, ExtractionSettings};

use super::env::var_or;

/// Environment variable holding the bearer credential. It is read on every
/// upstream call, never at startup.
pub const API_KEY_VAR: &str = "OPENAI_API_KEY";

/// Configuration for OpenAI API access.
///
/// Environment variables:
/// - OPENAI_API_KEY: bearer credential (read per call, not validated here)
/// - OPENAI_BASE_URL: API root (default: "https://api.openai.com/v1")
/// - OPENAI_MODEL: vision model (default: "gpt-4o-mini")
/// - OPENAI_MAX_TOKENS: completion budget (default: 200)
/// - OPENAI_TIMEOUT_SECS: request timeout (default: none)
pub struct OpenAIConfig {
    pub api_key: ApiKey,
    pub base_url: String,
    pub timeout: Option<Duration>,
    pub extraction: ExtractionSettings,
}

impl OpenAIConfig {
    pub fn from_env() -> Self {
        let timeout_secs: u64 = var_or("OPENAI_TIMEOUT_SECS", 0);

        Self {
            api_key: ApiKey::FromEnv(API_KEY_VAR.to_string()),
            base_url: var_or("OPENAI_BASE_URL", DEFAULT_BASE_URL.to_string()),
            timeout: (timeout_secs > 0).then(|| Duration::from_secs(timeout_secs)),
            extraction: ExtractionSettings {
                model: var_or("OPENAI_MODEL", DEFAULT_MODEL.to_string()),
                max_tokens: var_or("OPENAI_MAX_TOKENS", DEFAULT_MAX_TOKENS),
                ..ExtractionSettings::default()
            },
        }
    }
}
