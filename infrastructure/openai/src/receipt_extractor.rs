use async_trait::async_trait;
use serde_json::json;
use tracing::debug;

use business::domain::receipt::errors::ReceiptError;
use business::domain::receipt::model::NormalizedImage;
use business::domain::receipt::services::ExtractionService;

use crate::client::OpenAIClient;

pub const DEFAULT_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_MAX_TOKENS: u32 = 200;

const SYSTEM_PROMPT: &str = "You are an expense extractor. Return STRICT JSON WITHOUT MARKDOWN FENCING - \
array of {item, price} with price as a number.";

const USER_PROMPT: &str = "Extract items and prices from this receipt.";

/// Model and prompt parameters for the extraction call.
#[derive(Debug, Clone)]
pub struct ExtractionSettings {
    pub model: String,
    /// Soft cap on completion length; the model may still truncate output.
    pub max_tokens: u32,
    pub system_prompt: String,
    pub user_prompt: String,
}

impl Default for ExtractionSettings {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            max_tokens: DEFAULT_MAX_TOKENS,
            system_prompt: SYSTEM_PROMPT.to_string(),
            user_prompt: USER_PROMPT.to_string(),
        }
    }
}

pub struct ReceiptExtractorOpenAI {
    client: OpenAIClient,
    settings: ExtractionSettings,
}

impl ReceiptExtractorOpenAI {
    pub fn new(client: OpenAIClient, settings: ExtractionSettings) -> Self {
        Self { client, settings }
    }

    fn build_body(&self, image: &NormalizedImage) -> serde_json::Value {
        json!({
            "model": self.settings.model,
            "max_tokens": self.settings.max_tokens,
            "messages": [
                {"role": "system", "content": self.settings.system_prompt},
                {
                    "role": "user",
                    "content": [
                        {"type": "text", "text": self.settings.user_prompt},
                        {"type": "image_url", "image_url": {"url": image.data_url()}},
                    ],
                },
            ],
        })
    }

    /// First choice's message content, or an empty string when the
    /// completion carries none.
    fn completion_text(data: &serde_json::Value) -> String {
        data["choices"][0]["message"]["content"]
            .as_str()
            .unwrap_or("")
            .to_string()
    }
}

#[async_trait]
impl ExtractionService for ReceiptExtractorOpenAI {
    async fn extract(&self, image: &NormalizedImage) -> Result<String, ReceiptError> {
        let body = self.build_body(image);

        let response = self
            .client
            .client
            .post(self.client.chat_completions_url())
            .header("Content-Type", "application/json")
            .header("Authorization", self.client.auth_header())
            .json(&body)
            .send()
            .await
            .map_err(|err| ReceiptError::upstream(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let details = response
                .text()
                .await
                .unwrap_or_else(|err| err.to_string());
            debug!("Vision call returned {}: {}", status, details);
            return Err(ReceiptError::upstream(details));
        }

        let data: serde_json::Value = response
            .json()
            .await
            .map_err(|err| ReceiptError::upstream(err.to_string()))?;

        Ok(Self::completion_text(&data))
    }
}
