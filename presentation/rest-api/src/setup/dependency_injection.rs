use std::sync::Arc;

use logger::TracingLogger;

use imaging::normalizer::ImageNormalizer;
use openai::chat_relay::ChatRelayOpenAI;
use openai::client::OpenAIClient;
use openai::receipt_extractor::ReceiptExtractorOpenAI;

use business::application::chat::relay::RelayChatUseCaseImpl;
use business::application::receipt::itemise::ItemiseReceiptUseCaseImpl;

use crate::config::openai_config::OpenAIConfig;
use crate::config::pipeline_config::PipelineConfig;

pub struct DependencyContainer {
    pub health_api: crate::api::health::routes::Api,
    pub receipt_api: crate::api::receipt::routes::ReceiptApi,
    pub statement_api: crate::api::statement::routes::StatementApi,
    pub chat_api: crate::api::chat::routes::ChatApi,
}

impl DependencyContainer {
    pub fn new(openai_config: OpenAIConfig, pipeline_config: PipelineConfig) -> Self {
        let logger = Arc::new(TracingLogger);
        let health_api = crate::api::health::routes::Api::new();

        // Infrastructure adapters
        let openai_client = OpenAIClient::new(
            openai_config.api_key,
            &openai_config.base_url,
            openai_config.timeout,
        );
        let extractor = Arc::new(ReceiptExtractorOpenAI::new(
            openai_client.clone(),
            openai_config.extraction,
        ));
        let chat_relay = Arc::new(ChatRelayOpenAI::new(openai_client));
        let normalizer = Arc::new(ImageNormalizer::new(pipeline_config.normalizer));

        // Use cases
        let itemise_use_case = Arc::new(ItemiseReceiptUseCaseImpl {
            normalizer,
            extractor,
            validation: pipeline_config.validation,
            logger: logger.clone(),
        });
        let relay_chat_use_case = Arc::new(RelayChatUseCaseImpl {
            relay: chat_relay,
            logger,
        });

        let receipt_api = crate::api::receipt::routes::ReceiptApi::new(
            itemise_use_case,
            pipeline_config.max_upload_bytes,
        );
        let statement_api = crate::api::statement::routes::StatementApi::new();
        let chat_api = crate::api::chat::routes::ChatApi::new(relay_chat_use_case);

        Self {
            health_api,
            receipt_api,
            statement_api,
            chat_api,
        }
    }
}
