use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::receipt::decoder::{decode_completion, validate_items};
use crate::domain::receipt::errors::ReceiptError;
use crate::domain::receipt::model::ExtractedItems;
use crate::domain::receipt::services::{ExtractionService, ImageNormalizerService};
use crate::domain::receipt::use_cases::itemise::{ItemiseReceiptParams, ItemiseReceiptUseCase};
use crate::domain::receipt::value_objects::ItemValidation;

pub struct ItemiseReceiptUseCaseImpl {
    pub normalizer: Arc<dyn ImageNormalizerService>,
    pub extractor: Arc<dyn ExtractionService>,
    pub validation: ItemValidation,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ItemiseReceiptUseCase for ItemiseReceiptUseCaseImpl {
    async fn execute(&self, params: ItemiseReceiptParams) -> Result<ExtractedItems, ReceiptError> {
        let file = params.file;
        self.logger.info(&format!(
            "Itemising receipt upload ({} bytes, declared {})",
            file.size(),
            file.media_type
        ));

        let normalizer = self.normalizer.clone();
        let image = tokio::task::spawn_blocking(move || normalizer.normalize(&file))
            .await
            .map_err(|_| ReceiptError::UnsupportedMediaType)
            .and_then(|result| result)
            .inspect_err(|_| self.logger.warn("Receipt image could not be normalized"))?;

        self.logger.debug(&format!(
            "Receipt image normalized to {}x{} PNG",
            image.width(),
            image.height()
        ));

        let completion = self
            .extractor
            .extract(&image)
            .await
            .inspect_err(|_| self.logger.error("Vision extraction call failed"))?;

        let decoded = decode_completion(&completion)
            .inspect_err(|_| self.logger.warn("Vision model returned non-JSON output"))?;

        let extracted = match self.validation {
            ItemValidation::PassThrough => ExtractedItems { items: decoded },
            ItemValidation::Strict => ExtractedItems::from(
                validate_items(decoded, &completion)
                    .inspect_err(|_| self.logger.warn("Vision model returned malformed items"))?,
            ),
        };

        self.logger.info(&format!(
            "Receipt itemised: {} items found",
            extracted.len()
        ));

        Ok(extracted)
    }
}
