use async_trait::async_trait;

use crate::domain::receipt::errors::ReceiptError;
use crate::domain::receipt::model::{ExtractedItems, UploadedFile};

pub struct ItemiseReceiptParams {
    pub file: UploadedFile,
}

#[async_trait]
pub trait ItemiseReceiptUseCase: Send + Sync {
    async fn execute(&self, params: ItemiseReceiptParams) -> Result<ExtractedItems, ReceiptError>;
}
