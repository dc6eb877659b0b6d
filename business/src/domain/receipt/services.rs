use async_trait::async_trait;

use super::errors::ReceiptError;
use super::model::{NormalizedImage, UploadedFile};

/// Service port turning an untrusted upload into a bounded PNG.
///
/// Implementations are CPU-bound and are called from the blocking pool.
pub trait ImageNormalizerService: Send + Sync {
    fn normalize(&self, file: &UploadedFile) -> Result<NormalizedImage, ReceiptError>;
}

/// Service port for the external vision model.
///
/// Sends exactly one request and returns the raw completion text, which is
/// expected (but not guaranteed) to contain a JSON array literal.
#[async_trait]
pub trait ExtractionService: Send + Sync {
    async fn extract(&self, image: &NormalizedImage) -> Result<String, ReceiptError>;
}
