use business::domain::receipt::value_objects::{ImageMediaType, ItemValidation};
use imaging::normalizer::{DEFAULT_MAX_WIDTH, NormalizerSettings};

use super::env::var_or;

pub const DEFAULT_MAX_UPLOAD_BYTES: u64 = 10 * 1024 * 1024;

/// Tunables of the receipt itemising pipeline.
///
/// Environment variables:
/// - ITEMISE_MAX_WIDTH: widest image sent to the model (default: 1024)
/// - ITEMISE_SUPPORTED_TYPES: comma-separated MIME types decoded without
///   sniffing (default: "image/png,image/jpeg,image/gif,image/webp")
/// - ITEMISE_VALIDATION: "pass_through" or "strict" (default: "pass_through")
/// - MAX_UPLOAD_BYTES: largest accepted multipart body (default: 10 MiB)
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub normalizer: NormalizerSettings,
    pub validation: ItemValidation,
    pub max_upload_bytes: u64,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            normalizer: NormalizerSettings::default(),
            validation: ItemValidation::default(),
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
        }
    }
}

impl PipelineConfig {
    pub fn from_env() -> Self {
        let supported = std::env::var("ITEMISE_SUPPORTED_TYPES")
            .map(|raw| parse_supported_types(&raw))
            .unwrap_or_else(|_| ImageMediaType::ALL.to_vec());

        Self {
            normalizer: NormalizerSettings {
                max_width: var_or("ITEMISE_MAX_WIDTH", DEFAULT_MAX_WIDTH),
                supported,
            },
            validation: var_or("ITEMISE_VALIDATION", ItemValidation::default()),
            max_upload_bytes: var_or("MAX_UPLOAD_BYTES", DEFAULT_MAX_UPLOAD_BYTES),
        }
    }
}

/// Parses a comma-separated allow-list, skipping unknown entries. An empty
/// result falls back to every supported type.
fn parse_supported_types(raw: &str) -> Vec<ImageMediaType> {
    let mut supported = Vec::new();
    for entry in raw.split(',').map(str::trim).filter(|e| !e.is_empty()) {
        match entry.parse::<ImageMediaType>() {
            Ok(media_type) if !supported.contains(&media_type) => supported.push(media_type),
            Ok(_) => {}
            Err(err) => tracing::warn!("Ignoring ITEMISE_SUPPORTED_TYPES entry: {}", err),
        }
    }

    if supported.is_empty() {
        return ImageMediaType::ALL.to_vec();
    }
    supported
}
