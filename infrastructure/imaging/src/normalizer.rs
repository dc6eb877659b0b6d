use std::io::Cursor;

use image::imageops::FilterType;
use image::{DynamicImage, ImageFormat};
use tracing::{debug, warn};

use business::domain::receipt::errors::ReceiptError;
use business::domain::receipt::model::{NormalizedImage, UploadedFile};
use business::domain::receipt::services::ImageNormalizerService;
use business::domain::receipt::value_objects::ImageMediaType;

pub const DEFAULT_MAX_WIDTH: u32 = 1024;

/// Tunables for [`ImageNormalizer`].
#[derive(Debug, Clone)]
pub struct NormalizerSettings {
    /// Widest image forwarded to the model; wider uploads are scaled down.
    pub max_width: u32,
    /// Declared types decoded with their own codec. Anything else is sniffed.
    pub supported: Vec<ImageMediaType>,
}

impl Default for NormalizerSettings {
    fn default() -> Self {
        Self {
            max_width: DEFAULT_MAX_WIDTH,
            supported: ImageMediaType::ALL.to_vec(),
        }
    }
}

/// Re-encodes every upload as a width-bounded PNG.
///
/// Uploads declaring a supported type must actually be that type. Uploads
/// declaring anything else are transcoded if their content is a raster
/// format the decoder recognises (BMP, TIFF, or a mislabelled supported one).
pub struct ImageNormalizer {
    settings: NormalizerSettings,
}

impl ImageNormalizer {
    pub fn new(settings: NormalizerSettings) -> Self {
        Self { settings }
    }

    fn decode(&self, file: &UploadedFile) -> image::ImageResult<DynamicImage> {
        match file.media_type.parse::<ImageMediaType>() {
            Ok(media_type) if self.settings.supported.contains(&media_type) => {
                image::load_from_memory_with_format(&file.bytes, Self::codec(media_type))
            }
            _ => {
                debug!(
                    "Transcoding upload declared as {:?} by content sniffing",
                    file.media_type
                );
                image::load_from_memory(&file.bytes)
            }
        }
    }

    fn codec(media_type: ImageMediaType) -> ImageFormat {
        match media_type {
            ImageMediaType::Png => ImageFormat::Png,
            ImageMediaType::Jpeg => ImageFormat::Jpeg,
            ImageMediaType::Gif => ImageFormat::Gif,
            ImageMediaType::Webp => ImageFormat::WebP,
        }
    }

    /// Scales down to `max_width` keeping the aspect ratio. Never upscales.
    fn bound_width(&self, img: DynamicImage) -> DynamicImage {
        let max_width = self.settings.max_width.max(1);
        if img.width() <= max_width {
            return img;
        }

        let height = (u64::from(img.height()) * u64::from(max_width) + u64::from(img.width()) / 2)
            / u64::from(img.width());
        let height = u32::try_from(height).unwrap_or(u32::MAX).max(1);

        img.resize_exact(max_width, height, FilterType::Triangle)
    }

    fn encode_png(img: &DynamicImage) -> image::ImageResult<Vec<u8>> {
        let mut buf = Vec::new();
        img.write_to(&mut Cursor::new(&mut buf), ImageFormat::Png)?;
        Ok(buf)
    }
}

impl ImageNormalizerService for ImageNormalizer {
    fn normalize(&self, file: &UploadedFile) -> Result<NormalizedImage, ReceiptError> {
        let img = self
            .decode(file)
            .map(|img| self.bound_width(img))
            .and_then(|img| {
                let png = Self::encode_png(&img)?;
                Ok(NormalizedImage::new(png, img.width(), img.height()))
            })
            .map_err(|err| {
                warn!(
                    "Could not normalize upload declared as {:?}: {}",
                    file.media_type, err
                );
                ReceiptError::UnsupportedMediaType
            })?;

        debug!(
            "Normalized {} byte upload to {}x{} PNG ({} bytes)",
            file.size(),
            img.width(),
            img.height(),
            img.png().len()
        );

        Ok(img)
    }
}
