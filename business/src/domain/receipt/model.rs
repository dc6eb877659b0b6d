use base64::{Engine as _, engine::general_purpose::STANDARD};
use serde::{Deserialize, Serialize};

/// A file received from the caller. The media type is whatever the client
/// declared and is not trusted.
#[derive(Debug, Clone, PartialEq)]
pub struct UploadedFile {
    pub media_type: String,
    pub bytes: Vec<u8>,
}

impl UploadedFile {
    pub fn new(media_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            media_type: media_type.into(),
            bytes,
        }
    }

    pub fn size(&self) -> usize {
        self.bytes.len()
    }
}

/// PNG-encoded image bounded to the configured maximum width.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedImage {
    png: Vec<u8>,
    width: u32,
    height: u32,
}

impl NormalizedImage {
    pub fn new(png: Vec<u8>, width: u32, height: u32) -> Self {
        Self { png, width, height }
    }

    pub fn png(&self) -> &[u8] {
        &self.png
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn to_base64(&self) -> String {
        STANDARD.encode(&self.png)
    }

    /// Inline `data:` URL suitable for an `image_url` message part.
    pub fn data_url(&self) -> String {
        format!("data:image/png;base64,{}", self.to_base64())
    }
}

/// One purchased good and its cost.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub item: String,
    pub price: f64,
}

/// Decoded model output, returned to the caller under `items`.
///
/// Unless strict validation is enabled this is whatever JSON the model
/// produced, so it is kept as an untyped value.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractedItems {
    pub items: serde_json::Value,
}

impl ExtractedItems {
    pub fn len(&self) -> usize {
        match &self.items {
            serde_json::Value::Array(items) => items.len(),
            serde_json::Value::Null => 0,
            _ => 1,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl From<Vec<LineItem>> for ExtractedItems {
    fn from(items: Vec<LineItem>) -> Self {
        let items = items
            .into_iter()
            .map(|line| serde_json::json!({ "item": line.item, "price": line.price }))
            .collect();
        Self {
            items: serde_json::Value::Array(items),
        }
    }
}
