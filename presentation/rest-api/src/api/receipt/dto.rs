use poem_openapi::Object;

use business::domain::receipt::model::ExtractedItems;

/// Successful itemisation.
#[derive(Debug, Clone, Object)]
pub struct ItemsResponse {
    /// Line items as returned by the model, normally `[{item, price}, ...]`
    pub items: serde_json::Value,
}

impl From<ExtractedItems> for ItemsResponse {
    fn from(extracted: ExtractedItems) -> Self {
        Self {
            items: extracted.items,
        }
    }
}
