//! Normalization of the vision model's free-text completion.
//!
//! The model is told to answer with bare JSON but regularly wraps it in a
//! markdown code fence anyway. Everything here is pure so the contract
//! "strip known fences, then parse strictly" can be tested without a model.

use super::errors::ReceiptError;
use super::model::LineItem;

const FENCE: &str = "```";
const JSON_TAG: &str = "json";

/// Removes surrounding whitespace plus a leading ```` ``` ```` / ```` ```json ````
/// fence and a trailing ```` ``` ```` fence, if present.
///
/// Either fence may be missing, which happens when the completion is cut
/// short by the token budget.
pub fn strip_fences(raw: &str) -> &str {
    let mut text = raw.trim();

    if let Some(rest) = text.strip_prefix(FENCE) {
        text = match rest.get(..JSON_TAG.len()) {
            Some(tag) if tag.eq_ignore_ascii_case(JSON_TAG) => &rest[JSON_TAG.len()..],
            _ => rest,
        };
    }

    if let Some(rest) = text.strip_suffix(FENCE) {
        text = rest;
    }

    text.trim()
}

/// Strips fences and parses the remainder as strict JSON.
///
/// On failure the stripped text travels with the error so callers can see
/// exactly what the model sent back.
pub fn decode_completion(raw: &str) -> Result<serde_json::Value, ReceiptError> {
    let stripped = strip_fences(raw);
    serde_json::from_str(stripped).map_err(|_| ReceiptError::decode(stripped))
}

/// Checks a decoded value is an array of `{item: string, price: number}`.
pub fn validate_items(value: serde_json::Value, raw: &str) -> Result<Vec<LineItem>, ReceiptError> {
    serde_json::from_value(value).map_err(|_| ReceiptError::MalformedItems {
        raw: strip_fences(raw).to_string(),
    })
}
