use std::sync::Arc;

use poem::http::header;
use poem::{Body, Request};
use poem_openapi::{OpenApi, payload::Json};

use business::domain::receipt::errors::ReceiptError;
use business::domain::receipt::use_cases::itemise::{ItemiseReceiptParams, ItemiseReceiptUseCase};

use crate::api::error::{ErrorBody, IntoErrorResponse};
use crate::api::receipt::dto::ItemsResponse;
use crate::api::receipt::upload::read_upload;
use crate::api::tags::ApiTags;

pub struct ReceiptApi {
    itemise_use_case: Arc<dyn ItemiseReceiptUseCase>,
    max_upload_bytes: u64,
}

impl ReceiptApi {
    pub fn new(itemise_use_case: Arc<dyn ItemiseReceiptUseCase>, max_upload_bytes: u64) -> Self {
        Self {
            itemise_use_case,
            max_upload_bytes,
        }
    }
}

/// Receipt API
///
/// Turns a photographed receipt into purchased line items.
#[OpenApi]
impl ReceiptApi {
    /// Itemise a receipt image
    ///
    /// Expects `multipart/form-data` with the image in a `file` part. The
    /// image is re-encoded as PNG, capped at 1024 px wide, and read by a
    /// vision model. Responds with `{"items": [{"item", "price"}, ...]}`.
    #[oai(path = "/api/itemise", method = "post", tag = "ApiTags::Receipts")]
    async fn itemise(&self, req: &Request, body: Body) -> ItemiseResponse {
        let content_type = req.header(header::CONTENT_TYPE);

        let file = match read_upload(content_type, body, self.max_upload_bytes).await {
            Ok(file) => file,
            Err(err) => return err.into(),
        };

        match self
            .itemise_use_case
            .execute(ItemiseReceiptParams { file })
            .await
        {
            Ok(extracted) => ItemiseResponse::Ok(Json(extracted.into())),
            Err(err) => err.into(),
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum ItemiseResponse {
    #[oai(status = 200)]
    Ok(Json<ItemsResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorBody>),
    #[oai(status = 413)]
    PayloadTooLarge(Json<ErrorBody>),
    #[oai(status = 415)]
    UnsupportedMediaType(Json<ErrorBody>),
    #[oai(status = 500)]
    InternalError(Json<ErrorBody>),
}

impl From<ReceiptError> for ItemiseResponse {
    fn from(err: ReceiptError) -> Self {
        let (status, json) = err.into_error_response();
        match status.as_u16() {
            400 => ItemiseResponse::BadRequest(json),
            413 => ItemiseResponse::PayloadTooLarge(json),
            415 => ItemiseResponse::UnsupportedMediaType(json),
            _ => ItemiseResponse::InternalError(json),
        }
    }
}
