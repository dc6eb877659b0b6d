use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::receipt::errors::{ReceiptError, ReceiptErrorKind};

use crate::api::error::{ErrorBody, IntoErrorResponse};

impl IntoErrorResponse for ReceiptError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorBody>) {
        let status = match self.kind() {
            ReceiptErrorKind::BadRequest => StatusCode::BAD_REQUEST,
            ReceiptErrorKind::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            ReceiptErrorKind::UnsupportedMediaType => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            ReceiptErrorKind::Upstream | ReceiptErrorKind::Decode => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let mut body = ErrorBody::new(self.to_string());
        match self {
            ReceiptError::Upstream { details } => body.details = Some(details),
            ReceiptError::Decode { raw } | ReceiptError::MalformedItems { raw } => {
                body.raw = Some(raw)
            }
            _ => {}
        }

        (status, Json(body))
    }
}
