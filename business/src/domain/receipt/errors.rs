/// Failures of the receipt itemising pipeline.
///
/// The display strings double as the `error` field returned to HTTP callers,
/// so they must stay stable.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ReceiptError {
    #[error("no multipart boundary")]
    NoMultipartBoundary,
    #[error("no file uploaded")]
    NoFileUploaded,
    #[error("upload too large")]
    UploadTooLarge { limit: u64 },
    #[error("unsupported image type")]
    UnsupportedMediaType,
    #[error("OpenAI vision call failed")]
    Upstream { details: String },
    #[error("bad JSON from model")]
    Decode { raw: String },
    #[error("model returned malformed items")]
    MalformedItems { raw: String },
}

/// Coarse classification used when mapping a failure onto a transport status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReceiptErrorKind {
    BadRequest,
    PayloadTooLarge,
    UnsupportedMediaType,
    Upstream,
    Decode,
}

impl ReceiptError {
    pub fn upstream(details: impl Into<String>) -> Self {
        ReceiptError::Upstream {
            details: details.into(),
        }
    }

    pub fn decode(raw: impl Into<String>) -> Self {
        ReceiptError::Decode { raw: raw.into() }
    }

    pub fn kind(&self) -> ReceiptErrorKind {
        match self {
            ReceiptError::NoMultipartBoundary | ReceiptError::NoFileUploaded => {
                ReceiptErrorKind::BadRequest
            }
            ReceiptError::UploadTooLarge { .. } => ReceiptErrorKind::PayloadTooLarge,
            ReceiptError::UnsupportedMediaType => ReceiptErrorKind::UnsupportedMediaType,
            ReceiptError::Upstream { .. } => ReceiptErrorKind::Upstream,
            ReceiptError::Decode { .. } | ReceiptError::MalformedItems { .. } => {
                ReceiptErrorKind::Decode
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_display_wire_messages() {
        assert_eq!(
            ReceiptError::NoMultipartBoundary.to_string(),
            "no multipart boundary"
        );
        assert_eq!(ReceiptError::NoFileUploaded.to_string(), "no file uploaded");
        assert_eq!(
            ReceiptError::UploadTooLarge { limit: 10 }.to_string(),
            "upload too large"
        );
        assert_eq!(
            ReceiptError::UnsupportedMediaType.to_string(),
            "unsupported image type"
        );
        assert_eq!(
            ReceiptError::upstream("rate limited").to_string(),
            "OpenAI vision call failed"
        );
        assert_eq!(
            ReceiptError::decode("oops").to_string(),
            "bad JSON from model"
        );
    }

    #[test]
    fn should_classify_errors_by_kind() {
        assert_eq!(
            ReceiptError::NoFileUploaded.kind(),
            ReceiptErrorKind::BadRequest
        );
        assert_eq!(
            ReceiptError::UnsupportedMediaType.kind(),
            ReceiptErrorKind::UnsupportedMediaType
        );
        assert_eq!(
            ReceiptError::upstream("").kind(),
            ReceiptErrorKind::Upstream
        );
        assert_eq!(
            ReceiptError::MalformedItems { raw: "{}".into() }.kind(),
            ReceiptErrorKind::Decode
        );
    }
}
