use multer::{Constraints, Multipart, SizeLimit};
use poem::Body;

use business::domain::receipt::errors::ReceiptError;
use business::domain::receipt::model::UploadedFile;

/// Form field carrying the receipt.
pub const FILE_FIELD: &str = "file";

const FALLBACK_MEDIA_TYPE: &str = "application/octet-stream";

/// Pulls the receipt out of a `multipart/form-data` body.
///
/// Only parts named `file` that carry a filename are considered. When the
/// client sends several, the first one wins and the rest of the body is left
/// unread.
pub async fn read_upload(
    content_type: Option<&str>,
    body: Body,
    max_bytes: u64,
) -> Result<UploadedFile, ReceiptError> {
    let boundary = content_type
        .and_then(|value| multer::parse_boundary(value).ok())
        .ok_or(ReceiptError::NoMultipartBoundary)?;

    let constraints =
        Constraints::new().size_limit(SizeLimit::new().whole_stream(max_bytes));
    let mut multipart =
        Multipart::with_constraints(body.into_bytes_stream(), boundary, constraints);

    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => return Err(ReceiptError::NoFileUploaded),
            Err(err) => return Err(map_multipart_error(err, max_bytes)),
        };

        if field.name() != Some(FILE_FIELD) || field.file_name().is_none() {
            continue;
        }

        let media_type = field
            .content_type()
            .map(|mime| mime.to_string())
            .unwrap_or_else(|| FALLBACK_MEDIA_TYPE.to_string());

        let bytes = field
            .bytes()
            .await
            .map_err(|err| map_multipart_error(err, max_bytes))?;

        if bytes.is_empty() {
            return Err(ReceiptError::NoFileUploaded);
        }

        return Ok(UploadedFile::new(media_type, bytes.to_vec()));
    }
}

fn map_multipart_error(err: multer::Error, max_bytes: u64) -> ReceiptError {
    match err {
        multer::Error::StreamSizeExceeded { .. } | multer::Error::FieldSizeExceeded { .. } => {
            ReceiptError::UploadTooLarge { limit: max_bytes }
        }
        _ => ReceiptError::NoFileUploaded,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOUNDARY: &str = "X-RECEIPT-BOUNDARY";
    const LIMIT: u64 = 1024 * 1024;

    fn content_type() -> String {
        format!("multipart/form-data; boundary={BOUNDARY}")
    }

    fn file_part(name: &str, filename: Option<&str>, content_type: Option<&str>, data: &str) -> String {
        let mut part = format!("--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"");
        if let Some(filename) = filename {
            part.push_str(&format!("; filename=\"{filename}\""));
        }
        part.push_str("\r\n");
        if let Some(content_type) = content_type {
            part.push_str(&format!("Content-Type: {content_type}\r\n"));
        }
        part.push_str(&format!("\r\n{data}\r\n"));
        part
    }

    fn body(parts: &[String]) -> Body {
        Body::from_string(format!("{}--{BOUNDARY}--\r\n", parts.concat()))
    }

    #[tokio::test]
    async fn should_read_single_file_part() {
        let parts = [file_part("file", Some("receipt.png"), Some("image/png"), "PNGDATA")];

        let file = read_upload(Some(&content_type()), body(&parts), LIMIT)
            .await
            .unwrap();

        assert_eq!(file.media_type, "image/png");
        assert_eq!(file.bytes, b"PNGDATA");
    }

    #[tokio::test]
    async fn should_pick_first_file_when_field_is_repeated() {
        let parts = [
            file_part("file", Some("first.jpg"), Some("image/jpeg"), "FIRST"),
            file_part("file", Some("second.jpg"), Some("image/jpeg"), "SECOND"),
        ];

        let file = read_upload(Some(&content_type()), body(&parts), LIMIT)
            .await
            .unwrap();

        assert_eq!(file.bytes, b"FIRST");
    }

    #[tokio::test]
    async fn should_skip_text_field_and_other_files() {
        let parts = [
            file_part("file", None, None, "just text"),
            file_part("avatar", Some("me.png"), Some("image/png"), "AVATAR"),
            file_part("file", Some("receipt.webp"), Some("image/webp"), "RECEIPT"),
        ];

        let file = read_upload(Some(&content_type()), body(&parts), LIMIT)
            .await
            .unwrap();

        assert_eq!(file.media_type, "image/webp");
        assert_eq!(file.bytes, b"RECEIPT");
    }

    #[tokio::test]
    async fn should_default_media_type_when_part_declares_none() {
        let parts = [file_part("file", Some("scan"), None, "DATA")];

        let file = read_upload(Some(&content_type()), body(&parts), LIMIT)
            .await
            .unwrap();

        assert_eq!(file.media_type, "application/octet-stream");
    }

    #[tokio::test]
    async fn should_reject_missing_content_type() {
        let parts = [file_part("file", Some("r.png"), Some("image/png"), "DATA")];

        let result = read_upload(None, body(&parts), LIMIT).await;

        assert_eq!(result, Err(ReceiptError::NoMultipartBoundary));
    }

    #[tokio::test]
    async fn should_reject_multipart_without_boundary() {
        let result = read_upload(Some("multipart/form-data"), Body::from_string("x".into()), LIMIT).await;

        assert_eq!(result, Err(ReceiptError::NoMultipartBoundary));
    }

    #[tokio::test]
    async fn should_reject_non_multipart_content_type() {
        let result = read_upload(Some("application/json"), Body::from_string("{}".into()), LIMIT).await;

        assert_eq!(result, Err(ReceiptError::NoMultipartBoundary));
    }

    #[tokio::test]
    async fn should_report_missing_file_field() {
        let parts = [file_part("note", None, None, "hello")];

        let result = read_upload(Some(&content_type()), body(&parts), LIMIT).await;

        assert_eq!(result, Err(ReceiptError::NoFileUploaded));
    }

    #[tokio::test]
    async fn should_report_empty_file_as_missing() {
        let parts = [file_part("file", Some("empty.png"), Some("image/png"), "")];

        let result = read_upload(Some(&content_type()), body(&parts), LIMIT).await;

        assert_eq!(result, Err(ReceiptError::NoFileUploaded));
    }

    #[tokio::test]
    async fn should_report_garbage_body_as_missing_file() {
        let result = read_upload(
            Some(&content_type()),
            Body::from_string("not a multipart body".into()),
            LIMIT,
        )
        .await;

        assert_eq!(result, Err(ReceiptError::NoFileUploaded));
    }

    #[tokio::test]
    async fn should_reject_upload_over_limit() {
        let parts = [file_part("file", Some("big.png"), Some("image/png"), &"A".repeat(4096))];

        let result = read_upload(Some(&content_type()), body(&parts), 1024).await;

        assert_eq!(result, Err(ReceiptError::UploadTooLarge { limit: 1024 }));
    }
}
