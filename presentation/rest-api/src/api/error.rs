use poem::http::StatusCode;
use poem_openapi::{Object, payload::Json};
use serde::Serialize;

/// Failure body shared by every endpoint: an `error` message plus optional
/// diagnostics copied from the upstream service or the model output.
#[derive(Object, Serialize, Debug, Clone, PartialEq)]
pub struct ErrorBody {
    pub error: String,
    /// Raw upstream response body
    #[oai(skip_serializing_if_is_none)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    /// Model output that could not be used
    #[oai(skip_serializing_if_is_none)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw: Option<String>,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: None,
            raw: None,
        }
    }
}

pub trait IntoErrorResponse {
    fn into_error_response(self) -> (StatusCode, Json<ErrorBody>);
}
