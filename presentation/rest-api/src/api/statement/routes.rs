use poem_openapi::{Object, OpenApi, payload::Json};

use crate::api::tags::ApiTags;

const PLACEHOLDER_MESSAGE: &str = "Statement received - parser coming soon.";

#[derive(Debug, Clone, Object)]
pub struct StatementSummary {
    pub message: String,
}

#[derive(Debug, Clone, Object)]
pub struct StatementResponse {
    pub summary: StatementSummary,
}

pub struct StatementApi;

impl StatementApi {
    pub fn new() -> Self {
        Self
    }
}

/// Statement API
#[OpenApi]
impl StatementApi {
    /// Upload a bank statement
    ///
    /// Placeholder. The body is ignored and an acknowledgement is returned.
    #[oai(path = "/api/statement", method = "post", tag = "ApiTags::Statements")]
    async fn upload_statement(&self) -> Json<StatementResponse> {
        Json(StatementResponse {
            summary: StatementSummary {
                message: PLACEHOLDER_MESSAGE.to_string(),
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use poem::Route;
    use poem::test::TestClient;
    use poem_openapi::OpenApiService;
    use serde_json::json;

    #[tokio::test]
    async fn should_acknowledge_any_statement_upload() {
        let service = OpenApiService::new(StatementApi::new(), "test", "0.0.0");
        let cli = TestClient::new(Route::new().nest("/", service));

        let resp = cli
            .post("/api/statement")
            .content_type("text/csv")
            .body("date,amount\n2024-01-02,12.50\n")
            .send()
            .await;

        resp.assert_status_is_ok();
        resp.assert_json(json!({
            "summary": {"message": "Statement received - parser coming soon."}
        }))
        .await;
    }
}
