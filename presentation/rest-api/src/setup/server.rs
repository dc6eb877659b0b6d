use poem::error::MethodNotAllowedError;
use poem::http::StatusCode;
use poem::middleware::{Cors, Tracing};
use poem::{Endpoint, EndpointExt, Route, Server as PoemServer, listener::TcpListener};
use poem_openapi::OpenApiService;

use crate::{config::server_config::ServerConfig, setup::dependency_injection::DependencyContainer};

pub struct Server;

impl Server {
    /// Assembles every API plus the docs endpoints. Any wrong method on a
    /// known path answers 405 with an empty body.
    pub fn build_app(
        container: DependencyContainer,
        addr: &str,
        cors: Cors,
    ) -> impl Endpoint + use<> {
        let api_service = OpenApiService::new(
            (
                container.health_api,
                container.receipt_api,
                container.statement_api,
                container.chat_api,
            ),
            "Receipt Itemiser API",
            env!("CARGO_PKG_VERSION"),
        )
        .server(format!("http://{}", addr));
        let ui = api_service.swagger_ui();
        let spec = api_service.spec_endpoint();

        Route::new()
            .nest("/", api_service)
            .nest("/docs", ui)
            .nest("/openapi.json", spec)
            .catch_error(|_: MethodNotAllowedError| async { StatusCode::METHOD_NOT_ALLOWED })
            .with(cors)
            .with(Tracing)
    }

    pub async fn run(
        server: ServerConfig,
        cors: Cors,
        container: DependencyContainer,
    ) -> anyhow::Result<()> {
        let addr = server.bind_address();
        let app = Self::build_app(container, &addr, cors);
        tracing::info!("Server running at http://{}", addr);
        tracing::info!("Swagger UI at http://{}/docs", addr);
        tracing::info!("OpenAPI JSON at http://{}/openapi.json", addr);
        PoemServer::new(TcpListener::bind(&addr)).run(app).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::openai_config::OpenAIConfig;
    use crate::config::pipeline_config::PipelineConfig;
    use openai::client::ApiKey;
    use openai::receipt_extractor::ExtractionSettings;
    use poem::test::TestClient;

    fn app() -> impl Endpoint {
        let openai = OpenAIConfig {
            api_key: ApiKey::Static("sk-test".to_string()),
            base_url: "http://127.0.0.1:1/v1".to_string(),
            timeout: None,
            extraction: ExtractionSettings::default(),
        };
        let container = DependencyContainer::new(openai, PipelineConfig::default());
        Server::build_app(container, "127.0.0.1:8080", Cors::new())
    }

    #[tokio::test]
    async fn should_reject_get_on_itemise_with_empty_405() {
        let cli = TestClient::new(app());

        let resp = cli.get("/api/itemise").send().await;

        resp.assert_status(StatusCode::METHOD_NOT_ALLOWED);
        resp.assert_text("").await;
    }

    #[tokio::test]
    async fn should_reject_put_on_statement_with_empty_405() {
        let cli = TestClient::new(app());

        let resp = cli.put("/api/statement").send().await;

        resp.assert_status(StatusCode::METHOD_NOT_ALLOWED);
        resp.assert_text("").await;
    }

    #[tokio::test]
    async fn should_report_healthy() {
        let cli = TestClient::new(app());

        let resp = cli.get("/health").send().await;

        resp.assert_status_is_ok();
        let json = resp.json().await;
        json.value().object().get("status").assert_string("healthy");
    }

    #[tokio::test]
    async fn should_serve_openapi_document() {
        let cli = TestClient::new(app());

        let resp = cli.get("/openapi.json").send().await;

        resp.assert_status_is_ok();
        let json = resp.json().await;
        json.value()
            .object()
            .get("info")
            .object()
            .get("title")
            .assert_string("Receipt Itemiser API");
    }
}
