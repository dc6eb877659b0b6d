use std::sync::{Arc, Mutex};

use poem::endpoint::make;
use poem::http::StatusCode;
use poem::listener::TcpAcceptor;
use poem::{Request, Response, Route, Server, post};

/// What the fake upstream saw on its last call.
#[derive(Debug, Clone, Default)]
pub struct SeenRequest {
    pub authorization: Option<String>,
    pub body: Option<serde_json::Value>,
}

/// Serves `body` with `status` on `/v1/chat/completions` from a random local
/// port and returns the base URL to point an `OpenAIClient` at.
pub async fn spawn_upstream(
    status: StatusCode,
    body: &'static str,
) -> (String, Arc<Mutex<SeenRequest>>) {
    let seen = Arc::new(Mutex::new(SeenRequest::default()));
    let recorder = seen.clone();

    let endpoint = make(move |mut req: Request| {
        let recorder = recorder.clone();
        async move {
            let authorization = req.header("authorization").map(str::to_string);
            let received = req.take_body().into_json::<serde_json::Value>().await.ok();
            *recorder.lock().unwrap() = SeenRequest {
                authorization,
                body: received,
            };
            Response::builder()
                .status(status)
                .content_type("application/json")
                .body(body)
        }
    });

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let acceptor = TcpAcceptor::from_tokio(listener).unwrap();
    let app = Route::new().at("/v1/chat/completions", post(endpoint));
    tokio::spawn(Server::new_with_acceptor(acceptor).run(app));

    (format!("http://{}/v1", addr), seen)
}
