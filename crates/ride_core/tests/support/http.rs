//! Local HTTP server for the store and probe tests: an `axum` fallback route
//! on an ephemeral port that answers with canned responses in order and
//! records every request it receives.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use axum::body::to_bytes;
use axum::extract::{Request, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Router;
use tokio::net::TcpListener;
use tokio::runtime::Runtime;

#[derive(Clone, Debug)]
pub struct RecordedRequest {
    pub method: String,
    pub target: String,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl RecordedRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    pub fn body_json(&self) -> serde_json::Value {
        serde_json::from_str(&self.body).expect("request body should be JSON")
    }
}

#[derive(Default)]
struct Script {
    responses: VecDeque<(u16, &'static str)>,
    recorded: Vec<RecordedRequest>,
}

type SharedScript = Arc<Mutex<Script>>;

pub struct CannedServer {
    pub url: String,
    expected: usize,
    script: SharedScript,
    runtime: Runtime,
}

impl CannedServer {
    /// Answer one request per entry of `responses`, in order.
    pub fn start(responses: Vec<(u16, &'static str)>) -> Self {
        let expected = responses.len();
        let script = Arc::new(Mutex::new(Script {
            responses: responses.into(),
            recorded: Vec::new(),
        }));

        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_all()
            .build()
            .expect("test runtime");
        let listener = runtime
            .block_on(TcpListener::bind("127.0.0.1:0"))
            .expect("bind local listener");
        let url = format!("http://{}", listener.local_addr().expect("local addr"));

        let app = Router::new().fallback(respond).with_state(script.clone());
        runtime.spawn(async move {
            let _ = axum::serve(listener, app).await;
        });

        Self {
            url,
            expected,
            script,
            runtime,
        }
    }

    /// Stop the server and return what it received. Every canned response
    /// must have been served.
    pub fn finish(self) -> Vec<RecordedRequest> {
        let recorded = std::mem::take(&mut self.script.lock().expect("script lock").recorded);
        self.runtime.shutdown_background();
        assert_eq!(
            recorded.len(),
            self.expected,
            "not every canned response was served"
        );
        recorded
    }
}

async fn respond(State(script): State<SharedScript>, request: Request) -> Response {
    let (parts, body) = request.into_parts();
    let body = to_bytes(body, usize::MAX)
        .await
        .expect("read request body");
    let target = parts
        .uri
        .path_and_query()
        .map(|value| value.as_str().to_string())
        .unwrap_or_else(|| parts.uri.path().to_string());
    let headers = parts
        .headers
        .iter()
        .map(|(name, value)| {
            (
                name.as_str().to_string(),
                value.to_str().unwrap_or_default().to_string(),
            )
        })
        .collect();

    let (status, payload) = {
        let mut script = script.lock().expect("script lock");
        script.recorded.push(RecordedRequest {
            method: parts.method.to_string(),
            target,
            headers,
            body: String::from_utf8(body.to_vec()).expect("utf-8 body"),
        });
        script
            .responses
            .pop_front()
            .unwrap_or((500, "no canned response left"))
    };

    let status = StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (
        status,
        [
            (header::CONTENT_TYPE, "application/json"),
            (header::CONNECTION, "close"),
        ],
        payload,
    )
        .into_response()
}
