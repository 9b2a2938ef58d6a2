//! Stub speech provider for end-to-end tests
//!
//! Implements a minimal OpenAI-compatible `/v1/audio/speech` endpoint that
//! returns a canned status and body, and records every request it receives.

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::extract::State;
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::{routing, Json, Router};
use serde_json::{json, Value};

/// A request the stub has seen, as the provider would see it.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub authorization: Option<String>,
    pub body: Value,
}

pub struct MockProvider {
    addr: SocketAddr,
    state: Arc<MockProviderState>,
}

struct MockProviderState {
    status: StatusCode,
    audio: Vec<u8>,
    requests: Mutex<Vec<RecordedRequest>>,
}

impl MockProvider {
    /// Start a stub that answers 200 with a small canned MP3 payload.
    pub async fn start() -> anyhow::Result<Self> {
        Self::start_with(StatusCode::OK, b"\xff\xfbmp3data").await
    }

    /// Start a stub that answers `status` with `audio` as the success body.
    pub async fn start_with(status: StatusCode, audio: &[u8]) -> anyhow::Result<Self> {
        let state = Arc::new(MockProviderState {
            status,
            audio: audio.to_vec(),
            requests: Mutex::new(Vec::new()),
        });

        let app = Router::new()
            .route("/v1/audio/speech", routing::post(handle_speech))
            .with_state(Arc::clone(&state));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;

        tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });

        Ok(Self { addr, state })
    }

    /// Endpoint URL for configuring the stub as the speech provider.
    pub fn url(&self) -> String {
        format!("http://{}/v1/audio/speech", self.addr)
    }

    pub fn request_count(&self) -> usize {
        self.state.requests.lock().unwrap().len()
    }

    pub fn last_request(&self) -> Option<RecordedRequest> {
        self.state.requests.lock().unwrap().last().cloned()
    }
}

async fn handle_speech(
    State(state): State<Arc<MockProviderState>>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    let authorization = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);

    state
        .requests
        .lock()
        .unwrap()
        .push(RecordedRequest {
            authorization,
            body,
        });

    if state.status.is_success() {
        (
            state.status,
            [(header::CONTENT_TYPE, "audio/mpeg")],
            state.audio.clone(),
        )
            .into_response()
    } else {
        (
            state.status,
            Json(json!({ "error": { "message": "synthesis rejected" } })),
        )
            .into_response()
    }
}
