//! Mock transcription provider for integration tests
//!
//! Accepts Whisper-style multipart uploads, records what it received, and
//! answers with a canned status and body.

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::extract::{DefaultBodyLimit, Multipart, State};
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::IntoResponse;
use axum::{Router, routing};
use tokio_util::sync::CancellationToken;

/// Path the mock serves, mirroring the `OpenAI` layout
const TRANSCRIPTIONS_PATH: &str = "/v1/audio/transcriptions";

/// One multipart field as seen by the provider
#[derive(Debug, Clone)]
pub struct ReceivedField {
    pub name: String,
    pub filename: Option<String>,
    pub content_type: Option<String>,
    pub data: Vec<u8>,
}

/// One request as seen by the provider
#[derive(Debug, Clone)]
pub struct ReceivedRequest {
    pub authorization: Option<String>,
    pub fields: Vec<ReceivedField>,
}

impl ReceivedRequest {
    /// Look up a field by name
    pub fn field(&self, name: &str) -> Option<&ReceivedField> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Text value of a form field
    pub fn text(&self, name: &str) -> Option<String> {
        self.field(name).map(|f| String::from_utf8_lossy(&f.data).into_owned())
    }
}

struct MockState {
    status: StatusCode,
    body: String,
    delay: Option<Duration>,
    received: Mutex<Vec<ReceivedRequest>>,
}

/// Mock provider returning a fixed response
pub struct MockProvider {
    addr: SocketAddr,
    shutdown: CancellationToken,
    state: Arc<MockState>,
}

impl MockProvider {
    /// Start a provider that answers 200 with `{"text": text}`
    pub async fn start_with_text(text: &str) -> anyhow::Result<Self> {
        let body = serde_json::json!({ "text": text, "language": "en" }).to_string();
        Self::start(StatusCode::OK, &body, None).await
    }

    /// Start a provider that answers with the given status and raw body
    pub async fn start_responding(status: u16, body: &str) -> anyhow::Result<Self> {
        Self::start(StatusCode::from_u16(status)?, body, None).await
    }

    /// Start a provider that waits before answering 200
    pub async fn start_slow(delay: Duration) -> anyhow::Result<Self> {
        Self::start(StatusCode::OK, r#"{"text":"too late"}"#, Some(delay)).await
    }

    async fn start(status: StatusCode, body: &str, delay: Option<Duration>) -> anyhow::Result<Self> {
        let state = Arc::new(MockState {
            status,
            body: body.to_owned(),
            delay,
            received: Mutex::new(Vec::new()),
        });

        let app = Router::new()
            .route(TRANSCRIPTIONS_PATH, routing::post(handle_transcription))
            .layer(DefaultBodyLimit::disable())
            .with_state(Arc::clone(&state));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let shutdown = CancellationToken::new();
        let shutdown_clone = shutdown.clone();

        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async move {
                    shutdown_clone.cancelled().await;
                })
                .await
                .ok();
        });

        Ok(Self { addr, shutdown, state })
    }

    /// Full endpoint URL for configuring the relay
    pub fn endpoint(&self) -> String {
        format!("http://{}{TRANSCRIPTIONS_PATH}", self.addr)
    }

    /// Requests received so far
    pub fn received(&self) -> Vec<ReceivedRequest> {
        self.state.received.lock().expect("mock state lock").clone()
    }
}

impl Drop for MockProvider {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}

async fn handle_transcription(
    State(state): State<Arc<MockState>>,
    headers: HeaderMap,
    mut multipart: Multipart,
) -> impl IntoResponse {
    let mut fields = Vec::new();

    while let Ok(Some(field)) = multipart.next_field().await {
        let name = field.name().unwrap_or_default().to_owned();
        let filename = field.file_name().map(str::to_owned);
        let content_type = field.content_type().map(str::to_owned);
        let data = field.bytes().await.map(|b| b.to_vec()).unwrap_or_default();

        fields.push(ReceivedField {
            name,
            filename,
            content_type,
            data,
        });
    }

    let authorization = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned);

    state
        .received
        .lock()
        .expect("mock state lock")
        .push(ReceivedRequest { authorization, fields });

    if let Some(delay) = state.delay {
        tokio::time::sleep(delay).await;
    }

    (state.status, state.body.clone())
}

/// An endpoint on loopback with nothing listening
pub async fn closed_endpoint() -> anyhow::Result<String> {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    drop(listener);

    Ok(format!("http://{addr}{TRANSCRIPTIONS_PATH}"))
}
