//! Test utilities: artifacts on disk, a recording generator and a stub runtime.

#![allow(dead_code)]

use async_trait::async_trait;
use axum::{Json, Router, extract::State, http::HeaderMap, http::StatusCode, routing::post};
use blogsmith_core::GenerationConfig;
use blogsmith_error::{InferenceError, InferenceErrorKind};
use blogsmith_server::{LocalModel, TextGenerator};
use serde_json::{Value, json};
use std::io::Write;
use std::sync::{Arc, Mutex};
use tempfile::NamedTempFile;

/// Write a small file with a GGJT header.
pub fn ggjt_artifact() -> Result<NamedTempFile, Box<dyn std::error::Error>> {
    let mut file = NamedTempFile::new()?;
    file.write_all(b"tjgg\x03\x00\x00\x00")?;
    file.flush()?;
    Ok(file)
}

/// In-memory writer that can be cloned and read back.
#[derive(Debug, Clone, Default)]
pub struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

impl SharedBuffer {
    pub fn contents(&self) -> String {
        self.0
            .lock()
            .map(|b| String::from_utf8_lossy(&b).into_owned())
            .unwrap_or_default()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        if let Ok(mut inner) = self.0.lock() {
            inner.extend_from_slice(buf);
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

/// One call seen by [`RecordingGenerator`].
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCall {
    pub prompt: String,
    pub max_new_tokens: u32,
    pub temperature: f32,
}

/// Generator that records calls and answers with a canned reply.
#[derive(Debug, Default)]
pub struct RecordingGenerator {
    pub reply: String,
    pub fail: bool,
    pub calls: Mutex<Vec<RecordedCall>>,
}

impl RecordingGenerator {
    pub fn replying(reply: impl Into<String>) -> Self {
        Self {
            reply: reply.into(),
            ..Self::default()
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl TextGenerator for RecordingGenerator {
    async fn generate(
        &self,
        _model: &LocalModel,
        prompt: &str,
        config: &GenerationConfig,
    ) -> Result<String, InferenceError> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(RecordedCall {
                prompt: prompt.to_string(),
                max_new_tokens: *config.max_new_tokens(),
                temperature: config.temperature().value(),
            });
        }
        if self.fail {
            return Err(InferenceError::new(InferenceErrorKind::Http(
                "connection refused".to_string(),
            )));
        }
        Ok(self.reply.clone())
    }
}

/// Requests received by the stub runtime, with their Authorization header.
pub type Received = Arc<Mutex<Vec<(Value, Option<String>)>>>;

#[derive(Clone)]
struct StubState {
    status: StatusCode,
    body: Value,
    received: Received,
}

async fn completions(
    State(state): State<StubState>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    let auth = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    if let Ok(mut received) = state.received.lock() {
        received.push((body, auth));
    }
    (state.status, Json(state.body.clone()))
}

/// Start a completions endpoint on an ephemeral port.
///
/// Returns the base URL and the log of received requests.
pub async fn spawn_runtime(
    status: StatusCode,
    body: Value,
) -> Result<(String, Received), Box<dyn std::error::Error>> {
    let received: Received = Arc::default();
    let state = StubState {
        status,
        body,
        received: Arc::clone(&received),
    };
    let app = Router::new()
        .route("/v1/completions", post(completions))
        .with_state(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    Ok((format!("http://{}", addr), received))
}

/// A completions payload with one choice.
pub fn completion_body(text: &str) -> Value {
    json!({
        "id": "cmpl-1",
        "object": "text_completion",
        "model": "llama-2-7b-chat",
        "choices": [{ "index": 0, "text": text, "finish_reason": "length" }],
        "usage": { "prompt_tokens": 20, "completion_tokens": 256, "total_tokens": 276 }
    })
}
