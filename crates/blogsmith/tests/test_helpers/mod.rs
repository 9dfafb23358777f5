//! Shared helpers for page server tests.

#![allow(dead_code)]

use async_trait::async_trait;
use blogsmith::web::{AppState, create_router};
use blogsmith::{BlogInvoker, ModelCache, TextGenerator};
use blogsmith_core::GenerationConfig;
use blogsmith_error::{InferenceError, InferenceErrorKind};
use blogsmith_server::{LocalModel, ModelSpec};
use std::io::Write;
use std::path::Path;
use std::sync::{Arc, Mutex};
use tempfile::NamedTempFile;

/// (prompt, max_new_tokens, temperature) for each call.
pub type Calls = Arc<Mutex<Vec<(String, u32, f32)>>>;

/// Generator that answers with a fixed reply, or fails when `reply` is None.
pub struct CannedGenerator {
    pub reply: Option<String>,
    pub calls: Calls,
}

#[async_trait]
impl TextGenerator for CannedGenerator {
    async fn generate(
        &self,
        _model: &LocalModel,
        prompt: &str,
        config: &GenerationConfig,
    ) -> Result<String, InferenceError> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push((
                prompt.to_string(),
                *config.max_new_tokens(),
                config.temperature().value(),
            ));
        }
        self.reply.clone().ok_or_else(|| {
            InferenceError::new(InferenceErrorKind::Api {
                status: 500,
                message: "runtime crashed".to_string(),
            })
        })
    }
}

/// A file with a GGJT header.
pub fn artifact() -> Result<NamedTempFile, Box<dyn std::error::Error>> {
    let mut file = NamedTempFile::new()?;
    file.write_all(b"tjgg\x03\x00\x00\x00")?;
    file.flush()?;
    Ok(file)
}

/// Serve the page on an ephemeral port. Returns the base URL and call log.
pub async fn spawn_page(
    model_path: &Path,
    reply: Option<&str>,
) -> Result<(String, Calls), Box<dyn std::error::Error>> {
    let calls: Calls = Arc::default();
    let generator = CannedGenerator {
        reply: reply.map(str::to_string),
        calls: Arc::clone(&calls),
    };
    let cache = Arc::new(ModelCache::new(ModelSpec::llama(model_path)));
    let invoker = BlogInvoker::new(Arc::new(generator), cache);
    let app = create_router(AppState::new(invoker)?);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    Ok((format!("http://{}", addr), calls))
}
