//! Client for a locally hosted OpenAI-compatible completions runtime.

use crate::{CompletionRequest, CompletionResponse, LocalModel, ServerConfig, TextGenerator};
use async_trait::async_trait;
use blogsmith_core::GenerationConfig;
use blogsmith_error::{InferenceError, InferenceErrorKind};
use reqwest::Client;
use tracing::{debug, error, instrument};

/// Sends prompts to `POST {base_url}/v1/completions`.
///
/// No request timeout is set: a generation takes as long as the runtime
/// needs.
#[derive(Debug, Clone)]
pub struct CompletionsClient {
    client: Client,
    config: ServerConfig,
}

impl CompletionsClient {
    /// Creates a new client for the configured runtime.
    #[instrument(skip(config), fields(base_url = %config.base_url()))]
    pub fn new(config: ServerConfig) -> Self {
        debug!(url = %config.completions_url(), "Created completions client");
        Self {
            client: Client::new(),
            config,
        }
    }

    /// Model identifier sent for `model`.
    pub fn model_id(&self, model: &LocalModel) -> String {
        self.config.model().clone().unwrap_or_else(|| model.name())
    }
}

#[async_trait]
impl TextGenerator for CompletionsClient {
    #[instrument(skip(self, model, prompt, config), fields(model = %model.name(), prompt_len = prompt.len()))]
    async fn generate(
        &self,
        model: &LocalModel,
        prompt: &str,
        config: &GenerationConfig,
    ) -> Result<String, InferenceError> {
        let request = CompletionRequest::builder()
            .model(self.model_id(model))
            .prompt(prompt)
            .max_tokens(*config.max_new_tokens())
            .temperature(config.temperature().value())
            .build()
            .map_err(|e| {
                InferenceError::new(InferenceErrorKind::Http(format!(
                    "Failed to build request: {}",
                    e
                )))
            })?;

        debug!(
            max_tokens = request.max_tokens(),
            temperature = request.temperature(),
            "Sending completion request"
        );

        let mut builder = self.client.post(self.config.completions_url()).json(&request);
        if let Some(api_key) = self.config.api_key() {
            builder = builder.bearer_auth(api_key);
        }

        let response = builder.send().await.map_err(|e| {
            error!(error = ?e, "HTTP request failed");
            InferenceError::new(InferenceErrorKind::Http(format!("Request failed: {}", e)))
        })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            error!(status = %status, error = %error_text, "Runtime error");
            return Err(InferenceError::new(InferenceErrorKind::Api {
                status: status.as_u16(),
                message: error_text,
            }));
        }

        let completion: CompletionResponse = response.json().await.map_err(|e| {
            error!(error = ?e, "Failed to parse response");
            InferenceError::new(InferenceErrorKind::ResponseParsing(format!(
                "Failed to parse JSON: {}",
                e
            )))
        })?;

        if let Some(usage) = completion.usage() {
            debug!(
                prompt_tokens = usage.prompt_tokens(),
                completion_tokens = usage.completion_tokens(),
                "Received completion"
            );
        }

        completion
            .choices()
            .first()
            .map(|choice| choice.text().clone())
            .ok_or_else(|| InferenceError::new(InferenceErrorKind::EmptyResponse))
    }
}
