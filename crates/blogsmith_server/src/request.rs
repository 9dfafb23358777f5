use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// OpenAI-compatible text completion request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Getters, derive_builder::Builder)]
#[builder(setter(into))]
pub struct CompletionRequest {
    /// Model identifier
    model: String,
    /// Prompt text, sent as the sole input
    prompt: String,
    /// Maximum tokens to generate
    max_tokens: u32,
    /// Temperature for sampling (0.1 - 2.0)
    temperature: f32,
}

impl CompletionRequest {
    /// Creates a new builder for CompletionRequest.
    pub fn builder() -> CompletionRequestBuilder {
        CompletionRequestBuilder::default()
    }
}
